use std::collections::BTreeMap;

/// A navigation target: path plus decoded query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: BTreeMap<String, String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    /// Parse `"/path?a=1&b=two"`. Undecodable pairs keep their raw text.
    pub fn parse(raw: &str) -> Self {
        let (path, query_str) = raw.split_once('?').unwrap_or((raw, ""));

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.len() > 1 {
            path.trim_end_matches('/').to_string()
        } else {
            path.to_string()
        };

        let query = query_str
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(k), decode(v))
            })
            .collect();

        Self { path, query }
    }

    /// Path with re-encoded query, e.g. `/login?redirect=%2Fadmin`.
    pub fn full_path(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}
