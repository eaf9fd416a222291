//! Low-level HTTP client for the remote link API
//!
//! Two interception points wrap every call:
//! - request: attach `Authorization: Bearer <token>` on `/admin/` paths
//!   when the session holds a token
//! - response: unwrap the JSON envelope, or log the failure and propagate it

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, trace};
use ureq::Agent;

use crate::config::ApiConfig;
use crate::errors::{QuankError, Result};
use crate::session::SessionStore;

use super::ResponseEnvelope;

const ADMIN_PATH_MARKER: &str = "/admin/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request after the request interceptor ran; owned so it can move
/// into a blocking task.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub authorization: Option<String>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

pub struct ApiClient {
    agent: Agent,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, session: Arc<SessionStore>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn from_config(config: &ApiConfig, session: Arc<SessionStore>) -> Self {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
            session,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Request interceptor: bearer header for admin paths only.
    pub fn authorization_for(&self, path: &str) -> Option<String> {
        if !path.contains(ADMIN_PATH_MARKER) {
            return None;
        }
        self.session
            .token()
            .map(|token| format!("Bearer {}", token))
    }

    pub fn prepare(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(&'static str, String)>,
        body: Option<serde_json::Value>,
    ) -> PreparedRequest {
        PreparedRequest {
            method,
            url: self.url_for(path),
            authorization: self.authorization_for(path),
            query,
            body,
        }
    }

    pub async fn get<T>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<ResponseEnvelope<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.execute(self.prepare(HttpMethod::Get, path, query, None))
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ResponseEnvelope<T>>
    where
        B: Serialize,
        T: DeserializeOwned + Send + 'static,
    {
        let body = serde_json::to_value(body)?;
        self.execute(self.prepare(HttpMethod::Post, path, Vec::new(), Some(body)))
            .await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<ResponseEnvelope<T>>
    where
        B: Serialize,
        T: DeserializeOwned + Send + 'static,
    {
        let body = serde_json::to_value(body)?;
        self.execute(self.prepare(HttpMethod::Patch, path, Vec::new(), Some(body)))
            .await
    }

    pub async fn delete<T>(&self, path: &str) -> Result<ResponseEnvelope<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.execute(self.prepare(HttpMethod::Delete, path, Vec::new(), None))
            .await
    }

    /// ureq is blocking, so the call runs on the blocking pool.
    async fn execute<T>(&self, request: PreparedRequest) -> Result<ResponseEnvelope<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let agent = self.agent.clone();
        let method = request.method;
        let url = request.url.clone();
        debug!("{} {}", method, url);

        let outcome = tokio::task::spawn_blocking(move || send_blocking(&agent, request))
            .await
            .map_err(|e| QuankError::internal(format!("HTTP task failed: {}", e)))?;

        intercept_response(method, &url, outcome)
    }
}

fn send_blocking<T: DeserializeOwned>(
    agent: &Agent,
    request: PreparedRequest,
) -> std::result::Result<ResponseEnvelope<T>, ureq::Error> {
    let PreparedRequest {
        method,
        url,
        authorization,
        query,
        body,
    } = request;
    let body = body.unwrap_or(serde_json::Value::Null);

    let response = match method {
        HttpMethod::Get | HttpMethod::Delete => {
            let mut req = if method == HttpMethod::Get {
                agent.get(&url)
            } else {
                agent.delete(&url)
            };
            if let Some(ref auth) = authorization {
                req = req.header("Authorization", auth);
            }
            for (key, value) in &query {
                req = req.query(*key, value.as_str());
            }
            req.call()?
        }
        HttpMethod::Post | HttpMethod::Patch => {
            let mut req = if method == HttpMethod::Post {
                agent.post(&url)
            } else {
                agent.patch(&url)
            };
            if let Some(ref auth) = authorization {
                req = req.header("Authorization", auth);
            }
            for (key, value) in &query {
                req = req.query(*key, value.as_str());
            }
            req.send_json(&body)?
        }
    };

    trace!("{} {} -> {}", method, url, response.status());
    response.into_body().read_json::<ResponseEnvelope<T>>()
}

/// Response interceptor: pass the envelope through, log and convert failures.
fn intercept_response<T>(
    method: HttpMethod,
    url: &str,
    outcome: std::result::Result<ResponseEnvelope<T>, ureq::Error>,
) -> Result<ResponseEnvelope<T>> {
    outcome.map_err(|e| {
        error!("API request error: {} {}: {}", method, url, e);
        QuankError::from(e)
    })
}
