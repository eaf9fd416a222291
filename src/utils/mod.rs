use url::Url;

use crate::errors::{QuankError, Result};

/// Random token over `[0-9a-z]`, the alphabet of the short URL path segment.
pub fn generate_short_token(length: usize) -> String {
    use std::iter;

    let chars = b"0123456789abcdefghijklmnopqrstuvwxyz";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// 验证原始 URL：非空、可解析、仅允许 http/https
pub fn validate_origin_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(QuankError::validation("URL cannot be empty"));
    }

    let parsed =
        Url::parse(raw).map_err(|e| QuankError::validation(format!("Invalid URL format: {}", e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(QuankError::validation(format!(
            "Invalid protocol: {}:. Only http:// and https:// are allowed",
            other
        ))),
    }
}
