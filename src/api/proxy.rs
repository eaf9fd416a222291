//! Development proxy path rewrite
//!
//! `/api/<rest>` is forwarded to `<base_url>/<rest>`; everything else is
//! served locally.

/// Rewrite a local path to its upstream URL, or `None` if not proxied.
pub fn rewrite_proxy_path(path: &str, prefix: &str, base_url: &str) -> Option<String> {
    let prefix = prefix.trim_end_matches('/');
    let rest = path.strip_prefix(prefix)?;

    // "/apiary" must not match the "/api" prefix
    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('?')) {
        return None;
    }

    Some(format!("{}{}", base_url.trim_end_matches('/'), rest))
}
