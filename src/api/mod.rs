//! Link API: response envelope, panel facades, HTTP client and dev proxy

mod client;
mod envelope;
mod facade;
pub mod proxy;

pub use client::{ApiClient, HttpMethod, PreparedRequest};
pub use envelope::{ResponseEnvelope, SUCCESS_CODE};
pub use facade::{AdminApi, UserApi};
pub use proxy::rewrite_proxy_path;
