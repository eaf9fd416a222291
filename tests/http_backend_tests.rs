//! HTTP backend wire tests
//!
//! A one-shot TCP server on 127.0.0.1 captures the raw request and replies
//! with a canned response, so both sides of the exchange can be checked.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use quanklink::api::ApiClient;
use quanklink::backend::{HttpBackend, LinkBackend};
use quanklink::errors::QuankError;
use quanklink::models::{CreateShortLinkRequest, QueryParams, SortField, SortOrder};
use quanklink::session::SessionStore;

/// Captured request: head (request line + headers) and body.
struct CapturedRequest {
    head: String,
    body: String,
}

impl CapturedRequest {
    fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }
}

/// Accept one connection, record the request, answer with `status` and `body`.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();

        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        let head_end = loop {
            let n = stream.read(&mut buf).unwrap();
            assert!(n > 0, "connection closed before request head");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..head_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|l| l.split_once(':'))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while raw.len() < head_end + content_length {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
        }
        let body_bytes = raw[head_end..].to_vec();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        CapturedRequest {
            head,
            body: String::from_utf8_lossy(&body_bytes).to_string(),
        }
    });

    (base_url, handle)
}

fn backend_for(base_url: &str, token: Option<&str>) -> HttpBackend {
    let session = Arc::new(SessionStore::in_memory());
    if let Some(token) = token {
        session.set_token(token).unwrap();
    }
    HttpBackend::new(ApiClient::new(base_url, Duration::from_secs(5), session))
}

// =============================================================================
// Admin query
// =============================================================================

#[tokio::test]
async fn test_query_sends_bearer_and_params_and_decodes_page() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"code":0,"message":"ok","data":{"total":2,"list":[
            {"id":7,"origin_url":"https://a.test","short_url":"https://www.s.example.com/abc123","expire_at":100,"is_expired":true},
            {"id":8,"origin_url":"https://b.test","short_url":"https://www.s.example.com/def456","expire_at":200,"is_expired":false}
        ]}}"#,
    );
    let backend = backend_for(&base_url, Some("wire-token"));

    let params = QueryParams::new(2, 5).sorted(SortField::OriginUrl, SortOrder::Desc);
    let env = backend.query(&params).await.unwrap();

    assert!(env.is_success());
    assert_eq!(env.data.total, 2);
    let ids: Vec<u64> = env.data.list.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7, 8]);
    assert!(env.data.list[0].is_expired);

    let captured = server.join().unwrap();
    let line = captured.request_line();
    assert!(line.starts_with("GET /v1/admin/quank-links?"), "line: {}", line);

    let target = line.split_whitespace().nth(1).unwrap();
    let (_, query) = target.split_once('?').unwrap();
    let mut pairs: Vec<&str> = query.split('&').collect();
    pairs.sort_unstable();
    assert_eq!(
        pairs,
        vec!["order=desc", "page=2", "page_size=5", "sort=origin_url"]
    );

    assert_eq!(
        captured.header("authorization").as_deref(),
        Some("Bearer wire-token")
    );
}

#[tokio::test]
async fn test_query_without_params_sends_bare_path() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"code":0,"message":"ok","data":{"total":0,"list":[]}}"#,
    );
    let backend = backend_for(&base_url, Some("t"));

    let env = backend.query(&QueryParams::default()).await.unwrap();
    assert!(env.data.list.is_empty());

    let captured = server.join().unwrap();
    assert!(
        captured
            .request_line()
            .starts_with("GET /v1/admin/quank-links HTTP/1.1"),
        "line: {}",
        captured.request_line()
    );
}

// =============================================================================
// Public create
// =============================================================================

#[tokio::test]
async fn test_public_create_has_no_authorization() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"code":0,"message":"created","data":{"id":3,"origin_url":"https://docs.test","short_url":"https://www.s.example.com/zzz999","expire_at":1700000000,"is_expired":false}}"#,
    );
    // a stored token must not leak onto the public path
    let backend = backend_for(&base_url, Some("secret"));

    let env = backend
        .create_public(&CreateShortLinkRequest::new("https://docs.test"))
        .await
        .unwrap();
    assert_eq!(env.data.id, 3);
    assert_eq!(env.data.origin_url, "https://docs.test");

    let captured = server.join().unwrap();
    assert!(captured.request_line().starts_with("POST /v1/quank-links "));
    assert!(captured.header("authorization").is_none());

    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent["origin_url"], "https://docs.test");
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_non_zero_code_surfaces_as_api_error() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"code":4001,"message":"link not found","data":{"id":5}}"#,
    );
    let backend = backend_for(&base_url, Some("t"));

    let env = backend.delete(5).await.unwrap();
    server.join().unwrap();

    assert!(!env.is_success());
    match env.into_result() {
        Err(QuankError::Api { code, message }) => {
            assert_eq!(code, 4001);
            assert_eq!(message, "link not found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_status_maps_to_error() {
    let (base_url, server) = serve_once("401 Unauthorized", "");
    let backend = backend_for(&base_url, None);

    let result = backend.delete(5).await;
    let captured = server.join().unwrap();

    assert!(captured.request_line().starts_with("DELETE /v1/admin/quank-links/5 "));
    assert!(captured.header("authorization").is_none());
    assert!(
        matches!(result, Err(QuankError::Unauthorized(_))),
        "got: {:?}",
        result
    );
}
