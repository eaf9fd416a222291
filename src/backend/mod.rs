//! Link backends
//!
//! `LinkBackend` is the seam between the facade and whatever produces the
//! data: `MockBackend` fabricates records locally, `HttpBackend` talks to
//! the remote API. Both answer with the same envelope.

mod http;
mod mock;

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiClient, ResponseEnvelope};
use crate::config::{BackendKind, StaticConfig};
use crate::errors::Result;
use crate::models::{
    CreateShortLinkRequest, DeletedLink, LinkPage, QueryParams, ShortLinkPatch, ShortLinkRecord,
};
use crate::session::SessionStore;

pub use http::HttpBackend;
pub use mock::MockBackend;

#[async_trait]
pub trait LinkBackend: Send + Sync {
    /// Public panel creation
    async fn create_public(
        &self,
        request: &CreateShortLinkRequest,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>>;

    async fn query(&self, params: &QueryParams) -> Result<ResponseEnvelope<LinkPage>>;

    /// Admin creation; honors a caller-chosen short URL
    async fn create_admin(
        &self,
        request: &CreateShortLinkRequest,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>>;

    async fn update(
        &self,
        id: u64,
        patch: &ShortLinkPatch,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>>;

    async fn delete(&self, id: u64) -> Result<ResponseEnvelope<DeletedLink>>;

    fn name(&self) -> &'static str;
}

/// Build the backend selected by `api.backend`.
pub fn create_backend(config: &StaticConfig, session: Arc<SessionStore>) -> Arc<dyn LinkBackend> {
    match config.api.backend {
        BackendKind::Mock => Arc::new(MockBackend::from_config(&config.mock)),
        BackendKind::Http => Arc::new(HttpBackend::new(ApiClient::from_config(
            &config.api,
            session,
        ))),
    }
}
