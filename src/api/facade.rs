//! Panel-facing API
//!
//! `UserApi` serves the public creation panel, `AdminApi` the gated
//! management panel. Both delegate to whichever `LinkBackend` they were
//! built with.

use std::sync::Arc;

use tracing::debug;

use crate::backend::LinkBackend;
use crate::errors::Result;
use crate::models::{
    CreateShortLinkRequest, DeletedLink, LinkPage, QueryParams, ShortLinkPatch, ShortLinkRecord,
};

use super::ResponseEnvelope;

#[derive(Clone)]
pub struct UserApi {
    backend: Arc<dyn LinkBackend>,
}

impl UserApi {
    pub fn new(backend: Arc<dyn LinkBackend>) -> Self {
        Self { backend }
    }

    pub async fn create_short_link(
        &self,
        data: &CreateShortLinkRequest,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>> {
        debug!(
            "[user] create_short_link origin={} via {}",
            data.origin_url,
            self.backend.name()
        );
        self.backend.create_public(data).await
    }
}

#[derive(Clone)]
pub struct AdminApi {
    backend: Arc<dyn LinkBackend>,
}

impl AdminApi {
    pub fn new(backend: Arc<dyn LinkBackend>) -> Self {
        Self { backend }
    }

    pub async fn query_short_links(
        &self,
        params: &QueryParams,
    ) -> Result<ResponseEnvelope<LinkPage>> {
        debug!("[admin] query_short_links {:?} via {}", params, self.backend.name());
        self.backend.query(params).await
    }

    pub async fn create_short_link(
        &self,
        data: &CreateShortLinkRequest,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>> {
        debug!(
            "[admin] create_short_link origin={} via {}",
            data.origin_url,
            self.backend.name()
        );
        self.backend.create_admin(data).await
    }

    pub async fn update_short_link(
        &self,
        id: u64,
        data: &ShortLinkPatch,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>> {
        debug!("[admin] update_short_link id={} via {}", id, self.backend.name());
        self.backend.update(id, data).await
    }

    pub async fn delete_short_link(&self, id: u64) -> Result<ResponseEnvelope<DeletedLink>> {
        debug!("[admin] delete_short_link id={} via {}", id, self.backend.name());
        self.backend.delete(id).await
    }
}
