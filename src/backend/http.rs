use async_trait::async_trait;

use crate::api::{ApiClient, ResponseEnvelope};
use crate::errors::Result;
use crate::models::{
    CreateShortLinkRequest, DeletedLink, LinkPage, QueryParams, ShortLinkPatch, ShortLinkRecord,
};

use super::LinkBackend;

pub const PUBLIC_LINKS_PATH: &str = "/quank-links";
pub const ADMIN_LINKS_PATH: &str = "/admin/quank-links";

/// Remote backend: maps each operation onto the REST resource.
pub struct HttpBackend {
    client: ApiClient,
}

impl HttpBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn admin_link_path(id: u64) -> String {
        format!("{}/{}", ADMIN_LINKS_PATH, id)
    }
}

#[async_trait]
impl LinkBackend for HttpBackend {
    async fn create_public(
        &self,
        request: &CreateShortLinkRequest,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>> {
        self.client.post(PUBLIC_LINKS_PATH, request).await
    }

    async fn query(&self, params: &QueryParams) -> Result<ResponseEnvelope<LinkPage>> {
        self.client
            .get(ADMIN_LINKS_PATH, params.to_query_pairs())
            .await
    }

    async fn create_admin(
        &self,
        request: &CreateShortLinkRequest,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>> {
        self.client.post(ADMIN_LINKS_PATH, request).await
    }

    async fn update(
        &self,
        id: u64,
        patch: &ShortLinkPatch,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>> {
        self.client.patch(&Self::admin_link_path(id), patch).await
    }

    async fn delete(&self, id: u64) -> Result<ResponseEnvelope<DeletedLink>> {
        self.client.delete(&Self::admin_link_path(id)).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
