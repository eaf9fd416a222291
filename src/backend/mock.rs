use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::api::ResponseEnvelope;
use crate::config::MockConfig;
use crate::errors::Result;
use crate::mock::{MockLinkGenerator, QuerySimulator};
use crate::models::{
    CreateShortLinkRequest, DeletedLink, LinkPage, QueryParams, ShortLinkPatch, ShortLinkRecord,
};

use super::LinkBackend;

pub const MSG_CREATED: &str = "Created successfully";
pub const MSG_QUERIED: &str = "Query succeeded";
pub const MSG_UPDATED: &str = "Updated successfully";
pub const MSG_DELETED: &str = "Deleted successfully";

/// Answers every operation with fabricated data after a fixed delay.
///
/// Never fails and never remembers anything between calls.
pub struct MockBackend {
    generator: MockLinkGenerator,
    simulator: QuerySimulator,
    config: MockConfig,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::from_config(&MockConfig::default())
    }
}

impl MockBackend {
    pub fn from_config(config: &MockConfig) -> Self {
        let generator = MockLinkGenerator::new(config.expired_ratio);
        Self {
            generator,
            simulator: QuerySimulator::new(generator, config.query_total, config.max_page_size),
            config: config.clone(),
        }
    }

    async fn delay(&self, millis: u64) {
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

#[async_trait]
impl LinkBackend for MockBackend {
    async fn create_public(
        &self,
        _request: &CreateShortLinkRequest,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>> {
        self.delay(self.config.create_delay_ms).await;
        let record = self.generator.generate(None);
        trace!("Mock public create -> id {}", record.id);
        Ok(ResponseEnvelope::ok(MSG_CREATED, record))
    }

    async fn query(&self, params: &QueryParams) -> Result<ResponseEnvelope<LinkPage>> {
        self.delay(self.config.query_delay_ms).await;
        let page = self.simulator.simulate(params);
        trace!("Mock query -> {} records", page.list.len());
        Ok(ResponseEnvelope::ok(MSG_QUERIED, page))
    }

    async fn create_admin(
        &self,
        request: &CreateShortLinkRequest,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>> {
        self.delay(self.config.create_delay_ms).await;
        let mut record = self.generator.generate(None);
        if let Some(short_url) = request.short_url.as_deref().filter(|s| !s.is_empty()) {
            record.short_url = short_url.to_string();
        }
        Ok(ResponseEnvelope::ok(MSG_CREATED, record))
    }

    async fn update(
        &self,
        id: u64,
        patch: &ShortLinkPatch,
    ) -> Result<ResponseEnvelope<ShortLinkRecord>> {
        self.delay(self.config.update_delay_ms).await;
        let mut record = self.generator.generate(Some(id));
        patch.apply_to(&mut record);
        Ok(ResponseEnvelope::ok(MSG_UPDATED, record))
    }

    async fn delete(&self, id: u64) -> Result<ResponseEnvelope<DeletedLink>> {
        self.delay(self.config.delete_delay_ms).await;
        Ok(ResponseEnvelope::ok(MSG_DELETED, DeletedLink { id }))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::SHORT_URL_BASE;

    fn instant_backend() -> MockBackend {
        MockBackend::from_config(&MockConfig::without_delays())
    }

    #[tokio::test]
    async fn test_public_create_ignores_request() {
        let backend = instant_backend();
        let mut request = CreateShortLinkRequest::new("https://mine.test");
        request.short_url = Some("https://s.test/custom".into());
        let env = backend.create_public(&request).await.unwrap();
        assert_eq!(env.code, 0);
        assert_eq!(env.message, MSG_CREATED);
        assert!(env.data.short_url.starts_with(SHORT_URL_BASE));
        assert!((1..=1000).contains(&env.data.id));
    }

    #[tokio::test]
    async fn test_admin_create_uses_supplied_short_url() {
        let backend = instant_backend();
        let mut request = CreateShortLinkRequest::new("https://mine.test");
        request.short_url = Some("https://s.test/custom".into());
        let env = backend.create_admin(&request).await.unwrap();
        assert_eq!(env.data.short_url, "https://s.test/custom");
    }

    #[tokio::test]
    async fn test_admin_create_falls_back_to_generated() {
        let backend = instant_backend();
        let mut request = CreateShortLinkRequest::new("https://mine.test");
        request.short_url = Some(String::new());
        let env = backend.create_admin(&request).await.unwrap();
        assert!(env.data.short_url.starts_with(SHORT_URL_BASE));
    }

    #[tokio::test]
    async fn test_update_overlays_patch() {
        let backend = instant_backend();
        let patch = ShortLinkPatch {
            origin_url: Some("https://patched.test".into()),
            ..ShortLinkPatch::default()
        };
        let env = backend.update(77, &patch).await.unwrap();
        assert_eq!(env.message, MSG_UPDATED);
        assert_eq!(env.data.id, 77);
        assert_eq!(env.data.origin_url, "https://patched.test");
    }

    #[tokio::test]
    async fn test_update_with_zero_id_stays_positive() {
        let patch = ShortLinkPatch {
            is_expired: Some(true),
            ..ShortLinkPatch::default()
        };
        let env = instant_backend().update(0, &patch).await.unwrap();
        assert!((1..=1000).contains(&env.data.id), "id = {}", env.data.id);
        assert!(env.data.is_expired);
    }

    #[tokio::test]
    async fn test_delete_echoes_id() {
        let env = instant_backend().delete(12).await.unwrap();
        assert_eq!(env.data, DeletedLink { id: 12 });
        assert_eq!(env.message, MSG_DELETED);
    }

    #[tokio::test]
    async fn test_query_example_page() {
        let env = instant_backend()
            .query(&QueryParams::new(2, 5))
            .await
            .unwrap();
        assert_eq!(env.data.total, 50);
        assert_eq!(env.data.list.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_delays() {
        let backend = MockBackend::default();

        let start = tokio::time::Instant::now();
        backend.query(&QueryParams::default()).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(300) && elapsed < Duration::from_millis(400));

        let start = tokio::time::Instant::now();
        backend.delete(1).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(600));
    }
}
