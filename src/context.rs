//! Application context
//!
//! One session store shared by the router guard and the HTTP client, plus
//! the two panel facades over the configured backend.

use std::sync::Arc;

use tracing::info;

use crate::api::{AdminApi, UserApi};
use crate::backend::{LinkBackend, create_backend};
use crate::config::StaticConfig;
use crate::errors::Result;
use crate::router::Router;
use crate::session::SessionStore;

pub struct AppContext {
    pub config: Arc<StaticConfig>,
    pub session: Arc<SessionStore>,
    pub router: Router,
    pub user_api: UserApi,
    pub admin_api: AdminApi,
}

impl AppContext {
    /// Opens the session file from `session.file` when configured.
    pub fn from_config(config: Arc<StaticConfig>) -> Result<Self> {
        let session = match config.session.file.as_deref() {
            Some(path) if !path.is_empty() => SessionStore::open(path)?,
            _ => SessionStore::in_memory(),
        };
        Ok(Self::with_session(config, Arc::new(session)))
    }

    pub fn with_session(config: Arc<StaticConfig>, session: Arc<SessionStore>) -> Self {
        let backend = create_backend(&config, session.clone());
        info!("Using {} backend", backend.name());
        Self::with_backend(config, session, backend)
    }

    pub fn with_backend(
        config: Arc<StaticConfig>,
        session: Arc<SessionStore>,
        backend: Arc<dyn LinkBackend>,
    ) -> Self {
        Self {
            router: Router::new(session.clone()),
            user_api: UserApi::new(backend.clone()),
            admin_api: AdminApi::new(backend),
            config,
            session,
        }
    }
}
