//! Client-side session state
//!
//! Replaces ambient browser storage with an explicit store that is handed
//! to both the route guard and the HTTP client. Optionally backed by a JSON
//! file so a login survives between CLI invocations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::errors::{QuankError, Result};

/// Storage key of the admin credential
pub const TOKEN_KEY: &str = "admin_token";

#[derive(Debug, Default)]
pub struct SessionStore {
    entries: RwLock<BTreeMap<String, String>>,
    file: Option<PathBuf>,
}

impl SessionStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a file-backed store. A missing file starts an empty session.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Session file {} not found, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            entries: RwLock::new(entries),
            file: Some(path),
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.into());
        self.persist()
    }

    pub fn remove(&self, key: &str) -> Result<Option<String>> {
        let removed = self.entries.write().remove(key);
        self.persist()?;
        Ok(removed)
    }

    /// Stored admin token; empty values count as absent.
    pub fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(QuankError::validation("Token cannot be empty"));
        }
        self.set(TOKEN_KEY, token)
    }

    pub fn clear_token(&self) -> Result<bool> {
        Ok(self.remove(TOKEN_KEY)?.is_some())
    }

    fn persist(&self) -> Result<()> {
        let Some(ref path) = self.file else {
            return Ok(());
        };

        let content = serde_json::to_string_pretty(&*self.entries.read())?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).inspect_err(|e| {
            warn!("Failed to write session file {}: {}", path.display(), e);
        })?;
        Ok(())
    }
}
