//! Volatile session store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Session;
use super::SessionField;
use super::SessionStore;
use crate::error::StorageError;

/// Keeps the session in memory; lost when the process exits.
///
/// Used by tests and by callers that do not want a session to outlive them.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    session: RwLock<Session>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStorage {
    async fn load(&self) -> Result<Session, StorageError> {
        Ok(self.session.read().await.clone())
    }

    async fn write(&self, field: SessionField, value: Option<&str>) -> Result<(), StorageError> {
        self.session.write().await.set(field, value.map(str::to_string));
        Ok(())
    }
}
