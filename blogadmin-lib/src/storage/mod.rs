//! Persisted session: the bearer token and the post-login redirect target.

mod memory;
mod session;
mod sqlite;

pub use memory::MemoryStorage;
pub use session::*;
pub use sqlite::SqliteStorage;

use std::sync::Arc;

use crate::error::StorageError;

/// Handle to the session store, shared by the client and the front end.
#[derive(Clone)]
pub struct LocalStorage {
    store: Arc<dyn SessionStore>,
}

impl LocalStorage {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// A session that only lives as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Reads the whole session.
    pub async fn session(&self) -> Result<Session, StorageError> {
        self.store.load().await
    }

    /// Returns the stored bearer token, if any.
    pub async fn access_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self.store.load().await?.access_token)
    }

    pub async fn set_access_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.write(SessionField::AccessToken, Some(token)).await
    }

    /// Forgets the bearer token.
    pub async fn clear_access_token(&self) -> Result<(), StorageError> {
        self.store.write(SessionField::AccessToken, None).await
    }

    /// Returns the page saved before the last login redirect.
    pub async fn redirect_after_login(&self) -> Result<Option<String>, StorageError> {
        Ok(self.store.load().await?.redirect_after_login)
    }

    pub async fn set_redirect_after_login(&self, path: &str) -> Result<(), StorageError> {
        self.store.write(SessionField::RedirectAfterLogin, Some(path)).await
    }

    /// Removes and returns the saved redirect target.
    pub async fn take_redirect_after_login(&self) -> Result<Option<String>, StorageError> {
        let path = self.redirect_after_login().await?;
        if path.is_some() {
            self.store.write(SessionField::RedirectAfterLogin, None).await?;
        }
        Ok(path)
    }
}
