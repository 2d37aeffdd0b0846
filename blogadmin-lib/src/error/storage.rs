//! Session storage error types

/// Errors from the session store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("session database error: {0}")]
    Database(#[from] async_sqlite::Error),
}
