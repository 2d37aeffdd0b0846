//! Session persisted in a single-row sqlite table

use std::path::Path;

use async_sqlite::Client;
use async_trait::async_trait;
use rusqlite::OptionalExtension;
use tokio::sync::RwLock;

use super::Session;
use super::SessionField;
use super::SessionStore;
use crate::error::StorageError;

/// The session row. There is only ever one, with `id = 1`.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS session (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    access_token TEXT,
    redirect_after_login TEXT,
    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Keeps the bearer token and redirect target across CLI runs.
///
/// The row is read once and cached; writes go through to disk and update the
/// cache.
pub struct SqliteStorage {
    client: Client,
    cached: RwLock<Option<Session>>,
}

impl SqliteStorage {
    /// Opens (or creates) the session database at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let client = async_sqlite::ClientBuilder::new().path(path).open().await?;

        client
            .conn(|conn| {
                conn.execute(SCHEMA, [])?;
                conn.execute("INSERT OR IGNORE INTO session (id) VALUES (1)", [])
            })
            .await?;

        Ok(Self {
            client,
            cached: RwLock::new(None),
        })
    }

    async fn read_row(&self) -> Result<Session, StorageError> {
        let row = self
            .client
            .conn(|conn| {
                conn.query_row(
                    "SELECT access_token, redirect_after_login FROM session WHERE id = 1",
                    [],
                    |row| {
                        Ok(Session {
                            access_token: row.get(0)?,
                            redirect_after_login: row.get(1)?,
                        })
                    },
                )
                .optional()
            })
            .await?;
        Ok(row.unwrap_or_default())
    }
}

#[async_trait]
impl SessionStore for SqliteStorage {
    async fn load(&self) -> Result<Session, StorageError> {
        if let Some(session) = self.cached.read().await.as_ref() {
            return Ok(session.clone());
        }

        let session = self.read_row().await?;
        *self.cached.write().await = Some(session.clone());
        Ok(session)
    }

    async fn write(&self, field: SessionField, value: Option<&str>) -> Result<(), StorageError> {
        let sql = format!(
            "UPDATE session SET {} = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = 1",
            field.column()
        );
        let owned = value.map(str::to_string);
        let param = owned.clone();
        self.client
            .conn(move |conn| conn.execute(&sql, [param]))
            .await?;
        log::debug!("session {} {}", field, if owned.is_some() { "stored" } else { "cleared" });

        if let Some(session) = self.cached.write().await.as_mut() {
            session.set(field, owned);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;

    #[tokio::test]
    async fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.db");

        let storage = LocalStorage::new(SqliteStorage::open(&path).await.unwrap());
        storage.set_access_token("persisted").await.unwrap();
        storage.set_redirect_after_login("/admin/categories").await.unwrap();
        drop(storage);

        let reopened = LocalStorage::new(SqliteStorage::open(&path).await.unwrap());
        assert_eq!(
            reopened.session().await.unwrap(),
            Session {
                access_token: Some("persisted".to_string()),
                redirect_after_login: Some("/admin/categories".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_cache_follows_writes() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStorage::open(dir.path().join("storage.db")).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Session::default());
        store.write(SessionField::AccessToken, Some("t1")).await.unwrap();
        assert_eq!(store.load().await.unwrap().access_token.as_deref(), Some("t1"));

        store.write(SessionField::AccessToken, None).await.unwrap();
        assert_eq!(store.read_row().await.unwrap(), Session::default());
        assert_eq!(store.load().await.unwrap(), Session::default());
    }
}
