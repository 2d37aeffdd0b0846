//! The session a logged-in admin carries between runs

use std::fmt;

use async_trait::async_trait;

use crate::error::StorageError;

/// Browser-storage name of the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Browser-storage name of the page to return to after logging in.
pub const REDIRECT_AFTER_LOGIN_KEY: &str = "redirectAfterLogin";

/// Everything persisted for the admin session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    /// Page saved by the login redirect.
    pub redirect_after_login: Option<String>,
}

/// A single persisted session attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionField {
    AccessToken,
    RedirectAfterLogin,
}

impl SessionField {
    /// Column holding the field in the `session` table.
    pub(crate) fn column(self) -> &'static str {
        match self {
            SessionField::AccessToken => "access_token",
            SessionField::RedirectAfterLogin => "redirect_after_login",
        }
    }
}

impl fmt::Display for SessionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionField::AccessToken => ACCESS_TOKEN_KEY,
            SessionField::RedirectAfterLogin => REDIRECT_AFTER_LOGIN_KEY,
        })
    }
}

impl Session {
    pub fn set(&mut self, field: SessionField, value: Option<String>) {
        match field {
            SessionField::AccessToken => self.access_token = value,
            SessionField::RedirectAfterLogin => self.redirect_after_login = value,
        }
    }
}

/// Where the session lives.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the whole session. A fresh store yields [`Session::default`].
    async fn load(&self) -> Result<Session, StorageError>;

    /// Writes one field; `None` clears it.
    async fn write(&self, field: SessionField, value: Option<&str>) -> Result<(), StorageError>;
}
