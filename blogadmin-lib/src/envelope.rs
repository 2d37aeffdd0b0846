//! The `{ success, message, data? }` wrapper every backend response uses

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Message the backend sends when the bearer token is missing or rejected.
pub const UNAUTHORIZED_MESSAGE: &str = "UnAuthorizedRequest";

/// Message of the envelope synthesized for transport failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Message of the envelope returned after an authorization redirect.
pub const REDIRECTING_MESSAGE: &str = "Redirecting to login...";

/// A response envelope from the admin backend.
///
/// Missing members default to `success: false`, an empty message and no
/// data, so an unparseable body behaves like an empty JSON object.
///
/// # Example
///
/// ```
/// use blogadmin_lib::{Envelope, EnvelopeKind};
///
/// let env: Envelope<Vec<u32>> =
///     serde_json::from_str(r#"{"success": true, "message": "ok", "data": [1, 2]}"#).unwrap();
/// assert_eq!(env.kind(), EnvelopeKind::Success);
/// assert_eq!(env.into_data(), Some(vec![1, 2]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, deserialize_with = "nullable_bool")]
    pub success: bool,
    #[serde(default, deserialize_with = "nullable_string")]
    pub message: String,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// How a caller should treat an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    /// The server accepted the request.
    Success,
    /// The server reported a failure; the message is meant for the user.
    Failure,
    /// The session is not authorized; the user must log in again.
    Unauthorized,
}

impl<T> Envelope<T> {
    /// Creates a successful envelope carrying data.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Creates a failed envelope with the given message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// The envelope returned when the request never got a response.
    pub fn network_failure() -> Self {
        Self::failure(NETWORK_ERROR_MESSAGE)
    }

    /// The envelope returned after redirecting to the login page.
    pub fn redirecting() -> Self {
        Self::failure(REDIRECTING_MESSAGE)
    }

    /// Classifies the envelope.
    pub fn kind(&self) -> EnvelopeKind {
        if self.success {
            EnvelopeKind::Success
        } else if self.message == UNAUTHORIZED_MESSAGE {
            EnvelopeKind::Unauthorized
        } else {
            EnvelopeKind::Failure
        }
    }

    /// Returns `true` if the server accepted the request.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns `true` if the server rejected the session.
    pub fn is_unauthorized(&self) -> bool {
        self.kind() == EnvelopeKind::Unauthorized
    }

    /// Returns the message, or `default` when the server sent none.
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.message.is_empty() { default } else { &self.message }
    }

    /// Returns a reference to the data, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the envelope and returns the data, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            success: false,
            message: String::new(),
            data: None,
        }
    }
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}
