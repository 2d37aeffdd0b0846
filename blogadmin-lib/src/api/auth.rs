//! Login, registration and logout

use crate::AdminClient;
use crate::envelope::Envelope;
use crate::error::StorageError;
use crate::model::dto::AccessToken;
use crate::model::dto::LoginDto;
use crate::model::dto::RegisterDto;

const LOGIN_ENDPOINT: &str = "auth/login";
const REGISTER_ENDPOINT: &str = "auth/register";

impl AdminClient {
    /// Logs in and stores the returned bearer token.
    ///
    /// Subsequent requests carry the token. A token that cannot be stored is
    /// logged and the envelope is still returned.
    pub async fn login(&self, credentials: &LoginDto) -> Envelope<AccessToken> {
        let envelope = self.post_data(LOGIN_ENDPOINT, credentials).await;
        self.remember_token(&envelope).await;
        envelope
    }

    /// Registers a new account and stores the returned bearer token.
    pub async fn register(&self, account: &RegisterDto) -> Envelope<AccessToken> {
        let envelope = self.post_data(REGISTER_ENDPOINT, account).await;
        self.remember_token(&envelope).await;
        envelope
    }

    /// Forgets the stored bearer token.
    pub async fn logout(&self) -> Result<(), StorageError> {
        self.storage().clear_access_token().await
    }

    /// Returns `true` if a bearer token is stored.
    pub async fn is_logged_in(&self) -> Result<bool, StorageError> {
        Ok(self.storage().access_token().await?.is_some())
    }

    async fn remember_token(&self, envelope: &Envelope<AccessToken>) {
        let Some(token) = envelope.data().filter(|_| envelope.success) else {
            return;
        };
        match self.storage().set_access_token(&token.token).await {
            Ok(()) => log::info!("Stored access token"),
            Err(e) => log::error!("Could not store access token: {}", e),
        }
    }
}
