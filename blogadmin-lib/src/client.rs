//! Main AdminClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::controller::MemoryNavigator;
use crate::controller::Navigator;
use crate::envelope::Envelope;
use crate::envelope::EnvelopeKind;
use crate::error::ApiError;
use crate::storage::LocalStorage;

/// Path the user is sent to when the session is rejected.
pub const LOGIN_PATH: &str = "/login";

/// The client for the blog admin backend.
///
/// Every call resolves to an [`Envelope`]: transport failures become a
/// `"Network error"` failure and a rejected session triggers the login
/// redirect, so callers only ever branch on `success`.
///
/// This client is cheap to clone (uses `Arc` internally).
///
/// # Example
///
/// ```ignore
/// use blogadmin_lib::AdminClient;
/// use blogadmin_lib::storage::LocalStorage;
///
/// let client = AdminClient::builder()
///     .url("https://blog.example.com/api")
///     .storage(LocalStorage::in_memory())
///     .build()?;
///
/// let articles = client.get_articles().await;
/// ```
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    base_url: String,
    storage: LocalStorage,
    navigator: Arc<dyn Navigator>,
    http_client: Client,
    timeout: Option<Duration>,
}

impl AdminClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> AdminClientBuilder<Missing, Missing> {
        AdminClientBuilder::new()
    }

    /// Creates a builder preloaded from an [`ApiConfig`].
    pub fn from_config(
        config: ApiConfig,
        storage: LocalStorage,
    ) -> AdminClientBuilder<Set<String>, Set<LocalStorage>> {
        let mut builder = Self::builder().url(config.base_url).storage(storage);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the local storage the session lives in.
    pub fn storage(&self) -> &LocalStorage {
        &self.inner.storage
    }

    /// Returns the navigator used for the login redirect.
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.inner.navigator
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Sends a request and normalizes the reply into an envelope.
    ///
    /// `endpoint` is relative to the base URL (`"article/getList"`).
    pub async fn request<T, B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        log::debug!("{} {}", method, endpoint);

        let (status, envelope) = match self.try_request(method.clone(), endpoint, body).await {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("{} {} failed: {}", method, endpoint, e);
                return Envelope::network_failure();
            }
        };

        // A 401 that explains itself (bad credentials) goes back to the caller.
        let bare_401 = status == StatusCode::UNAUTHORIZED && envelope.message.is_empty();
        if bare_401 || envelope.kind() == EnvelopeKind::Unauthorized {
            return self.redirect_to_login().await;
        }

        if !envelope.success {
            log::warn!("{} {} rejected ({}): {}", method, endpoint, status, envelope.message);
        }
        envelope
    }

    async fn try_request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, Envelope<T>), ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;

        let mut request = self
            .inner
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        match self.inner.storage.access_token().await {
            Ok(Some(token)) => request = request.bearer_auth(token),
            Ok(None) => {}
            Err(e) => log::warn!("Could not read access token: {}", e),
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let envelope = match serde_json::from_str::<Envelope<T>>(&text) {
            Ok(envelope) => envelope,
            Err(e) => {
                let err = ApiError::parse_with_body(e.to_string(), text);
                log::debug!("Treating unparseable body as empty: {}", err);
                Envelope::default()
            }
        };

        Ok((status, envelope))
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<String, ApiError> {
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            return Err(ApiError::InvalidUrl(self.inner.base_url.clone()));
        }
        Ok(format!("{}/{}", self.inner.base_url, endpoint))
    }

    async fn redirect_to_login<T>(&self) -> Envelope<T> {
        let current = self.inner.navigator.current_path();
        log::info!("Session rejected, redirecting to {} from {}", LOGIN_PATH, current);

        if let Err(e) = self.inner.storage.set_redirect_after_login(&current).await {
            log::warn!("Could not save redirect target: {}", e);
        }
        self.inner.navigator.push(LOGIN_PATH);

        Envelope::redirecting()
    }

    /// `GET` an endpoint.
    pub async fn get_data<T: DeserializeOwned>(&self, endpoint: &str) -> Envelope<T> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    /// `POST` a JSON body to an endpoint.
    pub async fn post_data<T, B>(&self, endpoint: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// `PUT` a JSON body to an endpoint.
    pub async fn put_data<T, B>(&self, endpoint: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    /// `DELETE` an endpoint.
    pub async fn delete_data<T: DeserializeOwned>(&self, endpoint: &str) -> Envelope<T> {
        self.request::<T, ()>(Method::DELETE, endpoint, None).await
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`AdminClient`].
///
/// # Required Fields
///
/// - `url` - The API base URL
/// - `storage` - Where the session token lives
pub struct AdminClientBuilder<Url, Storage> {
    url: Url,
    storage: Storage,
    navigator: Option<Arc<dyn Navigator>>,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl AdminClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            storage: Missing,
            navigator: None,
            timeout: None,
            http_client: None,
        }
    }
}

impl Default for AdminClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> AdminClientBuilder<Missing, S> {
    /// Sets the API base URL.
    pub fn url(self, url: impl Into<String>) -> AdminClientBuilder<Set<String>, S> {
        AdminClientBuilder {
            url: Set(url.into()),
            storage: self.storage,
            navigator: self.navigator,
            timeout: self.timeout,
            http_client: self.http_client,
        }
    }
}

impl<U> AdminClientBuilder<U, Missing> {
    /// Sets the local storage holding the session.
    pub fn storage(self, storage: LocalStorage) -> AdminClientBuilder<U, Set<LocalStorage>> {
        AdminClientBuilder {
            url: self.url,
            storage: Set(storage),
            navigator: self.navigator,
            timeout: self.timeout,
            http_client: self.http_client,
        }
    }
}

impl<U, S> AdminClientBuilder<U, S> {
    /// Sets the navigator used for the login redirect.
    ///
    /// Defaults to a [`MemoryNavigator`] starting at `/`.
    pub fn navigator<N: Navigator + 'static>(mut self, navigator: N) -> Self {
        self.navigator = Some(Arc::new(navigator));
        self
    }

    /// Shares an existing navigator with the client.
    pub fn shared_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl AdminClientBuilder<Set<String>, Set<LocalStorage>> {
    /// Builds the [`AdminClient`].
    ///
    /// Fails if the URL is not an absolute base URL or the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<AdminClient, ApiError> {
        let config = ApiConfig::new(&self.url.0).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder().build()?,
        };

        Ok(AdminClient {
            inner: Arc::new(AdminClientInner {
                base_url: config.base_url,
                storage: self.storage.0,
                navigator: self
                    .navigator
                    .unwrap_or_else(|| Arc::new(MemoryNavigator::default())),
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
