//! Crisp API client.
//!
//! Low-level HTTP transport that handles authentication, request bodies
//! and response decoding. Resource operations are implemented on the
//! model types and go through [`CrispClient::execute`] or
//! [`CrispClient::send`].

use std::sync::Arc;

use reqwest::{Client, Method, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{CrispConfig, Tier};
use crate::error::{CrispError, Result};
use crate::response::{ApiResponse, Envelope, ResponseMeta};

const USER_AGENT: &str = concat!("crispapi/", env!("CARGO_PKG_VERSION"));

/// Header carrying the authentication tier.
pub const TIER_HEADER: &str = "X-Crisp-Tier";

/// Low-level Crisp API client.
///
/// Handles authentication and HTTP requests. Endpoint-specific operations
/// live on the model types (see [`Get`](crate::Get)) and in the
/// free functions of the crate root.
///
/// This struct is cheaply cloneable; clones share the same connection
/// pool and configuration, and may be used from several tasks at once.
///
/// # Example
///
/// ```no_run
/// use crispapi::{CrispClient, CrispConfig, Tier};
///
/// # fn example() -> crispapi::Result<()> {
/// // Create from environment variables
/// let client = CrispClient::from_env()?;
///
/// // Or configure manually
/// let config = CrispConfig::new("identifier", "key").with_tier(Tier::Plugin);
/// let client = CrispClient::with_config(config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CrispClient {
    http: Client,
    base_url: Arc<Url>,
    identifier: Arc<str>,
    key: Arc<SecretString>,
    tier: Tier,
}

impl std::fmt::Debug for CrispClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrispClient")
            .field("base_url", &self.base_url.as_str())
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}

impl CrispClient {
    /// Create a client from environment variables.
    ///
    /// See [`CrispConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are not set.
    pub fn from_env() -> Result<Self> {
        Self::with_config(CrispConfig::from_env()?)
    }

    /// Create a user-tier client with the given credentials and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(identifier: &str, key: &str, base_url: &str) -> Result<Self> {
        Self::with_config(CrispConfig::new(identifier, key).with_base_url(base_url))
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_config(config: CrispConfig) -> Result<Self> {
        // Ensure base URL ends with / so relative paths join under it
        let base_url_str = if config.base_url.ends_with('/') {
            config.base_url
        } else {
            format!("{}/", config.base_url)
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout)
            .build()
            .map_err(CrispError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            identifier: Arc::from(config.identifier),
            key: Arc::new(config.key),
            tier: config.tier,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the authentication tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Send a request and decode the JSON response into `T`.
    ///
    /// `body` is serialized as JSON, except for GET and HEAD requests
    /// which never carry one. An empty response body decodes to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CrispError::Api`] for non-2xx statuses,
    /// [`CrispError::Decode`] if the body is not valid JSON for `T`,
    /// [`CrispError::Body`] if the body is cut short, and
    /// [`CrispError::HttpError`] for transport failures.
    #[tracing::instrument(skip(self, body))]
    pub async fn execute<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(Option<T>, ResponseMeta)>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, body).await?;
        let meta = ResponseMeta::from_response(&response);
        let bytes = read_body(response, &meta).await?;

        let data = decode_body(&bytes, &meta)?;
        Ok((data, meta))
    }

    /// Send a request without decoding the response body.
    ///
    /// The body is read to the end and discarded so the connection can go
    /// back to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`CrispError::Api`] for non-2xx statuses,
    /// [`CrispError::Body`] if the body is cut short, and
    /// [`CrispError::HttpError`] for transport failures.
    #[tracing::instrument(skip(self, body))]
    pub async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ResponseMeta>
    where
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(method, path, body).await?;
        let meta = ResponseMeta::from_response(&response);
        read_body(response, &meta).await?;
        Ok(meta)
    }

    /// GET a path and unwrap its `{"data": ...}` envelope.
    ///
    /// # Errors
    ///
    /// Same as [`CrispClient::execute`].
    pub async fn fetch_data<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        let (envelope, meta) = self
            .execute::<(), Envelope<T>>(Method::GET, path, None)
            .await?;

        Ok(ApiResponse::new(envelope.and_then(|e| e.data), meta))
    }

    /// Build, authenticate and send a request, then check its status.
    async fn dispatch<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method.clone(), url)
            .basic_auth(&*self.identifier, Some(self.key.expose_secret()))
            .header(TIER_HEADER, self.tier.as_str());

        if let Some(body) = body {
            if accepts_body(&method) {
                request = request.json(body);
            } else {
                tracing::debug!(%method, "request body ignored");
            }
        }

        let response = request.send().await.map_err(CrispError::HttpError)?;
        tracing::debug!(status = %response.status(), "received response");

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let meta = ResponseMeta::from_response(&response);
        let reason = Self::extract_error_reason(response, status).await;
        tracing::warn!(%status, %reason, "request failed");

        Err(CrispError::Api { meta, reason })
    }

    /// Extract the error reason from a failed response.
    async fn extract_error_reason(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) if !b.trim().is_empty() => b,
            _ => return format!("HTTP {status}"),
        };

        // Crisp errors look like {"error": true, "reason": "not_found", "data": {}}
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(reason) = json.get("reason").and_then(|m| m.as_str()) {
                return reason.to_string();
            }
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }

        body
    }
}

fn accepts_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD)
}

async fn read_body(response: Response, meta: &ResponseMeta) -> Result<Vec<u8>> {
    response
        .bytes()
        .await
        .map(Vec::from)
        .map_err(|source| CrispError::Body {
            meta: meta.clone(),
            source,
        })
}

fn decode_body<T: DeserializeOwned>(bytes: &[u8], meta: &ResponseMeta) -> Result<Option<T>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|source| CrispError::Decode {
            meta: meta.clone(),
            source,
        })
}
