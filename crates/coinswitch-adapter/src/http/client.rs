/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client and envelope-unwrapping request helpers
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::{CoinswitchError, Result, ValidationError};
use crate::types::ApiEnvelope;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Base host and version for the CoinSwitch dynamic API
const BASE_HOST: &str = "https://api.coinswitch.co";
const API_VERSION: &str = "v2";

/// Sent as `x-user-ip` when the caller does not know the end user's address
pub const DEFAULT_USER_IP: &str = "1.1.1.1";

const API_KEY_HEADER: &str = "x-api-key";
const USER_IP_HEADER: &str = "x-user-ip";

/// Full default base URL, `<host>/<version>`
pub fn default_base_url() -> String {
    format!("{BASE_HOST}/{API_VERSION}")
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("coinswitch-adapter/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Credentials sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub user_ip: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            user_ip: None,
        }
    }

    pub fn with_user_ip(mut self, user_ip: impl Into<String>) -> Self {
        self.user_ip = Some(user_ip.into());
        self
    }

    /// IP of the end user, falling back to [`DEFAULT_USER_IP`]
    pub fn user_ip(&self) -> &str {
        self.user_ip
            .as_deref()
            .filter(|ip| !ip.is_empty())
            .unwrap_or(DEFAULT_USER_IP)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("user_ip", &self.user_ip)
            .finish()
    }
}

/// Main HTTP client for the CoinSwitch dynamic API
///
/// Headers and base URL are fixed at construction. The client holds no
/// per-call state, clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CoinswitchClient {
    http_client: Client,
    base_url: Url,
    user_ip: String,
}

impl CoinswitchClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, &default_base_url())
    }

    /// Create a client that talks to another host, e.g. a mock server
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        if credentials.api_key.trim().is_empty() {
            return Err(ValidationError::MissingApiKey.into());
        }

        let user_ip = credentials.user_ip().to_string();
        let headers = default_headers(&credentials.api_key, &user_ip)?;

        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CoinswitchError::Config(format!(
                "base url cannot carry a path: {base_url}"
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()?;

        debug!(base_url = %base_url, user_ip = %user_ip, "coinswitch client configured");

        Ok(Self {
            http_client,
            base_url,
            user_ip,
        })
    }

    /// Effective `x-user-ip` value
    pub fn user_ip(&self) -> &str {
        &self.user_ip
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL from path segments, each segment is percent-encoded
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CoinswitchError::Config(format!("invalid base url: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build request builder for an endpoint below the base URL
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint_url(segments)?;
        debug!(method = %method, path = url.path(), "sending request");
        Ok(self.http_client.request(method, url))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let builder = self.request(Method::GET, segments)?;
        self.send_json(builder).await
    }

    pub(crate) async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, segments)?.json(body);
        self.send_json(builder).await
    }

    /// Send the request, decode the envelope and return its `data` payload
    ///
    /// Failure envelopes are raised regardless of HTTP status. A non-2xx
    /// response whose body is not an envelope becomes [`CoinswitchError::Status`].
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: ApiEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(CoinswitchError::status_error(status, body));
            }
            Err(err) => return Err(err.into()),
        };

        if !envelope.success {
            warn!(
                status = status.as_u16(),
                code = %envelope.code,
                message = envelope.message(),
                "coinswitch api returned failure"
            );
        } else {
            debug!(status = status.as_u16(), code = %envelope.code, "response received");
        }

        let data = envelope.into_data()?;
        Ok(serde_json::from_value(data)?)
    }
}

fn default_headers(api_key: &str, user_ip: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let mut api_key = HeaderValue::from_str(api_key)
        .map_err(|e| CoinswitchError::Config(format!("api key is not a valid header value: {e}")))?;
    api_key.set_sensitive(true);
    headers.insert(API_KEY_HEADER, api_key);

    let user_ip = HeaderValue::from_str(user_ip)
        .map_err(|e| CoinswitchError::Config(format!("user ip is not a valid header value: {e}")))?;
    headers.insert(USER_IP_HEADER, user_ip);

    Ok(headers)
}
