//! Shared device session.
//!
//! A [`Session`] owns the HTTP client, the device base URL, and the
//! credentials. Every resource handler holds a clone of it (the inner state
//! is reference-counted) and funnels all traffic through the generic JSON
//! helpers here: one status-to-error mapping, one place requests are logged,
//! and strictly single-shot semantics with no retry or caching layer.

use chrono::{DateTime, Utc};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::client::ClientConfig;
use crate::config::{DeviceConfig, DEFAULT_LOGIN_PROVIDER};
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("bigip-core/", env!("CARGO_PKG_VERSION"));

/// Authentication token issued by `/mgmt/shared/authn/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    /// Opaque token value sent back as `X-F5-Auth-Token`
    pub token: String,
    /// Token name (usually equal to the token value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// User the token was issued to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Idle timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    /// Absolute expiration in microseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_micros: Option<i64>,
}

impl AuthToken {
    /// Absolute expiration time reported by the device, when present.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expiration_micros
            .and_then(DateTime::<Utc>::from_timestamp_micros)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    login_provider_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: AuthToken,
}

/// Builder for [`Session`].
#[derive(Debug)]
pub struct SessionBuilder {
    base_url: Url,
    http_config: ClientConfig,
    username: String,
    password: SecretString,
    token_auth: bool,
    login_provider: String,
}

impl SessionBuilder {
    /// Create a builder for the given management URL.
    ///
    /// The URL should include the protocol and hostname
    /// (e.g. `https://bigip.example.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse.
    pub fn new(
        base_url: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let mut url = Url::parse(base_url.as_ref()).map_err(|err| {
            Error::ConfigError(format!(
                "Invalid management URL `{}`: {err}",
                base_url.as_ref()
            ))
        })?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            http_config: ClientConfig::new(),
            username: username.into(),
            password: SecretString::from(password.into()),
            token_auth: false,
            login_provider: DEFAULT_LOGIN_PROVIDER.to_string(),
        })
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Exchange credentials for a token on first use instead of sending
    /// basic auth with every request.
    #[must_use]
    pub const fn with_token_auth(mut self, enabled: bool) -> Self {
        self.token_auth = enabled;
        self
    }

    /// Set the login provider used by the token endpoint.
    #[must_use]
    pub fn with_login_provider(mut self, provider: impl Into<String>) -> Self {
        self.login_provider = provider.into();
        self
    }

    /// Build the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn build(self) -> Result<Session> {
        let mut builder = ClientBuilder::new()
            .timeout(self.http_config.timeout)
            .user_agent(USER_AGENT)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host)
            .connect_timeout(Duration::from_secs(10));

        if !self.http_config.enable_compression {
            builder = builder.no_gzip();
        }
        if !self.http_config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(Session {
            inner: Arc::new(SessionInner {
                http,
                base_url: self.base_url,
                username: self.username,
                password: self.password,
                token_auth: self.token_auth,
                login_provider: self.login_provider,
                token: RwLock::new(None),
            }),
        })
    }
}

#[derive(Debug)]
struct SessionInner {
    http: Client,
    base_url: Url,
    username: String,
    password: SecretString,
    token_auth: bool,
    login_provider: String,
    token: RwLock<Option<AuthToken>>,
}

/// Shared session for a BIG-IP device.
///
/// Cloning is cheap; all clones share the same HTTP connection pool and
/// authentication state.
#[derive(Clone, Debug)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    /// Construct a session directly from URL and credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client
    /// cannot be built.
    pub fn new(
        base_url: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        SessionBuilder::new(base_url, username, password)?.build()
    }

    /// Construct a session from a [`DeviceConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is rejected.
    pub fn from_config(config: &DeviceConfig) -> Result<Self> {
        let http_config = ClientConfig::new()
            .with_timeout(config.timeout())
            .with_tls_verify(config.tls_verify);

        SessionBuilder::new(
            &config.host,
            config.username.clone(),
            config.password.expose_secret().to_string(),
        )?
        .with_http_config(http_config)
        .with_token_auth(config.token_auth)
        .with_login_provider(config.login_provider.clone())
        .build()
    }

    /// Return the device base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Exchange the configured credentials for an authentication token.
    ///
    /// The token is stored on the session and sent as `X-F5-Auth-Token`
    /// on subsequent requests. Sessions built with token auth call this
    /// lazily before the first request; it can also be invoked directly
    /// to refresh an expired token.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the device rejects
    /// the credentials.
    pub async fn login(&self) -> Result<AuthToken> {
        let endpoint = Endpoint::shared().resource("authn").sub_resource("login");
        let url = self.build_url(&endpoint)?;
        let body = LoginRequest {
            username: &self.inner.username,
            password: self.inner.password.expose_secret(),
            login_provider_name: &self.inner.login_provider,
        };

        info!(path = %endpoint, "device login");

        let response = self
            .inner
            .http
            .post(url)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::AuthFailed(format!("login rejected ({status}): {text}")));
        }

        let login: LoginResponse = response.json().await.map_err(|err| {
            Error::ParseError(format!("Failed to parse login response: {err}"))
        })?;

        if let Ok(mut slot) = self.inner.token.write() {
            *slot = Some(login.token.clone());
        }
        Ok(login.token)
    }

    /// Issue a GET and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns the mapped device error on non-2xx responses, or a parse
    /// error when the body does not decode.
    pub async fn get_json<T>(&self, endpoint: &Endpoint) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send_json(Method::GET, endpoint, Option::<&()>::None)
            .await
    }

    /// POST a JSON body and decode the echoed object.
    ///
    /// # Errors
    ///
    /// Returns the mapped device error on non-2xx responses, or a parse
    /// error when the body does not decode.
    pub async fn post_json<B, T>(&self, endpoint: &Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, endpoint, Some(body)).await
    }

    /// PUT a JSON body and decode the echoed object.
    ///
    /// # Errors
    ///
    /// Returns the mapped device error on non-2xx responses, or a parse
    /// error when the body does not decode.
    pub async fn put_json<B, T>(&self, endpoint: &Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, endpoint, Some(body)).await
    }

    /// PATCH a JSON body and decode the echoed object.
    ///
    /// # Errors
    ///
    /// Returns the mapped device error on non-2xx responses, or a parse
    /// error when the body does not decode.
    pub async fn patch_json<B, T>(&self, endpoint: &Endpoint, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PATCH, endpoint, Some(body)).await
    }

    /// Issue a DELETE, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns the mapped device error on non-2xx responses.
    pub async fn delete(&self, endpoint: &Endpoint) -> Result<()> {
        let response = self
            .request(Method::DELETE, endpoint, Option::<&()>::None)
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(map_status_to_error(status, text))
    }

    async fn send_json<B, R>(&self, method: Method, endpoint: &Endpoint, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.request(method, endpoint, body).await?;
        let status = response.status();
        if status.is_success() {
            return response.json::<R>().await.map_err(|err| {
                Error::ParseError(format!(
                    "Failed to parse response for `{endpoint}`: {err}"
                ))
            });
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(map_status_to_error(status, text))
    }

    async fn request<B>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        if self.inner.token_auth && self.current_token().is_none() {
            self.login().await?;
        }

        let url = self.build_url(endpoint)?;
        let mut request = self.inner.http.request(method.clone(), url);
        request = self.apply_auth(request);
        request = request.header("Accept", "application/json");
        if let Some(payload) = body {
            request = request.json(payload);
        }

        debug!(method = %method, path = %endpoint, "device request");

        Ok(request.send().await?)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_token() {
            request.header("X-F5-Auth-Token", token.token)
        } else {
            request.basic_auth(
                &self.inner.username,
                Some(self.inner.password.expose_secret()),
            )
        }
    }

    fn current_token(&self) -> Option<AuthToken> {
        self.inner
            .token
            .read()
            .ok()
            .and_then(|slot| slot.clone())
    }

    fn build_url(&self, endpoint: &Endpoint) -> Result<Url> {
        self.inner
            .base_url
            .join(&endpoint.path())
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid path `{endpoint}`: {err}")))
    }
}

fn map_status_to_error(status: StatusCode, text: String) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(text),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::AuthFailed(format!("device rejected request: {text}"))
        }
        StatusCode::CONFLICT => Error::Conflict(text),
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            Error::DeviceUnavailable(format!("management endpoint unavailable: {text}"))
        }
        status if status.is_server_error() => {
            Error::DeviceUnavailable(format!("device error {status}: {text}"))
        }
        _ => Error::from_device_body(&text),
    }
}
