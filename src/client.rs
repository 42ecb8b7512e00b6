use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use chrono::{DateTime, Duration as TimeDelta, Utc};
use reqwest::{header, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use url::Url;

use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::models::auth::TokenResponse;

/// Seconds of remaining lifetime below which the access token is refreshed
const EXPIRY_LEEWAY_SECS: i64 = 60;

/// Assumed lifetime for tokens installed without expiry information
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    client_id: Option<String>,
    client_secret: Option<String>,
    user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given instance URL
    pub fn new(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| ApiError::InvalidClient(format!("invalid base URL: {}", e)))?;
        if base_url.host_str().is_none() {
            return Err(ApiError::InvalidClient("base URL has no host".to_string()));
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(30),
            client_id: None,
            client_secret: None,
            user_agent: concat!("filegate-api/", env!("CARGO_PKG_VERSION")).to_string(),
        })
    }

    /// Set the per-request timeout in seconds
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the OAuth2 app credentials used on the token endpoint
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// API path families exposed by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ApiPrefix {
    #[default]
    Core,
    Branding,
    Reports,
}

impl ApiPrefix {
    fn path(self) -> &'static str {
        match self {
            ApiPrefix::Core => "/api/v4",
            ApiPrefix::Branding => "/branding/api/v1",
            ApiPrefix::Reports => "/reports/api/v1",
        }
    }
}

/// Per-request options
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions {
    prefix: ApiPrefix,
    no_credential: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the request through the branding API prefix
    pub fn branding(mut self) -> Self {
        self.prefix = ApiPrefix::Branding;
        self
    }

    /// Route the request through the reports API prefix
    pub fn reports(mut self) -> Self {
        self.prefix = ApiPrefix::Reports;
        self
    }

    /// Send without a bearer token (public endpoints)
    pub fn no_credential(mut self) -> Self {
        self.no_credential = true;
        self
    }
}

#[derive(Debug, Clone)]
struct TokenState {
    access_token: String,
    refresh_token: Option<String>,
    access_expires: DateTime<Utc>,
}

impl TokenState {
    fn from_response(token: &TokenResponse) -> Self {
        Self {
            access_token: token.access_token.clone(),
            refresh_token: token.refresh_token.clone(),
            access_expires: Utc::now() + TimeDelta::seconds(token.expires_in),
        }
    }

    fn needs_refresh(&self) -> bool {
        Utc::now() + TimeDelta::seconds(EXPIRY_LEEWAY_SECS) >= self.access_expires
    }
}

#[derive(Clone)]
enum RequestBody {
    Json(serde_json::Value),
    Raw(Bytes),
}

/// FileGate API client.
///
/// Owns the OAuth2 token lifecycle: every request is attempted with a valid
/// access token, refreshing through the stored refresh token when the current
/// one is expired or rejected. Adapter traits in [`crate::api`] are
/// implemented on this type.
pub struct Client {
    http_client: reqwest::Client,
    config: ClientConfig,
    tokens: RwLock<Option<TokenState>>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
            tokens: RwLock::new(None),
        }
    }

    /// Instance URL this client talks to
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str().trim_end_matches('/')
    }

    // --- session management ---

    /// Establish a session with the OAuth2 password grant
    pub async fn connect_password(
        &self,
        username: &str,
        password: &str,
    ) -> ApiResult<TokenResponse> {
        let token = self
            .fetch_token(&[
                ("grant_type", "password"),
                ("username", username),
                ("password", password),
            ])
            .await?;
        self.store_token(&token).await;
        Ok(token)
    }

    /// Establish a session from an authorization code
    pub async fn connect_auth_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> ApiResult<TokenResponse> {
        let token = self
            .fetch_token(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .await?;
        self.store_token(&token).await;
        Ok(token)
    }

    /// Establish a session from a refresh token obtained earlier
    pub async fn connect_refresh_token(&self, refresh_token: &str) -> ApiResult<TokenResponse> {
        let token = self
            .fetch_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .await?;
        self.store_token(&token).await;
        Ok(token)
    }

    /// Install a token pair obtained out of band, assuming the default
    /// access token lifetime
    pub async fn set_tokens(
        &self,
        access_token: impl Into<String>,
        refresh_token: Option<String>,
    ) {
        let mut guard = self.tokens.write().await;
        *guard = Some(TokenState {
            access_token: access_token.into(),
            refresh_token,
            access_expires: Utc::now() + TimeDelta::seconds(DEFAULT_TOKEN_LIFETIME_SECS),
        });
    }

    /// Install a token pair with its reported expiry
    pub async fn set_tokens_with_expiry(&self, token: &TokenResponse) {
        let mut guard = self.tokens.write().await;
        *guard = Some(TokenState::from_response(token));
    }

    /// Drop the stored session
    pub async fn clear_tokens(&self) {
        let mut guard = self.tokens.write().await;
        *guard = None;
    }

    pub async fn is_connected(&self) -> bool {
        self.tokens.read().await.is_some()
    }

    /// Ping the API without credentials. `Ok(true)` when the service answers
    /// with a success status, `Ok(false)` on any other status, `Err` only on
    /// transport failure.
    pub async fn test_connection(&self) -> ApiResult<bool> {
        let url = self.build_url(RequestOptions::new(), "/auth/ping");
        let response = self
            .http_client
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Ok(response.status().is_success())
    }

    /// Return a valid access token, refreshing it first when the stored one
    /// is expired or about to expire.
    pub async fn access_token(&self) -> ApiResult<String> {
        {
            let guard = self.tokens.read().await;
            match guard.as_ref() {
                None => return Err(ApiError::Disconnected),
                Some(state) if !state.needs_refresh() => return Ok(state.access_token.clone()),
                Some(_) => {}
            }
        }
        self.refresh_session(false).await
    }

    /// Exchange the stored refresh token for a new pair. Runs under the write
    /// lock with a second expiry check, so callers racing an expired token
    /// perform a single exchange.
    async fn refresh_session(&self, force: bool) -> ApiResult<String> {
        let mut guard = self.tokens.write().await;
        let state = guard.as_mut().ok_or(ApiError::Disconnected)?;
        if !force && !state.needs_refresh() {
            return Ok(state.access_token.clone());
        }

        let refresh_token = state.refresh_token.clone().ok_or_else(|| {
            ApiError::Unauthorized(ErrorBody {
                message: Some("access token expired and no refresh token is held".to_string()),
                ..ErrorBody::default()
            })
        })?;

        tracing::debug!(target: "filegate_api::client", "refreshing access token");
        let token = self
            .fetch_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.as_str()),
            ])
            .await?;
        *state = TokenState::from_response(&token);
        Ok(state.access_token.clone())
    }

    async fn has_refresh_token(&self) -> bool {
        self.tokens
            .read()
            .await
            .as_ref()
            .is_some_and(|state| state.refresh_token.is_some())
    }

    async fn store_token(&self, token: &TokenResponse) {
        let mut guard = self.tokens.write().await;
        *guard = Some(TokenState::from_response(token));
    }

    /// One call against the OAuth2 token endpoint; does not touch stored state
    async fn fetch_token(&self, form: &[(&str, &str)]) -> ApiResult<TokenResponse> {
        let url = format!("{}/oauth/token", self.base_url());
        let mut request = self
            .http_client
            .post(&url)
            .timeout(self.config.timeout)
            .form(form);

        if let (Some(id), Some(secret)) = (&self.config.client_id, &self.config.client_secret) {
            let credentials = STANDARD.encode(format!("{}:{}", id, secret));
            request = request.header(header::AUTHORIZATION, format!("Basic {}", credentials));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))
    }

    // --- request plumbing used by the adapter traits ---

    pub(crate) fn build_url(&self, opts: RequestOptions, path: &str) -> String {
        format!("{}{}{}", self.base_url(), opts.prefix.path(), path)
    }

    /// Send one request. A 401 on an authenticated call triggers exactly one
    /// refresh-token exchange and one retry; a second 401 is surfaced.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<RequestBody>,
        opts: RequestOptions,
    ) -> ApiResult<Response> {
        let mut refreshed = false;
        loop {
            let mut request = self
                .http_client
                .request(method.clone(), url)
                .timeout(self.config.timeout)
                .header(header::USER_AGENT, &self.config.user_agent);

            if !opts.no_credential {
                let token = self.access_token().await?;
                request = request.bearer_auth(token);
            }

            request = match &body {
                Some(RequestBody::Json(value)) => request.json(value),
                Some(RequestBody::Raw(data)) => request
                    .header(header::CONTENT_TYPE, "application/octet-stream")
                    .body(data.clone()),
                None => request,
            };

            tracing::debug!(target: "filegate_api::client", %method, %url, "sending request");
            let response = request.send().await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED
                && !opts.no_credential
                && !refreshed
                && self.has_refresh_token().await
            {
                tracing::debug!(
                    target: "filegate_api::client",
                    %url,
                    "access token rejected, refreshing session and retrying once"
                );
                self.refresh_session(true).await?;
                refreshed = true;
                continue;
            }

            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(ApiError::from_status(status, &text));
            }

            return Ok(response);
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = if response.status() == StatusCode::NO_CONTENT {
            Bytes::new()
        } else {
            response.bytes().await?
        };

        if bytes.is_empty() {
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|_| ApiError::Validation("empty body for a non-empty model".to_string()));
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Validation(e.to_string()))
    }

    fn json_body<B: Serialize + ?Sized>(body: &B) -> ApiResult<RequestBody> {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Validation(format!("failed to serialize request body: {}", e)))
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        opts: RequestOptions,
    ) -> ApiResult<T> {
        let url = self.build_url(opts, path);
        let response = self.execute(Method::GET, &url, None, opts).await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> ApiResult<T> {
        let url = self.build_url(opts, path);
        let body = Self::json_body(body)?;
        let response = self.execute(Method::POST, &url, Some(body), opts).await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> ApiResult<T> {
        let url = self.build_url(opts, path);
        let body = Self::json_body(body)?;
        let response = self.execute(Method::PUT, &url, Some(body), opts).await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str, opts: RequestOptions) -> ApiResult<()> {
        let url = self.build_url(opts, path);
        let response = self.execute(Method::DELETE, &url, None, opts).await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn delete_with_body<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOptions,
    ) -> ApiResult<T> {
        let url = self.build_url(opts, path);
        let body = Self::json_body(body)?;
        let response = self.execute(Method::DELETE, &url, Some(body), opts).await?;
        Self::parse_json(response).await
    }

    /// GET a binary response, returning the raw bytes and the reported
    /// content type
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        opts: RequestOptions,
    ) -> ApiResult<(Bytes, Option<String>)> {
        let url = self.build_url(opts, path);
        let response = self.execute(Method::GET, &url, None, opts).await?;
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let bytes = response.bytes().await?;
        Ok((bytes, content_type))
    }

    /// POST an opaque byte payload (octet-stream)
    pub(crate) async fn post_bytes<T: DeserializeOwned>(
        &self,
        path: &str,
        data: Bytes,
        opts: RequestOptions,
    ) -> ApiResult<T> {
        let url = self.build_url(opts, path);
        let response = self
            .execute(Method::POST, &url, Some(RequestBody::Raw(data)), opts)
            .await?;
        Self::parse_json(response).await
    }
}
