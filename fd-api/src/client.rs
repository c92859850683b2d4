//! HTTP client for the Freshdesk REST API.
//!
//! Builds one outgoing request per call (auth header, query string, JSON or
//! multipart body), sends it once, and hands the outcome to the response
//! normalizer. There is no retry and no timeout unless the configuration
//! asks for one.

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::debug;

use fd_core::config::{AppConfig, FreshdeskConfig};
use fd_core::constants;
use fd_core::error::{FdError, FdResult};

use crate::error::{ApiError, ApiResult};
use crate::request::{ApiTarget, Query, RequestBody};
use crate::response::{normalize, ApiResponse, RawResponse};

/// Build the `Authorization` value for an API key: `Basic base64(key:X)`.
pub fn basic_auth_header(api_key: &str) -> String {
    let credentials = format!("{api_key}:{}", constants::API_KEY_PASSWORD);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Client for one Freshdesk helpdesk.
///
/// Cheap to clone; clones share the connection pool. Concurrent calls share
/// no mutable state.
#[derive(Clone)]
pub struct FreshdeskClient {
    inner: Client,
    /// Helpdesk origin, e.g. "https://demo.freshdesk.com".
    base_url: String,
    /// `base_url` plus the API prefix.
    api_root: String,
    /// Precomputed `Authorization` header value.
    auth_header: HeaderValue,
}

impl fmt::Debug for FreshdeskClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreshdeskClient")
            .field("base_url", &self.base_url)
            .field("auth_header", &"<redacted>")
            .finish()
    }
}

impl FreshdeskClient {
    /// Create a client from connection configuration.
    pub fn new(config: &FreshdeskConfig) -> FdResult<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| FdError::Config(format!("failed to build HTTP client: {e}")))?;

        Self::with_http_client(config, inner)
    }

    /// Create a client around an existing reqwest client.
    pub fn with_http_client(config: &FreshdeskConfig, inner: Client) -> FdResult<Self> {
        config.validate()?;

        let base_url = AppConfig::sanitize_base_url(&config.base_url);
        Url::parse(&base_url)
            .map_err(|e| FdError::Config(format!("invalid base url {base_url}: {e}")))?;
        let api_root = format!("{base_url}{}", constants::API_PREFIX);

        let mut auth_header = HeaderValue::from_str(&basic_auth_header(&config.api_key))
            .map_err(|e| FdError::Config(format!("api key is not a valid header value: {e}")))?;
        auth_header.set_sensitive(true);

        Ok(Self {
            inner,
            base_url,
            api_root,
            auth_header,
        })
    }

    /// Shorthand for `FreshdeskClient::new(&FreshdeskConfig::new(url, key))`.
    pub fn from_api_key(base_url: &str, api_key: &str) -> FdResult<Self> {
        Self::new(&FreshdeskConfig::new(base_url, api_key))
    }

    /// Get the helpdesk origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API root URL.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Build the full URL for an API path such as "/tickets/1".
    fn url(&self, path: &str) -> ApiResult<Url> {
        let full = format!("{}{}", self.api_root, path);
        Url::parse(&full).map_err(|e| ApiError::Request(format!("invalid url {full}: {e}")))
    }

    /// Build the request for a call. Fails only on local problems.
    fn build_request(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        body: Option<RequestBody>,
    ) -> ApiResult<(RequestBuilder, ApiTarget)> {
        let url = self.url(path)?;
        let target = ApiTarget::from_url(method.clone(), &url);

        let mut builder = self
            .inner
            .request(method, url)
            .header(AUTHORIZATION, self.auth_header.clone());

        if let Some(q) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(q.pairs());
        }

        builder = match body {
            None => builder,
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart(form)) => builder.multipart(form.into_form()?),
        };

        Ok((builder, target))
    }

    /// Issue a request exactly once and capture the raw outcome.
    ///
    /// Network failures come back as `Err` inside the outcome; this never
    /// retries.
    pub async fn send(builder: RequestBuilder) -> Result<RawResponse, reqwest::Error> {
        let response = builder.send().await?;
        RawResponse::read(response).await
    }

    /// Perform one API call and normalize its outcome.
    pub async fn invoke(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        body: Option<RequestBody>,
    ) -> ApiResult<ApiResponse> {
        let (builder, target) = self.build_request(method, path, query, body)?;
        debug!("{target}");
        let outcome = Self::send(builder).await;
        normalize(outcome, &target)
    }

    // --- Public HTTP methods ---

    /// Execute a GET request.
    pub async fn get(&self, path: &str, query: Option<&Query>) -> ApiResult<ApiResponse> {
        self.invoke(Method::GET, path, query, None).await
    }

    /// Execute a POST request.
    pub async fn post(&self, path: &str, body: RequestBody) -> ApiResult<ApiResponse> {
        self.invoke(Method::POST, path, None, Some(body)).await
    }

    /// Execute a PUT request, optionally without a body.
    pub async fn put(&self, path: &str, body: Option<RequestBody>) -> ApiResult<ApiResponse> {
        self.invoke(Method::PUT, path, None, body).await
    }

    /// Execute a DELETE request.
    pub async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.invoke(Method::DELETE, path, None, None).await
    }
}
