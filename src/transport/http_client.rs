//! HTTP client for the expense API with automatic authentication
//!
//! The client injects the bearer token on every request and handles the
//! provider's authorization failures internally: a 401/403 triggers exactly
//! one token refresh followed by one retry of the original request. The
//! retried response is terminal either way; there is no second refresh and no
//! broader retry policy at this layer.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::auth::TokenManager;
use crate::transport::pagination::{NextLocator, Page, PageSchema, paginate};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Terminal response of a request, detached from the transport
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, AppError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Authentication(format!("failed to read response body: {e}")))?
            .to_vec();

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Deserializes the body as JSON
    ///
    /// # Errors
    /// * `AppError::ResponseParse` - The body is empty or not valid JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        if self.body.is_empty() {
            return Err(AppError::ResponseParse(
                "response body was empty".to_string(),
            ));
        }
        serde_json::from_slice(&self.body)
            .map_err(|e| AppError::ResponseParse(format!("invalid json body: {e}")))
    }

    /// Returns the body as text, lossily converted
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Extracts the provider-supplied error message from the body
    ///
    /// Providers report failures under `Message`, `Error.Message`,
    /// `error_description` or `error`; the raw body text is the fallback.
    #[must_use]
    pub fn provider_message(&self) -> String {
        if let Ok(value) = serde_json::from_slice::<Value>(&self.body) {
            for found in [
                value.get("Message").and_then(Value::as_str),
                value.pointer("/Error/Message").and_then(Value::as_str),
                value.get("error_description").and_then(Value::as_str),
                value.get("error").and_then(Value::as_str),
            ] {
                if let Some(message) = found {
                    return message.to_string();
                }
            }
        }
        self.text().chars().take(200).collect()
    }
}

fn is_auth_failure(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

fn finalize(response: ApiResponse) -> Result<ApiResponse, AppError> {
    if response.status.is_success() {
        Ok(response)
    } else {
        let message = response.provider_message();
        error!(
            "request failed with status {}: {}",
            response.status, message
        );
        Err(AppError::Request {
            status: response.status,
            message,
        })
    }
}

/// Transport trait for the expense API
///
/// Service layers depend on this seam so a mock transport can stand in for
/// the real one.
#[async_trait]
pub trait ConcurHttpClient: Send + Sync {
    /// Issues a request and resolves authorization failures with a one-shot
    /// token refresh
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, PATCH, PUT, DELETE)
    /// * `path` - Absolute URL, or a path joined onto the configured base URL
    /// * `headers` - Extra headers; a caller-supplied `Authorization` entry
    ///   suppresses bearer injection
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - The terminal successful response
    /// * `Err(AppError)` - Authorization could not be restored, or the
    ///   terminal response was a failure
    async fn request(
        &self,
        method: Method,
        path: &str,
        headers: Option<&HeaderMap>,
        body: Option<&Value>,
    ) -> Result<ApiResponse, AppError>;

    /// Accumulates every page of a list endpoint into a single result set
    async fn fetch_all(&self, path: &str, schema: &PageSchema) -> Result<Vec<Value>, AppError>;
}

/// Default transport implementation over `reqwest`
pub struct ConcurHttpClientImpl {
    config: Arc<Config>,
    http: Client,
    tokens: Arc<TokenManager>,
}

impl ConcurHttpClientImpl {
    /// Creates a new client from configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let tokens = Arc::new(TokenManager::new(config.clone())?);

        Ok(Self {
            config,
            http,
            tokens,
        })
    }

    /// Gets a reference to the token manager
    pub fn token_manager(&self) -> &TokenManager {
        &self.tokens
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        extra_headers: Option<&HeaderMap>,
        body: Option<&Value>,
        access_token: &str,
    ) -> Result<ApiResponse, AppError> {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(ACCEPT, "application/json");

        let caller_has_auth =
            extra_headers.is_some_and(|headers| headers.contains_key(AUTHORIZATION));
        if !caller_has_auth {
            request = request.bearer_auth(access_token);
        }
        if let Some(headers) = extra_headers {
            request = request.headers(headers.clone());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Authentication(format!("transport failure: {e}")))?;

        debug!("response status: {}", response.status());
        ApiResponse::read(response).await
    }

    async fn fetch_page(
        &self,
        path: &str,
        schema: &PageSchema,
        cursor: Option<NextLocator>,
    ) -> Result<Page<Value>, AppError> {
        let target = match cursor {
            None => self.build_url(path),
            Some(NextLocator::Url(url)) => url,
            Some(NextLocator::Cursor(token)) => {
                let mut url = Url::parse(&self.build_url(path))
                    .map_err(|e| AppError::InvalidInput(format!("invalid request url: {e}")))?;
                url.query_pairs_mut().append_pair(schema.cursor_param, &token);
                url.to_string()
            }
        };

        let response = self.request(Method::GET, &target, None, None).await?;
        schema.parse(response.json()?)
    }

    /// Makes a GET request and deserializes the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None, None).await?.json()
    }

    /// Makes a POST request with a JSON body and deserializes the response
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, None, Some(&body))
            .await?
            .json()
    }

    /// Makes a PUT request with a JSON body and deserializes the response
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, None, Some(&body))
            .await?
            .json()
    }

    /// Makes a PATCH request with a JSON body and deserializes the response
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let body = serde_json::to_value(body)?;
        self.request(Method::PATCH, path, None, Some(&body))
            .await?
            .json()
    }

    /// Makes a DELETE request; a 2xx with an empty body is success
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self.request(Method::DELETE, path, None, None).await?;
        if !response.body.is_empty() {
            debug!("delete returned a body of {} bytes", response.body.len());
        }
        Ok(())
    }
}

#[async_trait]
impl ConcurHttpClient for ConcurHttpClientImpl {
    async fn request(
        &self,
        method: Method,
        path: &str,
        headers: Option<&HeaderMap>,
        body: Option<&Value>,
    ) -> Result<ApiResponse, AppError> {
        let token = self.tokens.current().await;
        if token.is_expired(None) {
            debug!("access token past its validity window, provider may reject");
        }

        let response = self
            .send(method.clone(), path, headers, body, &token.access_token)
            .await?;

        if !is_auth_failure(response.status) {
            return finalize(response);
        }

        warn!(
            "authorization rejected with status {}, refreshing token",
            response.status
        );
        let fresh = self.tokens.refresh_token(&token.access_token).await?;

        let retried = self.send(method, path, headers, body, &fresh).await?;
        if is_auth_failure(retried.status) {
            error!("authorization rejected again after token refresh");
            return Err(AppError::Authentication(format!(
                "authorization rejected after token refresh (status {})",
                retried.status
            )));
        }
        finalize(retried)
    }

    async fn fetch_all(&self, path: &str, schema: &PageSchema) -> Result<Vec<Value>, AppError> {
        paginate(|cursor| self.fetch_page(path, schema, cursor)).await
    }
}
