//! OAuth token state and refresh handling
//!
//! The [`TokenManager`] is the sole owner of the credential state. Requests
//! read the current access token through it, and the transport asks it to
//! refresh when the provider rejects authorization. Refreshes are serialized:
//! at most one token-endpoint call is in flight at a time, and a caller that
//! lost the race simply observes the token the winner installed.

use crate::config::Config;
use crate::constants::{DEFAULT_ACCESS_TOKEN_TTL_SECS, TOKEN_EXPIRY_MARGIN_SECS, USER_AGENT};
use crate::error::AppError;
use crate::session::response::TokenResponse;
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// OAuth token pair held by the client
#[derive(Debug, Clone)]
pub struct OAuthToken {
    /// Access token for API requests
    pub access_token: String,
    /// Refresh token for obtaining new access tokens
    pub refresh_token: Option<String>,
    /// Access-token lifetime in seconds
    pub expires_in: u64,
    /// Timestamp when the token was installed (seconds since epoch)
    pub created_at: i64,
}

impl OAuthToken {
    /// Builds the initial token state from configured credentials
    ///
    /// The configured access token is of unknown age, so its creation time is
    /// taken as "now"; the provider remains the authority on validity either
    /// way.
    #[must_use]
    pub fn from_credentials(credentials: &crate::config::Credentials) -> Self {
        Self {
            access_token: credentials.access_token.clone(),
            refresh_token: credentials.refresh_token.clone(),
            expires_in: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            created_at: Utc::now().timestamp(),
        }
    }

    /// Checks whether the token is expired or will expire soon
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 300)
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<i64>) -> bool {
        let margin = margin_seconds.unwrap_or(TOKEN_EXPIRY_MARGIN_SECS);
        let expires_at = self.created_at + self.expires_in as i64;
        Utc::now().timestamp() >= expires_at - margin
    }

    fn replace_from(&mut self, response: TokenResponse) {
        self.access_token = response.access_token;
        if let Some(refresh_token) = response.refresh_token {
            self.refresh_token = Some(refresh_token);
        }
        self.expires_in = response.expires_in.unwrap_or(DEFAULT_ACCESS_TOKEN_TTL_SECS);
        self.created_at = Utc::now().timestamp();
    }
}

/// Owns the credential state and talks to the provider's token endpoint
pub struct TokenManager {
    config: Arc<Config>,
    http: Client,
    token: RwLock<OAuthToken>,
    refresh_lock: Mutex<()>,
}

impl TokenManager {
    /// Creates a new token manager seeded from the configured credentials
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let token = OAuthToken::from_credentials(&config.credentials);

        Ok(Self {
            config,
            http,
            token: RwLock::new(token),
            refresh_lock: Mutex::new(()),
        })
    }

    /// Returns the current access token
    pub async fn access_token(&self) -> String {
        self.token.read().await.access_token.clone()
    }

    /// Returns a snapshot of the current token state
    pub async fn current(&self) -> OAuthToken {
        self.token.read().await.clone()
    }

    /// Exchanges the stored refresh token for a new access token
    ///
    /// `observed` is the access token the caller saw rejected. When another
    /// caller already refreshed in the meantime the stored token no longer
    /// matches and the installed one is returned without a provider call.
    ///
    /// On success both stored tokens are replaced under the write lock; a
    /// refresh response that omits `refresh_token` keeps the stored one. On
    /// failure the stored state is left untouched.
    ///
    /// # Returns
    /// * `Ok(String)` - The access token now in effect
    /// * `Err(AppError::TokenRefresh)` - No refresh token available, the
    ///   provider rejected the exchange, or the token response was malformed
    pub async fn refresh_token(&self, observed: &str) -> Result<String, AppError> {
        let _guard = self.refresh_lock.lock().await;

        let refresh_token = {
            let token = self.token.read().await;
            if token.access_token != observed {
                debug!("access token already refreshed by a concurrent call");
                return Ok(token.access_token.clone());
            }
            token.refresh_token.clone()
        };

        let Some(refresh_token) = refresh_token else {
            return Err(AppError::TokenRefresh(
                "no refresh token available".to_string(),
            ));
        };

        info!("refreshing access token");

        let params = [
            ("grant_type", "refresh_token"),
            ("client_id", self.config.credentials.client_id.as_str()),
            (
                "client_secret",
                self.config.credentials.client_secret.as_str(),
            ),
            ("refresh_token", refresh_token.as_str()),
        ];

        let response = self
            .http
            .post(&self.config.rest_api.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::TokenRefresh(format!("token endpoint unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("token refresh rejected with status {}: {}", status, body);
            return Err(AppError::TokenRefresh(format!(
                "provider rejected refresh ({status}): {body}"
            )));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::TokenRefresh(format!("malformed token response: {e}")))?;

        let mut token = self.token.write().await;
        token.replace_from(parsed);
        info!("access token refreshed");
        Ok(token.access_token.clone())
    }
}
