//! Configuration for the client
//!
//! All settings come from environment variables (optionally through a `.env`
//! file). Nothing in the crate holds process-wide state: a [`Config`] is
//! constructed explicitly and injected into the client that owns it.

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// OAuth client credentials and initial tokens for the expense API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// OAuth client ID issued by the provider
    pub client_id: String,
    /// OAuth client secret issued by the provider
    pub client_secret: String,
    /// Current access token (short-lived, typically one hour)
    pub access_token: String,
    /// Refresh token (long-lived, typically six months)
    pub refresh_token: Option<String>,
}

/// Configuration for the REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestApiConfig {
    /// Base URL for the provider's REST API (geolocation-specific host)
    pub base_url: String,
    /// Full URL of the OAuth token endpoint
    pub token_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

/// Main configuration for the expense API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Number of items to request per page in list operations
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Reads `CONCUR_CLIENT_ID`, `CONCUR_CLIENT_SECRET`,
    /// `CONCUR_ACCESS_TOKEN`, `CONCUR_REFRESH_TOKEN`, `CONCUR_BASE_URL`,
    /// `CONCUR_TOKEN_URL`, `CONCUR_REST_TIMEOUT` and `CONCUR_PAGE_SIZE`,
    /// loading a `.env` file first when one is present.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("loaded .env file"),
            Err(e) => debug!("no .env file loaded: {e}"),
        }

        let client_id = get_env_or_default("CONCUR_CLIENT_ID", String::from("default_client_id"));
        let client_secret =
            get_env_or_default("CONCUR_CLIENT_SECRET", String::from("default_client_secret"));
        let access_token = get_env_or_default("CONCUR_ACCESS_TOKEN", String::new());

        if client_id == "default_client_id" {
            error!("CONCUR_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret == "default_client_secret" {
            error!("CONCUR_CLIENT_SECRET not found in environment variables or .env file");
        }
        if access_token.is_empty() {
            error!("CONCUR_ACCESS_TOKEN not found in environment variables or .env file");
        }

        let base_url = get_env_or_default(
            "CONCUR_BASE_URL",
            String::from("https://us2.api.concursolutions.com"),
        );
        let token_url = get_env_or_default(
            "CONCUR_TOKEN_URL",
            format!("{}/oauth2/v0/token", base_url.trim_end_matches('/')),
        );

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                access_token,
                refresh_token: crate::utils::config::get_env_or_none("CONCUR_REFRESH_TOKEN"),
            },
            rest_api: RestApiConfig {
                base_url,
                token_url,
                timeout: get_env_or_default("CONCUR_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            page_size: get_env_or_default("CONCUR_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }
}
