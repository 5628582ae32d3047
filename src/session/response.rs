use serde::{Deserialize, Serialize};

/// Response body of the OAuth token endpoint
///
/// Providers always return `access_token`; everything else is optional. In
/// particular a refresh response may or may not rotate the refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// New access token
    pub access_token: String,
    /// Rotated refresh token, when the provider issues one
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access-token lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Token type (usually "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,
    /// Granted scope
    #[serde(default)]
    pub scope: Option<String>,
}
