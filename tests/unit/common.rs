// Shared helpers for the unit test suite

use concur_client::prelude::*;

/// Creates a test config pointing every endpoint at the given mock server
pub fn test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            client_id: "test_client_id".to_string(),
            client_secret: "test_client_secret".to_string(),
            access_token: "abc".to_string(),
            refresh_token: Some("r1".to_string()),
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            token_url: format!("{server_url}/oauth2/v0/token"),
            timeout: 30,
        },
        page_size: 25,
    }
}

/// Same as [`test_config`] but without a refresh token
pub fn test_config_without_refresh_token(server_url: &str) -> Config {
    let mut config = test_config(server_url);
    config.credentials.refresh_token = None;
    config
}
