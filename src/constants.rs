/// User agent string used in HTTP requests to identify this client to the API
pub const USER_AGENT: &str = "concur-client/0.3.1";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of items requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 25;
/// Safety margin in seconds when judging access-token expiry (5 minutes)
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 300;
/// Assumed access-token lifetime in seconds when the provider omits
/// `expires_in` from a token response (providers issue one-hour tokens)
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 3600;
