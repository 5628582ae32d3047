/// HTTP client with bearer injection and one-shot token refresh
pub mod http_client;
/// Page parsing and accumulation
pub mod pagination;
