/// Token state and refresh management
pub mod auth;
/// Wire models for the token endpoint
pub mod response;
