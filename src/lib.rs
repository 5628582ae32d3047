//! # Concur Client
//!
//! Async client for SAP Concur-style expense-management REST APIs.
//!
//! The crate wraps the provider's OAuth2 bearer-token scheme behind a small
//! transport layer that handles:
//! - Bearer-token injection on every request
//! - Transparent, one-shot token refresh when the provider answers 401/403
//! - Accumulation of paginated list responses (`Items`/`NextPage` style, or
//!   opaque cursors) into a single result set
//! - A typed resource layer for the expense endpoints (reports, entries,
//!   attendees, allocations, receipt images, users)
//!
//! # Example
//! ```ignore
//! use concur_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Arc::new(ConcurHttpClientImpl::new(config.clone())?);
//! let service = ResourceServiceImpl::new(Arc::new(config), client);
//!
//! // Accumulates every page of expense reports; the access token is
//! // refreshed behind the scenes if the provider rejects it.
//! let reports = service.list(Resource::Reports).await?;
//! ```
//!
//! Configuration comes from the environment (`CONCUR_*` variables, optionally
//! via a `.env` file); see [`config::Config::new`].

/// Resource dispatch and service layer over the transport
pub mod application;
/// Configuration loaded from environment variables
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Commonly used types, re-exported
pub mod prelude;
/// OAuth token state and refresh handling
pub mod session;
/// HTTP transport and pagination
pub mod transport;
/// Environment and logging helpers
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
