//! # Concur Client Prelude
//!
//! Imports the most commonly used types and traits of the library.
//!
//! ## Usage
//!
//! ```rust
//! use concur_client::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the expense API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND TOKEN MANAGEMENT
// ============================================================================

/// Credential owner with one-shot refresh
pub use crate::session::auth::{OAuthToken, TokenManager};

/// Token endpoint wire model
pub use crate::session::response::TokenResponse;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::ConcurHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::{ApiResponse, ConcurHttpClientImpl};

/// Pagination primitives
pub use crate::transport::pagination::{NextLocator, Page, PageSchema, paginate};

// ============================================================================
// APPLICATION LAYER
// ============================================================================

/// Supported resource kinds
pub use crate::application::resources::Resource;

/// Resource service trait and implementation
pub use crate::application::services::{ResourceService, ResourceServiceImpl};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest types for custom requests
pub use reqwest::{Method, StatusCode};
