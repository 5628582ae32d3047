/// Supported API resources and their endpoints
pub mod resources;
/// Service layer over the transport
pub mod services;
