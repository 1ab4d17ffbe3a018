//! # Axum Helpers
//!
//! Utilities shared by the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health probes, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: validated JSON extractor

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer, create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{
    AppError, ErrorCode, ErrorResponse, error_response, error_response_with_details,
    validation_details,
};

pub use extractors::ValidatedJson;
