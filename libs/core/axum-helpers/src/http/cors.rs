use axum::http::{HeaderValue, Method, header};
use core_config::{ConfigError, Environment, server::ServerConfig};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// CORS layer for the configured origins.
///
/// Without `CORS_ALLOWED_ORIGIN`, development falls back to a permissive layer
/// and production refuses to start.
pub fn cors_layer(
    server: &ServerConfig,
    environment: &Environment,
) -> Result<CorsLayer, ConfigError> {
    if server.cors_allowed_origins.is_empty() {
        if environment.is_production() {
            return Err(ConfigError::MissingEnvVar("CORS_ALLOWED_ORIGIN".to_string()));
        }
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(create_permissive_cors_layer());
    }

    let origins = server
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: format!("{}: {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(origins = ?server.cors_allowed_origins, "CORS configured");
    Ok(create_cors_layer(origins))
}

/// Restrictive layer for an explicit origin list.
///
/// Allows the methods the API serves and the JSON content headers, and lets
/// browsers cache the preflight for an hour.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Allows any origin - **DO NOT USE IN PRODUCTION**.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
