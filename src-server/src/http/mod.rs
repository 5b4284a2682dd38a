//! HTTP Layer
//!
//! Router, handlers and middleware of the REST API.

mod errors;
mod health;
mod items;
mod rate_limit;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use errors::ApiError;
pub use rate_limit::{RateLimiter, RATE_LIMITED_MESSAGE};

use crate::config::Settings;
use crate::AppState;

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the API router
pub fn router(state: Arc<AppState>, settings: &Settings) -> Router {
    let limiter = Arc::new(RateLimiter::new(
        settings.rate_limit_max,
        settings.rate_limit_window,
    ));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/items/{id}", get(items::get_item))
        .layer(middleware::from_fn_with_state(limiter, rate_limit::rate_limit))
        .layer(cors_layer(&settings.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
