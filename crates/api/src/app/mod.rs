//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store and description-generator handles, plus the request flows
//! - `routes/`: HTTP routes + handlers (one file per record kind)
//! - `dto.rs`: request/response DTOs and mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(Arc::new(services))))
}
