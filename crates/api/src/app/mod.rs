//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store + renderer wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers
//! - `render/`: the page renderer seam, template-directory and built-in renderers
//! - `dto.rs`: form payloads and page view models
//! - `errors.rs`: error pages and status mapping

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod render;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: services::AppServices) -> Router {
    routes::router().layer(ServiceBuilder::new().layer(Extension(Arc::new(services))))
}
