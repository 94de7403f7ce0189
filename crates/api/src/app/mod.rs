//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: the shared product store and the operations handlers call
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query-string DTOs
//! - `errors.rs`: the single error type and its JSON rendering
//! - `extract.rs`: query/path extractors that reject through `errors.rs`

use std::any::Any;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use storefront_products::ProductStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// `store` is owned by the returned router; each call gets an independent catalog.
pub fn build_app(api_key: Option<String>, store: ProductStore) -> Router {
    let auth_state = middleware::AuthState::new(api_key);
    let services = Arc::new(services::AppServices::new(store));

    // Everything under /api requires the shared key, unknown paths included,
    // so the nested fallback sits behind the gate.
    let protected = routes::router()
        .fallback(routes::system::not_found)
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/", get(routes::system::welcome))
        .nest("/api", protected)
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    axum::response::IntoResponse::into_response(errors::ApiError::internal(format!(
        "handler panicked: {detail}"
    )))
}
