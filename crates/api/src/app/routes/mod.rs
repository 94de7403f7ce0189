use axum::Router;

pub mod products;
pub mod system;

/// Router for all authenticated endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}
