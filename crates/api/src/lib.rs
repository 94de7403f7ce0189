//! HTTP API: server, routing, and request/response mapping for the product catalog.

pub mod app;
pub mod config;
pub mod middleware;
pub mod validation;
