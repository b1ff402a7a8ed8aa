//! # HTTP Server Module
//!
//! Thin axum transport over the record service.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/v1/airplane` - Create
//! - `/v1/airplane/:id` - Read, update destination, delete

pub mod airplane_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
