//! API Module
//!
//! HTTP handlers and routing for the news API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
