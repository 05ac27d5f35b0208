//! Newswire - news aggregation API bootstrap
//!
//! Configuration, logging, database pool, a placeholder HTTP server with a
//! health check, and an in-memory expiring cache for computed responses.

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::MemoryCache;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
