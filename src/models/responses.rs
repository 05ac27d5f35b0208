//! Response DTOs for the news API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status, "ok" while the process is serving
    pub status: String,
    /// Human-readable status line
    pub message: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a healthy response with the current timestamp.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "newswire API is running".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
