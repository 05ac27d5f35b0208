//! Response models for the news API
//!
//! DTOs serialized into HTTP response bodies. Request DTOs arrive with the
//! first real endpoints.

pub mod responses;

pub use responses::HealthResponse;
