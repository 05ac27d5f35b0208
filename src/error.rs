//! Error types for the news API bootstrap.
//!
//! Startup wiring is the only fallible surface: configuration loading and
//! the database opener. The cache itself has no error states.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),
}
