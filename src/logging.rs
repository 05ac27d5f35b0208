//! Logging Module
//!
//! Builds the global tracing subscriber from [`LoggingConfig`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Installs the global tracing subscriber.
///
/// The filter honors `RUST_LOG` when set; otherwise the configured level
/// applies to this crate and `tower_http`. Output is JSON by default
/// ("text" switches to the human-readable formatter) and goes to stdout
/// unless `output` is "stderr".
///
/// Must be called at most once per process.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("newswire={0},tower_http={0}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    let to_stderr = config.output == "stderr";

    match (config.format.as_str(), to_stderr) {
        ("text", false) => registry.with(tracing_subscriber::fmt::layer()).init(),
        ("text", true) => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        (_, false) => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        (_, true) => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
