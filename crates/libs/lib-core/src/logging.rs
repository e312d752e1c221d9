//! # Logging Initialization
//!
//! Installs the global `tracing` subscriber for a host embedding the swap core.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from
//! [`Config::log_filter`](crate::config::Config::log_filter). Output goes to stderr,
//! either as human-readable lines or as JSON (`SWAP_LOG_JSON=true`).

use crate::config::Config;
use crate::error::{AppError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Fallback filter when both `RUST_LOG` and the configured directive fail to parse.
const FALLBACK_FILTER: &str = "lib_swap=info,warn";

/// Build the filter: `RUST_LOG` first, then the configured directive.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Initialize the logging system.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if a global subscriber is already installed.
pub fn try_init(config: &Config) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = if config.log_json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| AppError::Internal(format!("Failed to install tracing subscriber: {}", e)))?;
    tracing::debug!(json = config.log_json, "Logging initialized");
    Ok(())
}

/// Initialize logging, ignoring an already-installed subscriber.
pub fn init(config: &Config) {
    if let Err(e) = try_init(config) {
        eprintln!("Warning: {}", e);
    }
}
