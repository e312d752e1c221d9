//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the swap core crates.
//! It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Setup Errors** - misconfiguration at startup
//!    - [`Config`](AppError::Config)
//!    - [`Internal`](AppError::Internal)
//!
//! 2. **Persistence Errors** - the configuration store could not be read or written
//!    - [`Store`](AppError::Store)
//!    - [`Encoding`](AppError::Encoding) / [`Decoding`](AppError::Decoding)
//!
//! 3. **Input Errors**
//!    - [`InvalidInput`](AppError::InvalidInput)
//!
//! Field-level numeric input errors never become an `AppError`: the settings form
//! rejects them silently and keeps the previous valid state.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_mode(mode: &str) -> Result<bool> {
//!     match mode {
//!         "strict" => Ok(true),
//!         "all" => Ok(false),
//!         other => Err(AppError::InvalidInput(format!("Unknown token list mode: {}", other))),
//!     }
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type covering every failure the swap core can report.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persisted configuration store could not be read or written.
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization failure while writing the store.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Stored data could not be parsed.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid caller input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// Setup and encoding failures return a generic message to avoid exposing
    /// implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Store(_) | AppError::Decoding(_) => "Could not save or load your settings".to_string(),
            AppError::Config(_) | AppError::Encoding(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }
}

/// Convert `std::io::Error` to `AppError`.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            AppError::Store(format!("JSON I/O error: {}", err))
        } else {
            AppError::Decoding(format!("JSON error: {}", err))
        }
    }
}
