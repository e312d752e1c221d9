//! # Core Library
//!
//! Configuration, error type, logging and the persisted settings store shared by the
//! swap core crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{JsonFileSettingsStore, MemorySettingsStore, SettingsStore};
