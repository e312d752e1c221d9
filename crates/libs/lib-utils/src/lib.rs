//! # Utilities Library
//!
//! Shared utility functions for environment variables, locale-aware numeric text and
//! validation.

pub mod envs;
pub mod numeric;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_list, get_env_opt, get_env_parse};
pub use numeric::NumberLocale;
pub use validation::{validate_not_empty, validate_unique, validate_within};
