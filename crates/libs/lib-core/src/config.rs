//! # Application Configuration
//!
//! This module manages configuration loaded from environment variables (and an
//! optional `.env` file). All configuration is validated on startup to fail fast if
//! misconfigured.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SWAP_LOG_FILTER` | `lib_swap=info,lib_core=info,warn` | `tracing` filter directive |
//! | `SWAP_LOG_JSON` | `false` | JSON log lines instead of text |
//! | `SWAP_SETTINGS_PATH` | `./swap-settings.json` | File used by the JSON settings store |
//! | `SWAP_DECIMAL_SEPARATOR` | detected from locale | `.` or `,` |
//! | `SWAP_TOP_TOKENS` | built-in list | Comma-separated mint addresses ranked first |
//! | `SWAP_SLIPPAGE_PRESETS` | `0.1,0.5,1.0` | Comma-separated slippage presets in percent |
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let locale = core_config().number_locale;
//! ```
//!
//! The config must be initialized once at application startup using [`init_config()`].

use crate::error::AppError;
use lib_utils::{get_env_list, get_env_opt, get_env_parse, NumberLocale};
use rust_decimal::Decimal;
use shared::dto::{MAXIMUM_SLIPPAGE, MINIMUM_SLIPPAGE};
use std::path::PathBuf;
use std::sync::OnceLock;

const DEFAULT_LOG_FILTER: &str = "lib_swap=info,lib_core=info,warn";
const DEFAULT_SETTINGS_PATH: &str = "./swap-settings.json";

/// Configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Emit JSON log lines.
    pub log_json: bool,

    /// Location of the JSON settings file.
    pub settings_path: PathBuf,

    /// Decimal/thousands separator convention, detected once at startup.
    pub number_locale: NumberLocale,

    /// Override for the curated top-token allow-list.
    pub top_tokens: Option<Vec<String>>,

    /// Override for the slippage presets, in percent.
    pub slippage_presets: Option<Vec<Decimal>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            number_locale: NumberLocale::default(),
            top_tokens: None,
            slippage_presets: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is fine; real environment variables still apply.
        dotenvy::dotenv().ok();

        let log_filter = get_env_opt("SWAP_LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_json = get_env_parse::<bool>("SWAP_LOG_JSON")
            .map_err(|e| format!("SWAP_LOG_JSON must be true or false: {}", e))?
            .unwrap_or(false);

        let settings_path = get_env_opt("SWAP_SETTINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

        let number_locale = match get_env_parse::<char>("SWAP_DECIMAL_SEPARATOR")
            .map_err(|e| format!("SWAP_DECIMAL_SEPARATOR must be a single character: {}", e))?
        {
            Some(separator) => NumberLocale::from_decimal_separator(separator)
                .ok_or_else(|| format!("SWAP_DECIMAL_SEPARATOR must be '.' or ',', got '{}'", separator))?,
            None => NumberLocale::detect(),
        };

        let top_tokens = get_env_list::<String>("SWAP_TOP_TOKENS")
            .map_err(|e| format!("SWAP_TOP_TOKENS is malformed: {}", e))?;

        let slippage_presets = get_env_list::<Decimal>("SWAP_SLIPPAGE_PRESETS")
            .map_err(|e| format!("SWAP_SLIPPAGE_PRESETS must be comma-separated numbers: {}", e))?;

        Ok(Self {
            log_filter,
            log_json,
            settings_path,
            number_locale,
            top_tokens,
            slippage_presets,
        })
    }

    /// Validate configuration values against the swap settings rules.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(presets) = &self.slippage_presets {
            lib_utils::validate_not_empty(presets, "SWAP_SLIPPAGE_PRESETS")?;
            lib_utils::validate_unique(presets, "SWAP_SLIPPAGE_PRESETS")?;
            for preset in presets {
                lib_utils::validate_within(*preset, MINIMUM_SLIPPAGE, MAXIMUM_SLIPPAGE, "SWAP_SLIPPAGE_PRESETS")?;
            }
        }

        if let Some(tokens) = &self.top_tokens {
            lib_utils::validate_not_empty(tokens, "SWAP_TOP_TOKENS")?;
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> crate::error::Result<()> {
    let config = Config::from_env().map_err(AppError::Config)?;
    config.validate().map_err(AppError::Config)?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG.get().expect("Config must be initialized with init_config() before use")
}
