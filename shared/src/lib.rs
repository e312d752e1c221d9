//! # Shared Data Transfer Objects Library
//!
//! Types shared by the swap core and its external collaborators (catalog provider,
//! price/holdings providers and the persisted configuration store).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::token`]**: Token records, holdings and price snapshots
//!   - **[`dto::settings`]**: The persisted swap configuration
//! - **[`utils`]**: Address formatting for logs and display
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::{ResolvedConfiguration, Token, TokenListMode};
//!
//! let usdc = Token::new("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "USDC", 6);
//! assert_eq!(usdc.symbol, "USDC");
//!
//! let config = ResolvedConfiguration::default();
//! assert_eq!(config.token_list_mode, TokenListMode::Strict);
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: everything here is public API.
pub use dto::*;
pub use utils::*;
