//! # Swap Library
//!
//! Token picker ranking, the virtualized list contract, and the swap settings form
//! (slippage, priority fee, versioned transactions, token list mode).
//!
//! Providers are passed in explicitly: the catalog as a slice of tokens, holdings and
//! prices as maps keyed by mint address, and a [`SettingsStore`](lib_core::SettingsStore)
//! for persistence.

pub mod constants;
pub mod ranker;
pub mod settings;
pub mod window;

// Re-export commonly used types from root for convenience
pub use ranker::{rank, TokenRanker};
pub use settings::{CommitOutcome, DualModeSetting, NumericField, SettingsOptions, SwapSettingsForm};
pub use window::{ListWindow, TokenListView};
