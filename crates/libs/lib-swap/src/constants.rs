//! # Swap Widget Constants
//!
//! Preset values, advisory thresholds and list geometry for the token picker and
//! the swap settings form.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// region:    --- Token picker

/// Tokens ranked ahead of the rest when nothing else separates them.
pub const PAIR_SELECTOR_TOP_TOKENS: &[&str] = &[
    "So11111111111111111111111111111111111111112",  // SOL
    "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", // USDC
    "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", // USDT
    "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN",  // JUP
    "mSoLzYCxHdYgdzU16g5QSh3i5K3z3KZK7ytfqcJm7So",  // mSOL
    "7dHbWXmci3dT8UFYWYZweBLXgycu7Y3iL6trKn1Y7ARj", // stSOL
    "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", // BONK
    "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R", // RAY
    "orcaEKTdK7LKz57vaAYr9QeNsVEPfiu6QeMU1kektZE",  // ORCA
];

/// Height of one token row, in logical pixels.
pub const PAIR_ROW_HEIGHT: f32 = 72.0;

// endregion: --- Token picker

// region:    --- Slippage

pub use shared::dto::{DEFAULT_SLIPPAGE, MAXIMUM_SLIPPAGE, MINIMUM_SLIPPAGE};

/// Default slippage presets, in percent.
pub const SLIPPAGE_PRESETS: &[Decimal] = &[DEFAULT_SLIPPAGE, dec!(0.5), dec!(1.0)];

/// At or below this the swap may fail to execute.
pub const MINIMUM_SUGGESTED_SLIPPAGE: Decimal = dec!(0.05);

/// At or above this the user risks overpaying.
pub const MAXIMUM_SUGGESTED_SLIPPAGE: Decimal = dec!(10);

/// Typed slippage above this is refused at the keystroke.
pub const SLIPPAGE_INPUT_CAP: Decimal = dec!(100);

pub const SLIPPAGE_DECIMAL_SCALE: u32 = 2;

// endregion: --- Slippage

// region:    --- Priority fee

pub const PRIORITY_NONE: Decimal = dec!(0);
pub const PRIORITY_HIGH: Decimal = dec!(0.000005);
pub const PRIORITY_TURBO: Decimal = dec!(0.0005);

/// Priority fee presets with their display names.
pub const PRIORITY_PRESETS: &[(Decimal, &str)] = &[
    (PRIORITY_NONE, "Normal"),
    (PRIORITY_HIGH, "High"),
    (PRIORITY_TURBO, "Turbo"),
];

/// Above this the form warns, without blocking the save.
pub const PRIORITY_MAXIMUM_SUGGESTED: Decimal = dec!(0.01);

/// Lamport precision.
pub const PRIORITY_DECIMAL_SCALE: u32 = 9;

pub const PRIORITY_INPUT_MAX_LENGTH: usize = 12;

// endregion: --- Priority fee
