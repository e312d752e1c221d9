//! # Swap Settings DTOs
//!
//! [`ResolvedConfiguration`] is the only state that crosses from the settings form into
//! the persisted configuration store. It is produced atomically by the commit policy:
//! either all four fields are written together or none are.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Default slippage tolerance in percent.
pub const DEFAULT_SLIPPAGE: Decimal = dec!(0.1);

/// Default priority fee in SOL (no priority).
pub const DEFAULT_PRIORITY_FEE_IN_SOL: Decimal = dec!(0);

/// Hard lower bound for slippage, in percent.
pub const MINIMUM_SLIPPAGE: Decimal = dec!(0);

/// Hard upper bound for slippage, in percent.
pub const MAXIMUM_SLIPPAGE: Decimal = dec!(50);

/// Which token catalog the picker shows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenListMode {
    /// Smaller set of validated tokens.
    #[default]
    Strict,
    /// Every token the catalog knows about.
    All,
}

impl TokenListMode {
    pub fn toggled(self) -> Self {
        match self {
            TokenListMode::Strict => TokenListMode::All,
            TokenListMode::All => TokenListMode::Strict,
        }
    }
}

/// Swap configuration persisted on "Save".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    /// Slippage tolerance in percent (`0.5` means 0.5%).
    pub slippage: Decimal,
    /// Priority fee paid to the network, in SOL.
    pub priority_fee_in_sol: Decimal,
    /// `false` means legacy transactions.
    pub use_versioned_transaction: bool,
    pub token_list_mode: TokenListMode,
}

impl Default for ResolvedConfiguration {
    fn default() -> Self {
        Self {
            slippage: DEFAULT_SLIPPAGE,
            priority_fee_in_sol: DEFAULT_PRIORITY_FEE_IN_SOL,
            use_versioned_transaction: true,
            token_list_mode: TokenListMode::Strict,
        }
    }
}
