//! # Token Catalog DTOs
//!
//! Token records as supplied by the catalog provider, plus the holdings and price
//! snapshots the ranker reads.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "address": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
//!   "symbol": "USDC",
//!   "decimals": 6,
//!   "name": "USD Coin"
//! }
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Token mint address (base58 string).
pub type TokenAddress = String;

/// Balances held by the connected wallet, keyed by mint address.
///
/// Absence of a key means "not held". A present key with a zero balance is still
/// a holding (the account exists).
pub type HoldingsMap = HashMap<TokenAddress, Decimal>;

/// USD unit prices keyed by mint address. Missing entries mean "no price known".
pub type PriceMap = HashMap<TokenAddress, Decimal>;

/// Token identity record from the catalog.
///
/// Immutable once fetched. Only `address`, `symbol` and `decimals` take part in
/// ranking and search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Token {
    pub address: TokenAddress,
    pub symbol: String,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl Token {
    pub fn new(address: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
            name: None,
            logo_uri: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Case-insensitive substring match on the symbol.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn symbol_matches(&self, needle_lower: &str) -> bool {
        self.symbol.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, crate::utils::truncate_address(&self.address))
    }
}
