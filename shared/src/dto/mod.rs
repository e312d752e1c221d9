//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the swap widget core and its collaborators:
//! the token catalog provider and the persisted configuration store.
//!
//! ## Module Organization
//!
//! - [`token`] - Token catalog records, holdings and price snapshots
//! - [`settings`] - The resolved swap configuration written on "Save"
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **Decimals**: Serialize as strings (`"0.5"`) so no value passes through `f64`
//!
//! ## Example Stored Configuration
//!
//! ```text
//! {
//!   "slippage": "0.5",
//!   "priority_fee_in_sol": "0.000005",
//!   "use_versioned_transaction": true,
//!   "token_list_mode": "strict"
//! }
//! ```

pub mod settings;
pub mod token;

pub use settings::*;
pub use token::*;
