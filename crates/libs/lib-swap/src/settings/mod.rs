//! # Swap Settings
//!
//! Dual-mode numeric settings (preset or custom) and the form that saves them.

pub mod field;
pub mod form;
pub mod setting;

pub use field::{FieldMode, InputRules, NumericField, Preset};
pub use form::{
    default_use_versioned_transaction, versioned_tx_notice, CommitOutcome, SettingsOptions, SwapSettingsForm,
};
pub use setting::{Advisory, DualModeSetting, Limit, SettingBounds, SettingKind};
