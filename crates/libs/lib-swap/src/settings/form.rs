//! # Swap Settings Form
//!
//! Slippage, priority fee and the two toggles, seeded from the persisted store and
//! written back in a single `save` call. A form that cannot save performs no write.
//!
//! ```rust
//! use lib_core::model::store::{MemorySettingsStore, SettingsStore};
//! use lib_swap::settings::{CommitOutcome, SettingsOptions, SwapSettingsForm};
//!
//! let store = MemorySettingsStore::new();
//! let mut form = SwapSettingsForm::open(&store, &SettingsOptions::default());
//!
//! form.slippage_mut().set_custom_value("0.8");
//! let outcome = form.commit(&store).unwrap();
//!
//! assert!(matches!(outcome, CommitOutcome::Saved(_)));
//! assert_eq!(store.writes(), 1);
//! ```

use lib_core::config::Config;
use lib_core::error::{AppError, Result};
use lib_core::model::store::SettingsStore;
use lib_utils::{validate_not_empty, validate_unique, validate_within, NumberLocale};
use rust_decimal::Decimal;
use shared::dto::{ResolvedConfiguration, TokenListMode};

use super::setting::DualModeSetting;
use crate::constants::{MAXIMUM_SLIPPAGE, MINIMUM_SLIPPAGE, SLIPPAGE_PRESETS};

/// Versioned transactions are on unless a connected wallet lacks v0 support.
pub fn default_use_versioned_transaction(wallet_supports_v0: Option<bool>) -> bool {
    wallet_supports_v0.unwrap_or(true)
}

/// Line shown under the versioned-transaction toggle when a wallet is connected.
pub fn versioned_tx_notice(wallet_supports_v0: Option<bool>) -> Option<&'static str> {
    match wallet_supports_v0 {
        Some(true) => Some("Your wallet supports Versioned Tx. and it has been turned on by default."),
        Some(false) => Some("Your wallet does not support Versioned Tx."),
        None => None,
    }
}

/// Host inputs that shape the form, beyond the stored values.
#[derive(Debug, Clone)]
pub struct SettingsOptions {
    pub number_locale: NumberLocale,
    pub slippage_presets: Vec<Decimal>,
    /// `None` when no wallet is connected.
    pub wallet_supports_versioned: Option<bool>,
}

impl Default for SettingsOptions {
    fn default() -> Self {
        Self {
            number_locale: NumberLocale::default(),
            slippage_presets: SLIPPAGE_PRESETS.to_vec(),
            wallet_supports_versioned: None,
        }
    }
}

impl SettingsOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            number_locale: config.number_locale,
            slippage_presets: config
                .slippage_presets
                .clone()
                .unwrap_or_else(|| SLIPPAGE_PRESETS.to_vec()),
            wallet_supports_versioned: None,
        }
    }

    /// Replace the slippage presets. They must be non-empty, distinct and within the hard bounds.
    pub fn with_slippage_presets(mut self, presets: Vec<Decimal>) -> Result<Self> {
        let check = || -> std::result::Result<(), String> {
            validate_not_empty(&presets, "slippage presets")?;
            validate_unique(&presets, "slippage presets")?;
            for &preset in &presets {
                validate_within(preset, MINIMUM_SLIPPAGE, MAXIMUM_SLIPPAGE, "slippage preset")?;
            }
            Ok(())
        };
        check().map_err(AppError::InvalidInput)?;

        self.slippage_presets = presets;
        Ok(self)
    }

    pub fn with_wallet_support(mut self, supports_v0: Option<bool>) -> Self {
        self.wallet_supports_versioned = supports_v0;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The configuration that was written.
    Saved(ResolvedConfiguration),
    /// A setting was not committable; nothing was written.
    Blocked,
}

#[derive(Debug, Clone)]
pub struct SwapSettingsForm {
    slippage: DualModeSetting,
    priority_fee: DualModeSetting,
    use_versioned_transaction: bool,
    token_list_mode: TokenListMode,
    wallet_supports_versioned: Option<bool>,
}

impl SwapSettingsForm {
    /// Form seeded from a stored configuration, or from defaults when there is none.
    pub fn from_snapshot(snapshot: Option<ResolvedConfiguration>, options: &SettingsOptions) -> Self {
        let use_versioned_transaction = match &snapshot {
            Some(config) => config.use_versioned_transaction,
            None => default_use_versioned_transaction(options.wallet_supports_versioned),
        };
        let config = snapshot.unwrap_or_default();

        Self {
            slippage: DualModeSetting::slippage(
                Some(config.slippage),
                &options.slippage_presets,
                options.number_locale,
            ),
            priority_fee: DualModeSetting::priority_fee(Some(config.priority_fee_in_sol), options.number_locale),
            use_versioned_transaction,
            token_list_mode: config.token_list_mode,
            wallet_supports_versioned: options.wallet_supports_versioned,
        }
    }

    /// Open the form on the store's current snapshot.
    ///
    /// An unreadable store opens the form on defaults.
    pub fn open(store: &dyn SettingsStore, options: &SettingsOptions) -> Self {
        let snapshot = match store.snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored settings, using defaults");
                None
            }
        };
        Self::from_snapshot(snapshot, options)
    }

    // region:    --- Accessors

    pub fn slippage(&self) -> &DualModeSetting {
        &self.slippage
    }

    pub fn slippage_mut(&mut self) -> &mut DualModeSetting {
        &mut self.slippage
    }

    pub fn priority_fee(&self) -> &DualModeSetting {
        &self.priority_fee
    }

    pub fn priority_fee_mut(&mut self) -> &mut DualModeSetting {
        &mut self.priority_fee
    }

    pub fn use_versioned_transaction(&self) -> bool {
        self.use_versioned_transaction
    }

    pub fn token_list_mode(&self) -> TokenListMode {
        self.token_list_mode
    }

    pub fn versioned_tx_notice(&self) -> Option<&'static str> {
        versioned_tx_notice(self.wallet_supports_versioned)
    }

    // endregion: --- Accessors

    pub fn toggle_versioned_transaction(&mut self) {
        self.use_versioned_transaction = !self.use_versioned_transaction;
    }

    pub fn toggle_strict_token_list(&mut self) {
        self.token_list_mode = self.token_list_mode.toggled();
    }

    /// A newly connected wallet resets the versioned-transaction toggle to match it.
    pub fn set_wallet_support(&mut self, supports_v0: Option<bool>) {
        self.wallet_supports_versioned = supports_v0;
        self.use_versioned_transaction = default_use_versioned_transaction(supports_v0);
    }

    pub fn can_save(&self) -> bool {
        self.slippage.is_committable() && self.priority_fee.is_committable()
    }

    /// The configuration a commit would write, if the form can save.
    pub fn resolve(&self) -> Option<ResolvedConfiguration> {
        if !self.can_save() {
            return None;
        }

        Some(ResolvedConfiguration {
            slippage: self.slippage.resolved_value()?,
            priority_fee_in_sol: self.priority_fee.resolved_value()?,
            use_versioned_transaction: self.use_versioned_transaction,
            token_list_mode: self.token_list_mode,
        })
    }

    /// Write the resolved configuration in one call, or nothing when the form cannot save.
    pub fn commit(&self, store: &dyn SettingsStore) -> Result<CommitOutcome> {
        let Some(config) = self.resolve() else {
            tracing::debug!(
                slippage_ok = self.slippage.is_committable(),
                priority_fee_ok = self.priority_fee.is_committable(),
                "Settings commit blocked"
            );
            return Ok(CommitOutcome::Blocked);
        };

        store.save(&config)?;
        tracing::info!(
            slippage = %config.slippage,
            priority_fee_in_sol = %config.priority_fee_in_sol,
            use_versioned_transaction = config.use_versioned_transaction,
            token_list_mode = ?config.token_list_mode,
            "Swap settings saved"
        );
        Ok(CommitOutcome::Saved(config))
    }

    /// Close without saving.
    pub fn dismiss(self) {
        tracing::debug!("Settings form dismissed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FieldMode;
    use lib_core::model::store::MemorySettingsStore;
    use rust_decimal_macros::dec;

    struct FailingStore;

    impl SettingsStore for FailingStore {
        fn snapshot(&self) -> Result<Option<ResolvedConfiguration>> {
            Err(AppError::Store("unreadable".to_string()))
        }

        fn save(&self, _config: &ResolvedConfiguration) -> Result<()> {
            Err(AppError::Store("read-only".to_string()))
        }
    }

    fn options() -> SettingsOptions {
        SettingsOptions {
            number_locale: NumberLocale::PERIOD,
            ..Default::default()
        }
    }

    #[test]
    fn test_open_empty_store_uses_defaults() {
        let store = MemorySettingsStore::new();
        let form = SwapSettingsForm::open(&store, &options());

        assert_eq!(form.slippage().field().mode(), FieldMode::Preset(0));
        assert_eq!(form.priority_fee().field().mode(), FieldMode::Preset(0));
        assert!(form.use_versioned_transaction());
        assert_eq!(form.token_list_mode(), TokenListMode::Strict);
        assert_eq!(form.resolve(), Some(ResolvedConfiguration::default()));
    }

    #[test]
    fn test_open_unreadable_store_falls_back() {
        let form = SwapSettingsForm::open(&FailingStore, &options());
        assert_eq!(form.resolve(), Some(ResolvedConfiguration::default()));
    }

    #[test]
    fn test_mutual_exclusivity() {
        let store = MemorySettingsStore::new();
        let mut form = SwapSettingsForm::open(&store, &options());

        form.slippage_mut().set_custom_value("2.5");
        form.slippage_mut().select_preset(2);

        let outcome = form.commit(&store).unwrap();
        let CommitOutcome::Saved(config) = outcome else {
            panic!("expected save");
        };
        assert_eq!(config.slippage, dec!(1.0));
    }

    #[test]
    fn test_blocked_commit_writes_nothing() {
        let store = MemorySettingsStore::new();
        let mut form = SwapSettingsForm::open(&store, &options());

        form.priority_fee_mut().focus_custom();
        assert!(!form.can_save());
        assert_eq!(form.commit(&store).unwrap(), CommitOutcome::Blocked);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_out_of_bounds_slippage_blocks() {
        let store = MemorySettingsStore::new();
        let mut form = SwapSettingsForm::open(&store, &options());

        form.slippage_mut().set_custom_value("51");
        assert_eq!(form.commit(&store).unwrap(), CommitOutcome::Blocked);
        assert_eq!(store.writes(), 0);

        form.slippage_mut().set_custom_value("50");
        assert!(matches!(form.commit(&store).unwrap(), CommitOutcome::Saved(_)));
        assert_eq!(store.current().map(|c| c.slippage), Some(dec!(50)));
    }

    #[test]
    fn test_advisory_does_not_block() {
        let store = MemorySettingsStore::new();
        let mut form = SwapSettingsForm::open(&store, &options());

        form.priority_fee_mut().set_custom_value("0.05");
        assert!(form.priority_fee().advisory_message().is_some());
        assert!(form.can_save());
    }

    #[test]
    fn test_round_trip_seeding() {
        let store = MemorySettingsStore::with_config(ResolvedConfiguration {
            slippage: dec!(0.5),
            priority_fee_in_sol: dec!(0.00123),
            use_versioned_transaction: false,
            token_list_mode: TokenListMode::All,
        });
        let form = SwapSettingsForm::open(&store, &options());

        assert_eq!(form.slippage().field().mode(), FieldMode::Preset(1));
        assert_eq!(form.priority_fee().field().mode(), FieldMode::Custom(Some(dec!(0.00123))));
        assert!(!form.use_versioned_transaction());
        assert_eq!(form.token_list_mode(), TokenListMode::All);
        assert_eq!(form.resolve(), store.current());
    }

    #[test]
    fn test_toggles() {
        let store = MemorySettingsStore::new();
        let mut form = SwapSettingsForm::open(&store, &options());

        form.toggle_versioned_transaction();
        form.toggle_strict_token_list();

        let config = form.resolve().unwrap();
        assert!(!config.use_versioned_transaction);
        assert_eq!(config.token_list_mode, TokenListMode::All);
    }

    #[test]
    fn test_store_error_propagates() {
        let form = SwapSettingsForm::from_snapshot(None, &options());
        let err = form.commit(&FailingStore).unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }

    #[test]
    fn test_dismiss_writes_nothing() {
        let store = MemorySettingsStore::new();
        let mut form = SwapSettingsForm::open(&store, &options());
        form.slippage_mut().set_custom_value("3");
        form.dismiss();
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_versioned_default_follows_wallet() {
        assert!(default_use_versioned_transaction(None));
        assert!(default_use_versioned_transaction(Some(true)));
        assert!(!default_use_versioned_transaction(Some(false)));

        let form = SwapSettingsForm::from_snapshot(None, &options().with_wallet_support(Some(false)));
        assert!(!form.use_versioned_transaction());
        assert_eq!(form.versioned_tx_notice(), Some("Your wallet does not support Versioned Tx."));

        let mut form = SwapSettingsForm::from_snapshot(None, &options());
        assert_eq!(form.versioned_tx_notice(), None);
        form.set_wallet_support(Some(false));
        assert!(!form.use_versioned_transaction());
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            slippage_presets: Some(vec![dec!(0.3), dec!(3)]),
            number_locale: NumberLocale::COMMA,
            ..Default::default()
        };
        let options = SettingsOptions::from_config(&config);
        assert_eq!(options.slippage_presets, vec![dec!(0.3), dec!(3)]);

        let form = SwapSettingsForm::from_snapshot(None, &options);
        // Default 0.1 is not a configured preset.
        assert_eq!(form.slippage().field().mode(), FieldMode::Custom(Some(dec!(0.1))));
        assert_eq!(form.slippage().field().presets()[0].label, "0,3%");
    }

    #[test]
    fn test_invalid_slippage_presets_are_rejected() {
        for presets in [vec![], vec![dec!(0.5), dec!(0.50)], vec![dec!(1), dec!(60)]] {
            let err = options().with_slippage_presets(presets).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }

        let options = options().with_slippage_presets(vec![dec!(0.2), dec!(2)]).unwrap();
        let form = SwapSettingsForm::from_snapshot(None, &options);
        assert_eq!(form.slippage().field().presets().len(), 2);
    }
}
