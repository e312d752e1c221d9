//! # Dual-Mode Setting
//!
//! A [`NumericField`] plus the hard bounds that gate saving and the soft thresholds
//! that only produce a warning. Slippage and priority fee are the two instances.

use lib_utils::NumberLocale;
use rust_decimal::Decimal;

use super::field::{FieldMode, InputRules, NumericField, Preset};
use crate::constants::{
    MAXIMUM_SLIPPAGE, MAXIMUM_SUGGESTED_SLIPPAGE, MINIMUM_SLIPPAGE, MINIMUM_SUGGESTED_SLIPPAGE,
    PRIORITY_DECIMAL_SCALE, PRIORITY_INPUT_MAX_LENGTH, PRIORITY_MAXIMUM_SUGGESTED, PRIORITY_PRESETS,
    SLIPPAGE_DECIMAL_SCALE, SLIPPAGE_INPUT_CAP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Percent.
    Slippage,
    /// SOL.
    PriorityFee,
}

/// How a soft threshold is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Triggers at the threshold.
    Inclusive(Decimal),
    /// Triggers past the threshold.
    Exclusive(Decimal),
}

impl Limit {
    fn below(self, value: Decimal) -> bool {
        match self {
            Limit::Inclusive(limit) => value <= limit,
            Limit::Exclusive(limit) => value < limit,
        }
    }

    fn above(self, value: Decimal) -> bool {
        match self {
            Limit::Inclusive(limit) => value >= limit,
            Limit::Exclusive(limit) => value > limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingBounds {
    /// Inclusive hard minimum.
    pub min: Decimal,
    /// Inclusive hard maximum; `None` is unbounded.
    pub max: Option<Decimal>,
    pub suggested_min: Option<Limit>,
    pub suggested_max: Option<Limit>,
}

impl SettingBounds {
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// Soft warning for a value that is allowed but probably unintended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Advisory {
    #[default]
    None,
    TooLow,
    TooHigh,
}

#[derive(Debug, Clone)]
pub struct DualModeSetting {
    kind: SettingKind,
    field: NumericField,
    bounds: SettingBounds,
}

impl DualModeSetting {
    /// Slippage setting seeded from the persisted percentage.
    pub fn slippage(persisted: Option<Decimal>, presets: &[Decimal], locale: NumberLocale) -> Self {
        let presets = presets
            .iter()
            .map(|&value| Preset::new(value, format!("{}%", locale.format(value, SLIPPAGE_DECIMAL_SCALE))))
            .collect();
        let rules = InputRules {
            decimal_scale: SLIPPAGE_DECIMAL_SCALE,
            max_input: Some(SLIPPAGE_INPUT_CAP),
            max_length: None,
            suffix: Some('%'),
        };
        let bounds = SettingBounds {
            min: MINIMUM_SLIPPAGE,
            max: Some(MAXIMUM_SLIPPAGE),
            suggested_min: Some(Limit::Inclusive(MINIMUM_SUGGESTED_SLIPPAGE)),
            suggested_max: Some(Limit::Inclusive(MAXIMUM_SUGGESTED_SLIPPAGE)),
        };

        Self {
            kind: SettingKind::Slippage,
            field: NumericField::seeded(presets, rules, locale, persisted),
            bounds,
        }
    }

    /// Priority fee setting seeded from the persisted amount in SOL.
    pub fn priority_fee(persisted: Option<Decimal>, locale: NumberLocale) -> Self {
        let presets = PRIORITY_PRESETS
            .iter()
            .map(|&(value, label)| Preset::new(value, label))
            .collect();
        let rules = InputRules {
            decimal_scale: PRIORITY_DECIMAL_SCALE,
            max_input: None,
            max_length: Some(PRIORITY_INPUT_MAX_LENGTH),
            suffix: None,
        };
        let bounds = SettingBounds {
            min: Decimal::ZERO,
            max: None,
            suggested_min: None,
            suggested_max: Some(Limit::Exclusive(PRIORITY_MAXIMUM_SUGGESTED)),
        };

        Self {
            kind: SettingKind::PriorityFee,
            field: NumericField::seeded(presets, rules, locale, persisted),
            bounds,
        }
    }

    pub fn kind(&self) -> SettingKind {
        self.kind
    }

    pub fn bounds(&self) -> SettingBounds {
        self.bounds
    }

    pub fn field(&self) -> &NumericField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut NumericField {
        &mut self.field
    }

    // region:    --- Field passthrough

    pub fn select_preset(&mut self, index: usize) -> bool {
        self.field.select_preset(index)
    }

    pub fn focus_custom(&mut self) {
        self.field.focus_custom()
    }

    pub fn set_custom_value(&mut self, raw: &str) -> bool {
        self.field.set_custom_value(raw)
    }

    pub fn resolved_value(&self) -> Option<Decimal> {
        self.field.resolved_value()
    }

    // endregion: --- Field passthrough

    /// Resolved value within the hard bounds. No value is not within bounds.
    pub fn is_within_hard_bounds(&self) -> bool {
        self.resolved_value().is_some_and(|value| self.bounds.contains(value))
    }

    pub fn advisory(&self) -> Advisory {
        let Some(value) = self.resolved_value() else {
            return Advisory::None;
        };

        if self.bounds.suggested_min.is_some_and(|limit| limit.below(value)) {
            Advisory::TooLow
        } else if self.bounds.suggested_max.is_some_and(|limit| limit.above(value)) {
            Advisory::TooHigh
        } else {
            Advisory::None
        }
    }

    /// Whether this setting allows the form to save.
    ///
    /// Presets always pass. A custom value must be present and within the hard bounds.
    pub fn is_committable(&self) -> bool {
        match self.field.mode() {
            FieldMode::Preset(_) => true,
            FieldMode::Custom(None) => false,
            FieldMode::Custom(Some(value)) => self.bounds.contains(value),
        }
    }

    /// Message shown when a custom value falls outside the hard bounds.
    pub fn bounds_message(&self) -> Option<String> {
        if !self.field.is_custom() || self.resolved_value().is_none() || self.is_within_hard_bounds() {
            return None;
        }

        let locale = self.field.locale();
        let scale = self.field.rules().decimal_scale;
        let message = match (self.kind, self.bounds.max) {
            (SettingKind::Slippage, Some(max)) => format!(
                "Please set a slippage value that is within {}% to {}%",
                locale.format(self.bounds.min, scale),
                locale.format(max, scale)
            ),
            (SettingKind::Slippage, None) => format!(
                "Please set a slippage value of at least {}%",
                locale.format(self.bounds.min, scale)
            ),
            (SettingKind::PriorityFee, _) => format!(
                "Please set a priority fee of at least {} SOL",
                locale.format(self.bounds.min, scale)
            ),
        };
        Some(message)
    }

    pub fn advisory_message(&self) -> Option<String> {
        let locale = self.field.locale();
        let scale = self.field.rules().decimal_scale;
        match (self.kind, self.advisory()) {
            (_, Advisory::None) => None,
            (SettingKind::Slippage, Advisory::TooLow) => Some("Your transaction may fail".to_string()),
            (SettingKind::Slippage, Advisory::TooHigh) => Some("Warning, slippage is high".to_string()),
            (SettingKind::PriorityFee, Advisory::TooHigh) => Some(format!(
                "Warning, max priority fee is over the suggested amount of {} SOL.",
                locale.format(PRIORITY_MAXIMUM_SUGGESTED, scale)
            )),
            (SettingKind::PriorityFee, Advisory::TooLow) => None,
        }
    }

    /// Extra cost line for a non-zero custom priority fee.
    pub fn cost_notice(&self) -> Option<String> {
        if self.kind != SettingKind::PriorityFee {
            return None;
        }
        match self.field.custom_value() {
            Some(value) if !value.is_zero() => Some(format!(
                "This will cost an additional {} SOL.",
                self.field.locale().format(value, PRIORITY_DECIMAL_SCALE)
            )),
            _ => None,
        }
    }
}
