//! # Numeric Field
//!
//! A value that is either one of a fixed set of presets or a free-form custom entry.
//! Exactly one of the two is live: selecting a preset clears the custom value and
//! typing a custom value deselects the preset.
//!
//! Invalid keystrokes (non-numeric, negative, malformed separators, too many decimals,
//! over the input cap) are refused: the field keeps its previous state.

use lib_utils::NumberLocale;
use rust_decimal::Decimal;

/// A predefined one-click value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub value: Decimal,
    pub label: String,
}

impl Preset {
    pub fn new(value: Decimal, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Which input is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// Index into the field's presets.
    Preset(usize),
    /// Free-form value; `None` while the input box is empty.
    Custom(Option<Decimal>),
}

/// Keystroke-level limits for the custom input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRules {
    /// Maximum fraction digits.
    pub decimal_scale: u32,
    /// Values above this are refused while typing.
    pub max_input: Option<Decimal>,
    /// Maximum characters in the input box.
    pub max_length: Option<usize>,
    /// Display suffix the input may carry (`%`).
    pub suffix: Option<char>,
}

#[derive(Debug, Clone)]
pub struct NumericField {
    presets: Vec<Preset>,
    mode: FieldMode,
    focused: bool,
    rules: InputRules,
    locale: NumberLocale,
}

impl NumericField {
    /// Untouched field: no preset, no custom value.
    pub fn new(presets: Vec<Preset>, rules: InputRules, locale: NumberLocale) -> Self {
        Self {
            presets,
            mode: FieldMode::Custom(None),
            focused: false,
            rules,
            locale,
        }
    }

    /// Field seeded from a persisted value.
    ///
    /// An exact preset match starts in preset mode; any other value starts in custom
    /// mode with that value and the custom input focused. No value starts with an
    /// empty, focused custom input.
    pub fn seeded(presets: Vec<Preset>, rules: InputRules, locale: NumberLocale, initial: Option<Decimal>) -> Self {
        let mut field = Self::new(presets, rules, locale);
        match initial {
            Some(value) => match field.preset_index(value) {
                Some(index) => field.mode = FieldMode::Preset(index),
                None => {
                    field.mode = FieldMode::Custom(Some(value));
                    field.focused = true;
                }
            },
            None => field.focused = true,
        }
        field
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    pub fn locale(&self) -> NumberLocale {
        self.locale
    }

    pub fn rules(&self) -> InputRules {
        self.rules
    }

    /// The custom input has been focused since the last preset selection.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.mode, FieldMode::Custom(_))
    }

    pub fn custom_value(&self) -> Option<Decimal> {
        match self.mode {
            FieldMode::Custom(value) => value,
            FieldMode::Preset(_) => None,
        }
    }

    pub fn selected_preset(&self) -> Option<&Preset> {
        match self.mode {
            FieldMode::Preset(index) => self.presets.get(index),
            FieldMode::Custom(_) => None,
        }
    }

    /// Whether preset `index` should render as selected.
    pub fn is_preset_highlighted(&self, index: usize) -> bool {
        !self.focused && self.mode == FieldMode::Preset(index)
    }

    /// Select preset `index`, clearing any custom value. Unknown indices are ignored.
    pub fn select_preset(&mut self, index: usize) -> bool {
        if index >= self.presets.len() {
            tracing::debug!(index, "Ignoring unknown preset index");
            return false;
        }
        self.mode = FieldMode::Preset(index);
        self.focused = false;
        true
    }

    /// Select the preset whose value equals `value`.
    pub fn select_preset_value(&mut self, value: Decimal) -> bool {
        match self.preset_index(value) {
            Some(index) => self.select_preset(index),
            None => false,
        }
    }

    /// The user focused the custom input.
    pub fn focus_custom(&mut self) {
        self.focused = true;
        if !self.is_custom() {
            self.mode = FieldMode::Custom(None);
        }
    }

    /// Apply the text of the custom input. Returns `false` if the text was refused.
    ///
    /// Empty text clears the custom value. Accepted text switches to custom mode.
    pub fn set_custom_value(&mut self, raw: &str) -> bool {
        let mut text = raw.trim();
        if let Some(suffix) = self.rules.suffix {
            text = text.strip_suffix(suffix).unwrap_or(text).trim_end();
        }

        if let Some(max_length) = self.rules.max_length {
            if text.chars().count() > max_length {
                tracing::debug!(max_length, "Refused custom input: too long");
                return false;
            }
        }

        let value = match self.locale.parse(text) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Refused custom input");
                return false;
            }
        };

        if let Some(value) = value {
            if value.scale() > self.rules.decimal_scale {
                tracing::debug!(scale = value.scale(), "Refused custom input: too many decimals");
                return false;
            }
            if self.rules.max_input.is_some_and(|max| value > max) {
                tracing::debug!(%value, "Refused custom input: above input cap");
                return false;
            }
        }

        self.mode = FieldMode::Custom(value);
        self.focused = true;
        true
    }

    /// Custom value if custom mode, preset value if preset mode.
    pub fn resolved_value(&self) -> Option<Decimal> {
        match self.mode {
            FieldMode::Preset(index) => self.presets.get(index).map(|preset| preset.value),
            FieldMode::Custom(value) => value,
        }
    }

    /// Text for the custom input box, rendered in the field's locale.
    pub fn custom_text(&self) -> String {
        self.custom_value()
            .map(|value| self.locale.format(value, self.rules.decimal_scale))
            .unwrap_or_default()
    }

    fn preset_index(&self, value: Decimal) -> Option<usize> {
        self.presets.iter().position(|preset| preset.value == value)
    }
}
