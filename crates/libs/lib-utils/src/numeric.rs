//! # Locale-Aware Numeric Text
//!
//! Parsing and rendering of free-form numeric input using the decimal/thousands
//! separator convention of the runtime locale.
//!
//! The convention is a pair of opposite characters: a locale that writes decimals
//! with a comma groups thousands with a period, and vice versa. It is detected once
//! at startup ([`NumberLocale::detect`]) and never re-detected per keystroke.
//!
//! ```rust
//! use lib_utils::numeric::NumberLocale;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let de = NumberLocale::COMMA;
//! assert_eq!(de.parse("1.234,5").unwrap(), Some(Decimal::from_str("1234.5").unwrap()));
//! assert_eq!(de.format(Decimal::from_str("1234.5").unwrap(), 2), "1.234,5");
//! ```

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

/// Digits between two thousands separators.
const GROUP_LEN: usize = 3;

/// Languages whose numbers use a comma as decimal separator.
const COMMA_DECIMAL_LANGUAGES: &[&str] = &[
    "az", "be", "bg", "ca", "cs", "da", "de", "el", "es", "et", "fi", "fr", "hr", "hu", "id",
    "it", "kk", "lt", "lv", "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sr",
    "sv", "tr", "uk", "vi",
];

/// Regions that override their language's convention back to a period.
const PERIOD_DECIMAL_REGIONS: &[&str] = &["CH", "LI"];

/// Decimal and thousands separator pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    decimal: char,
    thousands: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::PERIOD
    }
}

impl NumberLocale {
    /// `1,234.5`
    pub const PERIOD: NumberLocale = NumberLocale { decimal: '.', thousands: ',' };
    /// `1.234,5`
    pub const COMMA: NumberLocale = NumberLocale { decimal: ',', thousands: '.' };

    /// Build from a decimal separator; only `.` and `,` are supported.
    pub fn from_decimal_separator(decimal: char) -> Option<Self> {
        match decimal {
            '.' => Some(Self::PERIOD),
            ',' => Some(Self::COMMA),
            _ => None,
        }
    }

    /// Detect from `LC_ALL`, `LC_NUMERIC` then `LANG`, defaulting to [`Self::PERIOD`].
    pub fn detect() -> Self {
        let tag = ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty());

        match tag {
            Some(tag) => {
                let locale = Self::from_locale_tag(&tag);
                tracing::debug!(%tag, decimal = %locale.decimal, "Detected number locale");
                locale
            }
            None => Self::PERIOD,
        }
    }

    /// Map a POSIX/BCP-47 tag such as `de_DE.UTF-8` or `pt-BR` to its convention.
    pub fn from_locale_tag(tag: &str) -> Self {
        let base = tag.split(['.', '@']).next().unwrap_or_default();
        let mut parts = base.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        if COMMA_DECIMAL_LANGUAGES.contains(&language.as_str())
            && !PERIOD_DECIMAL_REGIONS.contains(&region.as_str())
        {
            Self::COMMA
        } else {
            Self::PERIOD
        }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal
    }

    pub fn thousands_separator(&self) -> char {
        self.thousands
    }

    /// Parse user text into a non-negative decimal.
    ///
    /// Returns `Ok(None)` for text that holds no digits yet (`""`, `"."`), which is
    /// how an input box looks while the user is clearing or starting a value.
    /// Thousands separators are only accepted in the integer part, and every group after
    /// one must hold exactly three digits (`1,234` but not `1,5` or `1234,567`).
    pub fn parse(&self, raw: &str) -> Result<Option<Decimal>, Error> {
        let text = raw.trim();
        if text.starts_with('-') {
            return Err(Error::Negative);
        }

        let mut normalized = String::with_capacity(text.len());
        let mut seen_decimal = false;
        let mut seen_group = false;
        let mut has_digits = false;
        // Integer digits since the start or the last thousands separator.
        let mut run = 0usize;

        for c in text.chars() {
            if c.is_ascii_digit() {
                normalized.push(c);
                has_digits = true;
                if !seen_decimal {
                    run += 1;
                    if seen_group && run > GROUP_LEN {
                        return Err(Error::MalformedSeparator);
                    }
                }
            } else if c == self.decimal {
                if seen_decimal || (seen_group && run != GROUP_LEN) {
                    return Err(Error::MalformedSeparator);
                }
                seen_decimal = true;
                normalized.push('.');
            } else if c == self.thousands {
                let bad_group = if seen_group { run != GROUP_LEN } else { run == 0 || run > GROUP_LEN };
                if seen_decimal || bad_group {
                    return Err(Error::MalformedSeparator);
                }
                seen_group = true;
                run = 0;
            } else {
                return Err(Error::NotNumeric);
            }
        }

        if seen_group && !seen_decimal && run != GROUP_LEN {
            return Err(Error::MalformedSeparator);
        }
        if !has_digits {
            return Ok(None);
        }

        if normalized.starts_with('.') {
            normalized.insert(0, '0');
        }
        if normalized.ends_with('.') {
            normalized.pop();
        }

        Decimal::from_str(&normalized)
            .map(Some)
            .map_err(|_| Error::OutOfRange)
    }

    /// Render a value with grouped thousands and at most `max_scale` fraction digits.
    ///
    /// Trailing fractional zeros are dropped (`0.50` renders as `0.5`).
    pub fn format(&self, value: Decimal, max_scale: u32) -> String {
        let rendered = value.round_dp(max_scale).normalize().to_string();
        let (sign, unsigned) = match rendered.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", rendered.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(self.thousands);
            }
            grouped.push(c);
        }

        match frac_part {
            Some(frac) => format!("{sign}{grouped}{}{frac}", self.decimal),
            None => format!("{sign}{grouped}"),
        }
    }
}

// region:    --- Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Negative,
    NotNumeric,
    MalformedSeparator,
    OutOfRange,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
