//! # Shared Utility Functions
//!
//! Display helpers for token mint addresses.
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let mint = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
//! assert_eq!(format_address(mint, 4, 4), "EPjF...Dt1v");
//! ```

/// Show the first `head` and last `tail` characters of an address joined by `...`.
///
/// Addresses too short to shorten are returned unchanged. Works on chars, so
/// non-ASCII input never splits a code point.
pub fn format_address(address: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= head + tail {
        return address.to_string();
    }

    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{start}...{end}")
}

/// [`format_address`] with four characters on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let mint = "So11111111111111111111111111111111111111112";
        assert_eq!(format_address(mint, 4, 4), "So11...1112");
        assert_eq!(format_address(mint, 2, 3), "So...112");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("SOL", 4, 4), "SOL");
        assert_eq!(format_address("abcdefgh", 4, 4), "abcdefgh");
    }

    #[test]
    fn test_format_address_multibyte() {
        assert_eq!(format_address("ééééééééé", 1, 1), "é...é");
    }
}
