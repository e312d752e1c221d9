//! # Token Ranker
//!
//! Orders the token catalog for the token picker and applies the search filter.
//!
//! ## Ordering
//!
//! 1. Held tokens (present in the holdings map) before unheld ones.
//! 2. Among held tokens, higher USD value (`price × balance`) first when both have a
//!    price, otherwise higher raw balance first.
//! 3. Curated top tokens before the rest.
//! 4. Catalog order.
//!
//! The search term filters the ranked list afterwards (case-insensitive substring on
//! the symbol) and never reorders it.
//!
//! ## Example
//!
//! ```rust
//! use lib_swap::ranker::rank;
//! use rust_decimal_macros::dec;
//! use shared::dto::{HoldingsMap, PriceMap, Token};
//!
//! let catalog = vec![
//!     Token::new("mint-a", "AAA", 6),
//!     Token::new("mint-b", "BBB", 6),
//! ];
//! let holdings = HoldingsMap::from([("mint-b".to_string(), dec!(3))]);
//!
//! let ranked = rank(&catalog, &holdings, &PriceMap::new(), "");
//! assert_eq!(ranked[0].symbol, "BBB");
//! ```

use lib_core::Config;
use rust_decimal::Decimal;
use shared::dto::{HoldingsMap, PriceMap, Token};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::constants::PAIR_SELECTOR_TOP_TOKENS;

/// Per-token sort key, computed once per ranking run.
#[derive(Debug, Clone, Copy)]
struct RankEntry {
    index: usize,
    holding: Option<Holding>,
    top: bool,
}

#[derive(Debug, Clone, Copy)]
struct Holding {
    balance: Decimal,
    value: Option<Decimal>,
}

/// Ranks a token catalog against holdings and prices.
#[derive(Debug, Clone)]
pub struct TokenRanker {
    top_tokens: HashSet<String>,
}

impl Default for TokenRanker {
    fn default() -> Self {
        Self::new(PAIR_SELECTOR_TOP_TOKENS.iter().copied())
    }
}

impl TokenRanker {
    pub fn new<I, S>(top_tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            top_tokens: top_tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Ranker using the configured top-token list, or the built-in one.
    pub fn from_config(config: &Config) -> Self {
        match &config.top_tokens {
            Some(tokens) => Self::new(tokens.iter().cloned()),
            None => Self::default(),
        }
    }

    pub fn is_top_token(&self, address: &str) -> bool {
        self.top_tokens.contains(address)
    }

    /// Rank and filter, returning references into `catalog`.
    pub fn rank<'a>(
        &self,
        catalog: &'a [Token],
        holdings: &HoldingsMap,
        prices: &PriceMap,
        search_term: &str,
    ) -> Vec<&'a Token> {
        self.rank_indices(catalog, holdings, prices, search_term)
            .into_iter()
            .map(|index| &catalog[index])
            .collect()
    }

    /// Rank and filter, returning positions in `catalog`.
    pub fn rank_indices(
        &self,
        catalog: &[Token],
        holdings: &HoldingsMap,
        prices: &PriceMap,
        search_term: &str,
    ) -> Vec<usize> {
        let mut entries: Vec<RankEntry> = catalog
            .iter()
            .enumerate()
            .map(|(index, token)| self.entry(index, token, holdings, prices))
            .collect();
        let held = entries.iter().filter(|e| e.holding.is_some()).count();

        merge_sort_by(&mut entries, compare_entries);

        let needle = search_term.to_lowercase();
        let ranked: Vec<usize> = entries
            .into_iter()
            .map(|entry| entry.index)
            .filter(|&index| needle.is_empty() || catalog[index].symbol_matches(&needle))
            .collect();

        tracing::debug!(
            catalog = catalog.len(),
            held,
            results = ranked.len(),
            search = %search_term,
            "Ranked token list"
        );
        ranked
    }

    fn entry(&self, index: usize, token: &Token, holdings: &HoldingsMap, prices: &PriceMap) -> RankEntry {
        let holding = holdings.get(&token.address).map(|&balance| Holding {
            balance,
            value: prices
                .get(&token.address)
                .map(|price| price.checked_mul(balance).unwrap_or(Decimal::MAX)),
        });

        RankEntry {
            index,
            holding,
            top: self.is_top_token(&token.address),
        }
    }
}

/// Rank with the built-in top-token list.
pub fn rank<'a>(catalog: &'a [Token], holdings: &HoldingsMap, prices: &PriceMap, search_term: &str) -> Vec<&'a Token> {
    TokenRanker::default().rank(catalog, holdings, prices, search_term)
}

fn compare_entries(a: &RankEntry, b: &RankEntry) -> Ordering {
    match (&a.holding, &b.holding) {
        (Some(held_a), Some(held_b)) => {
            let by_holding = match (held_a.value, held_b.value) {
                (Some(value_a), Some(value_b)) => value_b.cmp(&value_a),
                _ => held_b.balance.cmp(&held_a.balance),
            };
            by_holding.then_with(|| b.top.cmp(&a.top))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.top.cmp(&a.top),
    }
}

/// Stable bottom-up merge sort.
///
/// The value/balance comparator is not transitive when priced and unpriced holdings
/// mix, and `slice::sort_by` may panic on such comparators. This never does and
/// always yields the same order for the same input.
fn merge_sort_by<T: Copy>(items: &mut Vec<T>, mut compare: impl FnMut(&T, &T) -> Ordering) {
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buffer = items.clone();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);

            for slot in buffer[start..end].iter_mut() {
                let take_right =
                    left >= mid || (right < end && compare(&items[right], &items[left]) == Ordering::Less);
                if take_right {
                    *slot = items[right];
                    right += 1;
                } else {
                    *slot = items[left];
                    left += 1;
                }
            }
            start = end;
        }
        std::mem::swap(items, &mut buffer);
        width *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn token(address: &str, symbol: &str) -> Token {
        Token::new(address, symbol, 6)
    }

    fn symbols(ranked: &[&Token]) -> Vec<String> {
        ranked.iter().map(|t| t.symbol.clone()).collect()
    }

    fn plain_ranker() -> TokenRanker {
        TokenRanker::new(Vec::<String>::new())
    }

    #[test]
    fn test_empty_catalog() {
        let ranked = rank(&[], &HoldingsMap::new(), &PriceMap::new(), "sol");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_value_ordering() {
        let catalog = vec![token("b", "BBB"), token("a", "AAA")];
        let holdings = HoldingsMap::from([("a".to_string(), dec!(10)), ("b".to_string(), dec!(5))]);
        let prices = PriceMap::from([("a".to_string(), dec!(2)), ("b".to_string(), dec!(1))]);

        let ranked = plain_ranker().rank(&catalog, &holdings, &prices, "");
        assert_eq!(symbols(&ranked), vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_value_beats_balance_when_priced() {
        // B has the larger balance but the smaller USD value.
        let catalog = vec![token("b", "BBB"), token("a", "AAA")];
        let holdings = HoldingsMap::from([("a".to_string(), dec!(1)), ("b".to_string(), dec!(1000))]);
        let prices = PriceMap::from([("a".to_string(), dec!(150)), ("b".to_string(), dec!(0.0001))]);

        let ranked = plain_ranker().rank(&catalog, &holdings, &prices, "");
        assert_eq!(symbols(&ranked), vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_small_fractional_values_compare_exactly() {
        // 0.1 * 0.3 vs 0.03: equal in decimal, unequal in f64.
        let catalog = vec![token("a", "AAA"), token("b", "BBB")];
        let holdings = HoldingsMap::from([("a".to_string(), dec!(0.3)), ("b".to_string(), dec!(0.03))]);
        let prices = PriceMap::from([("a".to_string(), dec!(0.1)), ("b".to_string(), dec!(1))]);

        let ranked = plain_ranker().rank(&catalog, &holdings, &prices, "");
        // Equal value keeps catalog order.
        assert_eq!(symbols(&ranked), vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_balance_fallback_without_price() {
        let catalog = vec![token("b", "BBB"), token("a", "AAA")];
        let holdings = HoldingsMap::from([("a".to_string(), dec!(100)), ("b".to_string(), dec!(1))]);

        let ranked = plain_ranker().rank(&catalog, &holdings, &PriceMap::new(), "");
        assert_eq!(symbols(&ranked), vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_balance_fallback_when_one_price_missing() {
        let catalog = vec![token("b", "BBB"), token("a", "AAA")];
        let holdings = HoldingsMap::from([("a".to_string(), dec!(100)), ("b".to_string(), dec!(1))]);
        let prices = PriceMap::from([("b".to_string(), dec!(1000))]);

        let ranked = plain_ranker().rank(&catalog, &holdings, &prices, "");
        assert_eq!(symbols(&ranked), vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_zero_balance_entry_counts_as_held() {
        let catalog = vec![token("u", "UNHELD"), token("z", "ZERO")];
        let holdings = HoldingsMap::from([("z".to_string(), dec!(0))]);

        let ranked = plain_ranker().rank(&catalog, &holdings, &PriceMap::new(), "");
        assert_eq!(symbols(&ranked), vec!["ZERO", "UNHELD"]);
    }

    #[test]
    fn test_top_tokens_lead_unheld() {
        let catalog = vec![token("x", "XXX"), token("usdc", "USDC"), token("y", "YYY"), token("sol", "SOL")];
        let ranker = TokenRanker::new(["sol", "usdc"]);

        let ranked = ranker.rank(&catalog, &HoldingsMap::new(), &PriceMap::new(), "");
        // Allow-list members keep catalog order among themselves.
        assert_eq!(symbols(&ranked), vec!["USDC", "SOL", "XXX", "YYY"]);
    }

    #[test]
    fn test_held_beats_top_token() {
        let catalog = vec![token("sol", "SOL"), token("x", "XXX")];
        let holdings = HoldingsMap::from([("x".to_string(), dec!(1))]);
        let ranker = TokenRanker::new(["sol"]);

        let ranked = ranker.rank(&catalog, &holdings, &PriceMap::new(), "");
        assert_eq!(symbols(&ranked), vec!["XXX", "SOL"]);
    }

    #[test]
    fn test_top_token_breaks_equal_value_tie() {
        let catalog = vec![token("x", "XXX"), token("sol", "SOL")];
        let holdings = HoldingsMap::from([("x".to_string(), dec!(2)), ("sol".to_string(), dec!(2))]);
        let ranker = TokenRanker::new(["sol"]);

        let ranked = ranker.rank(&catalog, &holdings, &PriceMap::new(), "");
        assert_eq!(symbols(&ranked), vec!["SOL", "XXX"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = vec![token("x", "XRAY"), token("y", "YSOL"), token("z", "ZSOL")];
        let holdings = HoldingsMap::from([("z".to_string(), dec!(5)), ("y".to_string(), dec!(1))]);
        let ranker = plain_ranker();

        let full = ranker.rank(&catalog, &holdings, &PriceMap::new(), "");
        assert_eq!(symbols(&full), vec!["ZSOL", "YSOL", "XRAY"]);

        let filtered = ranker.rank(&catalog, &holdings, &PriceMap::new(), "sol");
        assert_eq!(symbols(&filtered), vec!["ZSOL", "YSOL"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = vec![token("a", "mSOL"), token("b", "USDC"), token("c", "SOLX")];
        let ranked = plain_ranker().rank(&catalog, &HoldingsMap::new(), &PriceMap::new(), "Sol");
        assert_eq!(symbols(&ranked), vec!["mSOL", "SOLX"]);
    }

    #[test]
    fn test_search_whitespace_is_literal() {
        let catalog = vec![token("a", "SOL"), token("b", "USDC")];
        let ranker = plain_ranker();

        let ranked = ranker.rank(&catalog, &HoldingsMap::new(), &PriceMap::new(), " ");
        assert!(ranked.is_empty());

        let ranked = ranker.rank(&catalog, &HoldingsMap::new(), &PriceMap::new(), "sol ");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let catalog = vec![token("a", "AAA")];
        let ranked = plain_ranker().rank(&catalog, &HoldingsMap::new(), &PriceMap::new(), "zzz");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_from_config_overrides_top_tokens() {
        let config = Config {
            top_tokens: Some(vec!["custom".to_string()]),
            ..Config::default()
        };
        let ranker = TokenRanker::from_config(&config);
        assert!(ranker.is_top_token("custom"));
        assert!(!ranker.is_top_token("So11111111111111111111111111111111111111112"));

        assert!(TokenRanker::from_config(&Config::default())
            .is_top_token("So11111111111111111111111111111111111111112"));
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let mut items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        merge_sort_by(&mut items, |x, y| x.0.cmp(&y.0));
        assert_eq!(items, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    fn arb_inputs() -> impl Strategy<Value = (Vec<Token>, HoldingsMap, PriceMap)> {
        let entry = (0u8..3, 0i64..10_000, 0u8..3, 1i64..100_000);
        prop::collection::vec(entry, 0..40).prop_map(|rows| {
            let mut catalog = Vec::new();
            let mut holdings = HoldingsMap::new();
            let mut prices = PriceMap::new();
            for (i, (held, balance, priced, price)) in rows.into_iter().enumerate() {
                let address = format!("mint-{i}");
                catalog.push(Token::new(address.clone(), format!("T{i}"), 6));
                if held > 0 {
                    holdings.insert(address.clone(), Decimal::new(balance, 2));
                }
                if priced > 0 {
                    prices.insert(address, Decimal::new(price, 4));
                }
            }
            (catalog, holdings, prices)
        })
    }

    proptest! {
        #[test]
        fn prop_rank_is_deterministic((catalog, holdings, prices) in arb_inputs()) {
            let ranker = TokenRanker::default();
            let first = ranker.rank_indices(&catalog, &holdings, &prices, "");
            let second = ranker.rank_indices(&catalog, &holdings, &prices, "");
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_rank_is_permutation((catalog, holdings, prices) in arb_inputs()) {
            let mut ranked = TokenRanker::default().rank_indices(&catalog, &holdings, &prices, "");
            ranked.sort_unstable();
            prop_assert_eq!(ranked, (0..catalog.len()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_held_before_unheld((catalog, holdings, prices) in arb_inputs()) {
            let ranked = rank(&catalog, &holdings, &prices, "");
            let first_unheld = ranked.iter().position(|t| !holdings.contains_key(&t.address));
            if let Some(first_unheld) = first_unheld {
                prop_assert!(ranked[first_unheld..].iter().all(|t| !holdings.contains_key(&t.address)));
            }
        }

        #[test]
        fn prop_filter_is_subsequence((catalog, holdings, prices) in arb_inputs(), digit in 0u8..10) {
            let ranker = TokenRanker::default();
            let term = digit.to_string();
            let full = ranker.rank_indices(&catalog, &holdings, &prices, "");
            let filtered = ranker.rank_indices(&catalog, &holdings, &prices, &term);
            let expected: Vec<usize> = full
                .into_iter()
                .filter(|&i| catalog[i].symbol.contains(&term))
                .collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
