//! # Token List Window
//!
//! The contract between the ranked token list and a virtualized renderer: a fixed
//! row height, an item count and index access, plus the geometry a renderer needs to
//! draw only the visible slice.
//!
//! [`TokenListView`] keeps the current ranked order as a shared slice of catalog
//! positions. Re-ranking that produces the same order keeps the same allocation and
//! generation, so a renderer can skip its diff with a pointer comparison.
//!
//! ```rust
//! use lib_swap::ranker::TokenRanker;
//! use lib_swap::window::{ListWindow, TokenListView};
//! use shared::dto::{HoldingsMap, PriceMap, Token};
//!
//! let mut view = TokenListView::new(vec![
//!     Token::new("mint-a", "AAA", 6),
//!     Token::new("mint-b", "BBB", 6),
//! ]);
//! let ranker = TokenRanker::default();
//!
//! view.refresh(&ranker, &HoldingsMap::new(), &PriceMap::new(), "bb");
//! assert_eq!(view.item_count(), 1);
//! assert_eq!(view.item(0).unwrap().symbol, "BBB");
//! ```

use shared::dto::{HoldingsMap, PriceMap, Token};
use std::ops::Range;
use std::sync::Arc;

use crate::constants::PAIR_ROW_HEIGHT;
use crate::ranker::TokenRanker;

/// Index-addressable list with fixed-height rows.
pub trait ListWindow {
    type Item;

    fn row_height(&self) -> f32;

    fn item_count(&self) -> usize;

    fn item(&self, index: usize) -> Option<&Self::Item>;

    /// Full scroll extent.
    fn total_height(&self) -> f32 {
        self.row_height() * self.item_count() as f32
    }

    /// Top offset of row `index`.
    fn offset_of(&self, index: usize) -> f32 {
        self.row_height() * index as f32
    }

    /// Rows intersecting the viewport, widened by `overscan` rows on each side.
    fn visible_range(&self, scroll_offset: f32, viewport_height: f32, overscan: usize) -> Range<usize> {
        let count = self.item_count();
        let row_height = self.row_height();
        if count == 0 || row_height <= 0.0 || viewport_height <= 0.0 {
            return 0..0;
        }

        let top = scroll_offset.max(0.0);
        let first = ((top / row_height).floor() as usize).min(count);
        let last = (((top + viewport_height) / row_height).ceil() as usize).min(count);

        first.saturating_sub(overscan)..last.saturating_add(overscan).min(count)
    }
}

/// Ranked, filtered view over a token catalog.
#[derive(Debug, Clone)]
pub struct TokenListView {
    catalog: Arc<[Token]>,
    order: Arc<[usize]>,
    generation: u64,
    row_height: f32,
}

impl TokenListView {
    /// View over `catalog` in catalog order, before the first ranking.
    pub fn new(catalog: impl Into<Arc<[Token]>>) -> Self {
        let catalog = catalog.into();
        let order = (0..catalog.len()).collect();
        Self {
            catalog,
            order,
            generation: 0,
            row_height: PAIR_ROW_HEIGHT,
        }
    }

    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Re-rank against new inputs. Returns `true` when the visible order changed.
    pub fn refresh(
        &mut self,
        ranker: &TokenRanker,
        holdings: &HoldingsMap,
        prices: &PriceMap,
        search_term: &str,
    ) -> bool {
        let order = ranker.rank_indices(&self.catalog, holdings, prices, search_term);
        if *self.order == *order {
            return false;
        }

        self.order = order.into();
        self.generation += 1;
        tracing::trace!(generation = self.generation, items = self.order.len(), "Token list rebound");
        true
    }

    /// Bind a new catalog and rank it. Always starts a new generation.
    pub fn rebind(
        &mut self,
        catalog: impl Into<Arc<[Token]>>,
        ranker: &TokenRanker,
        holdings: &HoldingsMap,
        prices: &PriceMap,
        search_term: &str,
    ) {
        self.catalog = catalog.into();
        self.order = ranker
            .rank_indices(&self.catalog, holdings, prices, search_term)
            .into();
        self.generation += 1;
    }

    /// Bumped whenever the visible order changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current order as catalog positions; unchanged refreshes keep this pointer.
    pub fn order(&self) -> &Arc<[usize]> {
        &self.order
    }

    pub fn catalog(&self) -> &Arc<[Token]> {
        &self.catalog
    }

    /// `true` when nothing matches, so the caller shows its empty state.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> + '_ {
        self.order.iter().map(|&index| &self.catalog[index])
    }

    /// Row index of the token with `address`, if it is in the current view.
    pub fn position_of(&self, address: &str) -> Option<usize> {
        self.iter().position(|token| token.address == address)
    }
}

impl ListWindow for TokenListView {
    type Item = Token;

    fn row_height(&self) -> f32 {
        self.row_height
    }

    fn item_count(&self) -> usize {
        self.order.len()
    }

    fn item(&self, index: usize) -> Option<&Token> {
        self.order.get(index).map(|&position| &self.catalog[position])
    }
}
