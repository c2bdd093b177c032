//! Filter state and the pure filter engine.
//!
//! The engine is a total function: any combination of products, selected
//! categories, and query yields a (possibly empty) list, never an error.
//! Filtering is stable — source order is preserved, nothing is re-sorted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Retain products matching the search query and the selected categories.
///
/// - A non-empty `query` keeps products whose `name` contains it
///   case-insensitively (substring match, name only).
/// - A non-empty `selected` set keeps products whose `category` is a member.
/// - The two compose by logical AND; both empty returns the full list.
pub fn apply(products: &[Product], selected: &BTreeSet<String>, query: &str) -> Vec<Product> {
    let mut kept = products.to_vec();

    if !query.is_empty() {
        let needle = query.to_lowercase();
        kept.retain(|item| item.name.to_lowercase().contains(&needle));
    }

    if !selected.is_empty() {
        kept.retain(|item| selected.contains(&item.category));
    }

    kept
}

/// User-controlled, ephemeral filter criteria for the listing view.
///
/// Lives for exactly as long as the view is mounted; cleared back to the
/// neutral state (no categories, empty query) by [`FilterState::clear_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_categories: BTreeSet<String>,
    pub search_query: String,
}

impl FilterState {
    /// Select `name` if it is not selected, deselect it otherwise.
    pub fn toggle_category(&mut self, name: &str) {
        if !self.selected_categories.remove(name) {
            self.selected_categories.insert(name.to_owned());
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_categories.contains(name)
    }

    /// Replace the search query verbatim (no trimming, no debouncing).
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Reset to the neutral state: no selected categories, empty query.
    pub fn clear_all(&mut self) {
        self.selected_categories.clear();
        self.search_query.clear();
    }

    /// Run the filter engine with this state's criteria.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        apply(products, &self.selected_categories, &self.search_query)
    }
}
