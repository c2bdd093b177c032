//! Listing state: filter criteria plus the derived filtered list.
//!
//! The filtered list is one derived memo over (products, filter state).
//! Product arrival and filter mutation both invalidate the same memo, so
//! there is no reset-then-recompute ordering to get wrong: the memo always
//! recomputes from the current product list.

use leptos::*;

use storefront_catalog::{FilterState, Product};

/// Reactive holder of the view's ephemeral filter state.
///
/// Created on view mount, dropped with the view. `Copy` for capture in view
/// closures.
#[derive(Clone, Copy)]
pub struct ListingState {
    filter: RwSignal<FilterState>,
    filtered: Memo<Vec<Product>>,
}

impl ListingState {
    pub fn new(products: Signal<Vec<Product>>) -> Self {
        let filter = create_rw_signal(FilterState::default());
        let filtered =
            create_memo(move |_| products.with(|items| filter.with(|f| f.apply(items))));
        Self { filter, filtered }
    }

    /// The derived filtered list (tracked; re-renders dependents on change).
    pub fn filtered(&self) -> Memo<Vec<Product>> {
        self.filtered
    }

    /// Select `name` if unselected, deselect it otherwise.
    pub fn toggle_category(&self, name: &str) {
        tracing::debug!(category = name, "toggling category filter");
        self.filter.update(|f| f.toggle_category(name));
    }

    /// Whether `name` is currently selected (tracked read; checkbox checked
    /// state derives from this, so clearing state resets every checkbox).
    pub fn is_selected(&self, name: &str) -> bool {
        self.filter.with(|f| f.is_selected(name))
    }

    /// Replace the search query verbatim.
    pub fn set_search_query(&self, text: impl Into<String>) {
        self.filter.update(|f| f.set_search_query(text));
    }

    /// Current search query (tracked read).
    pub fn search_query(&self) -> String {
        self.filter.with(|f| f.search_query.clone())
    }

    /// Reset to the neutral state: no categories, empty query.
    pub fn clear_all(&self) {
        tracing::debug!("clearing listing filters");
        self.filter.update(FilterState::clear_all);
    }
}
