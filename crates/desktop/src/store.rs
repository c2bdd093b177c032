//! Reactive store context for externally-owned catalog state.
//!
//! The view treats these cells as read-only; the publishing operations
//! ([`StoreContext::finish_loading`], [`StoreContext::fail`]) are for the
//! embedding shell that owns the actual fetch. Handing the context in via
//! Leptos context keeps it an injected dependency, so tests substitute a
//! fake store by building one from a [`CatalogSnapshot`].

use leptos::*;

use storefront_catalog::{CatalogSnapshot, Product, ViewPhase};
use storefront_core::FetchError;

/// Handle to the four reactive cells the listing view reads.
///
/// `Copy` so it can be captured freely by view closures.
#[derive(Clone, Copy)]
pub struct StoreContext {
    products: RwSignal<Vec<Product>>,
    categories: RwSignal<Vec<String>>,
    is_loading: RwSignal<bool>,
    error: RwSignal<Option<FetchError>>,
}

impl StoreContext {
    /// Pre-fetch state: empty catalog, loader showing.
    pub fn new() -> Self {
        Self::from_snapshot(CatalogSnapshot::default())
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            products: create_rw_signal(snapshot.products),
            categories: create_rw_signal(snapshot.categories),
            is_loading: create_rw_signal(snapshot.is_loading),
            error: create_rw_signal(snapshot.error),
        }
    }

    pub fn products(&self) -> RwSignal<Vec<Product>> {
        self.products
    }

    pub fn categories(&self) -> RwSignal<Vec<String>> {
        self.categories
    }

    /// Which view the page should show right now (tracked read).
    pub fn phase(&self) -> ViewPhase {
        self.error
            .with(|error| ViewPhase::select(self.is_loading.get(), error.as_ref()))
    }

    /// Shell-facing: publish fetched catalog data and stop the loader.
    pub fn finish_loading(&self, products: Vec<Product>, categories: Vec<String>) {
        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "catalog data published"
        );
        self.products.set(products);
        self.categories.set(categories);
        self.error.set(None);
        self.is_loading.set(false);
    }

    /// Shell-facing: record a failed fetch and stop the loader.
    pub fn fail(&self, error: FetchError) {
        tracing::warn!(error = %error, "catalog fetch failed");
        self.error.set(Some(error));
        self.is_loading.set(false);
    }

    /// Untracked read-back of all four cells.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: self.products.get_untracked(),
            categories: self.categories.get_untracked(),
            is_loading: self.is_loading.get_untracked(),
            error: self.error.get_untracked(),
        }
    }
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new()
    }
}
