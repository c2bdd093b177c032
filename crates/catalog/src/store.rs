//! Catalog snapshot and view-phase selection.

use serde::{Deserialize, Serialize};

use storefront_core::FetchError;

use crate::product::Product;

/// Everything the external store exposes to the listing view, as one plain
/// value. The reactive store hands these out for tests and read-backs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
}

impl Default for CatalogSnapshot {
    /// The pre-fetch state: nothing published yet, loader showing.
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

impl CatalogSnapshot {
    pub fn phase(&self) -> ViewPhase {
        ViewPhase::select(self.is_loading, self.error.as_ref())
    }
}

/// Which of the three mutually exclusive views the page shows.
///
/// The selector holds no state of its own; it is re-evaluated from the
/// store's flags on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Error(FetchError),
    Ready,
}

impl ViewPhase {
    /// Fixed priority order: loading wins over error, error over ready.
    pub fn select(is_loading: bool, error: Option<&FetchError>) -> Self {
        if is_loading {
            ViewPhase::Loading
        } else if let Some(err) = error {
            ViewPhase::Error(err.clone())
        } else {
            ViewPhase::Ready
        }
    }
}
