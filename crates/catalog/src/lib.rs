//! Catalog domain for the storefront listing view.
//!
//! Everything here is pure and deterministic (no IO, no rendering): the
//! product read model, the filter state and engine, and the view-phase
//! selector that decides between loading, error, and ready.

pub mod filter;
pub mod product;
pub mod store;

pub use filter::FilterState;
pub use product::Product;
pub use store::{CatalogSnapshot, ViewPhase};
