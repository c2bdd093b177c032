//! `storefront-desktop`
//!
//! **Responsibility:** the client-side product listing page.
//!
//! This crate provides:
//! - A reactive store context holding the externally-owned catalog state
//!   (products, categories, loading flag, error value)
//! - The listing state: filter criteria plus the derived filtered list
//! - The Leptos view: loading / error / ready, with filter sidebar and card
//!   grid
//!
//! The crate owns no fetching or persistence; an embedding shell publishes
//! catalog data through [`StoreContext`].

pub mod listing;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use listing::ListingState;
pub use store::StoreContext;
