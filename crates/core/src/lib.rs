//! `storefront-core` — shared kernel for the storefront listing view.
//!
//! This crate contains **pure** building blocks (no IO, no rendering): the
//! product identifier newtype and the single modeled failure, "product fetch
//! failed".

pub mod error;
pub mod id;

pub use error::FetchError;
pub use id::ProductId;
