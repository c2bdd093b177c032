//! Fetch-failure error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback copy shown when the upstream error carries no message.
pub const GENERIC_FETCH_FAILURE: &str =
    "We encountered an error while fetching the products. Please try again later.";

/// The one failure this view models: the external store's product fetch
/// failed. The upstream signal is an optional human-readable message;
/// absence of an error is `Option::<FetchError>::None`.
///
/// `Display` yields the message when present, else [`GENERIC_FETCH_FAILURE`].
#[derive(Debug, Error, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", .message.as_deref().unwrap_or(GENERIC_FETCH_FAILURE))]
pub struct FetchError {
    pub message: Option<String>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The message to surface to the user.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(GENERIC_FETCH_FAILURE)
    }
}
