//! Error types for inventory operations.

use thiserror::Error;

use crate::framework::StoreError;
use crate::model::ValidationError;

/// Errors that can interrupt an inventory operation.
///
/// A duplicate id or a missing product is not an error; those come back as
/// outcome values (see [`outcome`](super::outcome)).
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A product field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The document file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The runtime configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
