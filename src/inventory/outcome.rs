//! Expected outcomes of inventory operations.
//!
//! Each repository operation either fails with an
//! [`InventoryError`](super::InventoryError) or returns one of these values.
//! A duplicate id or a missing product is an ordinary outcome, not a failure.
//!
//! Every outcome renders as a one-line user-facing message through `Display`
//! and serializes to JSON (tagged by `outcome`) for machine-readable callers.

use serde::Serialize;
use std::fmt::Display;

use crate::model::{ProductId, ProductRecord};

/// Result of [`ProductRepository::create`](super::ProductRepository::create).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CreateOutcome {
    /// The product was stored.
    Created { id: ProductId, name: String },
    /// A product with this id already exists; nothing was written.
    DuplicateId { id: ProductId },
}

/// Result of [`ProductRepository::find`](super::ProductRepository::find).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FindOutcome {
    Found { record: ProductRecord },
    NotFound { id: ProductId },
}

/// Result of [`ProductRepository::update_price`](super::ProductRepository::update_price).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpdateOutcome {
    Updated {
        id: ProductId,
        previous: f64,
        current: f64,
    },
    NotFound { id: ProductId },
}

/// Result of [`ProductRepository::delete`](super::ProductRepository::delete).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The product was removed; carries the record as it was stored.
    Deleted { record: ProductRecord },
    NotFound { id: ProductId },
}

impl FindOutcome {
    /// The found record, if any.
    pub fn record(&self) -> Option<&ProductRecord> {
        match self {
            FindOutcome::Found { record } => Some(record),
            FindOutcome::NotFound { .. } => None,
        }
    }

    pub fn into_record(self) -> Option<ProductRecord> {
        match self {
            FindOutcome::Found { record } => Some(record),
            FindOutcome::NotFound { .. } => None,
        }
    }
}

fn not_found(f: &mut std::fmt::Formatter<'_>, id: &ProductId) -> std::fmt::Result {
    write!(f, "Product not found with ID {id}.")
}

impl Display for CreateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateOutcome::Created { id, name } => {
                write!(f, "Product: {name}, ID: {id} created successfully.")
            }
            CreateOutcome::DuplicateId { id } => {
                write!(f, "A product with ID {id} already exists.")
            }
        }
    }
}

impl Display for FindOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindOutcome::Found { record } => {
                writeln!(f, "Product found with ID {}.", record.id())?;
                write!(f, "{record}")
            }
            FindOutcome::NotFound { id } => not_found(f, id),
        }
    }
}

impl Display for UpdateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateOutcome::Updated { id, .. } => {
                write!(f, "Price of product ID {id} updated successfully.")
            }
            UpdateOutcome::NotFound { id } => not_found(f, id),
        }
    }
}

impl Display for DeleteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteOutcome::Deleted { record } => {
                write!(f, "Product ID {} deleted successfully.", record.id())
            }
            DeleteOutcome::NotFound { id } => not_found(f, id),
        }
    }
}
