use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::error::InventoryError;
use super::outcome::{CreateOutcome, DeleteOutcome, FindOutcome, UpdateOutcome};
use crate::framework::{Document, JsonFileStore};
use crate::model::{InventoryItem, ProductId, ProductRecord, ValidationError};

/// File-backed product repository.
///
/// Wraps the generic [`JsonFileStore`] in product-specific operations. Every call
/// re-reads the document from disk, and every successful mutation rewrites it.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: JsonFileStore<ProductRecord>,
}

impl ProductRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Loads every stored record. A missing file is an empty inventory.
    pub fn read_all(&self) -> Result<Document<ProductRecord>, InventoryError> {
        Ok(self.store.read_all()?)
    }

    /// Replaces the stored document with `document`.
    pub fn write_all(&self, document: &Document<ProductRecord>) -> Result<(), InventoryError> {
        Ok(self.store.write_all(document)?)
    }

    /// Stores a new product unless its id is already taken.
    #[tracing::instrument(skip_all, fields(id = %item.id()))]
    pub fn create(&self, item: &InventoryItem) -> Result<CreateOutcome, InventoryError> {
        let id = item.id();
        if self.store.insert_new(item.to_record())? {
            info!(kind = %item.kind(), "Product created");
            Ok(CreateOutcome::Created {
                id,
                name: item.product().name(),
            })
        } else {
            warn!("Duplicate product id");
            Ok(CreateOutcome::DuplicateId { id })
        }
    }

    /// Looks up a product by id.
    #[tracing::instrument(skip(self))]
    pub fn find(&self, id: ProductId) -> Result<FindOutcome, InventoryError> {
        Ok(match self.store.get(&id)? {
            Some(record) => FindOutcome::Found { record },
            None => FindOutcome::NotFound { id },
        })
    }

    /// Overwrites the stored price.
    ///
    /// The new price is written as given; validating it is the caller's job.
    /// Only non-finite prices are refused, since JSON cannot hold them.
    ///
    /// # Errors
    /// [`ValidationError::InvalidPrice`] for `NaN` or an infinity. The file is left
    /// untouched.
    #[tracing::instrument(skip(self))]
    pub fn update_price(&self, id: ProductId, price: f64) -> Result<UpdateOutcome, InventoryError> {
        if !price.is_finite() {
            warn!("Refusing non-finite price");
            return Err(ValidationError::InvalidPrice(price.to_string()).into());
        }

        let previous = self
            .store
            .modify(&id, |record| std::mem::replace(&mut record.base_mut().price, price))?;

        Ok(match previous {
            Some(previous) => {
                info!(previous, current = price, "Price updated");
                UpdateOutcome::Updated {
                    id,
                    previous,
                    current: price,
                }
            }
            None => UpdateOutcome::NotFound { id },
        })
    }

    /// Removes a product by id.
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, id: ProductId) -> Result<DeleteOutcome, InventoryError> {
        Ok(match self.store.remove(&id)? {
            Some(record) => DeleteOutcome::Deleted { record },
            None => DeleteOutcome::NotFound { id },
        })
    }
}
