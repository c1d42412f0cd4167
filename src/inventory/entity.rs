//! [`DocumentEntity`] implementation for the persisted product record.
//!
//! Stored products are keyed by their numeric id rendered as text, so product 7
//! lives under `"7"` in the document.

use crate::framework::DocumentEntity;
use crate::model::{ProductId, ProductRecord};

impl DocumentEntity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.base().id
    }
}
