use std::fmt::Display;

use super::electronic::ElectronicProduct;
use super::perishable::PerishableProduct;
use super::product::{Product, ProductId};
use super::record::{ProductKind, ProductRecord};

/// A validated product of either category, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryItem {
    Electronic(ElectronicProduct),
    Perishable(PerishableProduct),
}

impl InventoryItem {
    pub fn product(&self) -> &Product {
        match self {
            InventoryItem::Electronic(item) => item.product(),
            InventoryItem::Perishable(item) => item.product(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.product().id()
    }

    pub fn kind(&self) -> ProductKind {
        match self {
            InventoryItem::Electronic(_) => ProductKind::Electronic,
            InventoryItem::Perishable(_) => ProductKind::Perishable,
        }
    }

    pub fn to_record(&self) -> ProductRecord {
        match self {
            InventoryItem::Electronic(item) => item.to_record().into(),
            InventoryItem::Perishable(item) => item.to_record().into(),
        }
    }
}

impl From<ElectronicProduct> for InventoryItem {
    fn from(item: ElectronicProduct) -> Self {
        InventoryItem::Electronic(item)
    }
}

impl From<PerishableProduct> for InventoryItem {
    fn from(item: PerishableProduct) -> Self {
        InventoryItem::Perishable(item)
    }
}

impl Display for InventoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryItem::Electronic(item) => Display::fmt(item, f),
            InventoryItem::Perishable(item) => Display::fmt(item, f),
        }
    }
}
