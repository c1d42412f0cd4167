use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use super::product::Product;
use super::record::ElectronicRecord;
use super::validation::{validate_warranty, RawInput, ValidationError};

/// A product sold with a warranty measured in months.
///
/// Dereferences to [`Product`], so the shared accessors and setters
/// (`price()`, `set_stock(..)`, ...) are available directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronicProduct {
    product: Product,
    warranty_months: u32,
}

impl ElectronicProduct {
    /// Wraps a validated product and validates the warranty.
    pub fn new(product: Product, warranty: impl RawInput) -> Result<Self, ValidationError> {
        Ok(Self {
            product,
            warranty_months: validate_warranty(warranty)?,
        })
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }

    pub fn set_warranty(&mut self, warranty: impl RawInput) -> Result<(), ValidationError> {
        self.warranty_months = validate_warranty(warranty)?;
        Ok(())
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn to_record(&self) -> ElectronicRecord {
        ElectronicRecord {
            base: self.product.to_record(),
            warranty_months: self.warranty_months,
        }
    }
}

impl Deref for ElectronicProduct {
    type Target = Product;

    fn deref(&self) -> &Product {
        &self.product
    }
}

impl DerefMut for ElectronicProduct {
    fn deref_mut(&mut self) -> &mut Product {
        &mut self.product
    }
}

impl Display for ElectronicProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ElectronicProduct: ({}, ${}, Stock:{}, {} months warranty.)",
            self.name(),
            self.price(),
            self.stock(),
            self.warranty_months
        )
    }
}
