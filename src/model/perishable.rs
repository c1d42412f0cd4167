use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use super::product::Product;
use super::record::{date_text, PerishableRecord};
use super::validation::{validate_expiration_at, ValidationError};

/// A product with an expiration date.
///
/// The expiration must be strictly later than the moment it is validated. That
/// check runs on construction and again on [`set_expiration`](Self::set_expiration),
/// so setting a date that was accepted yesterday can fail today. Records read
/// back from storage are not re-validated.
#[derive(Debug, Clone, PartialEq)]
pub struct PerishableProduct {
    product: Product,
    expiration: NaiveDate,
}

impl PerishableProduct {
    /// Wraps a validated product and validates `expiration` (`DD-MM-YYYY`)
    /// against the current local time.
    pub fn new(product: Product, expiration: &str) -> Result<Self, ValidationError> {
        Self::new_at(product, expiration, now())
    }

    /// Same as [`new`](Self::new) with an explicit "now".
    pub fn new_at(
        product: Product,
        expiration: &str,
        now: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            product,
            expiration: validate_expiration_at(expiration, now)?,
        })
    }

    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    pub fn set_expiration(&mut self, expiration: &str) -> Result<(), ValidationError> {
        self.set_expiration_at(expiration, now())
    }

    pub fn set_expiration_at(
        &mut self,
        expiration: &str,
        now: NaiveDateTime,
    ) -> Result<(), ValidationError> {
        self.expiration = validate_expiration_at(expiration, now)?;
        Ok(())
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn to_record(&self) -> PerishableRecord {
        PerishableRecord {
            base: self.product.to_record(),
            expiration: self.expiration,
        }
    }
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

impl Deref for PerishableProduct {
    type Target = Product;

    fn deref(&self) -> &Product {
        &self.product
    }
}

impl DerefMut for PerishableProduct {
    fn deref_mut(&mut self) -> &mut Product {
        &mut self.product
    }
}

impl Display for PerishableProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PerishableProduct: ({}, ${}, Stock: {}, Expires: {}.)",
            self.name(),
            self.price(),
            self.stock(),
            self.expiration.format(date_text::WRITE_FORMAT)
        )
    }
}
