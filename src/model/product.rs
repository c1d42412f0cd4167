//! Represents a product in the inventory.
//!
//! Every validated field goes through [`validation`](super::validation) both at
//! construction and in the matching setter. A failing setter leaves the product
//! unchanged, so a `Product` value is always fully valid.
//!
//! Category-specific products ([`ElectronicProduct`](super::ElectronicProduct),
//! [`PerishableProduct`](super::PerishableProduct)) wrap a `Product` and expose
//! its accessors and setters through `Deref`.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::record::BaseRecord;
use super::validation::{validate_id, validate_price, validate_stock, RawInput, ValidationError};

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Validates raw input into an id.
    pub fn parse(raw: impl RawInput) -> Result<Self, ValidationError> {
        validate_id(raw).map(Self)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
    stock: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, a non-negative integer
    /// * `name` - Product name, free text
    /// * `description` - Product description, free text
    /// * `price` - Unit price, strictly positive
    /// * `stock` - Available stock quantity, non-negative
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] among `id`, `price` and `stock`.
    pub fn new(
        id: impl RawInput,
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl RawInput,
        stock: impl RawInput,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ProductId::parse(id)?,
            name: name.into(),
            description: description.into(),
            price: validate_price(price)?,
            stock: validate_stock(stock)?,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    /// The name with its first character upper-cased and the rest lower-cased.
    pub fn name(&self) -> String {
        capitalize(&self.name)
    }

    /// The description with its first character upper-cased and the rest lower-cased.
    pub fn description(&self) -> String {
        capitalize(&self.description)
    }

    /// The name exactly as it was given.
    pub fn raw_name(&self) -> &str {
        &self.name
    }

    /// The description exactly as it was given.
    pub fn raw_description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn set_id(&mut self, id: impl RawInput) -> Result<(), ValidationError> {
        self.id = ProductId::parse(id)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price(&mut self, price: impl RawInput) -> Result<(), ValidationError> {
        self.price = validate_price(price)?;
        Ok(())
    }

    pub fn set_stock(&mut self, stock: impl RawInput) -> Result<(), ValidationError> {
        self.stock = validate_stock(stock)?;
        Ok(())
    }

    /// Serializes the shared fields, with name and description capitalized.
    pub fn to_record(&self) -> BaseRecord {
        BaseRecord {
            id: self.id,
            name: self.name(),
            description: self.description(),
            price: self.price,
            stock: self.stock,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name(), self.description())
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
