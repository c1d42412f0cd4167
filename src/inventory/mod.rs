//! # Inventory
//!
//! Product persistence on top of the generic [`framework`](crate::framework) store.
//!
//! ## Structure
//!
//! - [`entity`] - [`DocumentEntity`](crate::framework::DocumentEntity) implementation for
//!   [`ProductRecord`](crate::model::ProductRecord)
//! - [`error`] - [`InventoryError`] for failures that interrupt an operation
//! - [`outcome`] - Expected results: created, duplicate, found, not found, ...
//! - [`repository`] - [`ProductRepository`], the create / find / update price / delete API
//!
//! ## Usage
//!
//! ```rust,no_run
//! use product_inventory::inventory::ProductRepository;
//! use product_inventory::model::{ElectronicProduct, Product, ProductId};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repository = ProductRepository::new("products.json");
//!
//!     let mouse = Product::new(1, "mouse", "wireless mouse", 19.99, 50)?;
//!     let mouse = ElectronicProduct::new(mouse, 12)?;
//!     println!("{}", repository.create(&mouse.into())?);
//!
//!     println!("{}", repository.update_price(ProductId(1), 24.99)?);
//!     println!("{}", repository.find(ProductId(1))?);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod outcome;
pub mod repository;

pub use error::*;
pub use outcome::*;
pub use repository::*;
