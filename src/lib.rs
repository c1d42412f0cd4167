//! # Product Inventory
//!
//! > **A small, file-backed inventory of electronic and perishable products.**
//!
//! Products are validated in memory, persisted as records in a single JSON
//! document, and managed through a repository offering create, find, price
//! update and delete.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Valid by Construction
//! Every [`Product`](model::Product) is built through a validating constructor, and
//! every setter re-validates. A failed setter leaves the value untouched, so there
//! is no way to hold a half-valid product.
//!
//! ### Explicit Categories
//! Stored records carry a `kind` tag (`"electronic"` / `"perishable"`) and decode
//! into the [`ProductRecord`](model::ProductRecord) enum, matched exhaustively.
//! Older documents without the tag are still read by looking at their fields.
//!
//! ### Outcomes vs Errors
//! A duplicate id or a missing product is an expected outcome
//! ([`CreateOutcome`](inventory::CreateOutcome), [`FindOutcome`](inventory::FindOutcome), ...).
//! Only validation, I/O and configuration problems are errors
//! ([`InventoryError`](inventory::InventoryError)). Write failures are reported,
//! never swallowed.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`JsonFileStore`](framework::JsonFileStore): read the whole document,
//! change it, write it back.
//! - **Key items**: [`DocumentEntity`](framework::DocumentEntity), [`StoreError`](framework::StoreError).
//!
//! ### 2. The Model ([`model`])
//! Products, their validation, and the records they persist as.
//! - **Key items**: [`Product`](model::Product), [`ElectronicProduct`](model::ElectronicProduct),
//!   [`PerishableProduct`](model::PerishableProduct), [`InventoryItem`](model::InventoryItem).
//!
//! ### 3. The Interface ([`inventory`])
//! Product-specific operations on top of the engine.
//! - **Key items**: [`ProductRepository`](inventory::ProductRepository).
//!
//! ### 4. The Runtime ([`runtime`])
//! Configuration and logging for the `inventory` binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! inventory add-electronic --id 1 --name mouse --description "wireless mouse" \
//!     --price 19.99 --stock 50 --warranty 12
//! inventory update-price 1 24.99
//! RUST_LOG=info inventory find 1
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod framework;
pub mod inventory;
pub mod model;
pub mod runtime;
