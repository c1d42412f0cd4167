//! Runtime setup for the command-line entry point.
//!
//! - [`InventoryConfig`] - Layered configuration (defaults, file, environment)
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;
