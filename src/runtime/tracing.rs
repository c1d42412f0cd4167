//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate.
//!
//! ## Configuration
//!
//! - **Level filtering** via `RUST_LOG`, falling back to the configured
//!   `log_level` when the variable is unset or invalid
//! - **Compact format** without the crate/module prefix (`with_target(false)`);
//!   the `entity_type` field already says where a line comes from
//! - **stderr output**, so stdout carries only command results
//!
//! ## What Gets Traced
//!
//! - **Document I/O**: missing files, parse and write failures
//! - **Entity Operations**: Insert, Get, Modify and Remove with their ids
//! - **Repository calls**: one span per operation (`create{id=1}`, `find{id=1}`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only failures (default)
//! inventory find 1
//!
//! # Every mutation
//! RUST_LOG=info inventory update-price 1 24.99
//!
//! # Full records as they are read and written
//! RUST_LOG=debug inventory add-electronic --id 1 ...
//! ```
//!
//! Running with `RUST_LOG=info` shows:
//!
//! ```text
//! INFO update_price{id=ProductId(1) price=24.99}: Updated entity_type="ProductRecord" id=1
//! INFO update_price{id=ProductId(1) price=24.99}: Price updated previous=19.99 current=24.99
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `default_level` is any `EnvFilter` directive (`"warn"`, `"product_inventory=debug"`)
/// used when `RUST_LOG` is not set. Calling this twice is harmless; the second
/// call keeps the first subscriber.
pub fn setup_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
