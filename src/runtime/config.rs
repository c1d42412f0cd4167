//! Runtime configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. Built-in defaults ([`DEFAULT_DATA_FILE`], [`DEFAULT_LOG_LEVEL`])
//! 2. An optional file `config/inventory.{toml,json,yaml,...}`
//! 3. Environment variables prefixed with `INVENTORY_`
//!    (e.g. `INVENTORY_DATA_FILE=/var/lib/inventory.json`)
//!
//! Command-line flags override the loaded values in the binary.

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "products.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_CONFIG_FILE: &str = "config/inventory";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InventoryConfig {
    /// Path of the JSON document holding every product.
    pub data_file: PathBuf,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl InventoryConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads with `file` (extension optional) as the configuration file.
    /// The file does not have to exist.
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("data_file", DEFAULT_DATA_FILE)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("INVENTORY"))
            .build()?;

        s.try_deserialize()
    }
}
