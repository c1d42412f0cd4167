//! # Inventory CLI
//!
//! Drives a [`ProductRepository`] from the command line. Numeric arguments are
//! taken as text and validated exactly like the model validates them.

use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{debug, error};

use product_inventory::framework::StoreError;
use product_inventory::inventory::{InventoryError, ProductRepository};
use product_inventory::model::{
    validate_price, ElectronicProduct, InventoryItem, PerishableProduct, Product, ProductId,
};
use product_inventory::runtime::{setup_tracing, InventoryConfig};

#[derive(Parser)]
#[command(name = "inventory", about = "Manage a file-backed product inventory", version)]
struct Cli {
    /// JSON document holding the inventory (overrides configuration)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an electronic product
    AddElectronic {
        #[command(flatten)]
        product: ProductArgs,
        /// Warranty in months
        #[arg(long, allow_hyphen_values = true)]
        warranty: String,
    },
    /// Add a perishable product
    AddPerishable {
        #[command(flatten)]
        product: ProductArgs,
        /// Expiration date, DD-MM-YYYY
        #[arg(long)]
        expiration: String,
    },
    /// Show a product
    Find {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Change a product's price
    UpdatePrice {
        #[arg(allow_hyphen_values = true)]
        id: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    /// Remove a product
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
}

#[derive(Args)]
struct ProductArgs {
    #[arg(long, allow_hyphen_values = true)]
    id: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    #[arg(long, allow_hyphen_values = true)]
    price: String,
    #[arg(long, allow_hyphen_values = true)]
    stock: String,
}

impl ProductArgs {
    fn build(&self) -> Result<Product, InventoryError> {
        Ok(Product::new(
            &self.id,
            &self.name,
            &self.description,
            &self.price,
            &self.stock,
        )?)
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(exit_status(run(cli)));
}

fn exit_status(result: Result<(), InventoryError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            1
        }
    }
}

fn run(cli: Cli) -> Result<(), InventoryError> {
    let config = InventoryConfig::load()?;
    setup_tracing(&config.log_level);

    let data_file = cli.data_file.unwrap_or(config.data_file);
    debug!(data_file = %data_file.display(), "Using inventory document");
    let repository = ProductRepository::new(data_file);

    match cli.command {
        Commands::AddElectronic { product, warranty } => {
            let item: InventoryItem = ElectronicProduct::new(product.build()?, &warranty)?.into();
            render(&repository.create(&item)?, cli.json)
        }
        Commands::AddPerishable {
            product,
            expiration,
        } => {
            let item: InventoryItem = PerishableProduct::new(product.build()?, &expiration)?.into();
            render(&repository.create(&item)?, cli.json)
        }
        Commands::Find { id } => render(&repository.find(ProductId::parse(&id)?)?, cli.json),
        Commands::UpdatePrice { id, price } => {
            let id = ProductId::parse(&id)?;
            let price = validate_price(&price)?;
            render(&repository.update_price(id, price)?, cli.json)
        }
        Commands::Delete { id } => render(&repository.delete(ProductId::parse(&id)?)?, cli.json),
    }
}

fn render<T: Display + Serialize>(outcome: &T, json: bool) -> Result<(), InventoryError> {
    if json {
        let text = serde_json::to_string_pretty(outcome).map_err(StoreError::Serialize)?;
        println!("{text}");
    } else {
        println!("{outcome}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_inventory::model::ValidationError;

    fn invoke(data_file: &std::path::Path, args: &[&str]) -> Result<(), InventoryError> {
        let mut argv = vec!["inventory", "--data-file", data_file.to_str().unwrap()];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv).expect("Failed to parse arguments"))
    }

    fn seeded() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        invoke(
            &path,
            &[
                "add-electronic", "--id", "1", "--name", "mouse", "--description", "wireless",
                "--price", "19.99", "--stock", "50", "--warranty", "12",
            ],
        )
        .unwrap();
        (dir, path)
    }

    fn stored_price(path: &std::path::Path) -> f64 {
        let repository = ProductRepository::new(path);
        repository.find(ProductId(1)).unwrap().record().unwrap().base().price
    }

    #[test]
    fn test_update_price_accepts_positive_price() {
        let (_dir, path) = seeded();
        assert_eq!(exit_status(invoke(&path, &["update-price", "1", "24.99"])), 0);
        assert_eq!(stored_price(&path), 24.99);
    }

    #[test]
    fn test_update_price_rejects_invalid_price_before_writing() {
        let (_dir, path) = seeded();

        for price in ["0", "-5", "NaN", "inf", "cheap"] {
            let result = invoke(&path, &["update-price", "1", price]);
            assert!(
                matches!(
                    result,
                    Err(InventoryError::Validation(ValidationError::InvalidPrice(_)))
                ),
                "price {price:?} should be rejected"
            );
        }
        assert_eq!(stored_price(&path), 19.99);
    }

    #[test]
    fn test_failed_command_exits_with_status_one() {
        let (_dir, path) = seeded();
        assert_eq!(exit_status(invoke(&path, &["update-price", "1", "-5"])), 1);
        assert_eq!(exit_status(invoke(&path, &["find", "abc"])), 1);
        // Not found is an outcome, not a failure.
        assert_eq!(exit_status(invoke(&path, &["find", "99"])), 0);
    }
}
