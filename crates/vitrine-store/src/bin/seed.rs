//! # Seed Cache Generator
//!
//! Populates a development database with the demonstration catalog so the
//! widget can be exercised without network access.
//!
//! ## Usage
//! ```bash
//! # Seed the default dev database (./vitrine-dev.db)
//! cargo run -p vitrine-store --bin seed
//!
//! # Specify database path
//! cargo run -p vitrine-store --bin seed -- --db ./data/carousel.db
//!
//! # Wipe favorites too
//! cargo run -p vitrine-store --bin seed -- --reset-favorites
//! ```

use std::env;

use tracing::info;
use vitrine_core::fallback::fallback_products;
use vitrine_core::FavoriteSet;
use vitrine_store::{ClientStore, StoreConfig, StoreError};

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut db_path = "./vitrine-dev.db".to_string();
    let mut reset_favorites = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" => {
                if let Some(path) = args.get(i + 1) {
                    db_path = path.clone();
                    i += 1;
                }
            }
            "--reset-favorites" => reset_favorites = true,
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: seed [--db <path>] [--reset-favorites]");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    info!(path = %db_path, "Seeding development cache");

    let store = ClientStore::new(StoreConfig::new(&db_path)).await?;

    let products = fallback_products();
    store.product_cache().store(&products).await?;
    info!(count = products.len(), "Demo catalog written to cache");

    if reset_favorites {
        store.favorites().save(&FavoriteSet::new()).await?;
        info!("Favorites reset");
    }

    store.close().await;
    Ok(())
}
