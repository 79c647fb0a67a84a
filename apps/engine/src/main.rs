//! # Quick Order Smoke Binary
//!
//! Headless smoke run of the engine: bootstraps against the real
//! database path, exercises the command surface once, and logs the
//! resulting state. Useful for checking a build end-to-end without a
//! frontend attached.
//!
//! ## Usage
//! ```bash
//! # Run against the default app-data database and demo catalog
//! cargo run -p quickorder-engine --bin quickorder
//!
//! # Custom database path and catalog file
//! QUICKORDER_DB_PATH=/tmp/quickorder.db \
//! QUICKORDER_CATALOG_PATH=./catalog.json \
//! cargo run -p quickorder-engine --bin quickorder
//! ```

use std::path::PathBuf;

use tracing::info;

use quickorder_core::Category;
use quickorder_engine::{commands, default_db_path, init_tracing, products, App};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Quick Order engine smoke run");

    // Catalog: file if configured, demo data otherwise
    let catalog = match std::env::var("QUICKORDER_CATALOG_PATH") {
        Ok(path) => products::from_json_file(&PathBuf::from(path)).await?,
        Err(_) => products::demo_catalog(),
    };

    let db_path = default_db_path()?;
    info!(?db_path, "Database path determined");

    let app = App::init(catalog, db_path).await?;

    let cart = commands::cart::get_cart(&app.cart);
    info!(
        items = cart.items.len(),
        total = %app.config.format_currency(cart.totals.total_amount.cents()),
        "Cart after hydration"
    );

    // Exercise the catalog filter
    let view = commands::catalog::set_selected_category(&app.catalog, Category::Antibiotic);
    info!(count = view.products.len(), "Antibiotic products");
    let view = commands::catalog::set_search_query(&app.catalog, "amox");
    info!(count = view.products.len(), "After search 'amox'");

    // Exercise the cart: add the first filtered product twice
    if let Some(product) = view.products.first() {
        commands::cart::add_to_cart(&app.cart, &app.storage, product).await;
        let response = commands::cart::add_to_cart(&app.cart, &app.storage, product).await;
        info!(
            distinct = response.totals.distinct_items,
            quantity = response.totals.total_quantity,
            total = %app.config.format_currency(response.totals.total_amount.cents()),
            "Cart after adding {}", product.name
        );
    }

    info!("Smoke run complete; cart snapshot persisted");
    Ok(())
}
