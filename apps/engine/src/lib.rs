//! # Quick Order Engine
//!
//! Headless engine for the Quick Order app: the state containers, the
//! command surface, and the persistence wiring the mobile UI sits on.
//!
//! ## Module Organization
//! ```text
//! quickorder_engine/
//! ├── lib.rs          ◄─── You are here (bootstrap & state bundle)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog store handle
//! │   ├── cart.rs     ◄─── Cart store handle
//! │   ├── storage.rs  ◄─── Persistence handle wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Search / category filter commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── products.rs     ◄─── Catalog sources (JSON file, demo data)
//! └── error.rs        ◄─── Bootstrap error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Engine Startup                                    │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load & Validate Catalog ──────────────────────────────────────────► │
//! │     • static product list (JSON file or built-in demo data)             │
//! │     • invariants checked once; a bad catalog aborts bootstrap           │
//! │                                                                         │
//! │  3. Open Storage ─────────────────────────────────────────────────────► │
//! │     • SQLite with WAL mode, run pending migrations                      │
//! │                                                                         │
//! │  4. Hydrate Cart ─────────────────────────────────────────────────────► │
//! │     • last persisted snapshot, or empty on any failure                  │
//! │                                                                         │
//! │  5. Hand the state bundle to the caller ──────────────────────────────► │
//! │     • commands take the individual states by reference                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod products;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quickorder_core::validation::validate_catalog;
use quickorder_core::Product;
use quickorder_storage::{Storage, StorageConfig};

use error::{AppError, AppResult};
use state::{CartState, CatalogState, ConfigState, StorageState};

/// The engine's state bundle.
///
/// There is no process-wide singleton: the application entry point owns
/// one of these and passes the individual states by reference to
/// whichever command needs them.
#[derive(Debug, Clone)]
pub struct App {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub storage: StorageState,
    pub config: ConfigState,
}

impl App {
    /// Bootstraps the engine against a database path.
    ///
    /// Validates the catalog, opens storage (running migrations), and
    /// hydrates the cart from the last persisted snapshot.
    pub async fn init(products: Vec<Product>, db_path: PathBuf) -> AppResult<App> {
        let storage = Storage::new(StorageConfig::new(db_path)).await?;
        App::with_storage(products, storage).await
    }

    /// Bootstraps the engine against an already-open storage handle.
    ///
    /// Used by `init` and by tests that want in-memory storage.
    pub async fn with_storage(products: Vec<Product>, storage: Storage) -> AppResult<App> {
        validate_catalog(&products)?;
        info!(count = products.len(), "Catalog validated");

        // A failed load already degraded to the empty snapshot inside
        // the gateway; hydration itself cannot fail.
        let snapshot = storage.cart().load().await;
        info!(items = snapshot.len(), "Cart hydrated from storage");

        Ok(App {
            catalog: CatalogState::new(products),
            cart: CartState::from_snapshot(snapshot),
            storage: StorageState::new(storage),
            config: ConfigState::from_env(),
        })
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=quickorder=trace` - Show trace for quickorder crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quickorder=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.quickorder.app/quickorder.db`
/// - **Windows**: `%APPDATA%\quickorder\app\quickorder.db`
/// - **Linux**: `~/.local/share/quickorder-app/quickorder.db`
///
/// ## Development Override
/// Set `QUICKORDER_DB_PATH` environment variable to use a custom path.
pub fn default_db_path() -> AppResult<PathBuf> {
    if let Ok(path) = std::env::var("QUICKORDER_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "quickorder", "app").ok_or(AppError::DataDir)?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("quickorder.db"))
}

// =============================================================================
// Integration Tests
// =============================================================================
