//! # State Module
//!
//! Manages application state for the Quick Order engine.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┬────────────────┐      │
//! │          ▼                  ▼                  ▼                ▼      │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐ │
//! │  │ CatalogState │  │  CartState   │  │ StorageState │  │ConfigState │ │
//! │  │              │  │              │  │              │  │            │ │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  Storage     │  │ store_name │ │
//! │  │    Catalog   │  │    Cart      │  │  (SQLite     │  │ currency   │ │
//! │  │  >>          │  │  >>          │  │   pool)      │  │            │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘ │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState/CartState: Arc<Mutex<T>> for exclusive state swaps     │
//! │  • StorageState: pool is internally thread-safe                        │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod storage;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use storage::StorageState;
