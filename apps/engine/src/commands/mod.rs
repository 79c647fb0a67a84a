//! # Engine Commands Module
//!
//! The fixed command and query surface exposed to the presentation layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Search text / category filter
//! ├── cart.rs     ◄─── Cart manipulation + persistence
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI event (tap +, type in search box, pick a category tab)             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  command(state, ...args)   ◄── state containers passed by reference    │
//! │         │                       (no global singleton anywhere)         │
//! │         ▼                                                               │
//! │  store mutation under the lock ──► new immutable state                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  response DTO (camelCase JSON) ──► UI re-renders                       │
//! │         │                                                               │
//! │         └──► cart mutations also persist the new snapshot through     │
//! │              the gateway; a failed save is logged and dropped          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! pub fn set_search_query(catalog: &CatalogState, text: &str) -> CatalogResponse
//!
//! // Needs cart and storage (mutation + snapshot save)
//! pub async fn add_to_cart(cart: &CartState, storage: &StorageState, product: &Product)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
