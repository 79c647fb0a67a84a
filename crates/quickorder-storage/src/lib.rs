//! # quickorder-storage: Persistence Layer for Quick Order
//!
//! This crate provides persistence for the Quick Order engine. It uses
//! SQLite as a local key-value store with sqlx for async operations —
//! the same shape as the mobile platform's key-value storage, with the
//! cart snapshot stored as a single JSON blob under a fixed key.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quick Order Data Flow                              │
//! │                                                                         │
//! │  Engine command (add_to_cart)                                           │
//! │       │  state mutated first; the save below can never roll it back    │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 quickorder-storage (THIS CRATE)                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │    Storage    │    │  Repositories │    │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │◄───│  (cart.rs)    │    │  (embedded)  │   │   │
//! │  │   │  SqlitePool   │    │ CartRepository│    │ 001_init.sql │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  kv_store table: key "@quick_order_cart" → JSON cart snapshot          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Repository implementations (cart snapshot)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quickorder_storage::{Storage, StorageConfig};
//!
//! let storage = Storage::new(StorageConfig::new("path/to/quickorder.db")).await?;
//!
//! // Gateway contract: load never fails, it degrades to empty
//! let items = storage.cart().load().await;
//! storage.cart().save(&items).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use pool::{Storage, StorageConfig};
pub use repository::cart::{CartRepository, CART_STORAGE_KEY};
