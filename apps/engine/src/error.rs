//! # Engine Error Type
//!
//! Errors that can occur while bootstrapping the engine.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Errors Can (and Cannot) Happen                 │
//! │                                                                         │
//! │  Bootstrap (CAN fail)              Commands (CANNOT fail)              │
//! │  ────────────────────              ───────────────────────             │
//! │  • catalog file unreadable         • add/remove/update/clear cart      │
//! │  • catalog JSON malformed          • set search text / category        │
//! │  • catalog invariants violated     • all queries                       │
//! │  • storage cannot be opened                                            │
//! │                                                                         │
//! │  Cart hydration sits in between: a failed load is NOT an error, it    │
//! │  degrades to the empty cart inside the storage layer.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use quickorder_core::ValidationError;
use quickorder_storage::StorageError;

/// Engine bootstrap errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// The provided catalog violates a catalog invariant.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] ValidationError),

    /// The persistence layer could not be initialized.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The catalog file is not valid product JSON.
    #[error("Failed to parse catalog file: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// A filesystem operation failed (catalog file read, data dir creation).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform app-data directory could not be determined.
    #[error("Could not determine app data directory")]
    DataDir,
}

/// Result type for engine bootstrap operations.
pub type AppResult<T> = Result<T, AppError>;
