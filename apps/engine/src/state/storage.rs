//! # Storage State
//!
//! Wraps the `Storage` handle for use in engine commands.
//!
//! ## Thread Safety
//! `Storage` contains a `SqlitePool` which is inherently thread-safe.
//! Multiple commands can persist concurrently without explicit locking;
//! the cart blob upsert is atomic at the SQLite level.

use quickorder_storage::Storage;

/// Wrapper around `Storage` for the engine's state set.
///
/// ## Why a Wrapper?
/// Keeps the command signatures uniform (every dependency is a
/// `*State` type) and gives bootstrap a single place to hand the
/// persistence layer over.
#[derive(Debug, Clone)]
pub struct StorageState {
    storage: Storage,
}

impl StorageState {
    /// Creates a new StorageState wrapping the storage connection.
    pub fn new(storage: Storage) -> Self {
        StorageState { storage }
    }

    /// Returns a reference to the inner Storage.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let items = storage_state.inner().cart().load().await;
    /// ```
    pub fn inner(&self) -> &Storage {
        &self.storage
    }
}
