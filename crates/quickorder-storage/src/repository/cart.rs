//! # Cart Snapshot Repository
//!
//! Persists the cart as a single JSON blob in the key-value table.
//!
//! ## Gateway Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Persistence Gateway Contract                         │
//! │                                                                         │
//! │  load()  ──► Vec<CartItem>   missing key, I/O error, malformed JSON:   │
//! │                              logged, then collapsed to the empty vec.  │
//! │                              Never raises to the caller.               │
//! │                                                                         │
//! │  save()  ──► ()              upsert of the snapshot blob. Failures     │
//! │                              logged and dropped; the in-memory cart    │
//! │                              is authoritative and never rolled back.   │
//! │                                                                         │
//! │  clear() ──► ()              deletes the blob. Same containment.       │
//! │                                                                         │
//! │  try_* siblings return StorageResult for callers that want the error  │
//! │  (tests, diagnostics). The engine only uses the infallible forms.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The snapshot shape is the serde encoding of `CartItem`: an array of
//! `{product: {id, name, price, category, isPrescription}, quantity}`
//! objects. The repository trusts the blob it wrote; hydration does not
//! re-validate quantities.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, error};

use quickorder_core::CartItem;

use crate::error::StorageResult;

/// Fixed key the cart blob is stored under.
///
/// Kept identical to the mobile app's storage key so a migrated device
/// finds its cart.
pub const CART_STORAGE_KEY: &str = "@quick_order_cart";

/// Repository for the persisted cart snapshot.
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: SqlitePool,
}

impl CartRepository {
    /// Creates a new repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        CartRepository { pool }
    }

    // =========================================================================
    // Infallible Gateway Surface
    // =========================================================================

    /// Loads the last persisted cart snapshot.
    ///
    /// ## Returns
    /// The snapshot items, or the empty sequence when nothing was ever
    /// saved or anything goes wrong. The failure cause is logged and
    /// swallowed; a failed load is equivalent to never having saved.
    pub async fn load(&self) -> Vec<CartItem> {
        match self.try_load().await {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "Failed to load cart snapshot, starting empty");
                Vec::new()
            }
        }
    }

    /// Saves the cart snapshot, replacing any previous one.
    ///
    /// Failures are logged and dropped: the in-memory state already
    /// committed and is never rolled back. No retry, no backpressure.
    pub async fn save(&self, items: &[CartItem]) {
        if let Err(e) = self.try_save(items).await {
            error!(error = %e, "Failed to save cart snapshot, dropping");
        }
    }

    /// Deletes the persisted snapshot.
    pub async fn clear(&self) {
        if let Err(e) = self.try_clear().await {
            error!(error = %e, "Failed to clear cart snapshot, dropping");
        }
    }

    // =========================================================================
    // Fallible Operations
    // =========================================================================

    /// Loads the snapshot, surfacing any storage or decode error.
    pub async fn try_load(&self) -> StorageResult<Vec<CartItem>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM kv_store WHERE key = ?")
                .bind(CART_STORAGE_KEY)
                .fetch_optional(&self.pool)
                .await?;

        let Some((blob,)) = row else {
            debug!("No cart snapshot found");
            return Ok(Vec::new());
        };

        let items: Vec<CartItem> = serde_json::from_str(&blob)?;
        debug!(count = items.len(), "Loaded cart snapshot");
        Ok(items)
    }

    /// Saves the snapshot, surfacing any storage or encode error.
    pub async fn try_save(&self, items: &[CartItem]) -> StorageResult<()> {
        let blob = serde_json::to_string(items)?;

        sqlx::query(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
        )
        .bind(CART_STORAGE_KEY)
        .bind(&blob)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(count = items.len(), "Saved cart snapshot");
        Ok(())
    }

    /// Deletes the snapshot, surfacing any storage error.
    pub async fn try_clear(&self) -> StorageResult<()> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(CART_STORAGE_KEY)
            .execute(&self.pool)
            .await?;

        debug!("Cleared cart snapshot");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
