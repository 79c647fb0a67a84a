//! # Cart Commands
//!
//! Engine commands for cart manipulation.
//!
//! ## Persistence Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mutation + Persist                                   │
//! │                                                                         │
//! │  add_to_cart(product)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Mutate the cart under the lock, take the new snapshot               │
//! │  2. Lock released - the in-memory state is now authoritative            │
//! │  3. Save the snapshot through the gateway                               │
//! │     • save never fails upward: errors are logged and dropped            │
//! │     • the state transition is never rolled back                         │
//! │  4. Return the updated cart response                                    │
//! │                                                                         │
//! │  The save is an explicit step of the command, not a reactive            │
//! │  subscription - the stores stay testable without an event loop.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these commands can fail: invalid input (out-of-range quantity,
//! unknown product id) is absorbed by the store as a no-op and the caller
//! simply gets back the unchanged cart.

use serde::{Deserialize, Serialize};
use tracing::debug;

use quickorder_core::{Cart, CartItem, Money, Product};

use crate::state::{CartState, StorageState};

/// Cart totals summary for the cart bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products (SKUs) in the cart.
    pub distinct_items: usize,
    /// Sum of quantities across all items.
    pub total_quantity: i64,
    /// Sum of `price × quantity` across all items.
    pub total_amount: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            distinct_items: cart.distinct_items(),
            total_quantity: cart.total_quantity(),
            total_amount: cart.total_amount(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Gets the cart quantity for a single product, 0 if absent.
///
/// Used by the product list to badge each row with its current count.
pub fn quantity_for(cart: &CartState, product_id: u32) -> i64 {
    cart.with_cart(|c| c.quantity_for(product_id))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases by 1
/// - Product at the 99 maximum: silently capped, no change
/// - Product not in cart: appended with quantity 1
///
/// ## Returns
/// Updated cart with all items and totals.
pub async fn add_to_cart(
    cart: &CartState,
    storage: &StorageState,
    product: &Product,
) -> CartResponse {
    debug!(product_id = product.id, "add_to_cart command");

    let (response, snapshot) = cart.with_cart_mut(|c| {
        c.add(product);
        (CartResponse::from(&*c), c.items.clone())
    });

    persist(storage, &snapshot).await;
    response
}

/// Removes one unit of a product from the cart.
///
/// ## Behavior
/// - Quantity above 1: decreases by 1
/// - Quantity exactly 1: item removed entirely
/// - Product not in cart: no-op
///
/// ## Returns
/// Updated cart.
pub async fn remove_from_cart(
    cart: &CartState,
    storage: &StorageState,
    product_id: u32,
) -> CartResponse {
    debug!(product_id = product_id, "remove_from_cart command");

    let (response, snapshot) = cart.with_cart_mut(|c| {
        c.remove(product_id);
        (CartResponse::from(&*c), c.items.clone())
    });

    persist(storage, &snapshot).await;
    response
}

/// Sets the quantity of a cart item directly.
///
/// ## Behavior
/// - Quantity outside [0, 99]: rejected, cart unchanged
/// - Quantity 0: removes the item
/// - Item not in cart: no-op (never creates items)
///
/// ## Returns
/// Updated cart.
pub async fn update_quantity(
    cart: &CartState,
    storage: &StorageState,
    product_id: u32,
    quantity: i64,
) -> CartResponse {
    debug!(
        product_id = product_id,
        quantity = quantity,
        "update_quantity command"
    );

    let (response, snapshot) = cart.with_cart_mut(|c| {
        c.set_quantity(product_id, quantity);
        (CartResponse::from(&*c), c.items.clone())
    });

    persist(storage, &snapshot).await;
    response
}

/// Clears all items from the cart.
///
/// ## Returns
/// Empty cart.
pub async fn clear_cart(cart: &CartState, storage: &StorageState) -> CartResponse {
    debug!("clear_cart command");

    let response = cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    });

    persist(storage, &[]).await;
    response
}

/// Saves the snapshot through the gateway.
///
/// The cart state already committed when this runs; a failed save is
/// logged inside the repository and dropped, so the command cannot fail.
async fn persist(storage: &StorageState, snapshot: &[CartItem]) {
    storage.inner().cart().save(snapshot).await;
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickorder_core::Category;
    use quickorder_storage::{Storage, StorageConfig};

    fn paracetamol() -> Product {
        Product {
            id: 1,
            name: "Paracetamol 500mg".to_string(),
            price: Money::from_cents(15000),
            category: Category::PainRelief,
            is_prescription: false,
        }
    }

    async fn test_states() -> (CartState, StorageState) {
        let storage = Storage::new(StorageConfig::in_memory()).await.unwrap();
        (CartState::new(), StorageState::new(storage))
    }

    #[tokio::test]
    async fn test_add_to_cart_returns_updated_totals() {
        let (cart, storage) = test_states().await;

        add_to_cart(&cart, &storage, &paracetamol()).await;
        let response = add_to_cart(&cart, &storage, &paracetamol()).await;

        assert_eq!(response.totals.distinct_items, 1);
        assert_eq!(response.totals.total_quantity, 2);
        assert_eq!(response.totals.total_amount, Money::from_cents(30000));
    }

    #[tokio::test]
    async fn test_mutations_persist_snapshot() {
        let (cart, storage) = test_states().await;

        add_to_cart(&cart, &storage, &paracetamol()).await;
        update_quantity(&cart, &storage, 1, 5).await;

        let persisted = storage.inner().cart().load().await;
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_rejected_update_persists_unchanged_snapshot() {
        let (cart, storage) = test_states().await;

        add_to_cart(&cart, &storage, &paracetamol()).await;
        let response = update_quantity(&cart, &storage, 1, 100).await;

        assert_eq!(response.items[0].quantity, 1);
        assert_eq!(storage.inner().cart().load().await[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_clear_cart_persists_empty_snapshot() {
        let (cart, storage) = test_states().await;

        add_to_cart(&cart, &storage, &paracetamol()).await;
        let response = clear_cart(&cart, &storage).await;

        assert!(response.items.is_empty());
        assert!(storage.inner().cart().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_at_one_drops_item_from_snapshot() {
        let (cart, storage) = test_states().await;

        add_to_cart(&cart, &storage, &paracetamol()).await;
        remove_from_cart(&cart, &storage, 1).await;

        assert_eq!(quantity_for(&cart, 1), 0);
        assert!(storage.inner().cart().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_cart_and_quantity_for() {
        let (cart, storage) = test_states().await;

        add_to_cart(&cart, &storage, &paracetamol()).await;

        let response = get_cart(&cart);
        assert_eq!(response.items.len(), 1);
        assert_eq!(quantity_for(&cart, 1), 1);
        assert_eq!(quantity_for(&cart, 42), 0);
    }
}
