//! # Cart Store
//!
//! Maintains the mapping from product identity to desired quantity.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Frontend Action          Engine Command          Cart State Change     │
//! │  ───────────────          ──────────────          ─────────────────     │
//! │                                                                         │
//! │  Tap + on product ───────► add_to_cart() ───────► qty+1 (cap 99)       │
//! │                                                                         │
//! │  Tap - on product ───────► remove_from_cart() ──► qty-1 (remove at 1)  │
//! │                                                                         │
//! │  Type quantity ──────────► update_quantity() ───► qty = n, [0, 99]     │
//! │                                                                         │
//! │  Tap clear ──────────────► clear_cart() ────────► items = []           │
//! │                                                                         │
//! │  App restart ────────────► hydrate_cart() ──────► items = snapshot     │
//! │                                                                         │
//! │  NOTE: Every operation is total. Out-of-range input degrades to a      │
//! │        no-op; nothing here returns an error or panics. The UI is       │
//! │        expected to pre-constrain input (e.g. disable "-" at qty 0).    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartItem, Product};
use crate::{MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY};

/// The shopping cart: an ordered sequence of items, unique by product id.
///
/// ## Invariants
/// - At most one item per product id
/// - Every live item has quantity in `[1, 99]`
/// - Insertion order is preserved for display stability; it carries no
///   meaning for the totals
///
/// Derived totals are recomputed from the item list on every read, never
/// cached, so they cannot drift from the items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart below 99: quantity increases by 1
    /// - Product already at 99: silently capped, no change
    /// - Product not in cart: appended at the end with quantity 1
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            if item.quantity < MAX_ITEM_QUANTITY {
                item.quantity += 1;
            }
            return;
        }

        self.items.push(CartItem::from_product(product));
    }

    /// Removes one unit of a product from the cart.
    ///
    /// ## Behavior
    /// - Quantity above 1: decreases by 1
    /// - Quantity exactly 1: item removed entirely (never left at 0)
    /// - Product not in cart: no-op
    pub fn remove(&mut self, product_id: u32) {
        let Some(pos) = self.items.iter().position(|i| i.product.id == product_id) else {
            return;
        };

        if self.items[pos].quantity > 1 {
            self.items[pos].quantity -= 1;
        } else {
            self.items.remove(pos);
        }
    }

    /// Sets the quantity of an item directly.
    ///
    /// ## Behavior
    /// - `quantity` outside `[0, 99]`: rejected, state unchanged (no clamp)
    /// - `quantity == 0` and item exists: item removed
    /// - `quantity` in `[1, 99]` and item exists: quantity set exactly
    /// - Item does not exist: no-op regardless of the value — this
    ///   operation never creates items
    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) {
        if !(MIN_ITEM_QUANTITY..=MAX_ITEM_QUANTITY).contains(&quantity) {
            return;
        }

        let Some(pos) = self.items.iter().position(|i| i.product.id == product_id) else {
            return;
        };

        if quantity == 0 {
            self.items.remove(pos);
        } else {
            self.items[pos].quantity = quantity;
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Wholesale-replaces the cart with a previously persisted snapshot.
    ///
    /// Used solely to restore state at startup. The incoming items are
    /// not re-validated: the persistence gateway only ever returns a
    /// previously valid snapshot, or the empty sequence.
    pub fn hydrate(&mut self, items: Vec<CartItem>) {
        self.items = items;
    }

    // =========================================================================
    // Derived Aggregates
    // =========================================================================

    /// Returns the number of distinct products (SKUs) in the cart.
    #[inline]
    pub fn distinct_items(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items; 0 for an empty cart.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Returns the sum of `price × quantity` over all items; zero for an
    /// empty cart.
    pub fn total_amount(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Returns the quantity of the matching item, or 0 if absent.
    pub fn quantity_for(&self, product_id: u32) -> i64 {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn paracetamol() -> Product {
        Product {
            id: 1,
            name: "Paracetamol 500mg".to_string(),
            price: Money::from_cents(15000),
            category: Category::PainRelief,
            is_prescription: false,
        }
    }

    fn amoxicillin() -> Product {
        Product {
            id: 2,
            name: "Amoxicillin 500mg".to_string(),
            price: Money::from_cents(45000),
            category: Category::Antibiotic,
            is_prescription: true,
        }
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());

        assert_eq!(cart.distinct_items(), 1);
        assert_eq!(cart.items[0].product, paracetamol());
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_add_existing_item_increments() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.add(&paracetamol());

        assert_eq!(cart.distinct_items(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_amount(), Money::from_cents(30000));
    }

    #[test]
    fn test_add_caps_at_max_quantity() {
        let mut cart = Cart::new();
        cart.hydrate(vec![CartItem {
            product: paracetamol(),
            quantity: 99,
        }]);

        cart.add(&paracetamol());
        assert_eq!(cart.items[0].quantity, 99);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.add(&amoxicillin());
        cart.add(&paracetamol());

        let ids: Vec<u32> = cart.items.iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_remove_decrements_quantity() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.add(&paracetamol());
        cart.remove(1);

        assert_eq!(cart.distinct_items(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_remove_at_quantity_one_removes_item() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.remove(1);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.remove(42);

        assert_eq!(cart.distinct_items(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_directly() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.set_quantity(1, 5);

        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn test_set_quantity_zero_removes_item() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.set_quantity(1, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_above_max_rejected() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.set_quantity(1, 100);

        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_negative_rejected() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.set_quantity(1, -1);

        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_never_creates_items() {
        let mut cart = Cart::new();
        cart.set_quantity(1, 5);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());
        cart.add(&amoxicillin());
        cart.clear();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_hydrate_replaces_state() {
        let mut cart = Cart::new();
        cart.add(&paracetamol());

        cart.hydrate(vec![CartItem {
            product: amoxicillin(),
            quantity: 3,
        }]);

        assert_eq!(cart.distinct_items(), 1);
        assert_eq!(cart.items[0].product.id, 2);
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[test]
    fn test_uniqueness_across_command_sequences() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(&paracetamol());
            cart.add(&amoxicillin());
        }
        cart.remove(1);
        cart.set_quantity(2, 7);

        let mut ids: Vec<u32> = cart.items.iter().map(|i| i.product.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.distinct_items());
    }

    #[test]
    fn test_aggregates() {
        let mut cart = Cart::new();
        cart.hydrate(vec![
            CartItem {
                product: paracetamol(),
                quantity: 2,
            },
            CartItem {
                product: amoxicillin(),
                quantity: 3,
            },
        ]);

        assert_eq!(cart.distinct_items(), 2);
        assert_eq!(cart.total_quantity(), 5);
        // 2 × 15000 + 3 × 45000
        assert_eq!(cart.total_amount(), Money::from_cents(165000));
        assert_eq!(cart.quantity_for(1), 2);
        assert_eq!(cart.quantity_for(2), 3);
        assert_eq!(cart.quantity_for(42), 0);
    }

    #[test]
    fn test_empty_cart_aggregates_are_zero() {
        let cart = Cart::new();

        assert_eq!(cart.distinct_items(), 0);
        assert_eq!(cart.total_quantity(), 0);
        assert!(cart.total_amount().is_zero());
        assert_eq!(cart.quantity_for(1), 0);
    }

    #[test]
    fn test_add_never_exceeds_max_over_long_sequences() {
        let mut cart = Cart::new();
        for _ in 0..150 {
            cart.add(&paracetamol());
        }

        assert_eq!(cart.items[0].quantity, MAX_ITEM_QUANTITY);
    }
}
