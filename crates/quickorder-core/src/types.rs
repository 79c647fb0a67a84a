//! # Domain Types
//!
//! Core domain types used throughout Quick Order.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  product        │   │  All (filter)   │       │
//! │  │  name           │   │  quantity       │   │  Pain Relief    │       │
//! │  │  price (Money)  │   │  [1, 99]        │   │  Antibiotic     │       │
//! │  │  category       │   │                 │   │  Supplement     │       │
//! │  │  isPrescription │   │                 │   │  Allergy        │       │
//! │  └─────────────────┘   └─────────────────┘   │  Gastro         │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Identity Pattern
//! A `CartItem` holds a full copy of its `Product`, not a reference back
//! into the catalog. Products are immutable for the whole session, so the
//! copy can never go stale, and the persisted cart round-trips without a
//! catalog lookup.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category, including the `All` filter sentinel.
///
/// The serialized names match the labels the frontend renders on the
/// category tabs, so the same enum populates the filter UI and tags
/// products.
///
/// ## Note
/// `All` exists only for the catalog filter. A product tagged `All` is
/// rejected by [`crate::validation::validate_product`] at catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    /// Filter sentinel: no category restriction.
    All,
    #[serde(rename = "Pain Relief")]
    PainRelief,
    Antibiotic,
    Supplement,
    Allergy,
    Gastro,
}

/// The fixed category list, in display order, used to populate the
/// category-filter UI.
pub const CATEGORIES: [Category; 6] = [
    Category::All,
    Category::PainRelief,
    Category::Antibiotic,
    Category::Supplement,
    Category::Allergy,
    Category::Gastro,
];

impl Category {
    /// Returns the fixed category list, `All` first.
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    /// Returns the display label (identical to the serialized name).
    pub const fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::PainRelief => "Pain Relief",
            Category::Antibiotic => "Antibiotic",
            Category::Supplement => "Supplement",
            Category::Allergy => "Allergy",
            Category::Gastro => "Gastro",
        }
    }

    /// Checks whether this value is the filter sentinel.
    #[inline]
    pub const fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }
}

impl Default for Category {
    /// The filter starts at `All` (no restriction).
    fn default() -> Self {
        Category::All
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// An orderable product in the catalog.
///
/// Products are created once at catalog load and never mutated or
/// destroyed during the session. `id` is the stable identity key; the
/// cart is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique, stable identity key.
    pub id: u32,

    /// Display name shown in the product list. Search matches against it.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: Money,

    /// Category used by the catalog filter. Never `Category::All`.
    pub category: Category,

    /// Whether the product requires a prescription.
    /// Presentation-only: carried through the cart and persistence
    /// untouched so the UI can badge the item.
    pub is_prescription: bool,
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product together with the desired quantity.
///
/// ## Invariants
/// - `quantity` is in `[1, MAX_ITEM_QUANTITY]` for every live item
/// - An item at quantity 0 must not exist; reaching zero removes the
///   item from the cart entirely
///
/// This is also the persisted snapshot shape: the stored cart blob is a
/// JSON array of `{product, quantity}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Snapshot copy of the product (immutable for the session).
    pub product: Product,

    /// Quantity in cart, `1..=99`.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart item at quantity 1 from a product.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 1,
            name: "Paracetamol 500mg".to_string(),
            price: Money::from_cents(15000),
            category: Category::PainRelief,
            is_prescription: false,
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::PainRelief.label(), "Pain Relief");
        assert_eq!(Category::Gastro.to_string(), "Gastro");
        assert_eq!(Category::default(), Category::All);
        assert!(Category::All.is_all());
        assert!(!Category::Antibiotic.is_all());
    }

    #[test]
    fn test_category_list_order() {
        assert_eq!(Category::all().len(), 6);
        assert_eq!(Category::all()[0], Category::All);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::PainRelief).unwrap();
        assert_eq!(json, "\"Pain Relief\"");

        let parsed: Category = serde_json::from_str("\"Pain Relief\"").unwrap();
        assert_eq!(parsed, Category::PainRelief);
    }

    #[test]
    fn test_cart_item_line_total() {
        let mut item = CartItem::from_product(&product());
        assert_eq!(item.quantity, 1);

        item.quantity = 3;
        assert_eq!(item.line_total(), Money::from_cents(45000));
    }

    /// The persisted snapshot shape is part of the storage contract:
    /// an array of `{product: {id, name, price, category, isPrescription},
    /// quantity}` objects.
    #[test]
    fn test_cart_item_snapshot_shape() {
        let item = CartItem {
            product: product(),
            quantity: 2,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "product": {
                    "id": 1,
                    "name": "Paracetamol 500mg",
                    "price": 15000,
                    "category": "Pain Relief",
                    "isPrescription": false,
                },
                "quantity": 2,
            })
        );

        let back: CartItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
