//! # quickorder-core: Pure Business Logic for Quick Order
//!
//! This crate is the **heart** of Quick Order. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quick Order Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (React Native)                        │   │
//! │  │    Search UI ──► Category Tabs ──► Product List ──► Cart Bar    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ engine commands                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Engine Commands                              │   │
//! │  │    set_search_query, add_to_cart, update_quantity, etc.         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quickorder-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │   │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Catalog  │   │   │
//! │  │   │ CartItem  │  │ Aggregates│  │ Quantity  │  │ Filtering │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               quickorder-storage (Persistence Layer)            │   │
//! │  │         SQLite key-value store, cart snapshot blob              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, CartItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart store: quantities per product, derived totals
//! - [`catalog`] - Catalog store: search/category filtering
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog entry validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in the smallest currency unit (i64)
//! 4. **Permissive Commands**: Cart and catalog operations are total - invalid
//!    input degrades to a no-op, it never panics and never returns an error
//!
//! ## Example Usage
//!
//! ```rust
//! use quickorder_core::{Cart, Category, Money, Product};
//!
//! let paracetamol = Product {
//!     id: 1,
//!     name: "Paracetamol 500mg".to_string(),
//!     price: Money::from_cents(15000),
//!     category: Category::PainRelief,
//!     is_prescription: false,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&paracetamol);
//! cart.add(&paracetamol);
//!
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.total_amount(), Money::from_cents(30000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quickorder_core::Cart` instead of
// `use quickorder_core::cart::Cart`

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 999 instead of 9).
/// `add` silently caps at this value; `set_quantity` rejects above it.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Lower edge of the `set_quantity` acceptance range.
///
/// A requested quantity of exactly 0 removes the item; anything below
/// is rejected outright.
pub const MIN_ITEM_QUANTITY: i64 = 0;
