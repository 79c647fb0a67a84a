//! # Cart State
//!
//! Holds the current shopping cart behind a mutex.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Each command applies atomically: readers always see a fully-formed
//!    cart, never a partial update
//!
//! All cart operations are synchronous and short; the mutex is only held
//! for the duration of one state replacement, never across an await.

use std::sync::{Arc, Mutex};

use quickorder_core::{Cart, CartItem};

/// Shared handle to the cart store.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Creates a cart state pre-populated from a persisted snapshot.
    pub fn from_snapshot(items: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();
        cart.hydrate(items);
        CartState {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total_quantity());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Returns a snapshot of the current items, for persistence.
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.with_cart(|cart| cart.items.clone())
    }
}
