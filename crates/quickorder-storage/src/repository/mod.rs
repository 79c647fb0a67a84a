//! # Repository Module
//!
//! Repository implementations for Quick Order.
//!
//! The repository pattern keeps SQL isolated behind a clean API:
//! commands talk to `storage.cart()`, never to the pool directly.
//!
//! ## Available Repositories
//!
//! - [`cart::CartRepository`] - Cart snapshot load/save/clear

pub mod cart;
