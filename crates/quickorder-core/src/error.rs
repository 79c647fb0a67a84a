//! # Error Types
//!
//! Domain-specific error types for quickorder-core.
//!
//! The error surface here is deliberately narrow: cart and catalog
//! commands are total and never fail, so the only domain errors are the
//! catalog-validation failures raised once at load time.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog entry validation errors.
///
/// Raised when the static product list handed over at startup does not
/// satisfy the catalog invariants. The stores themselves never validate;
/// they trust a catalog that passed this check once.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("product {id}: {field} is required")]
    Required { id: u32, field: &'static str },

    /// Field value is too long.
    #[error("product {id}: {field} must be at most {max} characters")]
    TooLong {
        id: u32,
        field: &'static str,
        max: usize,
    },

    /// Price must not be negative.
    #[error("product {id}: price must not be negative")]
    NegativePrice { id: u32 },

    /// A product may not be tagged with the `All` filter sentinel.
    #[error("product {id}: 'All' is not a valid product category")]
    SentinelCategory { id: u32 },

    /// Two catalog entries share an id.
    #[error("duplicate product id {id} in catalog")]
    DuplicateId { id: u32 },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
