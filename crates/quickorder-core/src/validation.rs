//! # Validation Module
//!
//! Catalog validation for Quick Order.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog load (THIS MODULE)                                   │
//! │  ├── Every product checked once, before the stores ever see it         │
//! │  └── A bad catalog aborts bootstrap; there is no partial load          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store operations                                             │
//! │  └── NONE by design - commands are total, out-of-range input           │
//! │      degrades to a no-op (the UI pre-constrains its inputs)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single catalog entry.
///
/// ## Rules
/// - Name must not be blank and must be at most 200 characters
/// - Price must not be negative
/// - Category must not be the `All` filter sentinel
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    let name = product.name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            id: product.id,
            field: "name",
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            id: product.id,
            field: "name",
            max: 200,
        });
    }

    if product.price.cents() < 0 {
        return Err(ValidationError::NegativePrice { id: product.id });
    }

    if product.category.is_all() {
        return Err(ValidationError::SentinelCategory { id: product.id });
    }

    Ok(())
}

/// Validates a full catalog: every entry individually, plus id uniqueness.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        validate_product(product)?;

        if !seen.insert(product.id) {
            return Err(ValidationError::DuplicateId { id: product.id });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Category;

    fn product(id: u32) -> Product {
        Product {
            id,
            name: "Cetirizine 10mg".to_string(),
            price: Money::from_cents(22000),
            category: Category::Allergy,
            is_prescription: false,
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(validate_product(&product(1)).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut p = product(1);
        p.name = "   ".to_string();
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::Required { field: "name", .. })
        ));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let mut p = product(1);
        p.name = "x".repeat(201);
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut p = product(1);
        p.price = Money::from_cents(-1);
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::NegativePrice { id: 1 })
        ));
    }

    #[test]
    fn test_sentinel_category_rejected() {
        let mut p = product(1);
        p.category = Category::All;
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::SentinelCategory { id: 1 })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = vec![product(1), product(2), product(1)];
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::DuplicateId { id: 1 })
        ));
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = vec![product(1), product(2), product(3)];
        assert!(validate_catalog(&catalog).is_ok());
    }
}
