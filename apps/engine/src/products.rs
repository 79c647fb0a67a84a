//! # Catalog Sources
//!
//! Loads the static product list handed to the engine at startup.
//!
//! The catalog is read-only input: it is loaded once, validated once
//! during bootstrap, and never mutated afterwards. Two sources exist:
//! a JSON file in the documented wire shape, and a built-in demo
//! catalog for development and the smoke binary.

use std::path::Path;

use tracing::info;

use quickorder_core::{Category, Money, Product};

use crate::error::AppResult;

/// Loads a product list from a JSON file.
///
/// ## File Format
/// An array of `{id, name, price, category, isPrescription}` objects,
/// the same shape the frontend and the persisted cart snapshot use.
///
/// ## Example
/// ```rust,ignore
/// let products = products::from_json_file(Path::new("./catalog.json")).await?;
/// ```
pub async fn from_json_file(path: &Path) -> AppResult<Vec<Product>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;

    info!(
        path = %path.display(),
        count = products.len(),
        "Loaded catalog from file"
    );
    Ok(products)
}

/// Returns the built-in demo catalog.
///
/// A small pharmacy assortment covering every category, used by the
/// smoke binary and anywhere a catalog file is not configured.
pub fn demo_catalog() -> Vec<Product> {
    fn product(id: u32, name: &str, price: i64, category: Category, rx: bool) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: Money::from_cents(price),
            category,
            is_prescription: rx,
        }
    }

    vec![
        product(1, "Paracetamol 500mg", 15000, Category::PainRelief, false),
        product(2, "Ibuprofen 400mg", 18000, Category::PainRelief, false),
        product(3, "Amoxicillin 500mg", 45000, Category::Antibiotic, true),
        product(4, "Azithromycin 250mg", 62000, Category::Antibiotic, true),
        product(5, "Vitamin C 1000mg", 35000, Category::Supplement, false),
        product(6, "Multivitamin Complex", 52000, Category::Supplement, false),
        product(7, "Cetirizine 10mg", 22000, Category::Allergy, false),
        product(8, "Loratadine 10mg", 25000, Category::Allergy, false),
        product(9, "Omeprazole 20mg", 38000, Category::Gastro, false),
        product(10, "Antacid Suspension", 28000, Category::Gastro, false),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickorder_core::validation::validate_catalog;

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = demo_catalog();
        assert!(!catalog.is_empty());
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_demo_catalog_covers_every_category() {
        let catalog = demo_catalog();
        for category in Category::all().iter().filter(|c| !c.is_all()) {
            assert!(
                catalog.iter().any(|p| p.category == *category),
                "no product in {}",
                category
            );
        }
    }

    #[tokio::test]
    async fn test_from_json_file_round_trip() {
        let dir = std::env::temp_dir().join("quickorder-catalog-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalog.json");

        let json = serde_json::to_string(&demo_catalog()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = from_json_file(&path).await.unwrap();
        assert_eq!(loaded, demo_catalog());
    }

    #[tokio::test]
    async fn test_from_json_file_missing_is_error() {
        let result = from_json_file(Path::new("/nonexistent/catalog.json")).await;
        assert!(result.is_err());
    }
}
