//! # Catalog State
//!
//! Holds the product catalog and its filter criteria behind a mutex.
//!
//! The product list itself never changes after startup; the mutex
//! serializes filter-criteria replacement and keeps the derived view
//! consistent with them (single-writer, multiple-reader discipline).

use std::sync::{Arc, Mutex};

use quickorder_core::{Catalog, Product};

/// Shared handle to the catalog store.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    /// Creates a catalog state over a static product list.
    ///
    /// The list is expected to have passed catalog validation during
    /// bootstrap.
    pub fn new(products: Vec<Product>) -> Self {
        CatalogState {
            catalog: Arc::new(Mutex::new(Catalog::new(products))),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickorder_core::{Category, Money};

    fn product(id: u32, category: Category) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price: Money::from_cents(1000),
            category,
            is_prescription: false,
        }
    }

    #[test]
    fn test_clones_share_filter_state() {
        let state = CatalogState::new(vec![
            product(1, Category::Allergy),
            product(2, Category::Gastro),
        ]);
        let other = state.clone();

        state.with_catalog_mut(|c| c.set_selected_category(Category::Gastro));

        let ids: Vec<u32> =
            other.with_catalog(|c| c.filtered_products().iter().map(|p| p.id).collect());
        assert_eq!(ids, vec![2]);
    }
}
