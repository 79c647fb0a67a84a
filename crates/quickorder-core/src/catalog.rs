//! # Catalog Store
//!
//! Owns the full product list and the current filter criteria, and keeps
//! the filtered view in sync with them.
//!
//! ## Filtering Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Filtering                                    │
//! │                                                                         │
//! │  products (immutable, catalog order)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  category filter ── skipped when selected_category == All               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  text filter ────── case-insensitive substring on name,                 │
//! │       │             skipped when the trimmed query is empty             │
//! │       ▼                                                                 │
//! │  filtered (derived view, catalog order preserved)                       │
//! │                                                                         │
//! │  The stored view is recomputed from the pure filter function on        │
//! │  every criteria change; it is never mutated independently, so it       │
//! │  cannot drift from (products, category, query).                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The debounce on the search box is a UI concern. The store makes no
//! timing assumptions and applies every call it receives immediately.

use crate::types::{Category, Product};

/// The product catalog with its current filter criteria.
///
/// The product list is static for the session: it is handed over once at
/// construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Full immutable product list, in catalog order.
    products: Vec<Product>,

    /// Current search text, verbatim as typed (trimming happens at
    /// match time, not at this boundary).
    search_query: String,

    /// Current category filter; `All` means no restriction.
    selected_category: Category,

    /// Derived view: `products` restricted by the criteria above.
    filtered: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog over a static product list.
    ///
    /// The filter starts wide open (`All`, empty query), so the initial
    /// view is the whole catalog.
    pub fn new(products: Vec<Product>) -> Self {
        let filtered = products.clone();
        Catalog {
            products,
            search_query: String::new(),
            selected_category: Category::All,
            filtered,
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Replaces the search text and recomputes the filtered view.
    ///
    /// No trimming or validation happens here; the raw text is kept so
    /// the UI can echo back exactly what was typed.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
        self.apply_filters();
    }

    /// Replaces the category filter and recomputes the filtered view.
    pub fn set_selected_category(&mut self, category: Category) {
        self.selected_category = category;
        self.apply_filters();
    }

    /// Recomputes `filtered` from the pure filter function.
    fn apply_filters(&mut self) {
        self.filtered = Self::filter(&self.products, self.selected_category, &self.search_query);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the current filtered view, in catalog order.
    #[inline]
    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered
    }

    /// Returns the full, unfiltered catalog.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the current search text.
    #[inline]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the current category filter.
    #[inline]
    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    // =========================================================================
    // Pure Filter
    // =========================================================================

    /// The filter function the stored view is derived from.
    ///
    /// ## Behavior
    /// - Category first: equality against `category`, skipped for `All`
    /// - Then text: case-insensitive substring match of the trimmed
    ///   `query` against the product name, skipped when the trimmed
    ///   query is empty
    /// - Catalog ordering is preserved
    pub fn filter(products: &[Product], category: Category, query: &str) -> Vec<Product> {
        let query = query.trim().to_lowercase();

        products
            .iter()
            .filter(|p| category.is_all() || p.category == category)
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u32, name: &str, category: Category) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: Money::from_cents(10000),
            category,
            is_prescription: false,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Paracetamol 500mg", Category::PainRelief),
            product(2, "Amoxicillin 500mg", Category::Antibiotic),
            product(3, "Azithromycin 250mg", Category::Antibiotic),
            product(4, "Vitamin C 1000mg", Category::Supplement),
        ]
    }

    #[test]
    fn test_initial_view_is_full_catalog() {
        let catalog = Catalog::new(sample_catalog());

        assert_eq!(catalog.filtered_products().len(), 4);
        assert_eq!(catalog.search_query(), "");
        assert_eq!(catalog.selected_category(), Category::All);
    }

    #[test]
    fn test_category_filter() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_selected_category(Category::Antibiotic);

        let ids: Vec<u32> = catalog.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_all_sentinel_restores_full_view() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_selected_category(Category::Supplement);
        catalog.set_selected_category(Category::All);

        assert_eq!(catalog.filtered_products().len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_search_query("AMOX");

        let ids: Vec<u32> = catalog.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_search_trims_whitespace() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_search_query("  vitamin  ");

        let ids: Vec<u32> = catalog.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4]);

        // the raw text is preserved for the UI
        assert_eq!(catalog.search_query(), "  vitamin  ");
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_search_query("   ");

        assert_eq!(catalog.filtered_products().len(), 4);
    }

    #[test]
    fn test_category_then_search() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_selected_category(Category::Antibiotic);
        catalog.set_search_query("amox");

        let names: Vec<&str> = catalog
            .filtered_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Amoxicillin 500mg"]);
    }

    #[test]
    fn test_filtered_view_preserves_catalog_order() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_search_query("mg");

        let ids: Vec<u32> = catalog.filtered_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    /// The stored view must be a pure function of the latest criteria,
    /// independent of the order the criteria were set in.
    #[test]
    fn test_filter_purity_independent_of_call_order() {
        let products = sample_catalog();

        let mut a = Catalog::new(products.clone());
        a.set_search_query("zzz");
        a.set_selected_category(Category::Antibiotic);
        a.set_search_query("amox");

        let mut b = Catalog::new(products.clone());
        b.set_selected_category(Category::Antibiotic);
        b.set_search_query("amox");

        assert_eq!(a.filtered_products(), b.filtered_products());
        assert_eq!(
            a.filtered_products(),
            Catalog::filter(&products, Category::Antibiotic, "amox").as_slice()
        );
    }

    #[test]
    fn test_setting_same_query_twice_is_idempotent() {
        let mut catalog = Catalog::new(sample_catalog());
        catalog.set_search_query("amox");
        let first = catalog.filtered_products().to_vec();
        catalog.set_search_query("amox");

        assert_eq!(catalog.filtered_products(), first.as_slice());
    }
}
