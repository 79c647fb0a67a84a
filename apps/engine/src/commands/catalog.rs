//! # Catalog Commands
//!
//! Engine commands for product search and category filtering.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Filter Flow                                  │
//! │                                                                         │
//! │  User types "amox" (frontend debounces the keystrokes)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_search_query(catalog, "amox")                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog recomputes the filtered view:                                  │
//! │    category equality (skipped for All), then case-insensitive           │
//! │    substring on the trimmed query                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogResponse { products, searchQuery, selectedCategory }            │
//! │  rendered as the product list                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store applies every call immediately; debouncing is the UI's job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use quickorder_core::{Catalog, Category, Product};

use crate::state::CatalogState;

/// Catalog view for the product list screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    /// The filtered products, in catalog order.
    pub products: Vec<Product>,
    /// The raw search text as typed.
    pub search_query: String,
    /// The active category filter.
    pub selected_category: Category,
}

impl From<&Catalog> for CatalogResponse {
    fn from(catalog: &Catalog) -> Self {
        CatalogResponse {
            products: catalog.filtered_products().to_vec(),
            search_query: catalog.search_query().to_string(),
            selected_category: catalog.selected_category(),
        }
    }
}

/// Gets the current catalog view (filtered products + criteria).
pub fn get_catalog(catalog: &CatalogState) -> CatalogResponse {
    debug!("get_catalog command");
    catalog.with_catalog(|c| CatalogResponse::from(c))
}

/// Replaces the search text and returns the recomputed view.
///
/// No trimming or validation at this boundary; always succeeds.
pub fn set_search_query(catalog: &CatalogState, text: &str) -> CatalogResponse {
    debug!(query = %text, "set_search_query command");

    catalog.with_catalog_mut(|c| {
        c.set_search_query(text);
        CatalogResponse::from(&*c)
    })
}

/// Replaces the category filter and returns the recomputed view.
pub fn set_selected_category(catalog: &CatalogState, category: Category) -> CatalogResponse {
    debug!(category = %category, "set_selected_category command");

    catalog.with_catalog_mut(|c| {
        c.set_selected_category(category);
        CatalogResponse::from(&*c)
    })
}

/// Returns the fixed category list used to populate the filter tabs.
pub fn categories() -> &'static [Category] {
    Category::all()
}

// =============================================================================
// Unit Tests
// =============================================================================
