//! The catalog document: categorized product lists.
//!
//! The whole catalog is one JSON document that is read in full and rewritten
//! in full on every mutation. Category names are unique within the document
//! and the set of categories is fixed at initialization - it never grows
//! implicitly.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// The categories a fresh catalog document is initialized with.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Random",
    "IA",
    "Macacos",
    "Gatos",
    "Cachorros",
    "Animais",
    "MaoTsé",
    "Politicos",
];

/// The full catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    /// Ordered sequence of category buckets.
    pub products_by_category: Vec<CategoryBucket>,
}

/// A named category grouping within the catalog document.
///
/// Products are append-only; insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub category: String,
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// A fresh catalog with the fixed category set, each bucket empty.
    #[must_use]
    pub fn with_default_categories() -> Self {
        Self {
            products_by_category: DEFAULT_CATEGORIES
                .iter()
                .map(|category| CategoryBucket {
                    category: (*category).to_string(),
                    products: Vec::new(),
                })
                .collect(),
        }
    }

    /// Look up a bucket by exact, case-sensitive category name.
    #[must_use]
    pub fn bucket(&self, category: &str) -> Option<&CategoryBucket> {
        self.products_by_category
            .iter()
            .find(|bucket| bucket.category == category)
    }

    /// Mutable bucket lookup by exact, case-sensitive category name.
    pub fn bucket_mut(&mut self, category: &str) -> Option<&mut CategoryBucket> {
        self.products_by_category
            .iter_mut()
            .find(|bucket| bucket.category == category)
    }

    /// Whether `category` names one of the document's buckets.
    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.bucket(category).is_some()
    }

    /// Every product in the document, in bucket order then insertion order.
    #[must_use]
    pub fn all_products(&self) -> Vec<Product> {
        self.products_by_category
            .iter()
            .flat_map(|bucket| bucket.products.iter().cloned())
            .collect()
    }
}
