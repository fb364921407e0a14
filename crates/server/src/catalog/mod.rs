//! Catalog service: category membership, display ordering, append contract.
//!
//! The service validates categories against the *document's* bucket names,
//! so the write path can never grow the category set implicitly.

pub mod store;

pub use store::{CatalogError, CatalogStore, FileCatalogStore};

use std::sync::Arc;

use rand::seq::SliceRandom;

use geekco_core::Product;

/// Catalog operations over a [`CatalogStore`].
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    /// Create a service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Products of one category, freshly shuffled on every call.
    ///
    /// The shuffle is uniform and unseeded; callers get no ordering
    /// guarantee, and two consecutive calls may differ.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] if the document is missing,
    /// [`CatalogError::UnknownCategory`] if no bucket matches (exact,
    /// case-sensitive comparison).
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let catalog = self.store.load().await?;
        let bucket = catalog
            .bucket(category)
            .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))?;

        let mut products = bucket.products.clone();
        products.shuffle(&mut rand::rng());
        Ok(products)
    }

    /// Every product, in document bucket order then insertion order.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] if the document is missing.
    pub async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.load().await?.all_products())
    }

    /// Append `product` to `category` and persist the full document.
    ///
    /// Initializes the document first if it does not exist yet.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidCategory`] if `category` is not one of the
    /// document's bucket names; the stored document is left untouched.
    pub async fn add_product(&self, category: &str, product: Product) -> Result<(), CatalogError> {
        self.store.initialize().await?;
        let mut catalog = self.store.load().await?;

        let Some(bucket) = catalog.bucket_mut(category) else {
            return Err(CatalogError::InvalidCategory(category.to_string()));
        };
        bucket.products.push(product);

        self.store.save(&catalog).await?;
        tracing::info!(category, "product added to catalog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_in(dir: &tempfile::TempDir) -> CatalogService {
        CatalogService::new(Arc::new(FileCatalogStore::new(
            dir.path().join("products.json"),
        )))
    }

    fn product(name: &str, price: f64) -> Product {
        Product {
            product_name: name.to_string(),
            product_price: price,
            product_image: format!("https://example.com/{name}.png"),
        }
    }

    #[tokio::test]
    async fn test_add_then_list_all_contains_product_exactly_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_in(&dir);

        service
            .add_product("Gatos", product("grumpy", 12.5))
            .await
            .expect("add");

        let all = service.list_all().await.expect("list_all");
        let matches = all.iter().filter(|p| p.product_name == "grumpy").count();
        assert_eq!(matches, 1);
    }

    #[tokio::test]
    async fn test_add_product_initializes_missing_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_in(&dir);

        // No initialize call anywhere: the write path bootstraps the file.
        service
            .add_product("Random", product("anything", 1.0))
            .await
            .expect("add on fresh environment");

        assert!(dir.path().join("products.json").exists());
    }

    #[tokio::test]
    async fn test_add_with_unrecognized_category_fails_without_mutation() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_in(&dir);
        service
            .add_product("Gatos", product("existing", 5.0))
            .await
            .expect("seed");
        let before = tokio::fs::read(dir.path().join("products.json"))
            .await
            .expect("read");

        let err = service
            .add_product("Pinguins", product("rejected", 5.0))
            .await
            .expect_err("unknown category");

        assert!(matches!(err, CatalogError::InvalidCategory(_)));
        assert_eq!(err.to_string(), "Invalid category");
        let after = tokio::fs::read(dir.path().join("products.json"))
            .await
            .expect("read");
        assert_eq!(before, after, "document must be untouched");
    }

    #[tokio::test]
    async fn test_category_match_is_case_sensitive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_in(&dir);

        let err = service
            .add_product("gatos", product("lowercase", 5.0))
            .await
            .expect_err("case mismatch");
        assert!(matches!(err, CatalogError::InvalidCategory(_)));
    }

    #[tokio::test]
    async fn test_list_by_category_is_permutation_of_stored_products() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_in(&dir);
        for i in 0..6 {
            service
                .add_product("Macacos", product(&format!("monkey-{i}"), f64::from(i)))
                .await
                .expect("add");
        }

        let mut listed: Vec<String> = service
            .list_by_category("Macacos")
            .await
            .expect("list")
            .into_iter()
            .map(|p| p.product_name)
            .collect();
        listed.sort();

        let expected: Vec<String> = (0..6).map(|i| format!("monkey-{i}")).collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn test_list_by_category_unknown_category() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_in(&dir);
        service
            .add_product("Gatos", product("seed", 1.0))
            .await
            .expect("seed");

        let err = service
            .list_by_category("Pinguins")
            .await
            .expect_err("unknown category");
        assert!(matches!(err, CatalogError::UnknownCategory(_)));
        assert_eq!(err.to_string(), "Category not found");
    }

    #[tokio::test]
    async fn test_list_by_category_missing_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_in(&dir);

        let err = service
            .list_by_category("Gatos")
            .await
            .expect_err("fresh environment");
        assert!(matches!(err, CatalogError::NotFound));
    }

    #[tokio::test]
    async fn test_list_all_order_is_stable_across_calls() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_in(&dir);
        // "Random" precedes "Gatos" in document order; insertion order
        // within a bucket is append order.
        service
            .add_product("Gatos", product("cat-a", 1.0))
            .await
            .expect("add");
        service
            .add_product("Gatos", product("cat-b", 2.0))
            .await
            .expect("add");
        service
            .add_product("Random", product("random-a", 3.0))
            .await
            .expect("add");

        for _ in 0..3 {
            let names: Vec<String> = service
                .list_all()
                .await
                .expect("list_all")
                .into_iter()
                .map(|p| p.product_name)
                .collect();
            assert_eq!(names, ["random-a", "cat-a", "cat-b"]);
        }
    }
}
