//! # Product Cache Repository
//!
//! Storage operations for the cached product list.
//!
//! ## Cache Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cache-First Acquisition                              │
//! │                                                                         │
//! │  load()                                                                 │
//! │    │                                                                    │
//! │    ├── no blob under vitrine_products      → Ok(None)   (cold start)   │
//! │    ├── blob present, valid JSON array      → Ok(Some(products))         │
//! │    └── blob present, malformed             → Ok(None) + warning         │
//! │                                              (treated as absent,        │
//! │                                               NEVER an error)           │
//! │                                                                         │
//! │  The cache is forever-valid within a session: no staleness check,      │
//! │  no TTL. It only disappears when client storage is cleared externally  │
//! │  or clear() is called.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::repository::{blob_delete, blob_get, blob_put};
use crate::PRODUCTS_KEY;
use vitrine_core::Product;

/// Repository for the cached product list blob.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.product_cache();
///
/// if let Some(products) = repo.load().await? {
///     // cache hit - no network call
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProductCacheRepository {
    pool: SqlitePool,
}

impl ProductCacheRepository {
    /// Creates a new ProductCacheRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductCacheRepository { pool }
    }

    /// Loads the cached product list.
    ///
    /// ## Returns
    /// * `Ok(Some(products))` - cache hit, skip the network
    /// * `Ok(None)` - cache miss, OR a malformed blob (logged, treated as
    ///   absent so the acquisition chain falls through to the network)
    /// * `Err(StoreError)` - storage itself failed (connection, query)
    pub async fn load(&self) -> StoreResult<Option<Vec<Product>>> {
        let Some(raw) = blob_get(&self.pool, PRODUCTS_KEY).await? else {
            debug!("Product cache miss");
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Product>>(&raw) {
            Ok(products) => {
                debug!(count = products.len(), "Products loaded from cache");
                Ok(Some(products))
            }
            Err(e) => {
                // Externally corrupted storage must never break the widget
                warn!(error = %e, "Malformed product cache blob, treating as absent");
                Ok(None)
            }
        }
    }

    /// Stores the product list for future loads.
    ///
    /// Callers treat a failure here as non-fatal: loading still succeeded,
    /// caching is simply skipped this session.
    pub async fn store(&self, products: &[Product]) -> StoreResult<()> {
        let blob = serde_json::to_string(products)?;
        blob_put(&self.pool, PRODUCTS_KEY, &blob).await?;
        debug!(count = products.len(), "Products cached");
        Ok(())
    }

    /// Removes the cached list, forcing the next load onto the network.
    pub async fn clear(&self) -> StoreResult<()> {
        blob_delete(&self.pool, PRODUCTS_KEY).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{ClientStore, StoreConfig};
    use crate::repository::blob_put;
    use crate::PRODUCTS_KEY;
    use vitrine_core::fallback::fallback_products;

    async fn store() -> ClientStore {
        ClientStore::new(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_cold_start_is_a_miss() {
        let store = store().await;
        assert!(store.product_cache().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_then_load_round_trips() {
        let store = store().await;
        let repo = store.product_cache();

        let products = fallback_products();
        repo.store(&products).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 8);
        assert_eq!(loaded[0].id, products[0].id);
        assert_eq!(loaded[0].price, products[0].price);
    }

    #[tokio::test]
    async fn test_malformed_blob_reads_as_absent() {
        let store = store().await;

        blob_put(store.pool(), PRODUCTS_KEY, "{not json").await.unwrap();
        assert!(store.product_cache().load().await.unwrap().is_none());

        // Valid JSON of the wrong shape is just as absent
        blob_put(store.pool(), PRODUCTS_KEY, r#"{"a": 1}"#).await.unwrap();
        assert!(store.product_cache().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_forces_next_load_onto_network() {
        let store = store().await;
        let repo = store.product_cache();

        repo.store(&fallback_products()).await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }
}
