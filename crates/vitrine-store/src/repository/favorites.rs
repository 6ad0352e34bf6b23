//! # Favorite Repository
//!
//! Storage operations for the favorite-id set.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Write-Through Favorites                               │
//! │                                                                         │
//! │  load()  - once, at activation. Missing or malformed blob yields an     │
//! │            EMPTY set - this path can never produce an error.            │
//! │                                                                         │
//! │  save()  - after EVERY toggle (write-through, no batching). A failure   │
//! │            is logged by the caller and ignored: favoriting stays        │
//! │            usable for the rest of the session even if it cannot         │
//! │            survive a reload.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::repository::{blob_get, blob_put};
use crate::FAVORITES_KEY;
use vitrine_core::FavoriteSet;

/// Repository for the favorite-id blob.
#[derive(Debug, Clone)]
pub struct FavoriteRepository {
    pool: SqlitePool,
}

impl FavoriteRepository {
    /// Creates a new FavoriteRepository.
    pub fn new(pool: SqlitePool) -> Self {
        FavoriteRepository { pool }
    }

    /// Loads the favorite set.
    ///
    /// Missing or malformed data yields an empty set, never an error -
    /// even a storage-level failure degrades to "no favorites yet" here,
    /// because favoriting must remain usable regardless.
    pub async fn load(&self) -> FavoriteSet {
        let raw = match blob_get(&self.pool, FAVORITES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored favorites");
                return FavoriteSet::new();
            }
            Err(e) => {
                warn!(error = %e, "Favorites read failed, starting empty");
                return FavoriteSet::new();
            }
        };

        match serde_json::from_str::<FavoriteSet>(&raw) {
            Ok(favorites) => {
                debug!(count = favorites.len(), "Favorites loaded");
                favorites
            }
            Err(e) => {
                warn!(error = %e, "Malformed favorites blob, starting empty");
                FavoriteSet::new()
            }
        }
    }

    /// Persists the favorite set (write-through after every toggle).
    ///
    /// The caller logs and ignores failures - see the module docs.
    pub async fn save(&self, favorites: &FavoriteSet) -> StoreResult<()> {
        let blob = serde_json::to_string(favorites)?;
        blob_put(&self.pool, FAVORITES_KEY, &blob).await?;
        debug!(count = favorites.len(), "Favorites persisted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{ClientStore, StoreConfig};
    use crate::repository::blob_put;
    use crate::FAVORITES_KEY;
    use vitrine_core::{FavoriteSet, ProductId};

    async fn store() -> ClientStore {
        ClientStore::new(StoreConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_missing_blob_yields_empty_set() {
        let store = store().await;
        assert!(store.favorites().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = store().await;
        let repo = store.favorites();

        let mut favorites = FavoriteSet::new();
        favorites.toggle(ProductId(2));
        favorites.toggle(ProductId(7));
        repo.save(&favorites).await.unwrap();

        let loaded = repo.load().await;
        assert_eq!(loaded, favorites);
        assert!(loaded.contains(ProductId(7)));
    }

    #[tokio::test]
    async fn test_malformed_blob_yields_empty_set() {
        let store = store().await;

        blob_put(store.pool(), FAVORITES_KEY, "not-an-array").await.unwrap();
        assert!(store.favorites().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_legacy_bare_array_format_is_readable() {
        let store = store().await;

        // Earlier widget deployments wrote a plain JSON id array
        blob_put(store.pool(), FAVORITES_KEY, "[1,5,8]").await.unwrap();
        let loaded = store.favorites().load().await;
        assert_eq!(loaded.len(), 3);
        assert!(loaded.contains(ProductId(5)));
    }
}
