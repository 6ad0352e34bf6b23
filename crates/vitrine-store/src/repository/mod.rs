//! # Repository Module
//!
//! Blob repositories for the Vitrine client storage.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts storage access behind a clean API.   │
//! │                                                                         │
//! │  vitrine-session                                                       │
//! │       │                                                                 │
//! │       │  store.product_cache().load()                                  │
//! │       │  store.favorites().save(&set)                                  │
//! │       ▼                                                                 │
//! │  ProductCacheRepository / FavoriteRepository                           │
//! │       │                                                                 │
//! │       │  kv_blobs get/put (shared helpers in this module)              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • The malformed-blob-is-absent policy lives in one place              │
//! │  • SQL is isolated in one place                                        │
//! │  • Easy to test against an in-memory store                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`cache::ProductCacheRepository`] - Cached product list blob
//! - [`favorites::FavoriteRepository`] - Favorite-id blob

pub mod cache;
pub mod favorites;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::StoreResult;

/// Reads the raw blob stored under `key`, if any.
pub(crate) async fn blob_get(pool: &SqlitePool, key: &str) -> StoreResult<Option<String>> {
    let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_blobs WHERE key = ?1")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(value,)| value))
}

/// Writes (upserts) the raw blob stored under `key`.
pub(crate) async fn blob_put(pool: &SqlitePool, key: &str, value: &str) -> StoreResult<()> {
    sqlx::query(
        r#"
        INSERT INTO kv_blobs (key, value, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

/// Deletes the blob stored under `key`. Deleting a missing key is fine.
pub(crate) async fn blob_delete(pool: &SqlitePool, key: &str) -> StoreResult<()> {
    sqlx::query("DELETE FROM kv_blobs WHERE key = ?1")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(())
}
