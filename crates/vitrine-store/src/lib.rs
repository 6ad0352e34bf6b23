//! # vitrine-store: Durable Client Storage for Vitrine
//!
//! This crate provides the durable client storage behind the carousel:
//! the cached product list and the favorite-id set, each an opaque JSON
//! blob under a fixed key.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Vitrine Data Flow                                 │
//! │                                                                         │
//! │  vitrine-session (acquisition chain, favorite toggles)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   vitrine-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  ClientStore  │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (cache.rs,   │    │  (embedded)  │  │   │
//! │  │   │               │    │  favorites.rs)│    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ blob get/put  │    │ 001_init.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file: <data dir>/vitrine/carousel.db                           │
//! │       kv_blobs: vitrine_products │ vitrine_favorites                   │
//! │                                                                         │
//! │  FAILURE POLICY                                                        │
//! │  ──────────────                                                        │
//! │  Reads: malformed blob → treated as absent (warn + None/empty)         │
//! │  Writes: best-effort; callers log and continue without durability      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Blob repositories (product cache, favorites)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitrine_store::{ClientStore, StoreConfig};
//!
//! let store = ClientStore::new(StoreConfig::new("carousel.db")).await?;
//!
//! // Cache-first read: None on miss OR malformed blob
//! if let Some(products) = store.product_cache().load().await? {
//!     /* skip the network */
//! }
//!
//! // Favorites load never fails
//! let favorites = store.favorites().load().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{ClientStore, StoreConfig};
pub use repository::cache::ProductCacheRepository;
pub use repository::favorites::FavoriteRepository;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key for the cached product list blob.
pub const PRODUCTS_KEY: &str = "vitrine_products";

/// Storage key for the favorite-id blob.
pub const FAVORITES_KEY: &str = "vitrine_favorites";
