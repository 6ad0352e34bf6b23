//! # Product Acquisition Chain
//!
//! Acquires the product list with cache-first, proxy-fetch, fallback
//! resilience.
//!
//! ## Acquisition Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ProductFeed::load()                                 │
//! │                                                                         │
//! │  1. Cache read (vitrine_products blob)                                  │
//! │       ├── hit, parses, non-empty ──► return (NO network call)           │
//! │       └── miss / malformed / empty ──► fall through                     │
//! │                                                                         │
//! │  2. Network fetch                                                       │
//! │       │  proxy configured:  GET proxy?url=<feed>                        │
//! │       │    outer non-2xx            → failure                           │
//! │       │    envelope.contents        → deserialized a SECOND time        │
//! │       │  no proxy:          GET <feed>, single JSON parse               │
//! │       │                                                                 │
//! │       ├── ok ──► sanitize ──► best-effort cache write ──► return        │
//! │       │          (cache-write failure is logged, load still succeeds)   │
//! │       └── any failure ──► fall through                                  │
//! │                                                                         │
//! │  3. Fallback catalog (8 demo products) - NEVER cached                   │
//! │                                                                         │
//! │  load() is infallible by construction: it always resolves to a          │
//! │  non-empty sequence (real data or fallback). The typed FetchError       │
//! │  exists only inside this chain, for logging and tests.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::FeedSettings;
use crate::error::FetchError;
use vitrine_core::fallback::fallback_products;
use vitrine_core::types::sanitize_feed;
use vitrine_core::Product;
use vitrine_store::ClientStore;

// =============================================================================
// Proxy Envelope
// =============================================================================

/// The pass-through proxy wraps the upstream body in this envelope. The
/// `contents` field is itself serialized JSON and must be deserialized a
/// second time.
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: String,
}

// =============================================================================
// Product Feed
// =============================================================================

/// Acquires the product list. Single-shot per session: the session calls
/// [`load`](ProductFeed::load) once at activation and never again.
#[derive(Debug, Clone)]
pub struct ProductFeed {
    http: reqwest::Client,
    settings: FeedSettings,
}

impl ProductFeed {
    /// Creates a feed with a fresh HTTP client.
    ///
    /// No timeout beyond the transport default is imposed - the load runs
    /// to completion once started, and activation awaits it.
    pub fn new(settings: FeedSettings) -> Self {
        ProductFeed {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// Runs the full acquisition chain. Always resolves to a non-empty
    /// product list; every failure is logged and recovered internally.
    pub async fn load(&self, store: &ClientStore) -> Vec<Product> {
        // Step 1: cache-first. No staleness check - the cache is
        // forever-valid within a session.
        match store.product_cache().load().await {
            Ok(Some(cached)) => {
                let (products, rejected) = sanitize_feed(cached);
                log_rejections("cache", &rejected);
                if !products.is_empty() {
                    info!(count = products.len(), "Products loaded from cache");
                    return products;
                }
                debug!("Cached list empty after sanitation, falling through");
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Cache read failed, falling through"),
        }

        // Step 2: network.
        match self.fetch_remote().await {
            Ok(products) => {
                info!(count = products.len(), "Products fetched from feed");

                // Step 3: best-effort cache write. A quota or disk failure
                // here is non-fatal; caching is simply skipped.
                if let Err(e) = store.product_cache().store(&products).await {
                    warn!(error = %e, "Could not cache products, continuing without cache");
                }

                products
            }
            Err(e) => {
                // Step 4: the guaranteed-available fallback, never cached.
                warn!(error = %e, "Feed unavailable, using fallback catalog");
                fallback_products()
            }
        }
    }

    /// Fetches and parses the remote feed, via the proxy when configured.
    async fn fetch_remote(&self) -> Result<Vec<Product>, FetchError> {
        let request_url = self.request_url()?;
        debug!(url = %request_url, "Fetching product feed");

        let response = self.http.get(request_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let raw = match self.settings.proxy_url {
            Some(_) => {
                // Outer parse: the proxy envelope
                let envelope: ProxyEnvelope = response
                    .json()
                    .await
                    .map_err(|e| FetchError::Envelope(e.to_string()))?;
                envelope.contents
            }
            None => response.text().await?,
        };

        // Inner parse: the product array itself
        let parsed: Vec<Product> = serde_json::from_str(&raw)?;

        let (products, rejected) = sanitize_feed(parsed);
        log_rejections("feed", &rejected);

        if products.is_empty() {
            return Err(FetchError::EmptyFeed);
        }

        Ok(products)
    }

    /// Builds the request URL: the feed URL itself, or the proxy URL with
    /// the feed URL as its `url` query parameter.
    fn request_url(&self) -> Result<Url, FetchError> {
        match self.settings.proxy_url {
            Some(ref proxy) => {
                let mut url = Url::parse(proxy)?;
                url.query_pairs_mut()
                    .append_pair("url", &self.settings.products_url);
                Ok(url)
            }
            None => Ok(Url::parse(&self.settings.products_url)?),
        }
    }
}

/// Logs each record dropped by sanitation.
fn log_rejections(source: &str, rejected: &[vitrine_core::CoreError]) {
    for reason in rejected {
        warn!(source, %reason, "Dropped malformed product record");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_store::{ClientStore, StoreConfig};

    /// Feed settings pointing at a port nothing listens on: any network
    /// attempt fails fast with a connect error.
    fn unreachable_feed(proxy: bool) -> FeedSettings {
        FeedSettings {
            products_url: "http://127.0.0.1:9/products.json".to_string(),
            proxy_url: proxy.then(|| "http://127.0.0.1:9/get".to_string()),
        }
    }

    async fn store() -> ClientStore {
        ClientStore::new(StoreConfig::in_memory()).await.unwrap()
    }

    #[test]
    fn test_request_url_direct() {
        let feed = ProductFeed::new(FeedSettings {
            products_url: "https://feeds.example/products.json".to_string(),
            proxy_url: None,
        });
        assert_eq!(
            feed.request_url().unwrap().as_str(),
            "https://feeds.example/products.json"
        );
    }

    #[test]
    fn test_request_url_wraps_feed_in_proxy_query() {
        let feed = ProductFeed::new(FeedSettings {
            products_url: "https://feeds.example/products.json".to_string(),
            proxy_url: Some("https://proxy.example/get".to_string()),
        });

        let url = feed.request_url().unwrap();
        assert_eq!(url.host_str(), Some("proxy.example"));
        // The feed URL rides along percent-encoded in the query
        assert!(url.as_str().contains("url=https%3A%2F%2Ffeeds.example"));
    }

    #[test]
    fn test_proxy_envelope_double_parse() {
        // The inner payload arrives as a STRING of JSON, not as JSON
        let outer = r#"{"contents": "[{\"id\": 1, \"name\": \"Tişört\", \"price\": 99.99}]"}"#;
        let envelope: ProxyEnvelope = serde_json::from_str(outer).unwrap();

        let products: Vec<Product> = serde_json::from_str(&envelope.contents).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price.cents(), 9999);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let store = store().await;

        // Seed the cache, then point the feed at an unreachable endpoint:
        // a cache hit must return without ever attempting the network
        let seeded = fallback_products();
        store.product_cache().store(&seeded).await.unwrap();

        let feed = ProductFeed::new(unreachable_feed(true));
        let products = feed.load(&store).await;
        assert_eq!(products.len(), 8);
        assert_eq!(products[0].id, seeded[0].id);
    }

    #[tokio::test]
    async fn test_total_failure_falls_back_and_never_caches() {
        let store = store().await;

        let feed = ProductFeed::new(unreachable_feed(true));
        let products = feed.load(&store).await;

        // The fixed 8-item fallback list
        assert_eq!(products.len(), 8);
        assert_eq!(products[0].name, "Standart Kalıp Erkek Tişört");

        // The fallback is never written to cache
        assert!(store.product_cache().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_direct_fetch_failure_also_falls_back() {
        let store = store().await;

        let feed = ProductFeed::new(unreachable_feed(false));
        let products = feed.load(&store).await;
        assert_eq!(products.len(), 8);
    }

    #[tokio::test]
    async fn test_malformed_cache_falls_through_to_fallback() {
        let store = store().await;

        // A malformed blob reads as absent; with the network down the
        // chain terminates in the fallback
        sqlx::query("INSERT INTO kv_blobs (key, value, updated_at) VALUES (?1, ?2, ?3)")
            .bind(vitrine_store::PRODUCTS_KEY)
            .bind("{corrupt")
            .bind("2024-01-01T00:00:00Z")
            .execute(store.pool())
            .await
            .unwrap();

        let feed = ProductFeed::new(unreachable_feed(true));
        let products = feed.load(&store).await;
        assert_eq!(products.len(), 8);
        assert_eq!(products[7].name, "Erkek Polo Tişört");
    }
}
