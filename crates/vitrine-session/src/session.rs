//! # Carousel Session
//!
//! The live widget session: activation gating, event handling, and frame
//! production.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CarouselSession::activate()                                            │
//! │                                                                         │
//! │   1. Probe the host                                                     │
//! │        host absent     → ActivationError::HostMissing  (no I/O done)    │
//! │        already mounted → ActivationError::AlreadyMounted (idempotence)  │
//! │   2. Load favorites (never fails: worst case an empty set)              │
//! │   3. Run the product acquisition chain (never fails: worst case         │
//! │      the fallback catalog)                                              │
//! │   4. Size the engine from the initial viewport width                    │
//! │                                                                         │
//! │  After activation every input maps to exactly one method:               │
//! │    navigate_previous / navigate_next   paging controls                  │
//! │    resize                              settled viewport width           │
//! │    swipe_begin / swipe_move / swipe_end  touch gesture                  │
//! │    toggle_favorite                     write-through persistence        │
//! │    open_product                        detail-URL lookup                │
//! │  and frame() snapshots the whole state for the host to draw.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use crate::error::ActivationError;
use crate::fetch::ProductFeed;
use crate::render::{render_frame, RenderFrame};
use vitrine_core::{CarouselEngine, FavoriteSet, Product, ProductId, SwipeCommand, SwipeTracker};
use vitrine_store::ClientStore;

// =============================================================================
// Host Probe
// =============================================================================

/// Answers the two environment questions activation asks before doing any
/// work. Implemented by the embedding host; tests use stubs.
pub trait HostProbe {
    /// Is the mount point present in the host surface?
    fn host_present(&self) -> bool;

    /// Has a carousel already been mounted there?
    fn carousel_mounted(&self) -> bool;
}

// =============================================================================
// Carousel Session
// =============================================================================

/// An activated carousel: products, favorites, paging engine, and the
/// in-flight swipe gesture.
///
/// The session owns the store handle so favorite toggles can write
/// through immediately.
#[derive(Debug)]
pub struct CarouselSession {
    store: ClientStore,
    products: Vec<Product>,
    favorites: FavoriteSet,
    engine: CarouselEngine,
    swipe: SwipeTracker,
}

impl CarouselSession {
    /// Activates a session against a probed host.
    ///
    /// The probe gates BEFORE any load: when the host is missing or a
    /// carousel is already mounted, no storage or network I/O happens.
    pub async fn activate(
        probe: &dyn HostProbe,
        store: ClientStore,
        feed: &ProductFeed,
        viewport_width: u32,
    ) -> Result<CarouselSession, ActivationError> {
        if !probe.host_present() {
            debug!("Host surface absent, skipping activation");
            return Err(ActivationError::HostMissing);
        }
        if probe.carousel_mounted() {
            debug!("Carousel already mounted, skipping activation");
            return Err(ActivationError::AlreadyMounted);
        }

        let favorites = store.favorites().load().await;
        let products = feed.load(&store).await;
        let engine = CarouselEngine::new(products.len(), viewport_width);

        info!(
            products = products.len(),
            favorites = favorites.len(),
            items_per_view = engine.items_per_view(),
            "Carousel session activated"
        );

        Ok(CarouselSession {
            store,
            products,
            favorites,
            engine,
            swipe: SwipeTracker::default(),
        })
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Pages one step back. Returns whether the offset changed.
    pub fn navigate_previous(&mut self) -> bool {
        self.engine.navigate_previous()
    }

    /// Pages one step forward. Returns whether the offset changed.
    pub fn navigate_next(&mut self) -> bool {
        self.engine.navigate_next()
    }

    /// Applies a settled viewport width (post-debounce). The engine
    /// re-derives its column count and clamps the offset if the new
    /// layout shrank the navigable range.
    pub fn resize(&mut self, width: u32) {
        self.engine.set_viewport_width(width);
    }

    // =========================================================================
    // Swipe Gesture
    // =========================================================================

    /// Starts tracking a touch gesture at the given point.
    pub fn swipe_begin(&mut self, x: f64, y: f64) {
        self.swipe.begin(x, y);
    }

    /// Reports an intermediate touch point. Returns `true` when the
    /// gesture has locked horizontal and the host should suppress its own
    /// scrolling.
    pub fn swipe_move(&self, x: f64, y: f64) -> bool {
        self.swipe.sample(x, y)
    }

    /// Ends the gesture and applies the classified command. Returns
    /// whether the carousel position changed.
    pub fn swipe_end(&mut self, x_end: f64) -> bool {
        match self.swipe.end(x_end) {
            SwipeCommand::NavigateNext => self.engine.navigate_next(),
            SwipeCommand::NavigatePrevious => self.engine.navigate_previous(),
            SwipeCommand::NoCommand => false,
        }
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Toggles a product's favorite membership and writes the set through
    /// to storage. Returns the NEW membership state.
    ///
    /// The in-memory toggle always takes effect; a persistence failure is
    /// logged and otherwise swallowed, so the current session stays
    /// consistent even when the next one starts stale.
    pub async fn toggle_favorite(&mut self, id: ProductId) -> bool {
        let now_favorite = self.favorites.toggle(id);
        debug!(%id, favorite = now_favorite, "Favorite toggled");

        if let Err(e) = self.store.favorites().save(&self.favorites).await {
            warn!(error = %e, "Favorite persistence failed, in-memory state kept");
        }
        now_favorite
    }

    // =========================================================================
    // Product Access
    // =========================================================================

    /// Resolves the detail URL for a product, when it has one.
    pub fn open_product(&self, id: ProductId) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| p.detail_url())
    }

    // =========================================================================
    // Frame Production
    // =========================================================================

    /// Snapshots the current state as a complete frame for the host.
    pub fn frame(&self) -> RenderFrame {
        render_frame(&self.products, &self.engine, &self.favorites)
    }

    /// Loaded products in feed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The current favorite set.
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedSettings;
    use vitrine_core::fallback::fallback_products;
    use vitrine_store::{ClientStore, StoreConfig};

    struct StubProbe {
        present: bool,
        mounted: bool,
    }

    impl HostProbe for StubProbe {
        fn host_present(&self) -> bool {
            self.present
        }
        fn carousel_mounted(&self) -> bool {
            self.mounted
        }
    }

    const READY: StubProbe = StubProbe {
        present: true,
        mounted: false,
    };

    fn offline_feed() -> ProductFeed {
        ProductFeed::new(FeedSettings {
            products_url: "http://127.0.0.1:9/products.json".to_string(),
            proxy_url: None,
        })
    }

    /// In-memory store pre-seeded with the 8-item demo catalog, so the
    /// session activates from cache without touching the network.
    async fn seeded_store() -> ClientStore {
        let store = ClientStore::new(StoreConfig::in_memory()).await.unwrap();
        store
            .product_cache()
            .store(&fallback_products())
            .await
            .unwrap();
        store
    }

    async fn activated_session(viewport_width: u32) -> CarouselSession {
        let store = seeded_store().await;
        CarouselSession::activate(&READY, store, &offline_feed(), viewport_width)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_activation_requires_host() {
        let probe = StubProbe {
            present: false,
            mounted: false,
        };
        let store = seeded_store().await;
        let err = CarouselSession::activate(&probe, store, &offline_feed(), 1200)
            .await
            .unwrap_err();
        assert_eq!(err, ActivationError::HostMissing);
    }

    #[tokio::test]
    async fn test_activation_is_idempotent() {
        let probe = StubProbe {
            present: true,
            mounted: true,
        };
        let store = seeded_store().await;
        let err = CarouselSession::activate(&probe, store, &offline_feed(), 1200)
            .await
            .unwrap_err();
        assert_eq!(err, ActivationError::AlreadyMounted);
    }

    #[tokio::test]
    async fn test_navigation_stops_at_bounds() {
        let mut session = activated_session(1200).await; // 5 per view, 8 products

        assert!(!session.navigate_previous()); // already at start

        assert!(session.navigate_next());
        assert!(session.navigate_next());
        assert!(session.navigate_next()); // offset 3 = max
        assert!(!session.navigate_next()); // clamped

        // Offset 3 at 5 per view: -(3 × 100 / 5)
        let frame = session.frame();
        assert_eq!(frame.track_offset_percent, -60.0);
        assert!(!frame.next_enabled);
    }

    #[tokio::test]
    async fn test_resize_reclamps_offset() {
        let mut session = activated_session(600).await; // 3 per view, max offset 5

        for _ in 0..5 {
            session.navigate_next();
        }
        // Offset 5 at 3 per view: -(5 × 100 / 3)
        assert_eq!(session.frame().track_offset_percent, -500.0 / 3.0);

        // Widening to 5 per view shrinks max offset to 3
        session.resize(1200);
        assert_eq!(session.frame().track_offset_percent, -60.0);
    }

    #[tokio::test]
    async fn test_swipe_left_pages_forward() {
        let mut session = activated_session(1200).await;

        session.swipe_begin(300.0, 100.0);
        assert!(session.swipe_move(240.0, 104.0)); // horizontal lock
        assert!(session.swipe_end(230.0)); // Δx = 70 > threshold

        // Offset 1 at 5 per view: -(1 × 100 / 5)
        assert_eq!(session.frame().track_offset_percent, -20.0);
    }

    #[tokio::test]
    async fn test_short_swipe_is_ignored() {
        let mut session = activated_session(1200).await;

        session.swipe_begin(300.0, 100.0);
        assert!(!session.swipe_end(280.0)); // Δx = 20, below threshold
        assert_eq!(session.frame().track_offset_percent, 0.0);
    }

    #[tokio::test]
    async fn test_favorite_toggle_writes_through() {
        let mut session = activated_session(1200).await;

        assert!(session.toggle_favorite(ProductId(3)).await);
        assert!(session.toggle_favorite(ProductId(7)).await);
        assert!(!session.toggle_favorite(ProductId(3)).await); // toggled back off

        // Re-read from storage through the session's own store handle
        let persisted = session.store.favorites().load().await;
        assert!(persisted.contains(ProductId(7)));
        assert!(!persisted.contains(ProductId(3)));
    }

    #[tokio::test]
    async fn test_open_product_resolves_detail_url() {
        let session = activated_session(1200).await;

        // Fallback catalog products all link to "#"
        assert_eq!(session.open_product(ProductId(1)), Some("#"));
        assert_eq!(session.open_product(ProductId(999)), None);
    }

    #[tokio::test]
    async fn test_frame_reflects_favorites() {
        let mut session = activated_session(1200).await;
        session.toggle_favorite(ProductId(2)).await;

        let frame = session.frame();
        let flagged: Vec<i64> = frame
            .cards
            .iter()
            .filter(|c| c.favorite)
            .map(|c| c.id)
            .collect();
        assert_eq!(flagged, vec![2]);
    }
}
