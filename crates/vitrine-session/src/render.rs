//! # Render Frames
//!
//! The presentation contract: a complete, self-contained snapshot of what
//! a host surface should draw. The session produces a fresh frame after
//! every state change; the consumer replaces its entire view with it and
//! keeps no state of its own.
//!
//! Both types derive `TS` and export TypeScript bindings, so a web host
//! consumes frames with full type safety.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitrine_core::{CarouselEngine, FavoriteSet, Product};

// =============================================================================
// Card View
// =============================================================================

/// One product card, fully formatted for display.
///
/// Prices arrive pre-formatted (`"129,99 TL"`) so the consumer never does
/// money arithmetic or locale formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardView {
    /// Product identifier, echoed back in favorite/open commands.
    pub id: i64,
    pub name: String,
    /// Current price, display-formatted.
    pub price_text: String,
    /// Original price when the product is discounted.
    pub old_price_text: Option<String>,
    /// Rounded discount badge value; absent when not discounted.
    pub discount_percent: Option<u8>,
    /// Always resolvable: falls back to a placeholder when the product
    /// carries no usable image.
    pub image_url: String,
    pub favorite: bool,
}

// =============================================================================
// Render Frame
// =============================================================================

/// A complete carousel snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenderFrame {
    /// Horizontal track translation as a percentage of the visible window
    /// (`-(offset × 100 / items_per_view)`), so each step moves the track
    /// by exactly one card width.
    pub track_offset_percent: f64,
    /// Whether the previous-navigation control should accept input.
    pub prev_enabled: bool,
    /// Whether the next-navigation control should accept input.
    pub next_enabled: bool,
    /// How many cards share the viewport at the current width.
    pub items_per_view: usize,
    /// Every product, in feed order. The consumer renders all of them;
    /// the track offset determines which are visible.
    pub cards: Vec<CardView>,
}

/// Builds a frame from the current products, engine position, and
/// favorite set.
pub fn render_frame(
    products: &[Product],
    engine: &CarouselEngine,
    favorites: &FavoriteSet,
) -> RenderFrame {
    let cards = products
        .iter()
        .map(|p| CardView {
            id: p.id.0,
            name: p.name.clone(),
            price_text: p.price.to_string(),
            old_price_text: p.old_price.map(|m| m.to_string()),
            discount_percent: p.discount_percent(),
            image_url: p.image_url().to_string(),
            favorite: favorites.contains(p.id),
        })
        .collect();

    RenderFrame {
        track_offset_percent: engine.visual_offset_percent(),
        prev_enabled: !engine.is_at_start(),
        next_enabled: !engine.is_at_end(),
        items_per_view: engine.items_per_view(),
        cards,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::fallback::fallback_products;
    use vitrine_core::ProductId;

    #[test]
    fn test_frame_formats_prices_and_discounts() {
        let products = fallback_products();
        let engine = CarouselEngine::new(products.len(), 1200);
        let favorites = FavoriteSet::default();

        let frame = render_frame(&products, &engine, &favorites);

        assert_eq!(frame.cards.len(), 8);
        let first = &frame.cards[0];
        assert_eq!(first.price_text, "99,99 TL");
        assert_eq!(first.old_price_text.as_deref(), Some("129,99 TL"));
        assert_eq!(first.discount_percent, Some(23));
        assert!(!first.favorite);
    }

    #[test]
    fn test_frame_reflects_engine_position() {
        let products = fallback_products();
        let mut engine = CarouselEngine::new(products.len(), 1200); // 5 per view
        let favorites = FavoriteSet::default();

        let start = render_frame(&products, &engine, &favorites);
        assert_eq!(start.track_offset_percent, 0.0);
        assert!(!start.prev_enabled);
        assert!(start.next_enabled);
        assert_eq!(start.items_per_view, 5);

        // Walk to the end: max offset is 8 - 5 = 3, each step is 20%
        while engine.navigate_next() {}
        let end = render_frame(&products, &engine, &favorites);
        assert_eq!(end.track_offset_percent, -60.0);
        assert!(end.prev_enabled);
        assert!(!end.next_enabled);
    }

    #[test]
    fn test_frame_marks_favorites() {
        let products = fallback_products();
        let engine = CarouselEngine::new(products.len(), 1200);
        let mut favorites = FavoriteSet::default();
        favorites.toggle(ProductId(3));

        let frame = render_frame(&products, &engine, &favorites);
        let flagged: Vec<i64> = frame
            .cards
            .iter()
            .filter(|c| c.favorite)
            .map(|c| c.id)
            .collect();
        assert_eq!(flagged, vec![3]);
    }

    #[test]
    fn test_all_controls_disabled_when_everything_fits() {
        let products = fallback_products(); // 8 products
        let engine = CarouselEngine::new(3, 1200); // 5 per view, 3 products
        let favorites = FavoriteSet::default();

        let frame = render_frame(&products[..3], &engine, &favorites);
        assert!(!frame.prev_enabled);
        assert!(!frame.next_enabled);
    }
}
