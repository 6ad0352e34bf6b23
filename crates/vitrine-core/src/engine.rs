//! # Carousel Engine
//!
//! The pagination state machine: a continuous bounded counter, not a named
//! state enumeration.
//!
//! ## State Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Clamped Counter State Machine                       │
//! │                                                                         │
//! │  total_count = 8, items_per_view = 5       bound = max(0, 8 - 5) = 3   │
//! │                                                                         │
//! │  products:  [0] [1] [2] [3] [4] [5] [6] [7]                            │
//! │              └───────visible────────┘                                   │
//! │              ▲                                                          │
//! │              current_offset = 0 ──next──► 1 ──► 2 ──► 3 ──next──► 3    │
//! │                         ◄──prev── ...                    (no-op)       │
//! │                                                                         │
//! │  INVARIANT (holds after EVERY mutation):                               │
//! │      0 ≤ current_offset ≤ max(0, total_count − items_per_view)          │
//! │                                                                         │
//! │  Clamping on every mutation (rather than rejecting preconditions)       │
//! │  keeps the engine safe against any interleaving of resize and           │
//! │  navigation: there is no invalid state reachable from any sequence     │
//! │  of operations.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Breakpoints
//! Viewport width maps to items-per-view through fixed thresholds,
//! evaluated narrowest-first:
//!
//! | width      | items per view |
//! |------------|----------------|
//! | ≤ 576      | 2              |
//! | ≤ 768      | 3              |
//! | ≤ 1024     | 4              |
//! | otherwise  | 5              |

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Breakpoint Policy
// =============================================================================

/// Breakpoint table: `(max_width, items_per_view)`, narrowest-first.
/// Widths above the last threshold fall through to [`WIDE_ITEMS_PER_VIEW`].
const BREAKPOINTS: &[(u32, usize)] = &[(576, 2), (768, 3), (1024, 4)];

/// Items per view on viewports wider than every breakpoint.
const WIDE_ITEMS_PER_VIEW: usize = 5;

/// Maps a viewport width (CSS pixels) to the configured column count.
///
/// ## Example
/// ```rust
/// use vitrine_core::engine::items_per_view_for_width;
///
/// assert_eq!(items_per_view_for_width(576), 2);
/// assert_eq!(items_per_view_for_width(577), 3);
/// assert_eq!(items_per_view_for_width(1025), 5);
/// ```
pub fn items_per_view_for_width(width: u32) -> usize {
    for &(max_width, items) in BREAKPOINTS {
        if width <= max_width {
            return items;
        }
    }
    WIDE_ITEMS_PER_VIEW
}

// =============================================================================
// Carousel Engine
// =============================================================================

/// Pagination state for one carousel instance.
///
/// ## Ownership
/// The engine holds only a numeric snapshot of the product count - it never
/// touches the product list itself. The session layer replaces the engine
/// wholesale if the list is ever reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarouselEngine {
    /// Index of the first visible item.
    current_offset: usize,

    /// Number of items simultaneously visible, derived from viewport width.
    items_per_view: usize,

    /// Snapshot of the product count at load time.
    total_count: usize,
}

impl CarouselEngine {
    /// Creates an engine for `total_count` products on a viewport of the
    /// given width, starting at offset 0.
    pub fn new(total_count: usize, viewport_width: u32) -> Self {
        CarouselEngine {
            current_offset: 0,
            items_per_view: items_per_view_for_width(viewport_width),
            total_count,
        }
    }

    /// Maximum legal offset: `max(0, total_count − items_per_view)`.
    #[inline]
    pub fn max_offset(&self) -> usize {
        self.total_count.saturating_sub(self.items_per_view)
    }

    /// Re-derives `items_per_view` from a new viewport width, then clamps
    /// the offset to the new bound.
    ///
    /// Clamping only ever pulls the offset DOWN - a wider viewport that
    /// shrinks the bound never pushes the window forward.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.items_per_view = items_per_view_for_width(width);
        self.clamp_offset();
    }

    /// Moves the window one item towards the start. Returns whether the
    /// offset changed (`false` means no re-render is needed).
    pub fn navigate_previous(&mut self) -> bool {
        if self.current_offset > 0 {
            self.current_offset -= 1;
            true
        } else {
            false
        }
    }

    /// Moves the window one item towards the end. Returns whether the
    /// offset changed.
    pub fn navigate_next(&mut self) -> bool {
        if self.current_offset < self.max_offset() {
            self.current_offset += 1;
            true
        } else {
            false
        }
    }

    /// Percentage translation applied to the track so item
    /// `current_offset` sits at the left edge: `-(offset × 100 / ipv)`.
    ///
    /// Each item is implicitly `100 / items_per_view` percent of the
    /// visible window wide, so this keeps item boundaries aligned with the
    /// configured column count regardless of absolute pixel width.
    #[inline]
    pub fn visual_offset_percent(&self) -> f64 {
        -(self.current_offset as f64 * 100.0 / self.items_per_view as f64)
    }

    /// True when the "previous" affordance should be disabled.
    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.current_offset == 0
    }

    /// True when the "next" affordance should be disabled.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_offset >= self.max_offset()
    }

    /// Index of the first visible item.
    #[inline]
    pub fn current_offset(&self) -> usize {
        self.current_offset
    }

    /// Current column count.
    #[inline]
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Product count snapshot this engine was built from.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Restores the invariant after a mutation.
    fn clamp_offset(&mut self) {
        let bound = self.max_offset();
        if self.current_offset > bound {
            self.current_offset = bound;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The invariant every test leans on.
    fn assert_invariant(engine: &CarouselEngine) {
        assert!(engine.current_offset() <= engine.max_offset());
    }

    #[test]
    fn test_breakpoint_mapping() {
        assert_eq!(items_per_view_for_width(0), 2);
        assert_eq!(items_per_view_for_width(576), 2);
        assert_eq!(items_per_view_for_width(577), 3);
        assert_eq!(items_per_view_for_width(768), 3);
        assert_eq!(items_per_view_for_width(769), 4);
        assert_eq!(items_per_view_for_width(1024), 4);
        assert_eq!(items_per_view_for_width(1025), 5);
        assert_eq!(items_per_view_for_width(3840), 5);
    }

    #[test]
    fn test_eight_products_wide_viewport_walks_to_bound() {
        // 8 products, 5 per view -> bound = 3
        let mut engine = CarouselEngine::new(8, 1280);
        assert_eq!(engine.items_per_view(), 5);
        assert_eq!(engine.max_offset(), 3);
        assert!(engine.is_at_start());

        assert!(engine.navigate_next());
        assert!(engine.navigate_next());
        assert!(engine.navigate_next());
        assert_eq!(engine.current_offset(), 3);
        assert!(engine.is_at_end());

        // Fourth call is a no-op: offset stays at the bound
        assert!(!engine.navigate_next());
        assert_eq!(engine.current_offset(), 3);
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let mut engine = CarouselEngine::new(8, 1280);
        assert!(!engine.navigate_previous());
        assert_eq!(engine.current_offset(), 0);

        engine.navigate_next();
        assert!(engine.navigate_previous());
        assert!(engine.is_at_start());
    }

    #[test]
    fn test_fewer_products_than_columns() {
        // 3 products, 5 per view -> bound = 0, both affordances disabled
        let mut engine = CarouselEngine::new(3, 1280);
        assert_eq!(engine.max_offset(), 0);
        assert!(engine.is_at_start());
        assert!(engine.is_at_end());
        assert!(!engine.navigate_next());
        assert!(!engine.navigate_previous());
    }

    #[test]
    fn test_zero_products() {
        let mut engine = CarouselEngine::new(0, 400);
        assert_eq!(engine.max_offset(), 0);
        assert!(!engine.navigate_next());
        assert_eq!(engine.visual_offset_percent(), 0.0);
    }

    #[test]
    fn test_resize_clamps_offset_down() {
        // Narrow viewport: 8 products, 2 per view -> bound = 6
        let mut engine = CarouselEngine::new(8, 500);
        assert_eq!(engine.items_per_view(), 2);
        for _ in 0..6 {
            assert!(engine.navigate_next());
        }
        assert_eq!(engine.current_offset(), 6);

        // Widening to 5 per view pulls the bound down to 3; offset follows
        engine.set_viewport_width(1280);
        assert_eq!(engine.items_per_view(), 5);
        assert_eq!(engine.current_offset(), 3);
        assert!(engine.is_at_end());

        // Narrowing again never pushes the offset back up
        engine.set_viewport_width(500);
        assert_eq!(engine.current_offset(), 3);
        assert!(!engine.is_at_end());
    }

    #[test]
    fn test_visual_offset_percent_formula() {
        let mut engine = CarouselEngine::new(8, 900); // 4 per view
        assert_eq!(engine.visual_offset_percent(), 0.0);

        engine.navigate_next();
        assert_eq!(engine.visual_offset_percent(), -25.0);

        engine.navigate_next();
        assert_eq!(engine.visual_offset_percent(), -50.0);

        engine.set_viewport_width(500); // 2 per view, offset stays 2
        assert_eq!(engine.visual_offset_percent(), -100.0);
    }

    /// Exhaustive-ish sequence check: walk every (total, width-cycle)
    /// combination through a mixed operation sequence and verify the
    /// invariant after every single mutation.
    #[test]
    fn test_invariant_holds_under_arbitrary_sequences() {
        let widths = [320, 576, 577, 768, 769, 1024, 1025, 1920];

        for total in 0..12 {
            let mut engine = CarouselEngine::new(total, 1280);
            assert_invariant(&engine);

            for step in 0..64usize {
                match step % 4 {
                    0 => {
                        engine.navigate_next();
                    }
                    1 => {
                        engine.set_viewport_width(widths[step % widths.len()]);
                    }
                    2 => {
                        engine.navigate_next();
                        engine.navigate_next();
                    }
                    _ => {
                        engine.navigate_previous();
                    }
                }
                assert_invariant(&engine);
                // The formula holds in every reachable state
                let expected = -(engine.current_offset() as f64 * 100.0
                    / engine.items_per_view() as f64);
                assert_eq!(engine.visual_offset_percent(), expected);
            }
        }
    }
}
