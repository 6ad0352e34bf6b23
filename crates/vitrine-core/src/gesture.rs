//! # Gesture Translation
//!
//! Converts a sequence of pointer/touch samples into a discrete navigation
//! command.
//!
//! ## Sample Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Swipe Classification                               │
//! │                                                                         │
//! │  begin(x₀, y₀)                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sample(x, y)*   dx = x₀ − x, dy = y₀ − y                               │
//! │       │          |dx| > |dy| AND |dx| > 10px                            │
//! │       │              └──► suppress the platform's default scroll        │
//! │       │                   (the ONLY side effect of the move phase)      │
//! │       ▼                                                                 │
//! │  end(x_end)      dx = x₀ − x_end                                        │
//! │       │                                                                 │
//! │       ├── dx >  50  ──► NavigateNext     (finger moved left)            │
//! │       ├── dx < −50  ──► NavigatePrevious (finger moved right)           │
//! │       └── |dx| ≤ 50 ──► NoCommand        (tap / wobble)                 │
//! │                                                                         │
//! │  Samples without a preceding begin are no-ops: a stray end/move can     │
//! │  arrive when the gesture started outside the track.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Thresholds
// =============================================================================

/// Minimum horizontal travel (px) before a move sample locks the gesture
/// horizontal and suppresses default scrolling.
pub const HORIZONTAL_LOCK_PX: f64 = 10.0;

/// Minimum horizontal travel (px) at gesture end for the swipe to count as
/// a navigation command. Anything shorter is a tap or a wobble.
pub const SWIPE_COMMAND_PX: f64 = 50.0;

// =============================================================================
// Swipe Command
// =============================================================================

/// The discrete outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeCommand {
    /// Finger moved right far enough: reveal earlier items.
    NavigatePrevious,
    /// Finger moved left far enough: reveal later items.
    NavigateNext,
    /// Travel below threshold, or no gesture was in progress.
    NoCommand,
}

// =============================================================================
// Swipe Tracker
// =============================================================================

/// Accumulates one gesture's samples and classifies it on release.
///
/// ## Usage
/// ```rust
/// use vitrine_core::gesture::{SwipeCommand, SwipeTracker};
///
/// let mut tracker = SwipeTracker::new();
/// tracker.begin(300.0, 120.0);
/// assert!(tracker.sample(260.0, 122.0)); // horizontal: suppress scroll
/// assert_eq!(tracker.end(230.0), SwipeCommand::NavigateNext); // dx = 70
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    /// Start position; `None` while no gesture is in progress.
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the gesture start position.
    ///
    /// A second begin without an intervening end simply restarts the
    /// gesture from the new position.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Feeds one move sample. Returns `true` when the platform's default
    /// scroll/pan behavior should be suppressed for this gesture: the
    /// travel is predominantly horizontal and past the lock threshold.
    ///
    /// Without a preceding [`begin`](Self::begin) this is a no-op.
    pub fn sample(&self, x: f64, y: f64) -> bool {
        let Some((x0, y0)) = self.start else {
            return false;
        };
        let dx = x0 - x;
        let dy = y0 - y;
        dx.abs() > dy.abs() && dx.abs() > HORIZONTAL_LOCK_PX
    }

    /// Completes the gesture and classifies it. Resets the tracker to idle
    /// regardless of outcome.
    ///
    /// Without a preceding [`begin`](Self::begin) this returns
    /// [`SwipeCommand::NoCommand`].
    pub fn end(&mut self, x_end: f64) -> SwipeCommand {
        let Some((x0, _)) = self.start.take() else {
            return SwipeCommand::NoCommand;
        };

        let dx = x0 - x_end;
        if dx.abs() <= SWIPE_COMMAND_PX {
            SwipeCommand::NoCommand
        } else if dx > 0.0 {
            SwipeCommand::NavigateNext
        } else {
            SwipeCommand::NavigatePrevious
        }
    }

    /// True while a gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_swipe_navigates_next() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0, 100.0);
        // dx = 300 - 230 = 70 > 50
        assert_eq!(tracker.end(230.0), SwipeCommand::NavigateNext);
    }

    #[test]
    fn test_right_swipe_navigates_previous() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0, 100.0);
        // dx = 300 - 380 = -80, |dx| > 50
        assert_eq!(tracker.end(380.0), SwipeCommand::NavigatePrevious);
    }

    #[test]
    fn test_short_travel_is_no_command() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0, 100.0);
        // dx = 20, below threshold
        assert_eq!(tracker.end(280.0), SwipeCommand::NoCommand);
    }

    #[test]
    fn test_exactly_threshold_is_no_command() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0, 100.0);
        // |dx| must EXCEED 50; exactly 50 is still a tap
        assert_eq!(tracker.end(250.0), SwipeCommand::NoCommand);
    }

    #[test]
    fn test_orphan_samples_are_noops() {
        let mut tracker = SwipeTracker::new();
        assert!(!tracker.sample(260.0, 100.0));
        assert_eq!(tracker.end(100.0), SwipeCommand::NoCommand);
    }

    #[test]
    fn test_end_resets_tracker() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0, 100.0);
        tracker.end(200.0);
        assert!(!tracker.is_tracking());
        // A stale end after reset produces nothing
        assert_eq!(tracker.end(0.0), SwipeCommand::NoCommand);
    }

    #[test]
    fn test_move_phase_scroll_suppression() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0, 100.0);

        // Mostly vertical: let the page scroll
        assert!(!tracker.sample(295.0, 160.0));
        // Horizontal but under the lock threshold
        assert!(!tracker.sample(292.0, 101.0));
        // Horizontal past the threshold: suppress
        assert!(tracker.sample(280.0, 104.0));
        // Direction does not matter, only axis dominance
        assert!(tracker.sample(320.0, 104.0));
    }
}
