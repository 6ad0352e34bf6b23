//! # Resize Debouncing
//!
//! Coalesces a burst of viewport-width reports into a single delivery.
//!
//! Each observed width arms a timer for the debounce window and disarms
//! any previously armed one. Only a width that survives a full quiet
//! window is delivered; every width reported before the window elapses
//! is silently replaced by its successor.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Debounces viewport width reports.
///
/// Widths that survive the quiet window arrive on the receiver returned
/// by [`new`](ResizeCoalescer::new); the session forwards them into
/// `CarouselEngine::set_viewport_width`.
///
/// ## Example
///
/// ```no_run
/// # async fn demo() {
/// use std::time::Duration;
/// use vitrine_session::ResizeCoalescer;
///
/// let (mut coalescer, mut widths) = ResizeCoalescer::new(Duration::from_millis(200));
/// coalescer.observe(500);
/// coalescer.observe(900); // replaces 500 - the window restarts
///
/// // 200ms later only 900 arrives
/// assert_eq!(widths.recv().await, Some(900));
/// # }
/// ```
#[derive(Debug)]
pub struct ResizeCoalescer {
    window: Duration,
    tx: mpsc::UnboundedSender<u32>,
    pending: Option<JoinHandle<()>>,
}

impl ResizeCoalescer {
    /// Creates a coalescer with the given quiet window and returns the
    /// receiving end for settled widths.
    pub fn new(window: Duration) -> (Self, mpsc::UnboundedReceiver<u32>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            ResizeCoalescer {
                window,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Reports a new viewport width. Any width still waiting out its quiet
    /// window is discarded in favor of this one.
    pub fn observe(&mut self, width: u32) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        trace!(width, "Resize observed, arming debounce timer");

        let tx = self.tx.clone();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // Receiver gone means the session is shutting down
            let _ = tx.send(width);
        }));
    }

    /// Discards any pending width without delivering it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for ResizeCoalescer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
