//! # vitrine-core: Pure Carousel Logic for Vitrine
//!
//! This crate is the **heart** of the Vitrine carousel widget. It contains
//! all pagination state, gesture classification, and product policy as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Vitrine Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Rendering Collaborator (JavaScript)                │   │
//! │  │    card markup ──► track container ──► nav buttons             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ RenderFrame (ts-rs bindings)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   vitrine-session                               │   │
//! │  │    activation, acquisition chain, debounce, persistence        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  engine   │  │  gesture  │  │   │
//! │  │   │  Product  │  │   Money   │  │ Carousel  │  │  Swipe    │  │   │
//! │  │   │ Favorites │  │  (kuruş)  │  │  Engine   │  │  Tracker  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO NETWORK • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, FavoriteSet)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`engine`] - The clamped pagination state machine
//! - [`gesture`] - Swipe sample classification
//! - [`fallback`] - The guaranteed-available demo catalog
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, DOM access is FORBIDDEN here
//! 3. **Integer Money**: All prices are in kuruş (i64) to avoid float errors
//! 4. **Clamp, Never Reject**: The engine clamps after every mutation, so no
//!    sequence of operations can reach an invalid offset
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::engine::CarouselEngine;
//!
//! // 8 products on a 1280px-wide viewport (5 items per view)
//! let mut engine = CarouselEngine::new(8, 1280);
//! assert_eq!(engine.items_per_view(), 5);
//!
//! // Walking past the bound is a no-op, never an error
//! while engine.navigate_next() {}
//! assert_eq!(engine.current_offset(), 3); // max(0, 8 - 5)
//! assert!(engine.is_at_end());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod fallback;
pub mod gesture;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Product` instead of
// `use vitrine_core::types::Product`

pub use engine::CarouselEngine;
pub use error::{CoreError, CoreResult};
pub use gesture::{SwipeCommand, SwipeTracker};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Placeholder image shown when a product record carries no usable image URL.
///
/// ## Why a constant?
/// Image resolution policy (`img` → `image` → placeholder) is product
/// policy, not rendering policy, so the fallback lives here rather than in
/// the rendering collaborator.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/300x300/f8f9fa/666?text=No+Image";
