//! # Vitrine Session - Widget Orchestration
//!
//! Wires the pure carousel core and the client store into a live widget
//! session: configuration, product acquisition, activation gating, resize
//! debouncing, and render-frame production.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          vitrine-session                                │
//! │                                                                         │
//! │   host events        ┌──────────────────┐                               │
//! │   ───────────────►   │  CarouselSession │ ──► RenderFrame snapshots     │
//! │   (nav, swipe,       │   (session.rs)   │                               │
//! │    favorite, open)   └────────┬─────────┘                               │
//! │                               │ activate()                              │
//! │              ┌────────────────┼────────────────┐                        │
//! │              ▼                ▼                ▼                        │
//! │      ┌──────────────┐ ┌─────────────┐ ┌───────────────┐                │
//! │      │  ProductFeed │ │ HostProbe   │ │ vitrine-store │                │
//! │      │  (fetch.rs)  │ │ (trait)     │ │ favorites +   │                │
//! │      │ cache→HTTP→  │ │ gates work  │ │ product cache │                │
//! │      │ fallback     │ │ up front    │ └───────────────┘                │
//! │      └──────────────┘ └─────────────┘                                  │
//! │                                                                         │
//! │   raw resize events ──► ResizeCoalescer (debounce.rs) ──► resize()      │
//! │                                                                         │
//! │   CarouselConfig (config.rs): TOML file + env overrides                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Resilience Posture
//!
//! Activation cannot fail for data reasons. Favorites degrade to an empty
//! set, products degrade through cache and network down to a built-in
//! catalog. The only activation errors are environmental: no host surface,
//! or a carousel already mounted.

pub mod config;
pub mod debounce;
pub mod error;
pub mod fetch;
pub mod render;
pub mod session;

pub use config::{BehaviorSettings, CarouselConfig, FeedSettings, StorageSettings};
pub use debounce::ResizeCoalescer;
pub use error::{ActivationError, FetchError, SessionError, SessionResult};
pub use fetch::ProductFeed;
pub use render::{render_frame, CardView, RenderFrame};
pub use session::{CarouselSession, HostProbe};
