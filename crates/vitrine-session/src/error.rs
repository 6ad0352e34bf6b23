//! # Session Error Types
//!
//! Error types for the orchestration layer.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Acquisition   │  │     Activation          │ │
//! │  │                 │  │   (internal)    │  │                         │ │
//! │  │  InvalidConfig  │  │  Http           │  │  HostMissing            │ │
//! │  │  InvalidUrl     │  │  Status         │  │  AlreadyMounted         │ │
//! │  │  Io / Toml      │  │  Envelope       │  │                         │ │
//! │  └─────────────────┘  │  Payload        │  └─────────────────────────┘ │
//! │                       └─────────────────┘                               │
//! │                                                                         │
//! │  FetchError never escapes ProductFeed::load - every variant ends in a  │
//! │  logged fall-through to the next acquisition step, terminating in the  │
//! │  guaranteed-available fallback catalog. ActivationError is the ONLY    │
//! │  error a host ever observes from this crate.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

// =============================================================================
// Session Error (configuration and plumbing)
// =============================================================================

/// Session-layer errors: configuration loading, validation, saving.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configured URL failed validation.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// Config file I/O failure.
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML.
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config could not be serialized back to TOML.
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

// =============================================================================
// Activation Error
// =============================================================================

/// Why activation was refused.
///
/// Activation is idempotent: on a page with no host marker or with a
/// carousel already mounted, `activate` returns one of these and touches
/// nothing. Neither is a fault - logging them at debug level is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActivationError {
    /// The designated host marker element is not present on this page.
    #[error("Host marker not present; not a detail page")]
    HostMissing,

    /// A prior instance's container already exists.
    #[error("Carousel already mounted on this page")]
    AlreadyMounted,
}

// =============================================================================
// Fetch Error (internal to the acquisition chain)
// =============================================================================

/// Failures inside the product acquisition chain.
///
/// All of these are caught by `ProductFeed::load` and logged; none reach
/// the caller. They exist as a type so the chain's steps compose with `?`
/// and so tests can assert on precise failure classes.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level HTTP failure (DNS, connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The outer request completed with a non-2xx status.
    #[error("HTTP {0} from feed endpoint")]
    Status(u16),

    /// The proxy envelope was missing or malformed.
    #[error("Proxy envelope invalid: {0}")]
    Envelope(String),

    /// The (inner) product payload failed to deserialize.
    #[error("Feed payload invalid: {0}")]
    Payload(#[from] serde_json::Error),

    /// The feed parsed but contained no usable products.
    #[error("Feed contained no usable products")]
    EmptyFeed,

    /// Request URL could not be constructed.
    #[error("Bad feed URL: {0}")]
    BadUrl(#[from] url::ParseError),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_error_messages() {
        assert_eq!(
            ActivationError::HostMissing.to_string(),
            "Host marker not present; not a detail page"
        );
        assert_eq!(
            ActivationError::AlreadyMounted.to_string(),
            "Carousel already mounted on this page"
        );
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(
            FetchError::Status(502).to_string(),
            "HTTP 502 from feed endpoint"
        );
        assert_eq!(
            FetchError::EmptyFeed.to_string(),
            "Feed contained no usable products"
        );
    }
}
