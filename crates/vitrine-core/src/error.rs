//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                       │
//! │  └── CoreError        - Malformed product records                      │
//! │                                                                         │
//! │  vitrine-store errors (separate crate)                                 │
//! │  └── StoreError       - Durable storage failures                       │
//! │                                                                         │
//! │  vitrine-session errors (separate crate)                               │
//! │  ├── FetchError       - Acquisition chain failures (internal)          │
//! │  └── ActivationError  - Host precondition failures                     │
//! │                                                                         │
//! │  Almost every failure in this system is recovered locally: the         │
//! │  acquisition chain falls through to the fallback catalog, storage      │
//! │  failures degrade to session-only behavior. The typed errors exist     │
//! │  for logging and tests, not for user-facing error states.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, field, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These describe why an individual product record was rejected by feed
/// sanitation. They are reported through logs and then dropped - a bad
/// record never aborts a load.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Product record carries an empty display name.
    #[error("Product {0} has an empty name")]
    EmptyName(ProductId),

    /// Product record carries a negative price.
    ///
    /// ## When This Occurs
    /// The remote feed is third-party data; a corrupt or hand-edited entry
    /// can carry any value. Negative prices are meaningless for a
    /// recommendation card, so the record is dropped.
    #[error("Product {id} has a negative price ({price_cents} kuruş)")]
    NegativePrice { id: ProductId, price_cents: i64 },

    /// Product id already seen earlier in the same load.
    ///
    /// Ids must be unique within a load; favorites and click routing key
    /// on them. First occurrence wins.
    #[error("Duplicate product id {0} in feed")]
    DuplicateId(ProductId),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NegativePrice {
            id: ProductId(3),
            price_cents: -100,
        };
        assert_eq!(
            err.to_string(),
            "Product 3 has a negative price (-100 kuruş)"
        );
        assert_eq!(
            CoreError::EmptyName(ProductId(7)).to_string(),
            "Product 7 has an empty name"
        );
    }
}
