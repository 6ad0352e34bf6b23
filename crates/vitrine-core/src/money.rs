//! # Money Module
//!
//! Provides the `Money` type for handling product prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The remote feed serializes prices as decimals:                         │
//! │    { "price": 129.99, "oldPrice": 149.99 }                              │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kuruş                                            │
//! │    129.99 TL is stored as 12999 kuruş (i64)                             │
//! │    Floats exist ONLY at the serde boundary, converted once with         │
//! │    explicit rounding, then never touched again                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vitrine_core::money::Money;
//!
//! // Create from kuruş (preferred)
//! let price = Money::from_cents(12999); // 129,99 TL
//!
//! // Display uses the feed's locale (comma decimal separator)
//! assert_eq!(price.to_string(), "129,99 TL");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a price in the smallest currency unit (kuruş for TRY).
///
/// ## Design Decisions
/// - **i64 (signed)**: The feed is third-party data; a corrupt entry can be
///   negative, and sanitation needs to represent it before rejecting it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for the storage blobs
///
/// ## Where Money Flows
/// ```text
/// feed decimal (129.99) ──► Money(12999) ──► Product.price
///                                               │
///                                               ├──► discount_percent()
///                                               └──► CardView display text
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kuruş (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// let price = Money::from_cents(12999); // Represents 129,99 TL
    /// assert_eq!(price.cents(), 12999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a feed decimal, rounding half-up to the
    /// nearest kuruş.
    ///
    /// ## Note
    /// This is the ONLY place a float becomes money. It exists for the
    /// serde boundary and the fallback catalog; everything downstream
    /// works in integer kuruş.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(129.99).cents(), 12999);
    /// assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
    /// ```
    #[inline]
    pub fn from_decimal(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    /// Returns the value in kuruş.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal for serialization back to the feed
    /// format (display formatting belongs to `Display`, not here).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit (lira) portion.
    #[inline]
    pub const fn lira(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (kuruş) portion (always 0-99).
    #[inline]
    pub const fn kurus_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (rejected by sanitation).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Computes the discount percentage against a prior price, rounded to
    /// the nearest whole percent.
    ///
    /// Returns `None` unless the prior price is strictly greater than this
    /// price and strictly positive - anything else is not a discount.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// let now = Money::from_cents(9999);  // 99,99 TL
    /// let was = Money::from_cents(12999); // 129,99 TL
    /// assert_eq!(now.discount_percent_from(was), Some(23));
    /// assert_eq!(was.discount_percent_from(now), None);
    /// ```
    pub fn discount_percent_from(&self, old: Money) -> Option<u8> {
        if old.0 <= 0 || old.0 <= self.0 {
            return None;
        }
        // Integer round-half-up of (old - new) * 100 / old
        let diff = (old.0 - self.0) as i128;
        let pct = (diff * 100 + old.0 as i128 / 2) / old.0 as i128;
        Some(pct as u8)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation matches the feed's locale: comma decimal
/// separator, currency suffix ("129,99 TL").
///
/// ## Note
/// The rendering collaborator consumes these strings verbatim, so this IS
/// the display format, not just a debug convenience.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{},{:02} TL", sign, self.lira().abs(), self.kurus_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Serde Boundary Adapters
// =============================================================================

/// Serde adapter for required decimal price fields (`"price": 129.99`).
///
/// ## Usage
/// ```rust,ignore
/// #[serde(with = "money::decimal")]
/// pub price: Money,
/// ```
pub mod decimal {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(value))
    }
}

/// Serde adapter for optional decimal price fields (`"oldPrice": 149.99`).
pub mod decimal_opt {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        money: &Option<Money>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match money {
            Some(m) => serializer.serialize_some(&m.to_decimal()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Money>, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.map(Money::from_decimal))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(12999);
        assert_eq!(money.cents(), 12999);
        assert_eq!(money.lira(), 129);
        assert_eq!(money.kurus_part(), 99);
    }

    #[test]
    fn test_from_decimal_rounds() {
        assert_eq!(Money::from_decimal(129.99).cents(), 12999);
        assert_eq!(Money::from_decimal(100.0).cents(), 10000);
        // Float artifacts round cleanly
        assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(12999)), "129,99 TL");
        assert_eq!(format!("{}", Money::from_cents(500)), "5,00 TL");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5,50 TL");
        assert_eq!(format!("{}", Money::from_cents(0)), "0,00 TL");
    }

    #[test]
    fn test_discount_percent() {
        // 99,99 from 129,99 -> 30.00/129.99 = 23.08% -> 23
        let now = Money::from_cents(9999);
        let was = Money::from_cents(12999);
        assert_eq!(now.discount_percent_from(was), Some(23));

        // 179,99 from 199,99 -> 10.0005% -> 10
        let now = Money::from_cents(17999);
        let was = Money::from_cents(19999);
        assert_eq!(now.discount_percent_from(was), Some(10));
    }

    #[test]
    fn test_discount_percent_requires_real_discount() {
        let price = Money::from_cents(10000);
        // Equal, higher, or zero prior price is not a discount
        assert_eq!(price.discount_percent_from(Money::from_cents(10000)), None);
        assert_eq!(price.discount_percent_from(Money::from_cents(9000)), None);
        assert_eq!(price.discount_percent_from(Money::zero()), None);
    }

    #[test]
    fn test_decimal_serde_round_trip() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Priced {
            #[serde(with = "crate::money::decimal")]
            price: Money,
            #[serde(default, with = "crate::money::decimal_opt")]
            old_price: Option<Money>,
        }

        let parsed: Priced = serde_json::from_str(r#"{"price":99.99}"#).unwrap();
        assert_eq!(parsed.price.cents(), 9999);
        assert_eq!(parsed.old_price, None);

        let parsed: Priced =
            serde_json::from_str(r#"{"price":99.99,"old_price":129.99}"#).unwrap();
        assert_eq!(parsed.old_price.unwrap().cents(), 12999);
    }
}
