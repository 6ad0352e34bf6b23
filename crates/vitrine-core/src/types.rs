//! # Domain Types
//!
//! Core domain types for the Vitrine carousel.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   FavoriteSet   │   │   ProductId     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  ids (ordered,  │   │  i64 newtype    │       │
//! │  │  name           │   │   set meaning)  │   │  stable within  │       │
//! │  │  price          │   │  toggle(id)     │   │  a session      │       │
//! │  │  old_price?     │   │  contains(id)   │   └─────────────────┘       │
//! │  │  img? / image?  │   └─────────────────┘                             │
//! │  │  url?           │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability Contract
//! Products never mutate in place after a load settles. A reload replaces
//! the whole list. Favorites mutate only through [`FavoriteSet::toggle`].

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;
use crate::PLACEHOLDER_IMAGE_URL;

// =============================================================================
// Product Id
// =============================================================================

/// Identifier of a product, unique within a single load.
///
/// ## Why a newtype?
/// Favorites, click routing, and dedup all key on this value; a bare i64
/// would let a quantity or index slip in silently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A recommended product, as served by the remote feed.
///
/// Field names follow the feed's wire format (`oldPrice`, `img`); the
/// cached blob uses the same shape so cache reads and network reads share
/// one deserializer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier within a load, stable across a session.
    pub id: ProductId,

    /// Display name shown on the card.
    pub name: String,

    /// Current price.
    #[serde(with = "crate::money::decimal")]
    #[ts(as = "f64")]
    pub price: Money,

    /// Prior price; when present and greater than `price`, the card shows
    /// a discount badge.
    #[serde(rename = "oldPrice", default, with = "crate::money::decimal_opt")]
    #[ts(as = "Option<f64>")]
    pub old_price: Option<Money>,

    /// Primary image source field.
    #[serde(default)]
    pub img: Option<String>,

    /// Secondary image source field (some feed entries use this name).
    #[serde(default)]
    pub image: Option<String>,

    /// Outbound detail-page link, opened in a new browsing context.
    #[serde(default)]
    pub url: Option<String>,
}

impl Product {
    /// Resolves the image URL: `img` first, then `image`, then the fixed
    /// placeholder. Empty strings count as absent.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::{Product, ProductId, Money, PLACEHOLDER_IMAGE_URL};
    ///
    /// let mut product = Product {
    ///     id: ProductId(1),
    ///     name: "Tişört".into(),
    ///     price: Money::from_cents(9999),
    ///     old_price: None,
    ///     img: None,
    ///     image: None,
    ///     url: None,
    /// };
    /// assert_eq!(product.image_url(), PLACEHOLDER_IMAGE_URL);
    ///
    /// product.image = Some("https://cdn.example/a.jpg".into());
    /// assert_eq!(product.image_url(), "https://cdn.example/a.jpg");
    /// ```
    pub fn image_url(&self) -> &str {
        self.img
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.image.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// Returns the outbound detail URL, if the product carries one.
    pub fn detail_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|s| !s.is_empty())
    }

    /// Discount percentage implied by `old_price`, if it is a real discount.
    #[inline]
    pub fn discount_percent(&self) -> Option<u8> {
        self.old_price
            .and_then(|old| self.price.discount_percent_from(old))
    }
}

// =============================================================================
// Feed Sanitation
// =============================================================================

/// Filters a freshly parsed product list down to well-formed, unique-id
/// records.
///
/// ## Rules
/// - empty name - dropped
/// - negative price - dropped
/// - duplicate id - first occurrence wins
///
/// Returns the surviving products plus one [`CoreError`] per dropped
/// record so the caller can log them. Sanitation never fails as a whole.
pub fn sanitize_feed(products: Vec<Product>) -> (Vec<Product>, Vec<CoreError>) {
    let mut seen = std::collections::HashSet::new();
    let mut kept = Vec::with_capacity(products.len());
    let mut rejected = Vec::new();

    for product in products {
        if product.name.trim().is_empty() {
            rejected.push(CoreError::EmptyName(product.id));
        } else if product.price.is_negative() {
            rejected.push(CoreError::NegativePrice {
                id: product.id,
                price_cents: product.price.cents(),
            });
        } else if !seen.insert(product.id) {
            rejected.push(CoreError::DuplicateId(product.id));
        } else {
            kept.push(product);
        }
    }

    (kept, rejected)
}

// =============================================================================
// Favorite Set
// =============================================================================

/// The set of favorited product ids.
///
/// ## Storage Shape
/// Stored as an ordered JSON id array (`[2, 7]`) for persistence
/// simplicity - the order carries no meaning. Serde is `transparent` so
/// the persisted blob is exactly that array, matching what earlier
/// deployments of the widget wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct FavoriteSet {
    ids: Vec<ProductId>,
}

impl FavoriteSet {
    /// Creates an empty favorite set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks membership.
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Flips membership of `id` and returns the NEW membership state
    /// (`true` = now favorited).
    ///
    /// Toggling twice always restores the original membership.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Number of favorited ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is favorited.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The ids in storage order.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
