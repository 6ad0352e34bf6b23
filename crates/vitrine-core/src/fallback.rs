//! # Fallback Catalog
//!
//! The fixed demonstration product list used when the whole acquisition
//! chain (cache, then network) fails. The widget is never left with zero
//! products.
//!
//! ## Rules
//! - Always 8 items, ids 1-8
//! - Never written to the cache - a later load should retry the network
//!   rather than freeze demo data in

use crate::money::Money;
use crate::types::{Product, ProductId};

/// One fallback record. Detail URLs are `#` - the demo cards deliberately
/// lead nowhere.
fn demo(id: i64, name: &str, price: f64, old_price: Option<f64>, image: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        price: Money::from_decimal(price),
        old_price: old_price.map(Money::from_decimal),
        img: None,
        image: Some(image.to_string()),
        url: Some("#".to_string()),
    }
}

/// Builds the guaranteed-available demonstration catalog.
///
/// ## Example
/// ```rust
/// let products = vitrine_core::fallback::fallback_products();
/// assert_eq!(products.len(), 8);
/// ```
pub fn fallback_products() -> Vec<Product> {
    vec![
        demo(
            1,
            "Standart Kalıp Erkek Tişört",
            99.99,
            Some(129.99),
            "https://via.placeholder.com/300x300/000000/FFFFFF?text=T-Shirt",
        ),
        demo(
            2,
            "Slim Fit Erkek Gömlek",
            149.99,
            None,
            "https://via.placeholder.com/300x300/333333/FFFFFF?text=Shirt",
        ),
        demo(
            3,
            "Rahat Kesim Erkek Pantolon",
            179.99,
            Some(199.99),
            "https://via.placeholder.com/300x300/666666/FFFFFF?text=Pants",
        ),
        demo(
            4,
            "Erkek Spor Ayakkabı",
            299.99,
            None,
            "https://via.placeholder.com/300x300/999999/FFFFFF?text=Shoes",
        ),
        demo(
            5,
            "Erkek Ceket",
            249.99,
            Some(299.99),
            "https://via.placeholder.com/300x300/CCCCCC/000000?text=Jacket",
        ),
        demo(
            6,
            "Erkek Kazak",
            189.99,
            None,
            "https://via.placeholder.com/300x300/EEEEEE/000000?text=Sweater",
        ),
        demo(
            7,
            "Erkek Şort",
            89.99,
            Some(119.99),
            "https://via.placeholder.com/300x300/AAAAAA/000000?text=Shorts",
        ),
        demo(
            8,
            "Erkek Polo Tişört",
            129.99,
            None,
            "https://via.placeholder.com/300x300/777777/FFFFFF?text=Polo",
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sanitize_feed;

    #[test]
    fn test_fallback_is_eight_well_formed_products() {
        let products = fallback_products();
        assert_eq!(products.len(), 8);

        // The fallback must survive its own sanitation untouched
        let (kept, rejected) = sanitize_feed(products);
        assert_eq!(kept.len(), 8);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_fallback_discounts() {
        let products = fallback_products();
        // Item 1: 99.99 from 129.99 -> 23%
        assert_eq!(products[0].discount_percent(), Some(23));
        // Item 2 has no prior price
        assert_eq!(products[1].discount_percent(), None);
    }

    #[test]
    fn test_fallback_ids_are_sequential() {
        let ids: Vec<i64> = fallback_products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<i64>>());
    }
}
