//! Cart-side view of a package
//!
//! The checkout pipeline hands the shipping method raw cart lines; product
//! and category insurance attributes are looked up from the settings store
//! when the lines are resolved into a [`Package`](crate::models::Package).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cart line before insurance resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier
    pub product_id: i64,

    /// Categories the product belongs to
    pub category_ids: Vec<i64>,

    /// Units in the cart, always > 0
    pub quantity: u32,

    /// Per-unit weight in store units; None for weightless products
    pub unit_weight: Option<Decimal>,
}

/// Cart contents handed over by the checkout pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CartContents {
    /// Cart lines
    pub lines: Vec<CartLine>,

    /// Pre-shipping order subtotal
    pub contents_value: Decimal,
}

impl CartContents {
    /// Whether the cart has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_cart() {
        let cart = CartContents::default();
        assert!(cart.is_empty());

        let cart = CartContents {
            lines: vec![CartLine {
                product_id: 1,
                category_ids: vec![],
                quantity: 1,
                unit_weight: Some(dec!(0.5)),
            }],
            contents_value: dec!(10.00),
        };
        assert!(!cart.is_empty());
    }
}
