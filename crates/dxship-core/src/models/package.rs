//! Package, line item, and destination models
//!
//! A `Package` is the resolved input to the rate calculation: every line
//! already carries its insurance attributes, looked up by the shipping-method
//! facade before the pure computation runs.

use crate::config::WeightUnit;
use crate::models::rate_config::WEIGHT_SCALE;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Shipping destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Destination {
    /// ISO country code as entered at checkout
    pub country: String,

    /// Raw postcode as entered at checkout
    pub postcode: String,
}

impl Destination {
    /// Create a new destination
    pub fn new(country: impl Into<String>, postcode: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            postcode: postcode.into(),
        }
    }
}

/// One resolved package line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier
    pub product_id: i64,

    /// Units of this product in the package, always > 0
    pub quantity: u32,

    /// Per-unit weight in the store's configured weight unit
    pub unit_weight: Decimal,

    /// Product-level insurance surcharge per unit, if configured
    pub product_insurance: Option<Decimal>,

    /// Insurance surcharges of the categories the product belongs to
    pub category_insurances: Vec<Decimal>,
}

impl LineItem {
    /// Total weight of this line in store units
    #[inline]
    pub fn line_weight(&self) -> Decimal {
        self.unit_weight * Decimal::from(self.quantity)
    }

    /// Per-unit insurance surcharge for this line
    ///
    /// A positive product-level value wins outright. Otherwise the highest
    /// positive category value applies; a product in several insured
    /// categories is charged once, at the highest rate, never the sum.
    pub fn resolved_insurance(&self) -> Decimal {
        if let Some(value) = self.product_insurance {
            if value > Decimal::ZERO {
                return value;
            }
        }

        self.category_insurances
            .iter()
            .fold(Decimal::ZERO, |best, value| best.max(*value))
    }

    /// Insurance surcharge for the whole line
    #[inline]
    pub fn line_insurance(&self) -> Decimal {
        self.resolved_insurance() * Decimal::from(self.quantity)
    }
}

/// Resolved package contents plus the pre-shipping order subtotal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Package {
    /// Package lines
    pub items: Vec<LineItem>,

    /// Pre-shipping order subtotal, used for the free-shipping threshold
    pub contents_value: Decimal,
}

impl Package {
    /// Whether the package has no lines
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total chargeable weight in kilograms
    ///
    /// Weights are summed in store units, converted to kg, then rounded to
    /// two decimal places, after summation, not per line.
    pub fn total_weight_kg(&self, unit: WeightUnit) -> Decimal {
        let total: Decimal = self.items.iter().map(LineItem::line_weight).sum();
        unit.to_kg(total)
            .round_dp_with_strategy(WEIGHT_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Sum of per-line insurance surcharges
    pub fn insurance_total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_insurance).sum()
    }
}
