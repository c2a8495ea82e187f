//! Rate result and cost breakdown
//!
//! The breakdown exists for administrators and tests; the customer-facing
//! line renders only the method title and the final cost. In particular
//! `insurance_total` is part of the cost but is never itemized to the
//! customer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Intermediate values of one rate calculation
///
/// Fields hold the audit values as computed: `excess_charge` and
/// `insurance_total` are unrounded and unclamped; `total_weight` is the
/// post-summation kg value rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RateBreakdown {
    /// Total chargeable weight in kg
    pub total_weight: Decimal,

    /// Weight above the configured threshold, zero at or below it
    pub excess_weight: Decimal,

    /// Charge for the excess weight before clamping
    pub excess_charge: Decimal,

    /// Hidden insurance surcharge included in the cost
    pub insurance_total: Decimal,

    /// Whether the free-shipping short-circuit fired
    pub free_shipping_applied: bool,
}

/// Outcome of one rate evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateResult {
    /// Whether the destination is inside the serviceable area
    pub eligible: bool,

    /// Final shipping cost, rounded to two decimal places
    pub cost: Decimal,

    /// Audit breakdown of the calculation
    pub breakdown: RateBreakdown,
}

impl RateResult {
    /// A priced quote for an eligible destination
    pub fn quote(cost: Decimal, breakdown: RateBreakdown) -> Self {
        Self {
            eligible: true,
            cost,
            breakdown,
        }
    }

    /// Result for a destination outside the serviceable area
    pub fn ineligible() -> Self {
        Self {
            eligible: false,
            cost: Decimal::ZERO,
            breakdown: RateBreakdown::default(),
        }
    }
}
