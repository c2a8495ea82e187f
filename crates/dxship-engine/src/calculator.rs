//! Weight-based rate calculation
//!
//! A pure function: (package, config, weight unit) in, cost breakdown out.
//! No I/O, no shared state; concurrent evaluations need no coordination.

use dxship_core::config::WeightUnit;
use dxship_core::models::rate_config::COST_SCALE;
use dxship_core::models::{Package, RateBreakdown, RateConfig, RateResult};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

/// Round a monetary amount to two decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(COST_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculate the shipping rate for a resolved package
///
/// Returns `None` when the configuration is disabled; the method is not
/// offered, which is not an error. Eligibility is NOT checked here; the
/// caller gates on the destination before invoking this, per request.
///
/// Order of operations: free-shipping short-circuit, weight aggregation,
/// base + excess charge, hidden insurance surcharge, floor at zero, min/max
/// clamp, final rounding. The min/max clamp runs after insurance on purpose:
/// the surcharge can push the cost above the maximum and be clamped back
/// down, and it stays invisible to the customer either way.
pub fn calculate_rate(
    package: &Package,
    config: &RateConfig,
    weight_unit: WeightUnit,
) -> Option<RateResult> {
    if !config.enabled {
        return None;
    }

    // Free shipping waives the whole calculation, insurance included.
    if let Some(threshold) = config.free_shipping_threshold {
        if package.contents_value >= threshold {
            trace!(contents_value = %package.contents_value, "free shipping threshold met");
            return Some(RateResult::quote(
                Decimal::ZERO,
                RateBreakdown {
                    free_shipping_applied: true,
                    ..RateBreakdown::default()
                },
            ));
        }
    }

    let total_weight = package.total_weight_kg(weight_unit);

    let mut cost = config.base_cost;
    let mut excess_weight = Decimal::ZERO;
    let mut excess_charge = Decimal::ZERO;

    // Strictly above the threshold; weight exactly at it ships at base cost.
    if total_weight > config.weight_threshold && config.excess_rate > Decimal::ZERO {
        excess_weight = total_weight - config.weight_threshold;
        excess_charge = excess_weight * config.excess_rate;
        cost += excess_charge;
    }

    let insurance_total = package.insurance_total();
    cost += insurance_total;

    cost = cost.max(Decimal::ZERO);

    if let Some(min) = config.min_cost {
        if cost < min {
            cost = min;
        }
    }
    if let Some(max) = config.max_cost {
        if cost > max {
            cost = max;
        }
    }

    Some(RateResult::quote(
        round_money(cost),
        RateBreakdown {
            total_weight,
            excess_weight,
            excess_charge,
            insurance_total,
            free_shipping_applied: false,
        },
    ))
}
