//! Property tests for the rate calculator

use dxship_core::config::WeightUnit;
use dxship_core::models::{LineItem, Package, RateConfig};
use dxship_engine::calculate_rate;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Non-negative money with two decimal places
fn money(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_line() -> impl Strategy<Value = LineItem> {
    (
        1i64..1000,
        1u32..=10,
        money(50_00),
        proptest::option::of(money(10_00)),
        proptest::collection::vec(money(10_00), 0..3),
    )
        .prop_map(
            |(product_id, quantity, unit_weight, product_insurance, category_insurances)| {
                LineItem {
                    product_id,
                    quantity,
                    unit_weight,
                    product_insurance,
                    category_insurances,
                }
            },
        )
}

fn arb_package() -> impl Strategy<Value = Package> {
    (proptest::collection::vec(arb_line(), 1..5), money(500_00)).prop_map(
        |(items, contents_value)| Package {
            items,
            contents_value,
        },
    )
}

fn arb_config() -> impl Strategy<Value = RateConfig> {
    (
        money(50_00),
        money(50_00),
        money(5_00),
        proptest::option::of(money(30_00)),
        proptest::option::of(money(30_00)),
        proptest::option::of(money(200_00)),
    )
        .prop_map(
            |(base_cost, weight_threshold, excess_rate, min_cost, max_cost, free)| RateConfig {
                base_cost,
                weight_threshold,
                excess_rate,
                min_cost,
                max_cost,
                free_shipping_threshold: free,
                ..RateConfig::default()
            },
        )
}

proptest! {
    #[test]
    fn identical_inputs_produce_identical_results(
        package in arb_package(),
        config in arb_config(),
    ) {
        let first = calculate_rate(&package, &config, WeightUnit::Kg);
        let second = calculate_rate(&package, &config, WeightUnit::Kg);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cost_is_never_negative(
        package in arb_package(),
        config in arb_config(),
    ) {
        let result = calculate_rate(&package, &config, WeightUnit::Kg).unwrap();
        prop_assert!(result.cost >= Decimal::ZERO);
    }

    #[test]
    fn ordered_bounds_contain_the_cost(
        package in arb_package(),
        base in money(50_00),
        threshold in money(50_00),
        excess in money(5_00),
        bound_a in money(30_00),
        bound_b in money(30_00),
    ) {
        let (min, max) = if bound_a <= bound_b {
            (bound_a, bound_b)
        } else {
            (bound_b, bound_a)
        };
        let config = RateConfig {
            base_cost: base,
            weight_threshold: threshold,
            excess_rate: excess,
            min_cost: Some(min),
            max_cost: Some(max),
            free_shipping_threshold: None,
            ..RateConfig::default()
        };

        let result = calculate_rate(&package, &config, WeightUnit::Kg).unwrap();
        prop_assert!(result.cost >= min, "cost {} below min {}", result.cost, min);
        prop_assert!(result.cost <= max, "cost {} above max {}", result.cost, max);
    }

    #[test]
    fn weight_at_or_below_threshold_has_no_excess_charge(
        package in arb_package(),
        base in money(50_00),
        excess in money(5_00),
    ) {
        // Pin the threshold to the package's own weight: strictly-above is
        // required for an excess charge.
        let weight = package.total_weight_kg(WeightUnit::Kg);
        let config = RateConfig {
            base_cost: base,
            weight_threshold: weight,
            excess_rate: excess,
            min_cost: None,
            max_cost: None,
            free_shipping_threshold: None,
            ..RateConfig::default()
        };

        let result = calculate_rate(&package, &config, WeightUnit::Kg).unwrap();
        prop_assert_eq!(result.breakdown.excess_weight, Decimal::ZERO);
        prop_assert_eq!(result.breakdown.excess_charge, Decimal::ZERO);
    }

    #[test]
    fn free_shipping_always_wins_at_the_threshold(
        package in arb_package(),
        config in arb_config(),
    ) {
        let config = RateConfig {
            free_shipping_threshold: Some(package.contents_value),
            ..config
        };

        let result = calculate_rate(&package, &config, WeightUnit::Kg).unwrap();
        prop_assert_eq!(result.cost, Decimal::ZERO);
        prop_assert!(result.breakdown.free_shipping_applied);
    }
}
