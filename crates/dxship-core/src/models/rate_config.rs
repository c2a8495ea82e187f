//! Rate configuration model
//!
//! One `RateConfig` exists per shipping-zone instance, owned by the settings
//! store. The engine only reads it; a fresh snapshot is fetched on every
//! calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shipped default base cost
pub const DEFAULT_BASE_COST: Decimal = dec!(8.00);

/// Shipped default weight threshold in kg
pub const DEFAULT_WEIGHT_THRESHOLD: Decimal = dec!(20);

/// Shipped default excess rate per kg above the threshold
pub const DEFAULT_EXCESS_RATE: Decimal = dec!(0.40);

/// Shipped default method title shown at checkout
pub const DEFAULT_TITLE: &str = "Standard Shipping";

/// Decimal places for monetary amounts
pub const COST_SCALE: u32 = 2;

/// Decimal places for aggregated weights
pub const WEIGHT_SCALE: u32 = 2;

/// Tax status of the shipping line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaxStatus {
    /// Shipping cost is taxable
    #[default]
    Taxable,
    /// Shipping cost carries no tax
    None,
}

impl TaxStatus {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "taxable" => Some(TaxStatus::Taxable),
            "none" => Some(TaxStatus::None),
            _ => None,
        }
    }
}

impl fmt::Display for TaxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxStatus::Taxable => write!(f, "taxable"),
            TaxStatus::None => write!(f, "none"),
        }
    }
}

/// Rate configuration for one shipping-zone instance
///
/// `min_cost <= max_cost` is not enforced here; the admin form constrains it
/// at the boundary and the calculator applies the clamps sequentially
/// regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Whether the method is offered at all
    pub enabled: bool,

    /// Customer-facing method title
    pub title: String,

    /// Tax status of the shipping line
    pub tax_status: TaxStatus,

    /// Cost for packages up to the weight threshold
    pub base_cost: Decimal,

    /// Weight threshold in kg; weight above it is charged per kg
    pub weight_threshold: Decimal,

    /// Charge per kg of weight above the threshold
    pub excess_rate: Decimal,

    /// Minimum cost regardless of weight (None = no minimum)
    pub min_cost: Option<Decimal>,

    /// Maximum cost regardless of weight (None = no maximum)
    pub max_cost: Option<Decimal>,

    /// Order subtotal at or above which shipping is free (None = disabled)
    pub free_shipping_threshold: Option<Decimal>,

    /// Emit a structured log line per calculation
    pub debug_mode: bool,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: DEFAULT_TITLE.to_string(),
            tax_status: TaxStatus::Taxable,
            base_cost: DEFAULT_BASE_COST,
            weight_threshold: DEFAULT_WEIGHT_THRESHOLD,
            excess_rate: DEFAULT_EXCESS_RATE,
            min_cost: None,
            max_cost: None,
            free_shipping_threshold: None,
            debug_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_defaults() {
        let config = RateConfig::default();
        assert!(config.enabled);
        assert_eq!(config.base_cost, dec!(8.00));
        assert_eq!(config.weight_threshold, dec!(20));
        assert_eq!(config.excess_rate, dec!(0.40));
        assert_eq!(config.min_cost, None);
        assert_eq!(config.max_cost, None);
        assert_eq!(config.free_shipping_threshold, None);
        assert_eq!(config.title, "Standard Shipping");
        assert!(!config.debug_mode);
    }

    #[test]
    fn test_tax_status_parsing() {
        assert_eq!(TaxStatus::from_str("taxable"), Some(TaxStatus::Taxable));
        assert_eq!(TaxStatus::from_str("NONE"), Some(TaxStatus::None));
        assert_eq!(TaxStatus::from_str("exempt"), None);
    }
}
