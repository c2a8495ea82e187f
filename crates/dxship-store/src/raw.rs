//! Raw instance settings and defensive parsing
//!
//! The store persists instance settings as a document of string-valued
//! options, the way the admin boundary saved them. Conversion into a
//! `RateConfig` never fails: an absent field falls back to the shipped
//! default, a present but non-numeric value is treated as zero, and an
//! empty or non-numeric optional bound is unset.

use dxship_core::models::rate_config::{
    DEFAULT_BASE_COST, DEFAULT_EXCESS_RATE, DEFAULT_TITLE, DEFAULT_WEIGHT_THRESHOLD,
};
use dxship_core::models::{RateConfig, TaxStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stored option document for one zone instance
///
/// Every field is an optional string, mirroring what the platform hands
/// back for saved form values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawInstanceSettings {
    pub enabled: Option<String>,
    pub title: Option<String>,
    pub tax_status: Option<String>,
    pub base_cost: Option<String>,
    pub weight_threshold: Option<String>,
    pub excess_rate: Option<String>,
    pub min_cost: Option<String>,
    pub max_cost: Option<String>,
    pub free_shipping_amount: Option<String>,
    pub debug_mode: Option<String>,
}

/// Parse a decimal option, treating blank or garbage values as `None`
pub(crate) fn parse_optional_decimal(raw: Option<&str>) -> Option<Decimal> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Decimal>().ok()
}

/// Parse a required decimal option
///
/// Absent -> shipped default; present but blank or non-numeric -> zero.
fn parse_decimal(raw: Option<&str>, default: Decimal) -> Decimal {
    match raw {
        None => default,
        Some(value) => value.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
    }
}

/// Parse a yes/no option
fn parse_yes_no(raw: Option<&str>, default: bool) -> bool {
    match raw {
        None => default,
        Some(value) => matches!(value.trim(), "yes" | "1" | "true"),
    }
}

impl From<RawInstanceSettings> for RateConfig {
    fn from(raw: RawInstanceSettings) -> Self {
        RateConfig {
            enabled: parse_yes_no(raw.enabled.as_deref(), true),
            title: raw
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            tax_status: raw
                .tax_status
                .as_deref()
                .and_then(TaxStatus::from_str)
                .unwrap_or_default(),
            base_cost: parse_decimal(raw.base_cost.as_deref(), DEFAULT_BASE_COST),
            weight_threshold: parse_decimal(
                raw.weight_threshold.as_deref(),
                DEFAULT_WEIGHT_THRESHOLD,
            ),
            excess_rate: parse_decimal(raw.excess_rate.as_deref(), DEFAULT_EXCESS_RATE),
            min_cost: parse_optional_decimal(raw.min_cost.as_deref()),
            max_cost: parse_optional_decimal(raw.max_cost.as_deref()),
            free_shipping_threshold: parse_optional_decimal(raw.free_shipping_amount.as_deref()),
            debug_mode: parse_yes_no(raw.debug_mode.as_deref(), false),
        }
    }
}
