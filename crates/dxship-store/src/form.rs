//! Admin-boundary settings form
//!
//! The engine itself never validates configuration; constraining input is
//! the settings UI's job. This form is that boundary: decimal fields must be
//! numeric and non-negative, and a minimum cost may not exceed the maximum.
//! What passes validation is rendered into the raw document the store
//! persists.

use crate::raw::RawInstanceSettings;
use dxship_core::models::TaxStatus;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Settings form for one shipping-zone instance
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_cost_bounds"))]
#[serde(default)]
pub struct InstanceSettingsForm {
    /// Offer the method at all
    pub enabled: bool,

    /// Customer-facing method title
    #[validate(length(min = 1, max = 120))]
    pub title: String,

    /// Tax status: "taxable" or "none"
    #[validate(custom(function = "validate_tax_status"))]
    pub tax_status: String,

    /// Base cost for packages up to the weight threshold
    #[validate(custom(function = "validate_money"))]
    pub base_cost: String,

    /// Weight threshold in the store's weight unit
    #[validate(custom(function = "validate_money"))]
    pub weight_threshold: String,

    /// Charge per unit of weight above the threshold
    #[validate(custom(function = "validate_money"))]
    pub excess_rate: String,

    /// Minimum cost; blank for no minimum
    #[validate(custom(function = "validate_optional_money"))]
    pub min_cost: String,

    /// Maximum cost; blank for no maximum
    #[validate(custom(function = "validate_optional_money"))]
    pub max_cost: String,

    /// Free shipping above this order subtotal; blank to disable
    #[validate(custom(function = "validate_optional_money"))]
    pub free_shipping_amount: String,

    /// Log a structured line per calculation
    pub debug_mode: bool,
}

impl Default for InstanceSettingsForm {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Standard Shipping".to_string(),
            tax_status: "taxable".to_string(),
            base_cost: "8.00".to_string(),
            weight_threshold: "20".to_string(),
            excess_rate: "0.40".to_string(),
            min_cost: String::new(),
            max_cost: String::new(),
            free_shipping_amount: String::new(),
            debug_mode: false,
        }
    }
}

impl InstanceSettingsForm {
    /// Render the validated form into the stored option document
    pub fn into_raw(self) -> RawInstanceSettings {
        RawInstanceSettings {
            enabled: Some(yes_no(self.enabled)),
            title: Some(self.title.trim().to_string()),
            tax_status: Some(self.tax_status.trim().to_lowercase()),
            base_cost: Some(self.base_cost.trim().to_string()),
            weight_threshold: Some(self.weight_threshold.trim().to_string()),
            excess_rate: Some(self.excess_rate.trim().to_string()),
            min_cost: Some(self.min_cost.trim().to_string()),
            max_cost: Some(self.max_cost.trim().to_string()),
            free_shipping_amount: Some(self.free_shipping_amount.trim().to_string()),
            debug_mode: Some(yes_no(self.debug_mode)),
        }
    }
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn parse_non_negative(value: &str) -> Result<Decimal, ValidationError> {
    let parsed = value
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::new("not_a_number"))?;
    if parsed < Decimal::ZERO {
        return Err(ValidationError::new("negative"));
    }
    Ok(parsed)
}

/// Required non-negative decimal
fn validate_money(value: &str) -> Result<(), ValidationError> {
    parse_non_negative(value).map(|_| ())
}

/// Non-negative decimal or blank
fn validate_optional_money(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_money(value)
}

fn validate_tax_status(value: &str) -> Result<(), ValidationError> {
    TaxStatus::from_str(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("tax_status"))
}

/// A configured minimum cost may not exceed the maximum
fn validate_cost_bounds(form: &InstanceSettingsForm) -> Result<(), ValidationError> {
    let min = form.min_cost.trim().parse::<Decimal>().ok();
    let max = form.max_cost.trim().parse::<Decimal>().ok();

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ValidationError::new("cost_bounds"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxship_core::models::RateConfig;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_form_validates() {
        assert!(InstanceSettingsForm::default().validate().is_ok());
    }

    #[test]
    fn test_non_numeric_decimal_rejected() {
        let form = InstanceSettingsForm {
            base_cost: "eight".to_string(),
            ..InstanceSettingsForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let form = InstanceSettingsForm {
            excess_rate: "-0.40".to_string(),
            ..InstanceSettingsForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_blank_bounds_accepted() {
        let form = InstanceSettingsForm {
            min_cost: String::new(),
            max_cost: "   ".to_string(),
            ..InstanceSettingsForm::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let form = InstanceSettingsForm {
            min_cost: "10.00".to_string(),
            max_cost: "5.00".to_string(),
            ..InstanceSettingsForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_ordered_bounds_accepted() {
        let form = InstanceSettingsForm {
            min_cost: "5.00".to_string(),
            max_cost: "25.00".to_string(),
            ..InstanceSettingsForm::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_unknown_tax_status_rejected() {
        let form = InstanceSettingsForm {
            tax_status: "exempt".to_string(),
            ..InstanceSettingsForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_form_round_trips_into_config() {
        let form = InstanceSettingsForm {
            enabled: true,
            base_cost: " 6.50 ".to_string(),
            min_cost: "2.00".to_string(),
            max_cost: "20.00".to_string(),
            free_shipping_amount: String::new(),
            debug_mode: true,
            ..InstanceSettingsForm::default()
        };
        assert!(form.validate().is_ok());

        let config: RateConfig = form.into_raw().into();
        assert!(config.enabled);
        assert_eq!(config.base_cost, dec!(6.50));
        assert_eq!(config.min_cost, Some(dec!(2.00)));
        assert_eq!(config.max_cost, Some(dec!(20.00)));
        assert_eq!(config.free_shipping_threshold, None);
        assert!(config.debug_mode);
    }
}
