//! Store-level configuration
//!
//! The platform settings the calculation depends on, the weight unit
//! products are entered in and the store currency, are loaded here and
//! passed explicitly into the engine. Nothing in the engine reads ambient
//! state.

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight unit products are entered in
///
/// The engine always charges in kilograms; other units are converted with
/// the platform's factor table before the threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Grams
    G,
    /// Pounds
    Lbs,
    /// Ounces
    Oz,
}

impl WeightUnit {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(WeightUnit::Kg),
            "g" | "gram" | "grams" => Some(WeightUnit::G),
            "lbs" | "lb" | "pound" | "pounds" => Some(WeightUnit::Lbs),
            "oz" | "ounce" | "ounces" => Some(WeightUnit::Oz),
            _ => None,
        }
    }

    /// Multiplier converting a value in this unit to kilograms
    #[inline]
    pub fn factor_to_kg(&self) -> Decimal {
        match self {
            WeightUnit::Kg => Decimal::ONE,
            WeightUnit::G => dec!(0.001),
            WeightUnit::Lbs => dec!(0.45359237),
            WeightUnit::Oz => dec!(0.02834952),
        }
    }

    /// Convert a weight in this unit to kilograms
    #[inline]
    pub fn to_kg(&self, value: Decimal) -> Decimal {
        value * self.factor_to_kg()
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::G => write!(f, "g"),
            WeightUnit::Lbs => write!(f, "lbs"),
            WeightUnit::Oz => write!(f, "oz"),
        }
    }
}

/// Store-wide settings the rate calculation depends on
#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    /// Weight unit product weights are entered in
    #[serde(default)]
    pub weight_unit: WeightUnit,

    /// ISO currency code, used for log formatting only
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "GBP".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Kg,
            currency: default_currency(),
        }
    }
}

impl StoreSettings {
    /// Load settings from optional config files and DXSHIP-prefixed
    /// environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("weight_unit", "kg")?
            .set_default("currency", "GBP")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("DXSHIP").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }

    /// Load settings from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("DXSHIP").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}
