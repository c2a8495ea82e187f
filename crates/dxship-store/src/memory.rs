//! In-memory settings store
//!
//! Backs the `SettingsStore` trait with a guarded option map. Readers
//! (concurrent checkout evaluations) and the writer (an administrator
//! saving settings) synchronize only here; each rate calculation reads one
//! consistent snapshot and configuration changes take effect on the next
//! call.

use crate::keys;
use crate::raw::{parse_optional_decimal, RawInstanceSettings};
use dxship_core::models::RateConfig;
use dxship_core::traits::SettingsStore;
use dxship_core::ShippingResult;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Thread-safe in-memory option store
#[derive(Default)]
pub struct MemorySettingsStore {
    options: RwLock<HashMap<String, String>>,
}

impl MemorySettingsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a raw option value
    pub fn get_option(&self, key: &str) -> Option<String> {
        self.options.read().get(key).cloned()
    }

    /// Write a raw option value
    pub fn set_option(&self, key: impl Into<String>, value: impl Into<String>) {
        self.options.write().insert(key.into(), value.into());
    }

    /// Delete an option, returning whether it existed
    pub fn delete_option(&self, key: &str) -> bool {
        self.options.write().remove(key).is_some()
    }

    /// Store a zone instance's settings document
    pub fn put_instance_settings(
        &self,
        zone_instance_id: i32,
        raw: &RawInstanceSettings,
    ) -> ShippingResult<()> {
        let document = serde_json::to_string(raw)?;
        self.set_option(keys::instance_settings_key(zone_instance_id), document);
        Ok(())
    }

    /// Store a product-level insurance surcharge
    pub fn set_product_insurance(&self, product_id: i64, value: Decimal) {
        self.set_option(keys::product_insurance_key(product_id), value.to_string());
    }

    /// Store a category-level insurance surcharge
    pub fn set_category_insurance(&self, term_id: i64, value: Decimal) {
        self.set_option(keys::category_insurance_key(term_id), value.to_string());
    }
}

impl SettingsStore for MemorySettingsStore {
    fn rate_config(&self, zone_instance_id: i32) -> ShippingResult<RateConfig> {
        match self.get_option(&keys::instance_settings_key(zone_instance_id)) {
            None => {
                debug!(zone_instance = zone_instance_id, "no stored settings, using defaults");
                Ok(RateConfig::default())
            }
            Some(document) => {
                let raw: RawInstanceSettings = serde_json::from_str(&document)?;
                Ok(raw.into())
            }
        }
    }

    fn product_insurance(&self, product_id: i64) -> ShippingResult<Option<Decimal>> {
        let value = self.get_option(&keys::product_insurance_key(product_id));
        Ok(parse_optional_decimal(value.as_deref()))
    }

    fn category_insurance(&self, term_id: i64) -> ShippingResult<Option<Decimal>> {
        let value = self.get_option(&keys::category_insurance_key(term_id));
        Ok(parse_optional_decimal(value.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_missing_instance_yields_defaults() {
        let store = MemorySettingsStore::new();
        let config = store.rate_config(9).unwrap();
        assert_eq!(config, RateConfig::default());
    }

    #[test]
    fn test_instance_settings_round_trip() {
        let store = MemorySettingsStore::new();
        let raw = RawInstanceSettings {
            base_cost: Some("5.00".to_string()),
            max_cost: Some("12.00".to_string()),
            ..RawInstanceSettings::default()
        };
        store.put_instance_settings(1, &raw).unwrap();

        let config = store.rate_config(1).unwrap();
        assert_eq!(config.base_cost, dec!(5.00));
        assert_eq!(config.max_cost, Some(dec!(12.00)));
        // Instance 2 is untouched
        assert_eq!(store.rate_config(2).unwrap(), RateConfig::default());
    }

    #[test]
    fn test_malformed_document_is_a_serialization_error() {
        let store = MemorySettingsStore::new();
        store.set_option(keys::instance_settings_key(1), "{not json");

        let err = store.rate_config(1).unwrap_err();
        assert_eq!(err.code(), "serialization_error");
    }

    #[test]
    fn test_insurance_lookups() {
        let store = MemorySettingsStore::new();
        store.set_product_insurance(10, dec!(2.50));
        store.set_category_insurance(3, dec!(1.00));

        assert_eq!(store.product_insurance(10).unwrap(), Some(dec!(2.50)));
        assert_eq!(store.product_insurance(11).unwrap(), None);
        assert_eq!(store.category_insurance(3).unwrap(), Some(dec!(1.00)));
    }

    #[test]
    fn test_non_numeric_insurance_is_ignored() {
        let store = MemorySettingsStore::new();
        store.set_option(keys::product_insurance_key(10), "priceless");
        assert_eq!(store.product_insurance(10).unwrap(), None);
    }

    #[test]
    fn test_delete_option() {
        let store = MemorySettingsStore::new();
        store.set_option("k", "v");
        assert!(store.delete_option("k"));
        assert!(!store.delete_option("k"));
        assert_eq!(store.get_option("k"), None);
    }
}
