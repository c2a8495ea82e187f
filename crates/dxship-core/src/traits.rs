//! Trait seams for the settings store and rate service
//!
//! The engine is synchronous pure computation; every input is supplied by
//! value or reference before invocation, so the seams are plain traits with
//! no async surface.

use crate::error::ShippingError;
use crate::models::{CartContents, Destination, RateConfig, RateResult};
use rust_decimal::Decimal;

/// External key-value configuration store
///
/// Owns rate configuration per shipping-zone instance and the per-product /
/// per-category insurance attributes. The engine reads a fresh snapshot on
/// every call; it never writes.
pub trait SettingsStore: Send + Sync {
    /// Rate configuration for a zone instance
    ///
    /// An instance with no stored settings yields the shipped defaults.
    fn rate_config(&self, zone_instance_id: i32) -> Result<RateConfig, ShippingError>;

    /// Product-level insurance surcharge, if configured
    fn product_insurance(&self, product_id: i64) -> Result<Option<Decimal>, ShippingError>;

    /// Category-level insurance surcharge, if configured
    fn category_insurance(&self, term_id: i64) -> Result<Option<Decimal>, ShippingError>;
}

/// Rate evaluation surface consumed by the checkout pipeline
pub trait RateService {
    /// Whether the method should be offered for this cart and destination
    fn is_available(
        &self,
        cart: &CartContents,
        destination: &Destination,
    ) -> Result<bool, ShippingError>;

    /// Evaluate a rate
    ///
    /// `Ok(None)` means the method is not offered (disabled configuration or
    /// empty cart). An out-of-area destination yields
    /// `Ok(Some(RateResult))` with `eligible == false` so the caller can
    /// surface the advisory notice.
    fn calculate(
        &self,
        cart: &CartContents,
        destination: &Destination,
    ) -> Result<Option<RateResult>, ShippingError>;
}
