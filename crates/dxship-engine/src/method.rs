//! Shipping-method facade
//!
//! Composes the eligibility gate, the settings store, and the pure
//! calculator into the surface the checkout pipeline consumes. The facade
//! re-evaluates eligibility on every request (availability is never cached
//! across destinations) and resolves cart lines into a priced package by
//! looking up insurance attributes per product and category.

use crate::calculator::calculate_rate;
use crate::eligibility::{is_allowed_country, is_excluded_postcode, EXCLUDED_AREA_MESSAGE};
use dxship_core::config::StoreSettings;
use dxship_core::models::{CartContents, Destination, LineItem, Package, RateResult};
use dxship_core::traits::{RateService, SettingsStore};
use dxship_core::{ShippingError, ShippingResult};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Weight-based shipping method over a settings store
pub struct DxShippingMethod<S: SettingsStore> {
    store: Arc<S>,
    zone_instance_id: i32,
    settings: StoreSettings,
}

impl<S: SettingsStore> DxShippingMethod<S> {
    /// Create a method bound to one shipping-zone instance
    pub fn new(store: Arc<S>, zone_instance_id: i32, settings: StoreSettings) -> Self {
        Self {
            store,
            zone_instance_id,
            settings,
        }
    }

    /// Zone instance this method reads its configuration from
    pub fn zone_instance_id(&self) -> i32 {
        self.zone_instance_id
    }

    /// Advisory notice for the checkout page, when the destination is
    /// outside the serviceable area
    ///
    /// Routes through the same predicate as the availability gate.
    pub fn exclusion_notice(&self, destination: &Destination) -> Option<&'static str> {
        if is_excluded_postcode(&destination.country, &destination.postcode) {
            Some(EXCLUDED_AREA_MESSAGE)
        } else {
            None
        }
    }

    /// Resolve cart lines into a package, attaching insurance attributes
    /// from the store
    fn build_package(&self, cart: &CartContents) -> ShippingResult<Package> {
        let mut items = Vec::with_capacity(cart.lines.len());

        for line in &cart.lines {
            if line.quantity == 0 {
                return Err(ShippingError::InvalidInput(format!(
                    "cart line for product {} has zero quantity",
                    line.product_id
                )));
            }

            let product_insurance = self.store.product_insurance(line.product_id)?;

            let mut category_insurances = Vec::with_capacity(line.category_ids.len());
            for term_id in &line.category_ids {
                if let Some(value) = self.store.category_insurance(*term_id)? {
                    category_insurances.push(value);
                }
            }

            items.push(LineItem {
                product_id: line.product_id,
                quantity: line.quantity,
                unit_weight: line.unit_weight.unwrap_or(Decimal::ZERO),
                product_insurance,
                category_insurances,
            });
        }

        Ok(Package {
            items,
            contents_value: cart.contents_value,
        })
    }

    fn destination_serviceable(&self, destination: &Destination) -> bool {
        !is_excluded_postcode(&destination.country, &destination.postcode)
            && is_allowed_country(&destination.country)
    }
}

impl<S: SettingsStore> RateService for DxShippingMethod<S> {
    #[instrument(skip(self, cart), fields(zone_instance = self.zone_instance_id))]
    fn is_available(
        &self,
        cart: &CartContents,
        destination: &Destination,
    ) -> ShippingResult<bool> {
        let config = self.store.rate_config(self.zone_instance_id)?;

        if !config.enabled {
            return Ok(false);
        }

        if cart.is_empty() {
            return Ok(false);
        }

        if !self.destination_serviceable(destination) {
            debug!(
                country = %destination.country,
                postcode = %destination.postcode,
                "destination outside service area"
            );
            return Ok(false);
        }

        Ok(true)
    }

    #[instrument(skip(self, cart), fields(zone_instance = self.zone_instance_id))]
    fn calculate(
        &self,
        cart: &CartContents,
        destination: &Destination,
    ) -> ShippingResult<Option<RateResult>> {
        let config = self.store.rate_config(self.zone_instance_id)?;

        if !self.destination_serviceable(destination) {
            return Ok(Some(RateResult::ineligible()));
        }

        if !config.enabled || cart.is_empty() {
            return Ok(None);
        }

        let package = self.build_package(cart)?;
        let result = calculate_rate(&package, &config, self.settings.weight_unit);

        if config.debug_mode {
            if let Some(ref rate) = result {
                if rate.breakdown.free_shipping_applied {
                    debug!(
                        order_total = %package.contents_value,
                        currency = %self.settings.currency,
                        "free shipping applied"
                    );
                } else {
                    debug!(
                        weight = %rate.breakdown.total_weight,
                        base_cost = %config.base_cost,
                        threshold = %config.weight_threshold,
                        excess_rate = %config.excess_rate,
                        insurance = %rate.breakdown.insurance_total,
                        cost = %rate.cost,
                        currency = %self.settings.currency,
                        "shipping rate calculated"
                    );
                }
            }
        }

        Ok(result)
    }
}
