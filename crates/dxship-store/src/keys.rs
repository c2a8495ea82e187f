//! Option-key constants and builders
//!
//! Standardized key naming for everything the store holds, preventing
//! collisions between instance settings and product/category metadata.
//!
//! # Key Patterns
//!
//! - `dxship_instance:{zone_instance_id}` - instance settings document
//! - `product_meta:{product_id}:shipping_insurance` - product insurance
//! - `category_meta:{term_id}:shipping_insurance` - category insurance

/// Prefix for instance settings documents
pub const INSTANCE_SETTINGS_PREFIX: &str = "dxship_instance";

/// Prefix for product metadata options
pub const PRODUCT_META_PREFIX: &str = "product_meta";

/// Prefix for category metadata options
pub const CATEGORY_META_PREFIX: &str = "category_meta";

/// Metadata field holding an insurance surcharge
pub const INSURANCE_META_FIELD: &str = "shipping_insurance";

/// Build the key for a zone instance's settings document
pub fn instance_settings_key(zone_instance_id: i32) -> String {
    format!("{}:{}", INSTANCE_SETTINGS_PREFIX, zone_instance_id)
}

/// Build the key for a product's insurance surcharge
pub fn product_insurance_key(product_id: i64) -> String {
    format!(
        "{}:{}:{}",
        PRODUCT_META_PREFIX, product_id, INSURANCE_META_FIELD
    )
}

/// Build the key for a category's insurance surcharge
pub fn category_insurance_key(term_id: i64) -> String {
    format!(
        "{}:{}:{}",
        CATEGORY_META_PREFIX, term_id, INSURANCE_META_FIELD
    )
}
