//! Rate and eligibility engine for DX shipping
//!
//! Two stateless computation services over externally supplied data:
//!
//! - `eligibility`: decides whether a destination is servable (UK mainland
//!   only, with a static postcode exclusion table)
//! - `calculator`: the pure weight-based cost pipeline: base cost, per-kg
//!   excess charge, hidden insurance surcharge, floor, min/max clamp
//!
//! `DxShippingMethod` composes both over a settings store
//! (`dxship_core::traits::SettingsStore`), resolving cart lines into a priced
//! package the way the checkout pipeline consumes it. Every evaluation reads
//! a fresh configuration snapshot; nothing is cached across requests.

pub mod calculator;
pub mod eligibility;
pub mod method;

pub use calculator::calculate_rate;
pub use eligibility::{is_excluded_postcode, EXCLUDED_AREA_MESSAGE};
pub use method::DxShippingMethod;
