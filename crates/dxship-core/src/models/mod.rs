//! Domain models for DX shipping
//!
//! All entities here are constructed fresh per rate request and discarded
//! after use; nothing carries persistent identity.

pub mod cart;
pub mod package;
pub mod rate_config;
pub mod rate_result;

pub use cart::{CartContents, CartLine};
pub use package::{Destination, LineItem, Package};
pub use rate_config::{RateConfig, TaxStatus};
pub use rate_result::{RateBreakdown, RateResult};
