//! Settings store for DX shipping
//!
//! The engine treats configuration as an external key-value store: one JSON
//! document of string-valued options per shipping-zone instance, plus plain
//! string options for product and category insurance attributes. This crate
//! provides:
//!
//! - standardized option-key builders (`keys`)
//! - defensive parsing of raw option documents into `RateConfig` (`raw`)
//! - an in-memory store implementation (`memory`)
//! - the admin-boundary settings form with validation (`form`)

pub mod form;
pub mod keys;
pub mod memory;
pub mod raw;

pub use form::InstanceSettingsForm;
pub use memory::MemorySettingsStore;
pub use raw::RawInstanceSettings;
