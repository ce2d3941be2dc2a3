//! Shipping information and rates

pub mod data;
pub mod errors;
pub mod rates;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ShippingServiceError;
pub use rates::ShippingRates;
pub use service::*;
