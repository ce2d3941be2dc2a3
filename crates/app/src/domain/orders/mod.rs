//! Orders: the open order acts as the customer's cart until checkout.

pub mod cart;
pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;
pub mod totals;

pub use errors::OrdersServiceError;
pub use service::*;
