//! Reviews

pub mod data;
pub mod errors;
pub mod rating;
pub mod records;
mod repository;
pub mod service;

pub use errors::ReviewsServiceError;
pub use service::*;
