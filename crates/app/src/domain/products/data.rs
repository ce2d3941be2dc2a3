//! Products Data

use crate::domain::{categories::records::CategoryUuid, products::records::ProductUuid};

/// Longest product name accepted.
pub const MAX_PRODUCT_NAME_CHARS: usize = 200;

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub category_uuid: Option<CategoryUuid>,
    pub price: u64,
    pub stock: u32,
    pub digital: bool,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub category_uuid: Option<CategoryUuid>,
    pub price: u64,
    pub stock: u32,
    pub digital: bool,
}

pub(crate) fn is_valid_name(name: &str) -> bool {
    (1..=MAX_PRODUCT_NAME_CHARS).contains(&name.trim().chars().count())
}

/// Whether `price` and `stock` fit the `BIGINT` and `INTEGER` columns.
pub(crate) fn is_storable(price: u64, stock: u32) -> bool {
    i64::try_from(price).is_ok() && i32::try_from(stock).is_ok()
}
