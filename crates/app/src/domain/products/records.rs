//! Product Records

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;

use crate::{
    domain::{
        categories::records::CategoryUuid, discounts::records::DiscountRecord,
        products::pricing,
    },
    uuids::TypedUuid,
};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub category_uuid: Option<CategoryUuid>,
    pub price: u64,
    pub stock: u32,
    pub digital: bool,
    pub rating: Decimal,
    pub num_reviews: u32,
    pub discounts: Vec<DiscountRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl ProductRecord {
    /// Current selling price after the best applicable discount.
    #[must_use]
    pub fn discounted_price(&self, today: Date) -> u64 {
        pricing::discounted_price(self.price, &self.discounts, today)
    }
}
