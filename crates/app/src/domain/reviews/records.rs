//! Review Records

use jiff::Timestamp;

use crate::{
    domain::{customers::records::CustomerUuid, products::records::ProductUuid},
    uuids::TypedUuid,
};

/// Review UUID
pub type ReviewUuid = TypedUuid<ReviewRecord>;

/// Review Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub uuid: ReviewUuid,
    pub product_uuid: ProductUuid,
    pub customer_uuid: CustomerUuid,
    /// Reviewer's full name, or their username when no name is set.
    pub customer_name: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: Timestamp,
}
