//! Shipping Info Records

use jiff::Timestamp;

use crate::{domain::customers::records::CustomerUuid, uuids::TypedUuid};

/// Shipping Info UUID
pub type ShippingInfoUuid = TypedUuid<ShippingInfoRecord>;

/// Shipping Info Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingInfoRecord {
    pub uuid: ShippingInfoUuid,
    pub customer_uuid: CustomerUuid,
    pub country: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub address: String,
    pub phone: String,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
