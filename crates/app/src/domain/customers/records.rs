//! Customer Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Customer UUID
pub type CustomerUuid = TypedUuid<CustomerRecord>;

/// Customer Record
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub uuid: CustomerUuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub is_staff: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
