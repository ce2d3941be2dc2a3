//! Customers Data

use crate::domain::customers::records::CustomerUuid;

/// New Customer Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub uuid: CustomerUuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub is_staff: bool,
}
