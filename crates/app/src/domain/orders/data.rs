//! Orders Data

use crate::domain::{
    customers::records::CustomerUuid, products::records::ProductUuid,
    shipping::records::ShippingInfoUuid,
};

/// What a cart update does to the item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Add,
    Remove,
}

/// Cart Update Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartUpdate {
    pub product_uuid: ProductUuid,
    pub action: CartAction,
}

/// Checkout Data
///
/// `total` is the amount the client charged, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkout {
    pub total: u64,
    pub shipping_info_uuid: Option<ShippingInfoUuid>,
}

/// Which orders a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersScope {
    Customer(CustomerUuid),
    All,
}

impl OrdersScope {
    #[must_use]
    pub const fn customer(self) -> Option<CustomerUuid> {
        match self {
            Self::Customer(customer) => Some(customer),
            Self::All => None,
        }
    }
}
