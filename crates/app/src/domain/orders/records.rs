//! Order Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    domain::{
        customers::records::CustomerUuid, orders::totals::CartTotals,
        products::records::ProductUuid, shipping::records::ShippingInfoUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    NotPaid,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingStatus {
    Pending,
    Delivered,
}

#[derive(Debug, Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(String);

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotPaid => "not_paid",
            Self::Paid => "paid",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "not_paid" => Ok(Self::NotPaid),
            "paid" => Ok(Self::Paid),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ShippingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Delivered => "delivered",
        }
    }
}

impl FromStr for ShippingStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "delivered" => Ok(Self::Delivered),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ShippingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub customer_uuid: Option<CustomerUuid>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub complete: bool,
    pub payment_status: PaymentStatus,
    pub shipping_status: ShippingStatus,
    pub shipping_info_uuid: Option<ShippingInfoUuid>,
    pub shipping_cost: u64,
    pub total: u64,
    pub transaction_uuid: Option<Uuid>,
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// Order Item Record
///
/// `price` is the unit price captured when the item was last changed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub digital: bool,
    pub quantity: u32,
    pub price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OrderItemRecord {
    /// Captured unit price times quantity.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// The customer's open order together with its computed totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub order: OrderRecord,
    pub totals: CartTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_parse_their_storage_names() {
        for status in [PaymentStatus::NotPaid, PaymentStatus::Paid] {
            assert_eq!(status.as_str().parse::<PaymentStatus>().ok(), Some(status));
        }

        for status in [ShippingStatus::Pending, ShippingStatus::Delivered] {
            assert_eq!(status.as_str().parse::<ShippingStatus>().ok(), Some(status));
        }

        assert!("shipped".parse::<ShippingStatus>().is_err());
    }
}
