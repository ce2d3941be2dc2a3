//! Cart totals.

use crate::domain::{orders::records::OrderItemRecord, shipping::ShippingRates};

/// Amounts derived from a cart's items, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    pub item_count: u64,
    pub physical_quantity: u64,
    pub subtotal: u64,
    pub shipping_required: bool,
    pub shipping_cost: u64,
    pub total: u64,
}

/// Sum item totals and add shipping to `country`.
#[must_use]
pub fn summarize(items: &[OrderItemRecord], rates: &ShippingRates, country: Option<&str>) -> CartTotals {
    let mut totals = CartTotals::default();

    for item in items {
        let quantity = u64::from(item.quantity);

        totals.item_count = totals.item_count.saturating_add(quantity);
        totals.subtotal = totals.subtotal.saturating_add(item.total());

        if !item.digital {
            totals.physical_quantity = totals.physical_quantity.saturating_add(quantity);
        }
    }

    totals.shipping_required = totals.physical_quantity > 0;
    totals.shipping_cost = rates.cost(totals.physical_quantity, country);
    totals.total = totals.subtotal.saturating_add(totals.shipping_cost);

    totals
}
