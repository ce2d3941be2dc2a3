//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::records::Cart;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderItemResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The open order backing the cart
    pub order_uuid: Uuid,

    pub items: Vec<OrderItemResponse>,

    /// Units across every item
    pub item_count: u64,

    /// Sum of item totals in minor units
    pub subtotal: u64,

    /// True when any item is physical
    pub shipping_required: bool,

    pub shipping_cost: u64,

    /// What checkout expects to be submitted
    pub total: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let Cart { order, totals } = cart;

        CartResponse {
            order_uuid: order.uuid.into(),
            items: order.items.into_iter().map(Into::into).collect(),
            item_count: totals.item_count,
            subtotal: totals.subtotal,
            shipping_required: totals.shipping_required,
            shipping_cost: totals.shipping_cost,
            total: totals.total,
        }
    }
}

/// Get Cart Handler
///
/// Opens a cart on first access.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Current cart"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = depot.customer_or_401()?;

    let cart = state
        .app
        .orders
        .get_cart(customer.customer_uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
