//! Shipping Info Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    shipping::{errors::into_status_error, get::ShippingInfoResponse},
    state::State,
};

/// Shipping Info Index Handler
///
/// The caller's saved addresses, default first.
#[endpoint(
    tags("shipping"),
    summary = "List Shipping Info",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shipping info listed"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<ShippingInfoResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = depot.customer_or_401()?;

    let infos = state
        .app
        .shipping
        .list_shipping_info(customer.customer_uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(infos.into_iter().map(Into::into).collect()))
}
