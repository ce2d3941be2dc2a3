//! Discounts Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    discounts::{errors::into_status_error, get::DiscountResponse},
    extensions::*,
    state::State,
};

/// Discounts Index Handler
#[endpoint(
    tags("discounts"),
    summary = "List Discounts",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Discounts listed"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff only"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<DiscountResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let discounts = state
        .app
        .discounts
        .list_discounts()
        .await
        .map_err(into_status_error)?;

    Ok(Json(discounts.into_iter().map(Into::into).collect()))
}
