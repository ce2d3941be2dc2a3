//! Get Discount Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::discounts::records::DiscountRecord;

use crate::{discounts::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountResponse {
    pub uuid: Uuid,

    pub name: String,

    /// Percentage off the list price, one decimal place
    pub percentage: String,

    pub active: bool,

    /// Last day the discount applies
    pub expires_on: String,

    pub created_at: String,

    pub updated_at: String,
}

impl From<DiscountRecord> for DiscountResponse {
    fn from(discount: DiscountRecord) -> Self {
        DiscountResponse {
            uuid: discount.uuid.into(),
            name: discount.name,
            percentage: discount.percentage.to_string(),
            active: discount.active,
            expires_on: discount.expires_on.to_string(),
            created_at: discount.created_at.to_string(),
            updated_at: discount.updated_at.to_string(),
        }
    }
}

/// Get Discount Handler
#[endpoint(
    tags("discounts"),
    summary = "Get Discount",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Discount found"),
        (status_code = StatusCode::NOT_FOUND, description = "Discount not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff only"),
    ),
)]
pub(crate) async fn handler(
    discount: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<DiscountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let discount = state
        .app
        .discounts
        .get_discount(discount.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(discount.into()))
}
