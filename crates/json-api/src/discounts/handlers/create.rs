//! Create Discount Handler

use std::{str::FromStr, sync::Arc};

use jiff::civil::Date;
use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::discounts::data::NewDiscount;

use crate::{
    discounts::{errors::into_status_error, get::DiscountResponse},
    extensions::*,
    state::State,
};

/// Create Discount Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateDiscountRequest {
    pub uuid: Uuid,
    pub name: String,
    /// Decimal string between "0.0" and "100.0"
    pub percentage: String,
    #[serde(default = "default_active")]
    pub active: bool,
    /// ISO 8601 date, e.g. "2030-12-31"
    pub expires_on: String,
}

const fn default_active() -> bool {
    true
}

impl TryFrom<CreateDiscountRequest> for NewDiscount {
    type Error = StatusError;

    fn try_from(request: CreateDiscountRequest) -> Result<Self, Self::Error> {
        let percentage = Decimal::from_str(request.percentage.trim())
            .map_err(|_invalid| StatusError::bad_request().brief("Invalid percentage"))?;

        let expires_on = Date::from_str(request.expires_on.trim())
            .map_err(|_invalid| StatusError::bad_request().brief("Invalid expiry date"))?;

        Ok(NewDiscount {
            uuid: request.uuid.into(),
            name: request.name,
            percentage,
            active: request.active,
            expires_on,
        })
    }
}

/// Create Discount Handler
#[endpoint(
    tags("discounts"),
    summary = "Create Discount",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Discount created"),
        (status_code = StatusCode::CONFLICT, description = "Discount already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid percentage or expiry"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff only"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateDiscountRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DiscountResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let discount = state
        .app
        .discounts
        .create_discount(json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/discounts/{}", discount.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(discount.into()))
}
