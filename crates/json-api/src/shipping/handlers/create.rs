//! Create Shipping Info Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::shipping::data::NewShippingInfo;

use crate::{
    extensions::*,
    shipping::{errors::into_status_error, get::ShippingInfoResponse},
    state::State,
};

/// Create Shipping Info Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateShippingInfoRequest {
    pub uuid: Uuid,
    /// ISO 3166-1 alpha-2, case-insensitive
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub zipcode: String,
    pub address: String,
    pub phone: String,
    /// Replaces any existing default
    #[serde(default)]
    pub is_default: bool,
}

impl From<CreateShippingInfoRequest> for NewShippingInfo {
    fn from(request: CreateShippingInfoRequest) -> Self {
        NewShippingInfo {
            uuid: request.uuid.into(),
            country: request.country,
            city: request.city,
            state: request.state,
            zipcode: request.zipcode,
            address: request.address,
            phone: request.phone,
            is_default: request.is_default,
        }
    }
}

/// Create Shipping Info Handler
#[endpoint(
    tags("shipping"),
    summary = "Create Shipping Info",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Shipping info created"),
        (status_code = StatusCode::CONFLICT, description = "Shipping info already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateShippingInfoRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ShippingInfoResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = depot.customer_or_401()?;

    let info = state
        .app
        .shipping
        .create_shipping_info(customer.customer_uuid, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/shipping-info/{}", info.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(info.into()))
}
