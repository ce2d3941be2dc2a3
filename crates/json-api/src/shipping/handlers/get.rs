//! Get Shipping Info Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::shipping::records::ShippingInfoRecord;

use crate::{extensions::*, shipping::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingInfoResponse {
    pub uuid: Uuid,
    /// ISO 3166-1 alpha-2
    pub country: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub address: String,
    pub phone: String,
    pub is_default: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ShippingInfoRecord> for ShippingInfoResponse {
    fn from(info: ShippingInfoRecord) -> Self {
        ShippingInfoResponse {
            uuid: info.uuid.into(),
            country: info.country,
            city: info.city,
            state: info.state,
            zipcode: info.zipcode,
            address: info.address,
            phone: info.phone,
            is_default: info.is_default,
            created_at: info.created_at.to_string(),
            updated_at: info.updated_at.to_string(),
        }
    }
}

/// Get Shipping Info Handler
#[endpoint(
    tags("shipping"),
    summary = "Get Shipping Info",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shipping info found"),
        (status_code = StatusCode::NOT_FOUND, description = "Shipping info not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(
    shipping_info: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ShippingInfoResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = depot.customer_or_401()?;

    let info = state
        .app
        .shipping
        .get_shipping_info(customer.customer_uuid, shipping_info.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(info.into()))
}
