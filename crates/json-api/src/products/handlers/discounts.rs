//! Product Discount Handlers
//!
//! Attach and detach discounts. Both respond with the updated product so the
//! client sees the new discounted price.

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Attach Discount Handler
#[endpoint(
    tags("products"),
    summary = "Attach Discount to Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Discount attached"),
        (status_code = StatusCode::NOT_FOUND, description = "Product or discount not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff only"),
    ),
)]
pub(crate) async fn attach(
    product: PathParam<Uuid>,
    discount: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let product = state
        .app
        .products
        .add_product_discount(product.into_inner().into(), discount.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

/// Detach Discount Handler
#[endpoint(
    tags("products"),
    summary = "Detach Discount from Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Discount detached"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff only"),
    ),
)]
pub(crate) async fn detach(
    product: PathParam<Uuid>,
    discount: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let product = state
        .app
        .products
        .remove_product_discount(product.into_inner().into(), discount.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
