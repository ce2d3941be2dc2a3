//! Get Product Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{products::records::ProductRecord, today};

use crate::{
    discounts::get::DiscountResponse, extensions::*, products::errors::into_status_error,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,

    pub description: String,

    pub category_uuid: Option<Uuid>,

    /// The list price in minor units
    pub price: u64,

    /// The price after the best active discount, in minor units
    pub discounted_price: u64,

    pub stock: u32,

    /// Digital products never need shipping
    pub digital: bool,

    /// Mean review rating to two decimal places
    pub rating: String,

    pub num_reviews: u32,

    pub discounts: Vec<DiscountResponse>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,

    /// The date and time the product was deleted
    pub deleted_at: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            discounted_price: product.discounted_price(today()),
            name: product.name,
            description: product.description,
            category_uuid: product.category_uuid.map(Into::into),
            price: product.price,
            stock: product.stock,
            digital: product.digital,
            rating: product.rating.to_string(),
            num_reviews: product.num_reviews,
            discounts: product.discounts.into_iter().map(Into::into).collect(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
            deleted_at: product.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Product Handler
///
/// Returns a product with its discounts and discounted price.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
