//! Reviews Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::reviews::records::ReviewRecord;

use crate::{extensions::*, reviews::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub customer_uuid: Uuid,
    /// Display name of the reviewer
    pub customer_name: String,
    /// 1 to 5
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(review: ReviewRecord) -> Self {
        ReviewResponse {
            uuid: review.uuid.into(),
            product_uuid: review.product_uuid.into(),
            customer_uuid: review.customer_uuid.into(),
            customer_name: review.customer_name,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at.to_string(),
        }
    }
}

/// Reviews Index Handler
///
/// Every review across the catalog, newest first.
#[endpoint(
    tags("reviews"),
    summary = "List Reviews",
    responses(
        (status_code = StatusCode::OK, description = "Reviews listed"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ReviewResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list_reviews(None)
        .await
        .map_err(into_status_error)?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}
