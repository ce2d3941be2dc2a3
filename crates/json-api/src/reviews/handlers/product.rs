//! Product Reviews Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, index::ReviewResponse},
    state::State,
};

/// Product Reviews Handler
///
/// Reviews for one product, newest first.
#[endpoint(
    tags("reviews"),
    summary = "List Product Reviews",
    responses(
        (status_code = StatusCode::OK, description = "Reviews listed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<ReviewResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list_reviews(Some(product.into_inner().into()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{products::records::ProductUuid, reviews::MockReviewsService};

    use crate::test_helpers::{TestMocks, anonymous_service, make_review};

    use super::*;

    #[tokio::test]
    async fn test_filters_reviews_by_product() -> TestResult {
        let product = ProductUuid::new();

        let mut reviews = MockReviewsService::new();

        reviews
            .expect_list_reviews()
            .once()
            .withf(move |p| *p == Some(product))
            .return_once(move |_| {
                let mut review = make_review(5);
                review.product_uuid = product;

                Ok(vec![review])
            });

        let service = anonymous_service(
            TestMocks {
                reviews,
                ..TestMocks::default()
            },
            Router::with_path("products/{product}/reviews").get(handler),
        );

        let response: Vec<ReviewResponse> =
            TestClient::get(format!("http://example.com/products/{product}/reviews"))
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(
            response.iter().map(|r| r.product_uuid).collect::<Vec<_>>(),
            vec![product.into_uuid()]
        );

        Ok(())
    }
}
