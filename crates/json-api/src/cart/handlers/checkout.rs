//! Checkout Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::data::Checkout;

use crate::{
    extensions::*,
    observability::record_checkout,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// The amount charged to the customer, in minor units. Must equal the cart total.
    pub total: u64,
    /// Required when the cart holds physical items and no default address is saved
    pub shipping_info_uuid: Option<Uuid>,
}

impl From<CheckoutRequest> for Checkout {
    fn from(request: CheckoutRequest) -> Self {
        Checkout {
            total: request.total,
            shipping_info_uuid: request.shipping_info_uuid.map(Into::into),
        }
    }
}

/// Checkout Handler
///
/// Completes the open order when the submitted total matches the cart.
#[endpoint(
    tags("cart"),
    summary = "Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order completed"),
        (status_code = StatusCode::CONFLICT, description = "Total mismatch or insufficient stock"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or missing shipping info"),
        (status_code = StatusCode::NOT_FOUND, description = "Shipping info not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = depot.customer_or_401()?;

    let order = state
        .app
        .orders
        .checkout(customer.customer_uuid, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    record_checkout(order.total);

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        orders::{MockOrdersService, OrdersServiceError, records::OrderUuid},
        shipping::records::ShippingInfoUuid,
    };

    use crate::test_helpers::{TEST_CUSTOMER_UUID, TestMocks, customer_service, make_completed_order};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        customer_service(
            TestMocks {
                orders,
                ..TestMocks::default()
            },
            Router::with_path("checkout").post(handler),
        )
    }

    #[tokio::test]
    async fn test_matching_total_completes_order() -> TestResult {
        let uuid = OrderUuid::new();
        let shipping_info = ShippingInfoUuid::new();
        let order = make_completed_order(uuid);

        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .withf(move |c, checkout| {
                *c == TEST_CUSTOMER_UUID
                    && *checkout
                        == Checkout {
                            total: 3_600,
                            shipping_info_uuid: Some(shipping_info),
                        }
            })
            .return_once(move |_, _| Ok(order));

        let mut res = TestClient::post("http://example.com/checkout")
            .json(&json!({ "total": 3600, "shipping_info_uuid": shipping_info.into_uuid() }))
            .send(&make_service(orders))
            .await;

        let response: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/orders/{uuid}").as_str()));
        assert!(response.complete, "order should be complete");
        assert_eq!(response.payment_status, "paid");

        Ok(())
    }

    #[tokio::test]
    async fn test_total_mismatch_returns_409_with_both_totals() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_checkout().once().return_once(|_, _| {
            Err(OrdersServiceError::TotalMismatch {
                expected: 3_600,
                submitted: 3_599,
            })
        });

        let mut res = TestClient::post("http://example.com/checkout")
            .json(&json!({ "total": 3599 }))
            .send(&make_service(orders))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert!(
            body.contains("3599") && body.contains("3600"),
            "body should name both totals: {body}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cart_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::EmptyCart));

        let res = TestClient::post("http://example.com/checkout")
            .json(&json!({ "total": 0 }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_total_is_rejected() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_checkout().never();

        let res = TestClient::post("http://example.com/checkout")
            .json(&json!({ "total": -1 }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
