//! Update Shipping Status Handler

use std::{str::FromStr, sync::Arc};

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::records::ShippingStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

/// Update Shipping Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateShippingStatusRequest {
    /// `pending` or `delivered`
    pub status: String,
}

/// Update Shipping Status Handler
#[endpoint(
    tags("orders"),
    summary = "Update Shipping Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Shipping status updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order has not been checked out"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff only"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateShippingStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let status = ShippingStatus::from_str(&json.into_inner().status)
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let order = state
        .app
        .orders
        .update_shipping_status(order.into_inner().into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::orders::{
        MockOrdersService, OrdersServiceError, records::OrderUuid,
    };

    use crate::test_helpers::{TestMocks, customer_service, make_completed_order, staff_service};

    use super::*;

    fn route() -> Router {
        Router::with_path("orders/{order}/shipping-status").put(handler)
    }

    fn mocks(orders: MockOrdersService) -> TestMocks {
        TestMocks {
            orders,
            ..TestMocks::default()
        }
    }

    #[tokio::test]
    async fn test_staff_marks_order_delivered() -> TestResult {
        let uuid = OrderUuid::new();
        let mut order = make_completed_order(uuid);

        order.shipping_status = ShippingStatus::Delivered;

        let mut orders = MockOrdersService::new();

        orders
            .expect_update_shipping_status()
            .once()
            .withf(move |o, status| *o == uuid && *status == ShippingStatus::Delivered)
            .return_once(move |_, _| Ok(order));

        let response: OrderResponse =
            TestClient::put(format!("http://example.com/orders/{uuid}/shipping-status"))
                .json(&json!({ "status": "delivered" }))
                .send(&staff_service(mocks(orders), route()))
                .await
                .take_json()
                .await?;

        assert_eq!(response.shipping_status, "delivered");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_update_shipping_status().never();

        let res = TestClient::put(format!(
            "http://example.com/orders/{}/shipping-status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "lost" }))
        .send(&staff_service(mocks(orders), route()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_open_order_returns_409() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_shipping_status()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotComplete));

        let res = TestClient::put(format!(
            "http://example.com/orders/{}/shipping-status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "delivered" }))
        .send(&staff_service(mocks(orders), route()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_customers_cannot_update_shipping_status() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_update_shipping_status().never();

        let res = TestClient::put(format!(
            "http://example.com/orders/{}/shipping-status",
            OrderUuid::new()
        ))
        .json(&json!({ "status": "delivered" }))
        .send(&customer_service(mocks(orders), route()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
