//! Get Order Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{
    auth::AuthenticatedCustomer,
    domain::orders::{
        data::OrdersScope,
        records::{OrderItemRecord, OrderRecord},
    },
};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub product_name: String,
    pub digital: bool,
    pub quantity: u32,
    /// Unit price captured when the item was last changed, in minor units
    pub price: u64,
    /// `price` times `quantity`
    pub total: u64,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        OrderItemResponse {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            total: item.total(),
            product_name: item.product_name,
            digital: item.digital,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,

    pub customer_uuid: Option<Uuid>,

    /// Customer name captured at checkout
    pub customer_name: Option<String>,

    /// Customer e-mail captured at checkout
    pub customer_email: Option<String>,

    pub complete: bool,

    /// `not_paid` or `paid`
    pub payment_status: String,

    /// `pending` or `delivered`
    pub shipping_status: String,

    pub shipping_info_uuid: Option<Uuid>,

    pub shipping_cost: u64,

    pub total: u64,

    pub transaction_uuid: Option<Uuid>,

    pub items: Vec<OrderItemResponse>,

    pub created_at: String,

    pub updated_at: String,

    pub completed_at: Option<String>,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            customer_uuid: order.customer_uuid.map(Into::into),
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            complete: order.complete,
            payment_status: order.payment_status.to_string(),
            shipping_status: order.shipping_status.to_string(),
            shipping_info_uuid: order.shipping_info_uuid.map(Into::into),
            shipping_cost: order.shipping_cost,
            total: order.total,
            transaction_uuid: order.transaction_uuid,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
            completed_at: order.completed_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Staff see every order; customers only their own.
pub(crate) fn scope_for(customer: AuthenticatedCustomer) -> OrdersScope {
    if customer.is_staff {
        OrdersScope::All
    } else {
        OrdersScope::Customer(customer.customer_uuid)
    }
}

/// Get Order Handler
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = depot.customer_or_401()?;

    let order = state
        .app
        .orders
        .get_order(scope_for(customer), order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::orders::{
        MockOrdersService, OrdersServiceError, records::OrderUuid,
    };

    use crate::test_helpers::{
        TEST_CUSTOMER_UUID, TestMocks, customer_service, make_completed_order, staff_service,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("orders/{order}").get(handler)
    }

    fn mocks(orders: MockOrdersService) -> TestMocks {
        TestMocks {
            orders,
            ..TestMocks::default()
        }
    }

    #[tokio::test]
    async fn test_customer_reads_own_order() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_completed_order(uuid);

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(move |scope, o| *scope == OrdersScope::Customer(TEST_CUSTOMER_UUID) && *o == uuid)
            .return_once(move |_, _| Ok(order));

        let response: OrderResponse = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&customer_service(mocks(orders), route()))
            .await
            .take_json()
            .await?;

        assert_eq!(response.payment_status, "paid");
        assert_eq!(response.shipping_status, "pending");
        assert_eq!(
            response.items.iter().map(|i| i.total).sum::<u64>() + response.shipping_cost,
            response.total,
            "order total should be items plus shipping"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_staff_reads_any_order() -> TestResult {
        let uuid = OrderUuid::new();
        let order = make_completed_order(uuid);

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(move |scope, _| *scope == OrdersScope::All)
            .return_once(move |_, _| Ok(order));

        let res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&staff_service(mocks(orders), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_someone_elses_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/orders/{}", OrderUuid::new()))
            .send(&customer_service(mocks(orders), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
