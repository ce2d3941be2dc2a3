//! Update Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::data::{CartAction, CartUpdate};

use crate::{
    cart::get::CartResponse, extensions::*, orders::errors::into_status_error, state::State,
};

/// Cart action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CartActionRequest {
    Add,
    Remove,
}

impl From<CartActionRequest> for CartAction {
    fn from(action: CartActionRequest) -> Self {
        match action {
            CartActionRequest::Add => CartAction::Add,
            CartActionRequest::Remove => CartAction::Remove,
        }
    }
}

/// Update Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartRequest {
    pub product_uuid: Uuid,
    pub action: CartActionRequest,
}

impl From<UpdateCartRequest> for CartUpdate {
    fn from(request: UpdateCartRequest) -> Self {
        CartUpdate {
            product_uuid: request.product_uuid.into(),
            action: request.action.into(),
        }
    }
}

/// Update Cart Handler
///
/// Adds or removes a single unit of a product and returns the repriced cart.
#[endpoint(
    tags("cart"),
    summary = "Update Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient stock"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found or not in cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid token"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = depot.customer_or_401()?;

    let cart = state
        .app
        .orders
        .update_cart(customer.customer_uuid, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::{
        orders::{MockOrdersService, OrdersServiceError, records::OrderUuid},
        products::records::ProductUuid,
    };

    use crate::test_helpers::{TEST_CUSTOMER_UUID, TestMocks, customer_service, make_cart};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        customer_service(
            TestMocks {
                orders,
                ..TestMocks::default()
            },
            Router::with_path("cart/items").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_returns_updated_cart() -> TestResult {
        let product = ProductUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_update_cart()
            .once()
            .withf(move |c, update| {
                *c == TEST_CUSTOMER_UUID
                    && *update
                        == CartUpdate {
                            product_uuid: product,
                            action: CartAction::Add,
                        }
            })
            .return_once(|_, _| Ok(make_cart(OrderUuid::new())));

        let mut res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "product_uuid": product.into_uuid(), "action": "add" }))
            .send(&make_service(orders))
            .await;

        let response: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.total, 3_600);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_beyond_stock_returns_409() -> TestResult {
        let product = ProductUuid::new();

        let mut orders = MockOrdersService::new();

        orders.expect_update_cart().once().return_once(move |_, _| {
            Err(OrdersServiceError::InsufficientStock {
                product,
                requested: 6,
                available: 5,
            })
        });

        let res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "product_uuid": product.into_uuid(), "action": "add" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_item_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_update_cart()
            .once()
            .withf(|_, update| update.action == CartAction::Remove)
            .return_once(|_, _| Err(OrdersServiceError::NotInCart));

        let res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "product_uuid": Uuid::now_v7(), "action": "remove" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_action_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_update_cart().never();

        let res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "product_uuid": Uuid::now_v7(), "action": "double" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
