//! Order Errors
//!
//! Shared by the cart, checkout and order handlers.

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        OrdersServiceError::NotInCart => {
            StatusError::not_found().brief("Product is not in the cart")
        }
        OrdersServiceError::InsufficientStock {
            product,
            requested,
            available,
        } => StatusError::conflict().brief(format!(
            "Insufficient stock for product {product}: {requested} requested, {available} available"
        )),
        OrdersServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        OrdersServiceError::ShippingInfoRequired => {
            StatusError::bad_request().brief("Shipping info is required for physical items")
        }
        OrdersServiceError::ShippingInfoNotFound => {
            StatusError::not_found().brief("Shipping info not found")
        }
        OrdersServiceError::TotalMismatch {
            expected,
            submitted,
        } => StatusError::conflict().brief(format!(
            "Submitted total {submitted} does not match cart total {expected}"
        )),
        OrdersServiceError::NotComplete => {
            StatusError::conflict().brief("Order has not been checked out")
        }
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("failed to process order: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use storefront_app::domain::products::records::ProductUuid;

    use super::*;

    #[test]
    fn total_mismatch_reports_both_totals() {
        let error = into_status_error(OrdersServiceError::TotalMismatch {
            expected: 2_600,
            submitted: 2_500,
        });

        assert_eq!(error.code, StatusCode::CONFLICT);
        assert!(
            error.brief.contains("2500") && error.brief.contains("2600"),
            "brief should name both totals: {}",
            error.brief
        );
    }

    #[test]
    fn insufficient_stock_is_a_conflict() {
        let error = into_status_error(OrdersServiceError::InsufficientStock {
            product: ProductUuid::new(),
            requested: 4,
            available: 3,
        });

        assert_eq!(error.code, StatusCode::CONFLICT);
    }

    #[test]
    fn empty_cart_is_a_bad_request() {
        assert_eq!(
            into_status_error(OrdersServiceError::EmptyCart).code,
            StatusCode::BAD_REQUEST
        );
    }
}
