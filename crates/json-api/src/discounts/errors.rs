//! Discount Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::discounts::DiscountsServiceError;

pub(crate) fn into_status_error(error: DiscountsServiceError) -> StatusError {
    match error {
        DiscountsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Discount already exists")
        }
        DiscountsServiceError::NotFound => StatusError::not_found().brief("Discount not found"),
        DiscountsServiceError::ExpiryNotInFuture => {
            StatusError::bad_request().brief("Discount expiry date must be in the future")
        }
        DiscountsServiceError::MissingRequiredData | DiscountsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid discount payload")
        }
        DiscountsServiceError::Sql(source) => {
            error!("failed to process discount: {source}");

            StatusError::internal_server_error()
        }
    }
}
