//! Review Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::AlreadyExists => {
            StatusError::conflict().brief("You have already reviewed this product")
        }
        ReviewsServiceError::NotFound => StatusError::not_found().brief("Review not found"),
        ReviewsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        ReviewsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown product or customer")
        }
        ReviewsServiceError::MissingRequiredData | ReviewsServiceError::InvalidData => {
            StatusError::bad_request().brief("Rating must be between 1 and 5")
        }
        ReviewsServiceError::Sql(source) => {
            error!("failed to process review: {source}");

            StatusError::internal_server_error()
        }
    }
}
