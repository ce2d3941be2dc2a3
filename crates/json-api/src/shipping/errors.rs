//! Shipping Info Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::shipping::ShippingServiceError;

pub(crate) fn into_status_error(error: ShippingServiceError) -> StatusError {
    match error {
        ShippingServiceError::AlreadyExists => {
            StatusError::conflict().brief("Shipping info already exists")
        }
        ShippingServiceError::NotFound => StatusError::not_found().brief("Shipping info not found"),
        ShippingServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown customer")
        }
        ShippingServiceError::MissingRequiredData | ShippingServiceError::InvalidData => {
            StatusError::bad_request().brief(
                "Country must be an ISO 3166-1 alpha-2 code, zipcode at least 5 digits and phone at least 10 characters",
            )
        }
        ShippingServiceError::Sql(source) => {
            error!("failed to process shipping info: {source}");

            StatusError::internal_server_error()
        }
    }
}
