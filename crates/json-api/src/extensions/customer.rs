//! Authenticated customer depot helpers.

use salvo::prelude::{Depot, StatusError};
use storefront_app::auth::AuthenticatedCustomer;

const CUSTOMER_DEPOT_KEY: &str = "authenticated_customer";

/// Access to the customer resolved by the auth middleware.
pub(crate) trait CustomerExt {
    fn insert_customer(&mut self, customer: AuthenticatedCustomer);

    /// The calling customer, or `401` when the request carried no token.
    fn customer_or_401(&self) -> Result<AuthenticatedCustomer, StatusError>;

    /// The calling customer when they are staff; `401` without a token, `403` otherwise.
    fn staff_or_403(&self) -> Result<AuthenticatedCustomer, StatusError>;
}

impl CustomerExt for Depot {
    fn insert_customer(&mut self, customer: AuthenticatedCustomer) {
        self.insert(CUSTOMER_DEPOT_KEY, customer);
    }

    fn customer_or_401(&self) -> Result<AuthenticatedCustomer, StatusError> {
        self.get::<AuthenticatedCustomer>(CUSTOMER_DEPOT_KEY)
            .copied()
            .map_err(|_missing| StatusError::unauthorized().brief("Authentication required"))
    }

    fn staff_or_403(&self) -> Result<AuthenticatedCustomer, StatusError> {
        let customer = self.customer_or_401()?;

        if !customer.is_staff {
            return Err(StatusError::forbidden().brief("Staff access required"));
        }

        Ok(customer)
    }
}
