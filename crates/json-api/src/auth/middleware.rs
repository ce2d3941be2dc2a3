//! Auth middleware.
//!
//! Resolves an optional `Authorization: Bearer` token to the calling
//! customer. Requests without the header continue anonymously; handlers
//! decide whether a customer or staff member is required.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use storefront_app::auth::AuthServiceError;
use tracing::error;

use crate::{extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let token = match extract_bearer_token(req) {
        BearerToken::Missing => {
            ctrl.call_next(req, depot, res).await;

            return;
        }
        BearerToken::Malformed => {
            res.render(StatusError::unauthorized().brief("Invalid Authorization header"));
            ctrl.skip_rest();

            return;
        }
        BearerToken::Present(token) => token,
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let customer = match state.app.auth.authenticate_bearer(&token).await {
        Ok(customer) => customer,
        Err(AuthServiceError::NotFound | AuthServiceError::UnknownCustomer) => {
            res.render(StatusError::unauthorized().brief("Invalid API token"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate api token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_customer(customer);

    ctrl.call_next(req, depot, res).await;
}

#[derive(Debug, PartialEq, Eq)]
enum BearerToken {
    Missing,
    Malformed,
    Present(String),
}

fn extract_bearer_token(req: &Request) -> BearerToken {
    let Some(value) = req.headers().get(AUTHORIZATION) else {
        return BearerToken::Missing;
    };

    let Ok(value) = value.to_str() else {
        return BearerToken::Malformed;
    };

    let mut parts = value.splitn(2, ' ');

    match (parts.next(), parts.next().map(str::trim)) {
        (Some(scheme), Some(token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            BearerToken::Present(token.to_string())
        }
        _ => BearerToken::Malformed,
    }
}
