//! App Router

use salvo::Router;

use crate::{
    auth, cart, categories, discounts, healthcheck, observability, orders, products, reviews,
    shipping,
};

/// Every API route behind the optional bearer-token middleware.
pub(crate) fn api_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(
                            Router::with_path("discounts/{discount}")
                                .put(products::discounts::attach)
                                .delete(products::discounts::detach),
                        )
                        .push(
                            Router::with_path("reviews")
                                .get(reviews::product::handler)
                                .post(reviews::create::handler),
                        ),
                ),
        )
        .push(Router::with_path("reviews").get(reviews::index::handler))
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .post(categories::create::handler),
        )
        .push(
            Router::with_path("discounts")
                .get(discounts::index::handler)
                .post(discounts::create::handler)
                .push(Router::with_path("{discount}").get(discounts::get::handler)),
        )
        .push(
            Router::with_path("cart")
                .get(cart::get::handler)
                .push(Router::with_path("items").post(cart::items::handler)),
        )
        .push(Router::with_path("checkout").post(cart::checkout::handler))
        .push(
            Router::with_path("orders").get(orders::index::handler).push(
                Router::with_path("{order}")
                    .get(orders::get::handler)
                    .push(Router::with_path("shipping-status").put(orders::shipping_status::handler)),
            ),
        )
        .push(
            Router::with_path("shipping-info")
                .get(shipping::index::handler)
                .post(shipping::create::handler)
                .push(Router::with_path("{shipping_info}").get(shipping::get::handler)),
        )
}

/// Unauthenticated operational routes.
pub(crate) fn ops_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
}
