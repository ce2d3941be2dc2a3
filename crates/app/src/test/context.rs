//! Test context for service-level integration tests.

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        categories::PgCategoriesService, customers::PgCustomersService,
        discounts::PgDiscountsService, orders::PgOrdersService, products::PgProductsService,
        reviews::PgReviewsService,
        shipping::{PgShippingService, ShippingRates},
    },
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub customers: PgCustomersService,
    pub auth: PgAuthService,
    pub categories: PgCategoriesService,
    pub discounts: PgDiscountsService,
    pub products: PgProductsService,
    pub shipping: PgShippingService,
    pub orders: PgOrdersService,
    pub reviews: PgReviewsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            customers: PgCustomersService::new(db.clone()),
            auth: PgAuthService::new(test_db.pool().clone()),
            categories: PgCategoriesService::new(db.clone()),
            discounts: PgDiscountsService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            shipping: PgShippingService::new(db.clone()),
            orders: PgOrdersService::new(db.clone(), ShippingRates::default()),
            reviews: PgReviewsService::new(db),
            db: test_db,
        }
    }
}
