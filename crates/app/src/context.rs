//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        categories::{CategoriesService, PgCategoriesService},
        customers::{CustomersService, PgCustomersService},
        discounts::{DiscountsService, PgDiscountsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        reviews::{PgReviewsService, ReviewsService},
        shipping::{PgShippingService, ShippingRates, ShippingService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub customers: Arc<dyn CustomersService>,
    pub auth: Arc<dyn AuthService>,
    pub categories: Arc<dyn CategoriesService>,
    pub discounts: Arc<dyn DiscountsService>,
    pub products: Arc<dyn ProductsService>,
    pub shipping: Arc<dyn ShippingService>,
    pub orders: Arc<dyn OrdersService>,
    pub reviews: Arc<dyn ReviewsService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to or migrating the database fails.
    pub async fn from_database_url(url: &str, rates: ShippingRates) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            customers: Arc::new(PgCustomersService::new(db.clone())),
            auth: Arc::new(PgAuthService::new(pool)),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            discounts: Arc::new(PgDiscountsService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            shipping: Arc::new(PgShippingService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone(), rates)),
            reviews: Arc::new(PgReviewsService::new(db)),
        })
    }
}
