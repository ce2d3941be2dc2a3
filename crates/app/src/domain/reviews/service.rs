//! Reviews service.

use async_trait::async_trait;
use mockall::automock;
use tracing::instrument;

use crate::{
    database::Db,
    domain::{
        customers::records::CustomerUuid,
        products::{records::ProductUuid, repository::PgProductsRepository},
        reviews::{
            data::NewReview,
            errors::ReviewsServiceError,
            rating::{average_rating, is_valid_rating},
            records::ReviewRecord,
            repository::PgReviewsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
    products_repository: PgProductsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

fn product_not_found(error: sqlx::Error) -> ReviewsServiceError {
    match error {
        sqlx::Error::RowNotFound => ReviewsServiceError::ProductNotFound,
        error => error.into(),
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_reviews(
        &self,
        product: Option<ProductUuid>,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        if let Some(product) = product {
            self.products_repository
                .get_product(&mut tx, product)
                .await
                .map_err(product_not_found)?;
        }

        let reviews = self.repository.list_reviews(&mut tx, product).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    #[instrument(skip(self, review), fields(rating = review.rating))]
    async fn create_review(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        review: NewReview,
    ) -> Result<ReviewRecord, ReviewsServiceError> {
        if !is_valid_rating(review.rating) {
            return Err(ReviewsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        // Serializes rating recomputation per product.
        self.products_repository
            .lock_product(&mut tx, product)
            .await
            .map_err(product_not_found)?;

        let created = self
            .repository
            .create_review(&mut tx, customer, product, &review)
            .await?;

        let ratings = self
            .repository
            .list_product_ratings(&mut tx, product)
            .await?;

        let num_reviews =
            u32::try_from(ratings.len()).map_err(|_overflow| ReviewsServiceError::InvalidData)?;

        self.products_repository
            .update_rating(&mut tx, product, average_rating(&ratings), num_reviews)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Reviews newest first, optionally for a single product.
    async fn list_reviews(
        &self,
        product: Option<ProductUuid>,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError>;

    /// Record a customer's review and refresh the product's rating.
    async fn create_review(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        review: NewReview,
    ) -> Result<ReviewRecord, ReviewsServiceError>;
}
