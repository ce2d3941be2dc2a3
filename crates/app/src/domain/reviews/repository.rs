//! Reviews Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    customers::records::CustomerUuid,
    products::records::ProductUuid,
    reviews::{
        data::NewReview,
        records::{ReviewRecord, ReviewUuid},
    },
};

const LIST_REVIEWS_SQL: &str = include_str!("sql/list_reviews.sql");
const CREATE_REVIEW_SQL: &str = include_str!("sql/create_review.sql");
const LIST_PRODUCT_RATINGS_SQL: &str = include_str!("sql/list_product_ratings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_reviews(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: Option<ProductUuid>,
    ) -> Result<Vec<ReviewRecord>, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(LIST_REVIEWS_SQL)
            .bind(product.map(ProductUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        product: ProductUuid,
        review: &NewReview,
    ) -> Result<ReviewRecord, sqlx::Error> {
        query_as::<Postgres, ReviewRecord>(CREATE_REVIEW_SQL)
            .bind(review.uuid.into_uuid())
            .bind(product.into_uuid())
            .bind(customer.into_uuid())
            .bind(i16::from(review.rating))
            .bind(&review.comment)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_product_ratings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<u8>, sqlx::Error> {
        let ratings: Vec<i16> = query_scalar(LIST_PRODUCT_RATINGS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        ratings
            .into_iter()
            .map(|rating| {
                u8::try_from(rating).map_err(|e| sqlx::Error::ColumnDecode {
                    index: "rating".to_string(),
                    source: Box::new(e),
                })
            })
            .collect()
    }
}

impl<'r> FromRow<'r, PgRow> for ReviewRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rating: i16 = row.try_get("rating")?;

        Ok(Self {
            uuid: ReviewUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            customer_uuid: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            customer_name: row.try_get("customer_name")?,
            rating: u8::try_from(rating).map_err(|e| sqlx::Error::ColumnDecode {
                index: "rating".to_string(),
                source: Box::new(e),
            })?,
            comment: row.try_get("comment")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
