//! Discounts Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    discounts::{
        data::NewDiscount,
        records::{DiscountRecord, DiscountUuid},
    },
    products::records::ProductUuid,
};

const LIST_DISCOUNTS_SQL: &str = include_str!("sql/list_discounts.sql");
const GET_DISCOUNT_SQL: &str = include_str!("sql/get_discount.sql");
const CREATE_DISCOUNT_SQL: &str = include_str!("sql/create_discount.sql");
const LIST_PRODUCT_DISCOUNTS_SQL: &str = include_str!("sql/list_product_discounts.sql");

/// A discount together with the product it is attached to.
#[derive(Debug, Clone)]
pub(crate) struct ProductDiscount {
    pub product_uuid: ProductUuid,
    pub discount: DiscountRecord,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDiscountsRepository;

impl PgDiscountsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_discounts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<DiscountRecord>, sqlx::Error> {
        query_as::<Postgres, DiscountRecord>(LIST_DISCOUNTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: DiscountUuid,
    ) -> Result<DiscountRecord, sqlx::Error> {
        query_as::<Postgres, DiscountRecord>(GET_DISCOUNT_SQL)
            .bind(discount.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        discount: &NewDiscount,
    ) -> Result<DiscountRecord, sqlx::Error> {
        query_as::<Postgres, DiscountRecord>(CREATE_DISCOUNT_SQL)
            .bind(discount.uuid.into_uuid())
            .bind(discount.name.trim())
            .bind(discount.percentage)
            .bind(discount.active)
            .bind(SqlxDate::from(discount.expires_on))
            .fetch_one(&mut **tx)
            .await
    }

    /// Discounts attached to any of the given products.
    pub(crate) async fn list_product_discounts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductDiscount>, sqlx::Error> {
        let uuids: Vec<Uuid> = products.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, ProductDiscount>(LIST_PRODUCT_DISCOUNTS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DiscountRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: DiscountUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            percentage: row.try_get("percentage")?,
            active: row.try_get("active")?,
            expires_on: row.try_get::<SqlxDate, _>("expires_on")?.to_jiff(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductDiscount {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            discount: DiscountRecord::from_row(row)?,
        })
    }
}
