//! Shipping Info Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    customers::records::CustomerUuid,
    shipping::{
        data::NewShippingInfo,
        records::{ShippingInfoRecord, ShippingInfoUuid},
    },
};

const LIST_SHIPPING_INFO_SQL: &str = include_str!("sql/list_shipping_info.sql");
const GET_SHIPPING_INFO_SQL: &str = include_str!("sql/get_shipping_info.sql");
const GET_DEFAULT_SHIPPING_INFO_SQL: &str = include_str!("sql/get_default_shipping_info.sql");
const CLEAR_DEFAULT_SHIPPING_INFO_SQL: &str = include_str!("sql/clear_default_shipping_info.sql");
const CREATE_SHIPPING_INFO_SQL: &str = include_str!("sql/create_shipping_info.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgShippingInfoRepository;

impl PgShippingInfoRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_shipping_info(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Vec<ShippingInfoRecord>, sqlx::Error> {
        query_as::<Postgres, ShippingInfoRecord>(LIST_SHIPPING_INFO_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Fetch shipping info owned by `customer`.
    pub(crate) async fn get_shipping_info(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        shipping_info: ShippingInfoUuid,
    ) -> Result<ShippingInfoRecord, sqlx::Error> {
        query_as::<Postgres, ShippingInfoRecord>(GET_SHIPPING_INFO_SQL)
            .bind(shipping_info.into_uuid())
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_default_shipping_info(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Option<ShippingInfoRecord>, sqlx::Error> {
        query_as::<Postgres, ShippingInfoRecord>(GET_DEFAULT_SHIPPING_INFO_SQL)
            .bind(customer.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn clear_default_shipping_info(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<(), sqlx::Error> {
        query(CLEAR_DEFAULT_SHIPPING_INFO_SQL)
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn create_shipping_info(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        shipping_info: &NewShippingInfo,
    ) -> Result<ShippingInfoRecord, sqlx::Error> {
        query_as::<Postgres, ShippingInfoRecord>(CREATE_SHIPPING_INFO_SQL)
            .bind(shipping_info.uuid.into_uuid())
            .bind(customer.into_uuid())
            .bind(&shipping_info.country)
            .bind(&shipping_info.city)
            .bind(&shipping_info.state)
            .bind(&shipping_info.zipcode)
            .bind(&shipping_info.address)
            .bind(&shipping_info.phone)
            .bind(shipping_info.is_default)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ShippingInfoRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ShippingInfoUuid::from_uuid(row.try_get("uuid")?),
            customer_uuid: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            country: row.try_get("country")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zipcode: row.try_get("zipcode")?,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
            is_default: row.try_get("is_default")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
