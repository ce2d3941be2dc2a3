//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    database::{amount_to_i64, try_get_amount},
    domain::{
        customers::records::CustomerUuid,
        orders::records::{OrderRecord, OrderUuid, PaymentStatus, ShippingStatus},
        shipping::records::ShippingInfoUuid,
    },
};

const CREATE_OPEN_ORDER_SQL: &str = include_str!("../sql/create_open_order.sql");
const FIND_OPEN_ORDER_SQL: &str = include_str!("../sql/find_open_order.sql");
const FIND_OPEN_ORDER_FOR_UPDATE_SQL: &str = include_str!("../sql/find_open_order_for_update.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const TOUCH_ORDER_SQL: &str = include_str!("../sql/touch_order.sql");
const COMPLETE_ORDER_SQL: &str = include_str!("../sql/complete_order.sql");
const UPDATE_SHIPPING_STATUS_SQL: &str = include_str!("../sql/update_shipping_status.sql");

/// Values recorded when an order is checked out.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompletedOrder {
    pub shipping_info_uuid: Option<ShippingInfoUuid>,
    pub shipping_cost: u64,
    pub total: u64,
    pub transaction_uuid: Uuid,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Return the customer's open order, creating it on first use.
    pub(crate) async fn get_or_create_open_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query(CREATE_OPEN_ORDER_SQL)
            .bind(OrderUuid::new().into_uuid())
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?;

        query_as::<Postgres, OrderRecord>(FIND_OPEN_ORDER_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Return the customer's open order locked for the rest of the
    /// transaction, creating it on first use.
    ///
    /// If a concurrent checkout completes the open order while we wait for
    /// its lock, a fresh open order is created and locked instead.
    pub(crate) async fn lock_or_create_open_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        if let Some(order) = self.create_and_lock_open_order(tx, customer).await? {
            return Ok(order);
        }

        self.create_and_lock_open_order(tx, customer)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn create_and_lock_open_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query(CREATE_OPEN_ORDER_SQL)
            .bind(OrderUuid::new().into_uuid())
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?;

        self.find_open_order_for_update(tx, customer).await
    }

    /// Lock the customer's open order, if any.
    pub(crate) async fn find_open_order_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(FIND_OPEN_ORDER_FOR_UPDATE_SQL)
            .bind(customer.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Completed orders, newest first, optionally for one customer.
    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: Option<CustomerUuid>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(customer.map(CustomerUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        customer: Option<CustomerUuid>,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(customer.map(CustomerUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn touch_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<(), sqlx::Error> {
        query(TOUCH_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Mark an open order paid and complete, snapshotting the customer's
    /// name and email.
    pub(crate) async fn complete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        completed: &CompletedOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(COMPLETE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(completed.shipping_info_uuid.map(ShippingInfoUuid::into_uuid))
            .bind(amount_to_i64(completed.shipping_cost, "shipping_cost")?)
            .bind(amount_to_i64(completed.total, "total")?)
            .bind(completed.transaction_uuid)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_shipping_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: ShippingStatus,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_SHIPPING_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .fetch_one(&mut **tx)
            .await
    }
}

fn decode_status<T: std::str::FromStr>(row: &PgRow, col: &str) -> Result<T, sqlx::Error>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value: String = row.try_get(col)?;

    value.parse().map_err(|e: T::Err| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            customer_uuid: row
                .try_get::<Option<Uuid>, _>("customer_uuid")?
                .map(CustomerUuid::from_uuid),
            customer_name: row.try_get("customer_name")?,
            customer_email: row.try_get("customer_email")?,
            complete: row.try_get("complete")?,
            payment_status: decode_status::<PaymentStatus>(row, "payment_status")?,
            shipping_status: decode_status::<ShippingStatus>(row, "shipping_status")?,
            shipping_info_uuid: row
                .try_get::<Option<Uuid>, _>("shipping_info_uuid")?
                .map(ShippingInfoUuid::from_uuid),
            shipping_cost: try_get_amount(row, "shipping_cost")?,
            total: try_get_amount(row, "total")?,
            transaction_uuid: row.try_get("transaction_uuid")?,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            completed_at: row
                .try_get::<Option<SqlxTimestamp>, _>("completed_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
