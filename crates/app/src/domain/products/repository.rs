//! Products Repository

use std::collections::HashMap;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    database::{amount_to_i64, count_to_i32, try_get_amount, try_get_count},
    domain::{
        categories::records::CategoryUuid,
        discounts::{records::DiscountUuid, repository::PgDiscountsRepository},
        products::{
            data::{NewProduct, ProductUpdate},
            records::{ProductRecord, ProductUuid},
        },
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const REMOVE_PRODUCT_FROM_OPEN_ORDERS_SQL: &str =
    include_str!("sql/remove_product_from_open_orders.sql");
const ATTACH_DISCOUNT_SQL: &str = include_str!("sql/attach_discount.sql");
const DETACH_DISCOUNT_SQL: &str = include_str!("sql/detach_discount.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");
const UPDATE_RATING_SQL: &str = include_str!("sql/update_rating.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository {
    discounts: PgDiscountsRepository,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            discounts: PgDiscountsRepository::new(),
        }
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let products = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(category.map(CategoryUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await?;

        self.with_discounts(tx, products).await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        let product = query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        let mut products = self.with_discounts(tx, vec![product]).await?;

        products.pop().ok_or(sqlx::Error::RowNotFound)
    }

    /// Take the row lock on a live product until the transaction ends.
    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.name.trim())
            .bind(&product.description)
            .bind(product.category_uuid.map(CategoryUuid::into_uuid))
            .bind(amount_to_i64(product.price, "price")?)
            .bind(count_to_i32(product.stock, "stock")?)
            .bind(product.digital)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: &ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        let updated = query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.name.trim())
            .bind(&update.description)
            .bind(update.category_uuid.map(CategoryUuid::into_uuid))
            .bind(amount_to_i64(update.price, "price")?)
            .bind(count_to_i32(update.stock, "stock")?)
            .bind(update.digital)
            .fetch_one(&mut **tx)
            .await?;

        let mut products = self.with_discounts(tx, vec![updated]).await?;

        products.pop().ok_or(sqlx::Error::RowNotFound)
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Drop the product from every cart that has not been checked out yet.
    pub(crate) async fn remove_product_from_open_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REMOVE_PRODUCT_FROM_OPEN_ORDERS_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn attach_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        discount: DiscountUuid,
    ) -> Result<(), sqlx::Error> {
        query(ATTACH_DISCOUNT_SQL)
            .bind(product.into_uuid())
            .bind(discount.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn detach_discount(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        discount: DiscountUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DETACH_DISCOUNT_SQL)
            .bind(product.into_uuid())
            .bind(discount.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Take `quantity` units out of stock. Returns the number of rows updated,
    /// which is zero when the product has fewer than `quantity` units left.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DECREMENT_STOCK_SQL)
            .bind(product.into_uuid())
            .bind(count_to_i32(quantity, "quantity")?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn update_rating(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        rating: Decimal,
        num_reviews: u32,
    ) -> Result<(), sqlx::Error> {
        query(UPDATE_RATING_SQL)
            .bind(product.into_uuid())
            .bind(rating)
            .bind(count_to_i32(num_reviews, "num_reviews")?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Load the discounts attached to each product.
    pub(crate) async fn with_discounts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mut products: Vec<ProductRecord>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        if products.is_empty() {
            return Ok(products);
        }

        let uuids: Vec<ProductUuid> = products.iter().map(|product| product.uuid).collect();

        let mut by_product: HashMap<ProductUuid, Vec<_>> = HashMap::new();

        for row in self.discounts.list_product_discounts(tx, &uuids).await? {
            by_product
                .entry(row.product_uuid)
                .or_default()
                .push(row.discount);
        }

        for product in &mut products {
            product.discounts = by_product.remove(&product.uuid).unwrap_or_default();
        }

        Ok(products)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category_uuid: row
                .try_get::<Option<Uuid>, _>("category_uuid")?
                .map(CategoryUuid::from_uuid),
            price: try_get_amount(row, "price")?,
            stock: try_get_count(row, "stock")?,
            digital: row.try_get("digital")?,
            rating: row.try_get("rating")?,
            num_reviews: try_get_count(row, "num_reviews")?,
            discounts: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
