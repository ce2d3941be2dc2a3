//! Orders service: cart mutation, checkout and order history.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        customers::records::CustomerUuid,
        orders::{
            cart::{CartActionError, next_quantity},
            data::{CartUpdate, Checkout, OrdersScope},
            errors::OrdersServiceError,
            records::{Cart, OrderRecord, OrderUuid, ShippingStatus},
            repositories::{CompletedOrder, PgOrderItemsRepository, PgOrdersRepository},
            totals::summarize,
        },
        products::{records::ProductRecord, repository::PgProductsRepository},
        shipping::{ShippingRates, repository::PgShippingInfoRepository},
        today,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    rates: ShippingRates,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    products_repository: PgProductsRepository,
    shipping_repository: PgShippingInfoRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, rates: ShippingRates) -> Self {
        Self {
            db,
            rates,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
            shipping_repository: PgShippingInfoRepository::new(),
        }
    }

    /// Load the open order's items and price them for the customer's default
    /// shipping destination.
    async fn load_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        mut order: OrderRecord,
    ) -> Result<Cart, OrdersServiceError> {
        order.items = self.items_repository.list_items(tx, &[order.uuid]).await?;

        let default_shipping = self
            .shipping_repository
            .get_default_shipping_info(tx, customer)
            .await?;

        let totals = summarize(
            &order.items,
            &self.rates,
            default_shipping.as_ref().map(|info| info.country.as_str()),
        );

        Ok(Cart { order, totals })
    }

    async fn with_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mut orders: Vec<OrderRecord>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let mut items = self.items_repository.list_items(tx, &uuids).await?;

        for order in &mut orders {
            let (mine, rest): (Vec<_>, Vec<_>) = items
                .into_iter()
                .partition(|item| item.order_uuid == order.uuid);

            order.items = mine;
            items = rest;
        }

        Ok(orders)
    }
}

/// Stock left for a product whose decrement failed; a product deleted
/// since it was carted has none.
fn remaining_stock(
    lookup: Result<ProductRecord, sqlx::Error>,
) -> Result<u32, OrdersServiceError> {
    match lookup {
        Ok(product) => Ok(product.stock),
        Err(sqlx::Error::RowNotFound) => Ok(0),
        Err(error) => Err(error.into()),
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn get_cart(&self, customer: CustomerUuid) -> Result<Cart, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .get_or_create_open_order(&mut tx, customer)
            .await?;

        let cart = self.load_cart(&mut tx, customer, order).await?;

        tx.commit().await?;

        Ok(cart)
    }

    #[instrument(skip(self))]
    async fn update_cart(
        &self,
        customer: CustomerUuid,
        update: CartUpdate,
    ) -> Result<Cart, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .lock_or_create_open_order(&mut tx, customer)
            .await?;

        let product = self
            .products_repository
            .get_product(&mut tx, update.product_uuid)
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => OrdersServiceError::ProductNotFound,
                error => error.into(),
            })?;

        let current = self
            .items_repository
            .find_item(&mut tx, order.uuid, product.uuid)
            .await?
            .map_or(0, |item| item.quantity);

        let quantity =
            next_quantity(current, update.action, product.stock).map_err(|error| match error {
                CartActionError::InsufficientStock {
                    requested,
                    available,
                } => OrdersServiceError::InsufficientStock {
                    product: product.uuid,
                    requested,
                    available,
                },
                CartActionError::NotInCart => OrdersServiceError::NotInCart,
            })?;

        if quantity == 0 {
            self.items_repository
                .delete_item(&mut tx, order.uuid, product.uuid)
                .await?;
        } else {
            self.items_repository
                .upsert_item(
                    &mut tx,
                    order.uuid,
                    product.uuid,
                    quantity,
                    product.discounted_price(today()),
                )
                .await?;
        }

        self.orders_repository.touch_order(&mut tx, order.uuid).await?;

        debug!(
            order = %order.uuid,
            product = %product.uuid,
            quantity,
            "cart item updated"
        );

        let cart = self.load_cart(&mut tx, customer, order).await?;

        tx.commit().await?;

        Ok(cart)
    }

    #[instrument(skip(self))]
    async fn checkout(
        &self,
        customer: CustomerUuid,
        checkout: Checkout,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self
            .orders_repository
            .find_open_order_for_update(&mut tx, customer)
            .await?
            .ok_or(OrdersServiceError::EmptyCart)?;

        let items = self
            .items_repository
            .list_items(&mut tx, &[order.uuid])
            .await?;

        if items.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let shipping_info = if items.iter().any(|item| !item.digital) {
            let info = match checkout.shipping_info_uuid {
                Some(uuid) => self
                    .shipping_repository
                    .get_shipping_info(&mut tx, customer, uuid)
                    .await
                    .map_err(|error| match error {
                        sqlx::Error::RowNotFound => OrdersServiceError::ShippingInfoNotFound,
                        error => error.into(),
                    })?,
                None => self
                    .shipping_repository
                    .get_default_shipping_info(&mut tx, customer)
                    .await?
                    .ok_or(OrdersServiceError::ShippingInfoRequired)?,
            };

            Some(info)
        } else {
            None
        };

        let totals = summarize(
            &items,
            &self.rates,
            shipping_info.as_ref().map(|info| info.country.as_str()),
        );

        if totals.total != checkout.total {
            return Err(OrdersServiceError::TotalMismatch {
                expected: totals.total,
                submitted: checkout.total,
            });
        }

        for item in &items {
            let rows_affected = self
                .products_repository
                .decrement_stock(&mut tx, item.product_uuid, item.quantity)
                .await?;

            if rows_affected == 0 {
                let available = remaining_stock(
                    self.products_repository
                        .get_product(&mut tx, item.product_uuid)
                        .await,
                )?;

                return Err(OrdersServiceError::InsufficientStock {
                    product: item.product_uuid,
                    requested: item.quantity,
                    available,
                });
            }
        }

        let mut completed = self
            .orders_repository
            .complete_order(
                &mut tx,
                order.uuid,
                &CompletedOrder {
                    shipping_info_uuid: shipping_info.map(|info| info.uuid),
                    shipping_cost: totals.shipping_cost,
                    total: totals.total,
                    transaction_uuid: Uuid::now_v7(),
                },
            )
            .await?;

        tx.commit().await?;

        completed.items = items;

        Ok(completed)
    }

    async fn list_orders(&self, scope: OrdersScope) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .orders_repository
            .list_orders(&mut tx, scope.customer())
            .await?;

        let orders = self.with_items(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(
        &self,
        scope: OrdersScope,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self
            .orders_repository
            .get_order(&mut tx, order, scope.customer())
            .await?;

        order.items = self.items_repository.list_items(&mut tx, &[order.uuid]).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn update_shipping_status(
        &self,
        order: OrderUuid,
        status: ShippingStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self.orders_repository.get_order(&mut tx, order, None).await?;

        if !existing.complete {
            return Err(OrdersServiceError::NotComplete);
        }

        let mut updated = self
            .orders_repository
            .update_shipping_status(&mut tx, order, status)
            .await?;

        updated.items = self.items_repository.list_items(&mut tx, &[order]).await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// The customer's open order with computed totals, created on first access.
    async fn get_cart(&self, customer: CustomerUuid) -> Result<Cart, OrdersServiceError>;

    /// Add or remove one unit of a product, refreshing its captured price.
    async fn update_cart(
        &self,
        customer: CustomerUuid,
        update: CartUpdate,
    ) -> Result<Cart, OrdersServiceError>;

    /// Finalize the open order when the submitted total matches, taking the
    /// purchased quantities out of stock.
    async fn checkout(
        &self,
        customer: CustomerUuid,
        checkout: Checkout,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Completed orders visible in `scope`, newest first.
    async fn list_orders(&self, scope: OrdersScope) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// A single order visible in `scope`.
    async fn get_order(
        &self,
        scope: OrdersScope,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Change a completed order's shipping status.
    async fn update_shipping_status(
        &self,
        order: OrderUuid,
        status: ShippingStatus,
    ) -> Result<OrderRecord, OrdersServiceError>;
}
