//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::records::CategoryUuid,
        discounts::{records::DiscountUuid, repository::PgDiscountsRepository},
        products::{
            data::{NewProduct, ProductUpdate, is_storable, is_valid_name},
            errors::ProductsServiceError,
            records::{ProductRecord, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
    discounts_repository: PgDiscountsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
            discounts_repository: PgDiscountsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, category).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if !is_valid_name(&product.name) || !is_storable(product.price, product.stock) {
            return Err(ProductsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if !is_valid_name(&update.name) || !is_storable(update.price, update.stock) {
            return Err(ProductsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        self.repository
            .remove_product_from_open_orders(&mut tx, product)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn add_product_discount(
        &self,
        product: ProductUuid,
        discount: DiscountUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.get_product(&mut tx, product).await?;

        self.discounts_repository
            .get_discount(&mut tx, discount)
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => ProductsServiceError::DiscountNotFound,
                error => error.into(),
            })?;

        self.repository
            .attach_discount(&mut tx, product, discount)
            .await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn remove_product_discount(
        &self,
        product: ProductUuid,
        discount: DiscountUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .detach_discount(&mut tx, product, discount)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::DiscountNotFound);
        }

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, optionally limited to one category.
    async fn list_products(
        &self,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product with its discounts.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replaces a product's editable fields.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product and drops it from any open carts.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Attach a discount to a product. Attaching twice is a no-op.
    async fn add_product_discount(
        &self,
        product: ProductUuid,
        discount: DiscountUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Detach a discount from a product.
    async fn remove_product_discount(
        &self,
        product: ProductUuid,
        discount: DiscountUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;
}
