//! Shipping info service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        customers::records::CustomerUuid,
        shipping::{
            data::NewShippingInfo,
            errors::ShippingServiceError,
            records::{ShippingInfoRecord, ShippingInfoUuid},
            repository::PgShippingInfoRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgShippingService {
    db: Db,
    repository: PgShippingInfoRepository,
}

impl PgShippingService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgShippingInfoRepository::new(),
        }
    }
}

#[async_trait]
impl ShippingService for PgShippingService {
    async fn list_shipping_info(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<ShippingInfoRecord>, ShippingServiceError> {
        let mut tx = self.db.begin().await?;

        let shipping_info = self.repository.list_shipping_info(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(shipping_info)
    }

    async fn get_shipping_info(
        &self,
        customer: CustomerUuid,
        shipping_info: ShippingInfoUuid,
    ) -> Result<ShippingInfoRecord, ShippingServiceError> {
        let mut tx = self.db.begin().await?;

        let shipping_info = self
            .repository
            .get_shipping_info(&mut tx, customer, shipping_info)
            .await?;

        tx.commit().await?;

        Ok(shipping_info)
    }

    async fn create_shipping_info(
        &self,
        customer: CustomerUuid,
        shipping_info: NewShippingInfo,
    ) -> Result<ShippingInfoRecord, ShippingServiceError> {
        let shipping_info = shipping_info.normalized();

        if !shipping_info.is_valid() {
            return Err(ShippingServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        if shipping_info.is_default {
            self.repository
                .clear_default_shipping_info(&mut tx, customer)
                .await?;
        }

        let created = self
            .repository
            .create_shipping_info(&mut tx, customer, &shipping_info)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ShippingService: Send + Sync {
    /// The customer's saved shipping addresses, default first.
    async fn list_shipping_info(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<ShippingInfoRecord>, ShippingServiceError>;

    /// Retrieve one of the customer's shipping addresses.
    async fn get_shipping_info(
        &self,
        customer: CustomerUuid,
        shipping_info: ShippingInfoUuid,
    ) -> Result<ShippingInfoRecord, ShippingServiceError>;

    /// Save a shipping address. A new default replaces the previous one.
    async fn create_shipping_info(
        &self,
        customer: CustomerUuid,
        shipping_info: NewShippingInfo,
    ) -> Result<ShippingInfoRecord, ShippingServiceError>;
}
