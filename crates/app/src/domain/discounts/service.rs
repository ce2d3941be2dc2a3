//! Discounts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        discounts::{
            data::NewDiscount,
            errors::DiscountsServiceError,
            records::{DiscountRecord, DiscountUuid},
            repository::PgDiscountsRepository,
        },
        today,
    },
};

#[derive(Debug, Clone)]
pub struct PgDiscountsService {
    db: Db,
    repository: PgDiscountsRepository,
}

impl PgDiscountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDiscountsRepository::new(),
        }
    }
}

#[async_trait]
impl DiscountsService for PgDiscountsService {
    async fn list_discounts(&self) -> Result<Vec<DiscountRecord>, DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        let discounts = self.repository.list_discounts(&mut tx).await?;

        tx.commit().await?;

        Ok(discounts)
    }

    async fn get_discount(
        &self,
        discount: DiscountUuid,
    ) -> Result<DiscountRecord, DiscountsServiceError> {
        let mut tx = self.db.begin().await?;

        let discount = self.repository.get_discount(&mut tx, discount).await?;

        tx.commit().await?;

        Ok(discount)
    }

    async fn create_discount(
        &self,
        discount: NewDiscount,
    ) -> Result<DiscountRecord, DiscountsServiceError> {
        discount.validate(today())?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_discount(&mut tx, &discount).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait DiscountsService: Send + Sync {
    /// Retrieves all discounts, soonest expiry first.
    async fn list_discounts(&self) -> Result<Vec<DiscountRecord>, DiscountsServiceError>;

    /// Retrieve a single discount.
    async fn get_discount(
        &self,
        discount: DiscountUuid,
    ) -> Result<DiscountRecord, DiscountsServiceError>;

    /// Creates a discount. The expiry date must be after today.
    async fn create_discount(
        &self,
        discount: NewDiscount,
    ) -> Result<DiscountRecord, DiscountsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_discount_round_trips_percentage_and_expiry() -> TestResult {
        let ctx = TestContext::new().await;
        let expires_on = today().checked_add(30.days())?;
        let uuid = DiscountUuid::new();

        let created = ctx
            .discounts
            .create_discount(NewDiscount {
                uuid,
                name: "Launch".to_string(),
                percentage: Decimal::new(125, 1),
                active: true,
                expires_on,
            })
            .await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.percentage, Decimal::new(125, 1));
        assert_eq!(created.expires_on, expires_on);
        assert!(created.active);

        let fetched = ctx.discounts.get_discount(uuid).await?;

        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn create_discount_rejects_past_expiry() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .discounts
            .create_discount(NewDiscount {
                uuid: DiscountUuid::new(),
                name: "Expired".to_string(),
                percentage: Decimal::TEN,
                active: true,
                expires_on: today().checked_sub(1.day())?,
            })
            .await;

        assert!(
            matches!(result, Err(DiscountsServiceError::ExpiryNotInFuture)),
            "expected ExpiryNotInFuture, got {result:?}"
        );

        assert!(ctx.discounts.list_discounts().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_discount_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.discounts.get_discount(DiscountUuid::new()).await;

        assert!(
            matches!(result, Err(DiscountsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
