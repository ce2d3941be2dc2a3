//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    auth::{
        ApiToken, ApiTokenMetadata, AuthServiceError, AuthenticatedCustomer, IssuedApiToken,
        NewApiToken, repository::PgAuthRepository,
    },
    domain::customers::records::CustomerUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token for the given customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer does not exist or the insert fails.
    pub async fn issue_api_token(
        &self,
        customer_uuid: CustomerUuid,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token_uuid = Uuid::now_v7();
        let token = ApiToken::generate(token_uuid);

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: token_uuid,
                customer_uuid,
                token_hash: token.hash(),
            })
            .await?;

        Ok(IssuedApiToken {
            token: token.into_string(),
            metadata,
        })
    }

    /// List all tokens for the given customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        customer_uuid: CustomerUuid,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        Ok(self
            .repository
            .list_api_tokens_by_customer(customer_uuid)
            .await?)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        Ok(self
            .repository
            .revoke_api_token(token_uuid)
            .await?
            .is_some())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedCustomer, AuthServiceError> {
        let token_hash = ApiToken::parse(bearer_token)
            .ok_or(AuthServiceError::NotFound)?
            .hash();

        let customer = self
            .repository
            .find_customer_by_token_hash(&token_hash)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        // Best-effort metadata update; auth success should not depend on this write.
        let _touch_result = self
            .repository
            .touch_api_token_last_used(&token_hash)
            .await;

        Ok(customer)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token to the customer that owns it.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedCustomer, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::create_customer};

    use super::*;

    #[tokio::test]
    async fn issued_token_authenticates_its_customer() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = create_customer(&ctx, "ada", true).await?;

        let issued = ctx.auth.issue_api_token(customer.uuid).await?;
        let authenticated = ctx.auth.authenticate_bearer(&issued.token).await?;

        assert_eq!(authenticated.customer_uuid, customer.uuid);
        assert!(authenticated.is_staff);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_token_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.authenticate_bearer("garbage").await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn revoked_token_no_longer_authenticates() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = create_customer(&ctx, "ada", false).await?;
        let issued = ctx.auth.issue_api_token(customer.uuid).await?;

        assert!(ctx.auth.revoke_api_token(issued.metadata.uuid).await?);
        assert!(!ctx.auth.revoke_api_token(issued.metadata.uuid).await?);

        let result = ctx.auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn issue_token_for_unknown_customer_fails() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.issue_api_token(CustomerUuid::new()).await;

        assert!(
            matches!(result, Err(AuthServiceError::UnknownCustomer)),
            "expected UnknownCustomer, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_api_tokens_returns_issued_tokens() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = create_customer(&ctx, "ada", false).await?;
        let issued = ctx.auth.issue_api_token(customer.uuid).await?;

        let tokens = ctx.auth.list_api_tokens(customer.uuid).await?;

        assert_eq!(
            tokens
                .iter()
                .map(|token| (token.uuid, token.revoked_at.is_none()))
                .collect::<Vec<_>>(),
            vec![(issued.metadata.uuid, true)]
        );

        Ok(())
    }
}
