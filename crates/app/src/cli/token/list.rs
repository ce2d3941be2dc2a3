use clap::Args;
use sqlx::PgPool;
use storefront_app::auth::PgAuthService;

use super::CustomerRef;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    /// Customer, by username or UUID
    #[arg(long)]
    customer: CustomerRef,
}

pub(crate) async fn run(pool: &PgPool, args: ListTokensArgs) -> Result<(), String> {
    let customer = args.customer.resolve(pool).await?;

    let tokens = PgAuthService::new(pool.clone())
        .list_api_tokens(customer)
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("customer {customer} has no tokens");
        return Ok(());
    }

    for token in tokens {
        let status = token
            .revoked_at
            .map_or_else(|| "active".to_string(), |at| format!("revoked {at}"));
        let last_used = token
            .last_used_at
            .map_or_else(|| "never used".to_string(), |at| format!("last used {at}"));

        println!("{}  created {}  {last_used}  {status}", token.uuid, token.created_at);
    }

    Ok(())
}
