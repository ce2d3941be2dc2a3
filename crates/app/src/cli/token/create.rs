use clap::Args;
use sqlx::PgPool;
use storefront_app::auth::PgAuthService;

use super::CustomerRef;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// Owning customer, by username or UUID
    #[arg(long)]
    customer: CustomerRef,
}

pub(crate) async fn run(pool: &PgPool, args: CreateTokenArgs) -> Result<(), String> {
    let customer = args.customer.resolve(pool).await?;

    let issued = PgAuthService::new(pool.clone())
        .issue_api_token(customer)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.metadata.uuid);
    println!("customer_uuid: {customer}");
    println!("api_token: {}", issued.token);
    println!("send as `Authorization: Bearer <api_token>`; it is not shown again");

    Ok(())
}
