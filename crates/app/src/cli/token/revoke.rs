use clap::Args;
use sqlx::PgPool;
use storefront_app::auth::PgAuthService;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    /// Token UUID, as printed by `token list`
    #[arg(long)]
    token_uuid: Uuid,
}

pub(crate) async fn run(pool: &PgPool, args: RevokeTokenArgs) -> Result<(), String> {
    let revoked = PgAuthService::new(pool.clone())
        .revoke_api_token(args.token_uuid)
        .await
        .map_err(|error| format!("failed to revoke token: {error}"))?;

    if revoked {
        println!("revoked token {}", args.token_uuid);
    } else {
        println!("token {} was already revoked or does not exist", args.token_uuid);
    }

    Ok(())
}
