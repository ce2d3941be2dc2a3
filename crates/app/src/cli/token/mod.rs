use std::{convert::Infallible, str::FromStr};

use clap::{Args, Subcommand};
use sqlx::PgPool;
use storefront_app::{
    database::{self, Db},
    domain::customers::{CustomersService, PgCustomersService, records::CustomerUuid},
};
use uuid::Uuid;

mod create;
mod list;
mod revoke;

#[derive(Debug, Args)]
pub(crate) struct TokenCommand {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    /// Issue a new API token; the raw token is printed once
    Create(create::CreateTokenArgs),
    /// Show a customer's tokens without their secrets
    List(list::ListTokensArgs),
    /// Revoke a token by its UUID
    Revoke(revoke::RevokeTokenArgs),
}

/// A customer given on the command line as a UUID or a username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CustomerRef {
    Uuid(CustomerUuid),
    Username(String),
}

impl FromStr for CustomerRef {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Uuid::parse_str(value).map_or_else(
            |_not_uuid| Self::Username(value.to_owned()),
            |uuid| Self::Uuid(uuid.into()),
        ))
    }
}

impl CustomerRef {
    async fn resolve(&self, pool: &PgPool) -> Result<CustomerUuid, String> {
        match self {
            Self::Uuid(uuid) => Ok(*uuid),
            Self::Username(username) => PgCustomersService::new(Db::new(pool.clone()))
                .find_customer_by_username(username)
                .await
                .map(|customer| customer.uuid)
                .map_err(|error| format!("failed to find customer {username}: {error}")),
        }
    }
}

pub(crate) async fn run(command: TokenCommand) -> Result<(), String> {
    let database_url = command
        .database_url
        .ok_or_else(|| "--database-url or DATABASE_URL is required".to_string())?;

    let pool = database::connect(&database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    match command.command {
        TokenSubcommand::Create(args) => create::run(&pool, args).await,
        TokenSubcommand::List(args) => list::run(&pool, args).await,
        TokenSubcommand::Revoke(args) => revoke::run(&pool, args).await,
    }
}
