use clap::Args;
use storefront_app::{
    database::{self, Db},
    domain::customers::{
        CustomersService, PgCustomersService,
        data::NewCustomer,
        records::CustomerUuid,
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateCustomerArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Unique login name
    #[arg(long)]
    username: String,

    /// Unique e-mail address
    #[arg(long)]
    email: String,

    /// Name shown on reviews and order snapshots
    #[arg(long, default_value = "")]
    full_name: String,

    /// Allow catalog administration
    #[arg(long)]
    staff: bool,

    /// Optional customer UUID; generated when omitted
    #[arg(long)]
    customer_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateCustomerArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCustomersService::new(Db::new(pool));

    let customer = service
        .create_customer(NewCustomer {
            uuid: args
                .customer_uuid
                .map_or_else(CustomerUuid::new, CustomerUuid::from_uuid),
            username: args.username,
            email: args.email,
            full_name: args.full_name,
            is_staff: args.staff,
        })
        .await
        .map_err(|error| format!("failed to create customer: {error}"))?;

    println!("customer_uuid: {}", customer.uuid);
    println!("username: {}", customer.username);
    println!("email: {}", customer.email);
    println!("is_staff: {}", customer.is_staff);

    Ok(())
}
