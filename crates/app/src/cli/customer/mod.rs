use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct CustomerCommand {
    #[command(subcommand)]
    command: CustomerSubcommand,
}

#[derive(Debug, Subcommand)]
enum CustomerSubcommand {
    Create(create::CreateCustomerArgs),
}

pub(crate) async fn run(command: CustomerCommand) -> Result<(), String> {
    match command.command {
        CustomerSubcommand::Create(args) => create::run(args).await,
    }
}
