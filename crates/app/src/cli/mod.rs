use clap::{Parser, Subcommand};

mod product;

#[derive(Debug, Parser)]
#[command(name = "stockroom-app", about = "Stockroom operator console", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Product(command) => product::run(command).await,
        }
    }
}
