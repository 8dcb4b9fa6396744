use clap::Args;
use stockroom::ProductId;
use stockroom_app::context::AppContext;

use crate::cli::product::print_product;

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product id to show
    #[arg(long)]
    id: ProductId,
}

pub(crate) async fn run(args: ShowProductArgs) -> Result<(), String> {
    let context = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let product = context
        .products
        .get_product(args.id)
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?;

    print_product(&product);

    Ok(())
}
