use clap::Args;
use stockroom::ProductId;
use stockroom_app::context::AppContext;

use crate::cli::product::render_table;

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product id to delete
    #[arg(long)]
    id: ProductId,
}

pub(crate) async fn run(args: DeleteProductArgs) -> Result<(), String> {
    let context = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    context
        .products
        .delete_product(args.id)
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    println!("product {} deleted", args.id);

    render_table(&context).await
}
