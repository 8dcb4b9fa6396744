use clap::Args;
use stockroom::{ProductFields, validate};
use stockroom_app::context::AppContext;

use crate::cli::product::render_table;

#[derive(Debug, Args)]
pub(crate) struct AddProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product name, 1-100 characters after trimming
    #[arg(long)]
    name: String,

    /// Units in stock, 0-10000
    #[arg(long)]
    quantity: String,

    /// Unit price, 0-1000000
    #[arg(long)]
    price: String,
}

pub(crate) async fn run(args: AddProductArgs) -> Result<(), String> {
    // Free-text fields go through the shared policy before anything else.
    let quantity = validate::parse_quantity(&args.quantity).map_err(|error| error.to_string())?;
    let price = validate::parse_price(&args.price).map_err(|error| error.to_string())?;

    let context = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let product = context
        .products
        .create_product(ProductFields {
            name: args.name,
            quantity: i64::from(quantity),
            price,
        })
        .await
        .map_err(|error| format!("failed to add product: {error}"))?;

    println!("product '{}' added with id {}", product.name, product.id);

    render_table(&context).await
}
