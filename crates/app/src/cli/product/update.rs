use clap::Args;
use stockroom::{ProductId, ProductPatch, validate};
use stockroom_app::context::AppContext;

use crate::cli::product::render_table;

#[derive(Debug, Args)]
pub(crate) struct UpdateProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product id
    #[arg(long)]
    id: ProductId,

    /// New name; the stored name is kept when omitted or blank
    #[arg(long)]
    name: Option<String>,

    /// New quantity; the stored quantity is kept when omitted
    #[arg(long)]
    quantity: Option<String>,

    /// New price; the stored price is kept when omitted
    #[arg(long)]
    price: Option<String>,
}

pub(crate) async fn run(args: UpdateProductArgs) -> Result<(), String> {
    let quantity = match args.quantity.as_deref() {
        Some(raw) => Some(i64::from(
            validate::parse_quantity(raw).map_err(|error| error.to_string())?,
        )),
        None => None,
    };

    let price = match args.price.as_deref() {
        Some(raw) => Some(validate::parse_price(raw).map_err(|error| error.to_string())?),
        None => None,
    };

    // A blank name means "leave it alone", matching the omitted-flag case.
    let patch = ProductPatch {
        name: args.name.filter(|name| !name.trim().is_empty()),
        quantity,
        price,
    };

    let context = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let product = context
        .products
        .update_product(args.id, patch)
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    println!("product {} updated", product.id);

    render_table(&context).await
}
