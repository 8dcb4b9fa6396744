use clap::{Args, Subcommand};
use stockroom::ProductRecord;
use stockroom_app::context::AppContext;
use tabled::{builder::Builder, settings::Style};

mod add;
mod delete;
mod list;
mod show;
mod update;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    Add(add::AddProductArgs),
    Update(update::UpdateProductArgs),
    Delete(delete::DeleteProductArgs),
    Show(show::ShowProductArgs),
    List(list::ListProductsArgs),
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Add(args) => add::run(args).await,
        ProductSubcommand::Update(args) => update::run(args).await,
        ProductSubcommand::Delete(args) => delete::run(args).await,
        ProductSubcommand::Show(args) => show::run(args).await,
        ProductSubcommand::List(args) => list::run(args).await,
    }
}

pub(crate) fn print_product(product: &ProductRecord) {
    println!("id: {}", product.id);
    println!("name: {}", product.name);
    println!("quantity: {}", product.quantity);
    println!("price: {:.2}", product.price);
}

pub(crate) fn print_products_table(products: &[ProductRecord]) {
    if products.is_empty() {
        println!("no products found");
        return;
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Quantity", "Price"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.quantity.to_string(),
            format!("{:.2}", product.price),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());

    println!("{table}");
}

/// Fetch and print the current product table, console-form style: every
/// mutation ends with a fresh look at the whole inventory.
pub(crate) async fn render_table(context: &AppContext) -> Result<(), String> {
    let products = context
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    print_products_table(&products);

    Ok(())
}
