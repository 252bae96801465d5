use clap::{Parser, Subcommand};
use shopfront_store::{Cart, Catalog};
use shopfront_vendors::ProductFacade;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopfront-cli")]
#[command(about = "Unified storefront over three vendor catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load every vendor catalog and print the merged product list.
    Products {
        /// Only show products in this category (exact match).
        #[arg(long)]
        category: Option<String>,
        /// Print products as pretty JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Load the catalogs and print the derived category filter list.
    Categories,
    /// Load the catalogs and walk through a short cart session.
    CartDemo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = shopfront_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let facade = ProductFacade::from_config(&config);

    let cli = Cli::parse();
    match cli.command {
        Commands::Products { category, json } => products(&facade, category, json).await?,
        Commands::Categories => categories(&facade).await,
        Commands::CartDemo => cart_demo(&facade).await,
    }

    Ok(())
}

async fn products(
    facade: &ProductFacade,
    category: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let mut catalog = Catalog::new(facade.all_products().await);
    if let Some(category) = category {
        catalog.set_category(category);
    }

    let selected = catalog.filtered();
    tracing::info!(
        count = selected.len(),
        category = catalog.selected_category(),
        "loaded products"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        for product in selected {
            println!(
                "{:<10} {:<26} {:>10} {:>6}  {:<12} {}",
                product.id,
                product.name,
                product.price,
                product.stock,
                product.category,
                product.source
            );
        }
    }
    Ok(())
}

async fn categories(facade: &ProductFacade) {
    let catalog = Catalog::new(facade.all_products().await);
    for category in catalog.categories() {
        println!("{category}");
    }
}

async fn cart_demo(facade: &ProductFacade) {
    let catalog = Catalog::new(facade.all_products().await);
    let mut cart = Cart::new();

    for product in catalog.products().iter().take(3) {
        println!("adding {} ({})", product.name, product.price);
        cart.add(product.clone());
    }
    if let Some(removed) = cart.remove(1) {
        println!("removed {} from position 1", removed.name);
    }
    println!("{} line(s), total {}", cart.count(), cart.total());
}
