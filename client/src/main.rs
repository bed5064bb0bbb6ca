//! Stockroom warehouse inventory client CLI
//!
//! A thin command-line surface over the client services, standing in for
//! the mobile UI: login/logout, catalog browsing with filter and search,
//! product detail and stock adjustment, barcode scanning, product
//! creation, and dashboard statistics.

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::filter::ProductFilter;
use shared::models::{Product, Warehouseman};
use shared::stock::StockAdjustment;
use shared::types::{AdjustmentAction, SortKey, SortOrder};
use shared::validation::{ProductForm, StockRow};

use stockroom_client::api::ApiClient;
use stockroom_client::config::Config;
use stockroom_client::services::auth::{AuthService, LoginOutcome};
use stockroom_client::services::catalog::CatalogService;
use stockroom_client::services::form::ProductFormService;
use stockroom_client::services::product::ProductService;
use stockroom_client::services::scanner::{ScanOutcome, ScannerService};
use stockroom_client::services::statistics::StatisticsService;
use stockroom_client::session::SessionStore;

#[derive(Parser)]
#[command(name = "stockroom", version, about = "Warehouse inventory client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with a secret key
    Login { secret_key: String },
    /// Clear the persisted session
    Logout,
    /// Show the current session user
    Whoami,
    /// List products, with free-text search or field filters and sorting
    Products {
        /// Free-text search across name/type/price/supplier (OR semantics)
        #[arg(long, conflicts_with_all = ["name", "type_", "price", "supplier"])]
        search: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type")]
        type_: Option<String>,
        /// Substring match against the price's string representation
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        supplier: Option<String>,
        /// name | price | quantity
        #[arg(long, default_value = "name")]
        sort_by: String,
        /// asc | desc
        #[arg(long, default_value = "asc")]
        order: String,
    },
    /// Show one product with its aggregate stock status
    Product { id: i64 },
    /// Add to or remove from a warehouse's stock of a product
    Adjust {
        id: i64,
        #[arg(long)]
        warehouse: String,
        #[arg(long)]
        quantity: String,
        /// add | remove
        #[arg(long)]
        action: String,
    },
    /// Look up a scanned barcode
    Scan { barcode: String },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        barcode: String,
        #[arg(long)]
        price: String,
        #[arg(long, default_value = "")]
        solde: String,
        #[arg(long = "type", default_value = "Autre")]
        type_: String,
        #[arg(long)]
        supplier: String,
        #[arg(long, default_value = "")]
        image: String,
        /// Stock rows as WAREHOUSE_ID:QUANTITY (repeatable)
        #[arg(long = "stock")]
        stocks: Vec<String>,
    },
    /// Show dashboard statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockroom=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    let api = ApiClient::new(&config)?;
    let session = SessionStore::new(config.session_path());
    let auth = AuthService::new(api.clone(), session.clone());

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { secret_key } => match auth.login(&secret_key).await? {
            LoginOutcome::Success(user) => {
                println!("Logged in as {} ({})", user.name, user.city);
            }
            LoginOutcome::UserNotFound => bail!("User not found"),
            LoginOutcome::InvalidCredentials => bail!("Invalid credentials"),
        },
        Commands::Logout => {
            auth.logout()?;
            println!("Logged out");
        }
        Commands::Whoami => {
            let user = require_session(&session)?;
            println!("{} ({}), id {}", user.name, user.city, user.id);
        }
        Commands::Products {
            search,
            name,
            type_,
            price,
            supplier,
            sort_by,
            order,
        } => {
            require_session(&session)?;
            let catalog = CatalogService::new(api);

            let products = if let Some(query) = search {
                catalog.search(&query).await?
            } else {
                let filter = ProductFilter {
                    name: name.unwrap_or_default(),
                    type_: type_.unwrap_or_default(),
                    price: price.unwrap_or_default(),
                    supplier: supplier.unwrap_or_default(),
                    sort_by: parse_arg::<SortKey>(&sort_by)?,
                    sort_order: parse_arg::<SortOrder>(&order)?,
                };
                catalog.filtered(&filter).await?
            };

            for product in &products {
                print_product_line(product);
            }
            println!("{} product(s)", products.len());
        }
        Commands::Product { id } => {
            require_session(&session)?;
            let service = ProductService::new(api);
            let product = service.get_product_details(id).await?;
            let status = service.stock_status(&product);
            println!("{}", serde_json::to_string_pretty(&product)?);
            println!(
                "Stock: {} ({}) [{}]",
                status.total_stock,
                status.level.label(),
                status.level.severity()
            );
        }
        Commands::Adjust {
            id,
            warehouse,
            quantity,
            action,
        } => {
            require_session(&session)?;
            let service = ProductService::new(api);
            let product = service.get_product_details(id).await?;
            let adjustment = StockAdjustment {
                quantity,
                warehouse_id: warehouse,
            };
            let action = parse_arg::<AdjustmentAction>(&action)?;
            let updated = service
                .update_product_stock(&product, &adjustment, action)
                .await?;
            let status = service.stock_status(&updated);
            println!(
                "Stock {}: total now {} ({})",
                if action == AdjustmentAction::Add {
                    "added"
                } else {
                    "removed"
                },
                status.total_stock,
                status.level.label()
            );
        }
        Commands::Scan { barcode } => {
            require_session(&session)?;
            let mut scanner = ScannerService::new(api);
            match scanner.handle_scan(&barcode).await? {
                ScanOutcome::Found(product) => {
                    println!("Found product {}: {}", product.id, product.name);
                    print_product_line(&product);
                    scanner.reset_after_delay().await;
                }
                ScanOutcome::NotFound { barcode } => {
                    println!(
                        "Product not found. Create it with:\n  stockroom create --barcode {} --name <name> --price <price> --supplier <supplier>",
                        barcode
                    );
                }
                ScanOutcome::Ignored => {}
            }
        }
        Commands::Create {
            name,
            barcode,
            price,
            solde,
            type_,
            supplier,
            image,
            stocks,
        } => {
            require_session(&session)?;
            let form_service = ProductFormService::new(api, config.warehouse_directory());
            let form = ProductForm {
                name,
                barcode,
                price,
                solde,
                type_,
                supplier,
                image,
                stocks: stocks
                    .iter()
                    .map(|spec| parse_stock_row(spec))
                    .collect::<anyhow::Result<Vec<StockRow>>>()?,
            };
            let product = form_service.create_product(&form).await?;
            println!("Created product {}: {}", product.id, product.name);
        }
        Commands::Stats => {
            require_session(&session)?;
            let stats = StatisticsService::new(api).fetch_statistics().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

/// All commands except login require a persisted session.
fn require_session(session: &SessionStore) -> anyhow::Result<Warehouseman> {
    session
        .load()
        .ok_or_else(|| anyhow!("Not logged in. Run `stockroom login <secret-key>` first."))
}

fn parse_arg<T: std::str::FromStr<Err = String>>(value: &str) -> anyhow::Result<T> {
    value.parse::<T>().map_err(|e| anyhow!(e))
}

/// Parse a `WAREHOUSE_ID:QUANTITY` stock row argument.
fn parse_stock_row(spec: &str) -> anyhow::Result<StockRow> {
    let (warehouse, quantity) = spec
        .split_once(':')
        .ok_or_else(|| anyhow!("Stock row must be WAREHOUSE_ID:QUANTITY, got {}", spec))?;
    Ok(StockRow {
        warehouse_id: Some(warehouse.parse()?),
        quantity: quantity.to_string(),
    })
}

fn print_product_line(product: &Product) {
    let status = shared::stock::calculate_stock_status(product);
    println!(
        "#{:<6} {:<30} {:<14} {:>10}  qty {:>5}  {}",
        product.id,
        product.name,
        product.type_,
        product.displayed_price(),
        status.total_stock,
        status.level.label()
    );
}
