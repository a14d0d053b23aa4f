use clap::Parser;
use dotenvy::dotenv;
use shopkeep::config::{self, TableStyle};
use shopkeep::errors::Result;
use shopkeep::menu::Shop;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version)]
/// Inventory and sales tracker for a small shop.
struct Args {
    #[arg(short, long)]
    /// Reads settings from this TOML file instead of ./shop.toml.
    config: Option<PathBuf>,
    #[arg(long)]
    /// Inventory table location.
    inventory_file: Option<PathBuf>,
    #[arg(long)]
    /// Sales table location.
    sales_file: Option<PathBuf>,
    #[arg(long)]
    /// Table layout for listings: grid or plain.
    table_style: Option<TableStyle>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Initialize tracing on stderr, quiet by default so the menu stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Resolve configuration, command-line flags win
    let mut app_config = config::load_app_configuration(args.config.as_deref())
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    if let Some(path) = args.inventory_file {
        app_config.storage.inventory_file = path;
    }
    if let Some(path) = args.sales_file {
        app_config.storage.sales_file = path;
    }
    if let Some(style) = args.table_style {
        app_config.display.table_style = style;
    }

    // 4. Load both tables; a malformed or unreadable file is fatal
    let mut shop = Shop::open(&app_config)
        .inspect_err(|e| error!("Failed to open shop data: {}", e))?;

    // 5. Run the menu on the terminal
    let stdin = std::io::stdin();
    shop.run(stdin.lock(), std::io::stdout())
        .inspect_err(|e| error!("Shop stopped: {}", e))?;
    info!("Shop closed.");
    Ok(())
}
