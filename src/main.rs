//! barcode-resolver - Resolve a product barcode to websites and nearby stores.

use anyhow::Result;
use barcode_resolver::commands::ResolveCommand;
use barcode_resolver::config::{Config, OutputFormat};
use barcode_resolver::resolver::Query;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "barcode-resolver",
    version,
    about = "Resolve product information from barcodes",
    long_about = "Matches a barcode to a product, lists the websites selling it and finds nearby cosmetic and skincare stores."
)]
struct Cli {
    /// Product barcode
    #[arg(long)]
    barcode: String,

    /// Country (e.g., UK, US, DE)
    #[arg(long)]
    country: String,

    /// City (optional)
    #[arg(long)]
    city: Option<String>,

    /// Products data file (CSV or Excel)
    #[arg(long, env = "BARCODE_PRODUCTS")]
    products: Option<PathBuf>,

    /// Websites data file (CSV or Excel)
    #[arg(long, env = "BARCODE_WEBSITES")]
    websites: Option<PathBuf>,

    /// Stores data file (CSV or Excel)
    #[arg(long, env = "BARCODE_STORES")]
    stores: Option<PathBuf>,

    /// Output file (csv or xlsx)
    #[arg(short, long, env = "BARCODE_OUTPUT")]
    output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Summary format printed to the terminal
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let query = Query::new(cli.barcode, cli.country, cli.city)?;

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(products) = cli.products {
        config.products = products;
    }
    if let Some(websites) = cli.websites {
        config.websites = websites;
    }
    if let Some(stores) = cli.stores {
        config.stores = stores;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    info!("{}", "=".repeat(60));
    info!("Barcode Resolution Tool");
    info!("{}", "=".repeat(60));

    let outcome = ResolveCommand::new(config).execute(&query)?;
    println!("{}", outcome.summary);

    Ok(())
}
