//! Ink & Paper CLI - a terminal front end for the stationery storefront.
//!
//! Commands:
//! - `inkpaper catalog` - Browse and filter the catalog
//! - `inkpaper shop` - Interactive shopping session
//! - `inkpaper ask` - Ask the stationery advisor a question
//! - `inkpaper config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod render;
mod shell;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AskArgs, CatalogArgs, ConfigArgs, ShopArgs};

/// Ink & Paper - browse, shop and get stationery advice from the terminal
#[derive(Parser)]
#[command(name = "inkpaper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products, optionally filtered
    Catalog(CatalogArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Ask the stationery advisor a question
    Ask(AskArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Ask(args) => commands::ask::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
