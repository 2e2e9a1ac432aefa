//! CLI command implementations.

pub mod ask;
pub mod catalog;
pub mod config;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Free-text search over product names and categories.
    #[arg(short, long, conflicts_with_all = ["category", "special"])]
    pub search: Option<String>,

    /// Category label, e.g. "Art Supplies", or "all".
    #[arg(short, long, conflicts_with = "special")]
    pub category: Option<String>,

    /// Curated grouping: new, sale or bestseller.
    #[arg(long)]
    pub special: Option<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Seed for order numbers, for reproducible sessions.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the ask command.
#[derive(Args)]
pub struct AskArgs {
    /// Question for the advisor.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
