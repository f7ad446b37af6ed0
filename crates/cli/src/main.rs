//! Vitrine CLI - Terminal front end for the storefront.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, polos only, cheapest first
//! vitrine catalog --category polo --sort price-low
//!
//! # Same, as JSON
//! vitrine catalog --search premium --json
//!
//! # Drive an interactive session from stdin
//! vitrine session
//! printf 'enter\nset email a@b.c\nset password x\nsubmit\nwait\nadd 1\n' | vitrine session
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the filtered, sorted product list
//! - `session` - Read one storefront command per line and print each screen

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use vitrine_storefront::StorefrontConfig;
use vitrine_storefront::catalog::{CategoryFilter, SortKey};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Category filter (`all`, `sweatshirt`, `polo`)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort key (`name`, `price-low`, `price-high`, `rating`)
        #[arg(long, default_value = "name")]
        sort: SortKey,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run an interactive storefront session on stdin
    Session {
        /// Print each screen as a JSON snapshot
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // tracing is not up yet; fall back to the defaults
            init_tracing(&StorefrontConfig::default());
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr so rendered screens on stdout stay clean.
/// `RUST_LOG` wins over the configured default filter.
fn init_tracing(config: &StorefrontConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let json_layer = config.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!config.log_json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog {
            category,
            search,
            sort,
            json,
        } => commands::catalog::list(&config, category, &search, sort, json)?,
        Commands::Session { json } => commands::session::run(&config, json).await?,
    }
    Ok(())
}
