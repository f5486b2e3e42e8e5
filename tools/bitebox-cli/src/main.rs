//! Bitebox CLI - order food from the terminal.
//!
//! Commands:
//! - `bitebox restaurants` - Browse and search restaurants
//! - `bitebox menu` - Show a restaurant's dishes
//! - `bitebox order` - Fill a cart, pay, and get a receipt
//! - `bitebox rate` - Rate the experience, or list past ratings
//! - `bitebox config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, MenuArgs, OrderArgs, RateArgs, RestaurantsArgs};

/// Bitebox CLI - Browse restaurants and place food orders
#[derive(Parser)]
#[command(name = "bitebox")]
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
    /// List restaurants, optionally filtered and sorted
    Restaurants(RestaurantsArgs),

    /// Show a restaurant's menu
    Menu(MenuArgs),

    /// Add dishes to the cart and check out
    Order(OrderArgs),

    /// Rate your experience or list saved feedback
    Rate(RateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Log to stderr so `--json` output stays parseable. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Restaurants(args) => commands::restaurants::run(args, &ctx).await,
        Commands::Menu(args) => commands::menu::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Rate(args) => commands::rate::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
