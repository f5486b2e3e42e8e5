//! CLI command implementations.

pub mod config;
pub mod menu;
pub mod order;
pub mod rate;
pub mod restaurants;

use clap::{Args, Subcommand};

/// Arguments for the restaurants command.
#[derive(Args)]
pub struct RestaurantsArgs {
    /// Only show this category (e.g. "pizza", "Fast Food").
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive fragment of the restaurant name.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort order: featured, rating, name.
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Restaurant ID.
    pub restaurant: String,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Restaurant ID.
    pub restaurant: String,

    /// Dish to add, once per unit (repeatable).
    #[arg(short, long = "item", required = true)]
    pub items: Vec<String>,

    /// Dish to take one unit off after adding (repeatable).
    #[arg(short, long = "remove")]
    pub removals: Vec<String>,

    /// Payment method: qr or manual.
    #[arg(short, long, default_value = "manual")]
    pub pay: String,

    /// Follow the order until delivery.
    #[arg(long)]
    pub track: bool,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the rate command.
#[derive(Args)]
pub struct RateArgs {
    /// Star rating from 1 to 5.
    #[arg(short, long, required_unless_present = "list")]
    pub stars: Option<u8>,

    /// Free-text comment.
    #[arg(short, long, default_value = "")]
    pub comment: String,

    /// Would you recommend us?
    #[arg(short, long)]
    pub recommend: bool,

    /// Delivery speed: fast, average, slow.
    #[arg(short, long, default_value = "fast")]
    pub delivery: String,

    /// Show saved feedback instead of adding one.
    #[arg(short, long, conflicts_with = "stars")]
    pub list: bool,
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

        /// File format: toml (commented template) or json.
        #[arg(long, default_value = "toml")]
        format: String,
    },
}
