//! Configuration management commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force, format } => init_config(force, &format, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    ctx.output.kv("loaded from", &ctx.config_dir.display().to_string());

    ctx.output.info("");
    ctx.output.info("[cart]");
    ctx.output.kv(
        "max_quantity_per_item",
        &ctx.config.cart.max_quantity_per_item.to_string(),
    );
    ctx.output
        .kv("seed_demo_items", &ctx.config.cart.seed_demo_items.to_string());

    ctx.output.info("");
    ctx.output.info("[catalog]");
    match ctx.config.catalog.path {
        Some(ref path) => ctx.output.kv("path", path),
        None => ctx.output.kv("path", "(built-in demo catalog)"),
    }

    ctx.output.info("");
    ctx.output.info("[feedback]");
    ctx.output.kv("path", &ctx.config.feedback.path);

    Ok(())
}

async fn init_config(force: bool, format: &str, ctx: &Context) -> Result<()> {
    let config_path = init_target(&ctx.cwd, format)?;

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if format == "json" {
        CliConfig::default().save(&config_path)?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn init_target(dir: &Path, format: &str) -> Result<PathBuf> {
    let name = match format {
        "toml" => CONFIG_FILE_NAMES[0],
        "json" => CONFIG_FILE_NAMES[2],
        other => bail!("Unknown config format: {} (use toml or json)", other),
    };
    Ok(dir.join(name))
}
