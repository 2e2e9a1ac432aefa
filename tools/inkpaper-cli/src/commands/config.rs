//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.line("");
    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv(
        "catalog",
        config.store.catalog.as_deref().unwrap_or("(built-in)"),
    );

    ctx.output.line("");
    ctx.output.info("[shipping]");
    ctx.output.kv("free_threshold", &config.shipping.free_threshold.to_string());
    ctx.output.kv("flat_rate", &config.shipping.flat_rate.to_string());

    ctx.output.line("");
    ctx.output.info("[advisor]");
    ctx.output.kv("assistant_name", &config.advisor.assistant_name);
    ctx.output.kv("model", &config.advisor.model);
    ctx.output.kv("temperature", &config.advisor.temperature.to_string());
    ctx.output.kv("endpoint", &config.advisor.endpoint);
    let key_state = if config.gemini().api_key.is_some() {
        "set"
    } else {
        "not set"
    };
    ctx.output.kv(
        "api_key_env",
        &format!("{} ({})", config.advisor.api_key_env, key_state),
    );

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
