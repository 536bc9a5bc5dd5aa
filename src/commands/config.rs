//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use cutreview::cli::ConfigCommands;
use cutreview::theme::current_theme;
use cutreview::Config;

pub fn handle(command: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommands::Show => handle_show(config_path),
        ConfigCommands::Path => handle_path(config_path),
        ConfigCommands::Init { force } => handle_init(config_path, force),
    }
}

/// Show the effective configuration as TOML.
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let theme = current_theme();
    print!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print where the config file is read from.
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    println!("{}", path.display());
    Ok(())
}

/// Write a config file with default values.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    let theme = current_theme();
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
