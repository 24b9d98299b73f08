//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up pitycalc CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `profiles` - Optional profile table path to set as default
/// * `show` - If true, show current configuration
pub fn handle(profiles: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if let Some(path) = profiles {
        set_profiles(&mut config, path)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match config.get_profiles() {
        Some(path) => println!("Profile table: {}", path.display()),
        None => println!("Profile table: bundled"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn set_profiles(config: &mut Config, path: PathBuf) -> Result<()> {
    // Fail early on a table that would not load later
    pitycalc::ProfileTable::load(&path)?;

    println!("Profile table configured: {}", path.display());
    config.set_profiles(path);
    config.save()?;

    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

fn show_usage() {
    println!("Usage: pitycalc configure --profiles PATH_TO_TABLE.json");
    println!("   or: pitycalc configure --show");
}
