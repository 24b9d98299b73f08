//! Top-level CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enrage::EnrageCommand;
use super::pet::PetCommand;

#[derive(Parser)]
#[command(name = "pitycalc")]
#[command(about = "Pet and unique drop chance calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pet chances with pity thresholds (manual, chance, droprate, list)
    #[command(visible_alias = "p")]
    Pet {
        /// Path to a profile table (uses configured or bundled table if not provided)
        #[arg(long, global = true, env = "PITYCALC_PROFILES")]
        profiles: Option<PathBuf>,

        #[command(subcommand)]
        command: PetCommand,
    },

    /// Enrage and streak unique chances (bounds, start, unique)
    #[command(visible_alias = "e")]
    Enrage {
        #[command(subcommand)]
        command: EnrageCommand,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default profile table path
        #[arg(long)]
        profiles: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
