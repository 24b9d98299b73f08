//! CLI argument definitions for pitycalc
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod app;
mod enrage;
mod pet;

pub use app::{Cli, Commands};
pub use enrage::EnrageCommand;
pub use pet::PetCommand;
