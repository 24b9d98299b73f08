//! Command handlers for pitycalc CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod enrage;
pub mod pet;
