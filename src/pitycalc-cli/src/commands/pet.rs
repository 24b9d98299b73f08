//! Pet chance command handlers

use crate::cli::PetCommand;
use crate::config::Config;
use anyhow::{bail, Context, Result};
use pitycalc::{query, ProfileTable};
use std::path::PathBuf;
use tracing::debug;

/// Handle the pet command
pub fn handle(command: PetCommand, profiles: Option<PathBuf>) -> Result<()> {
    let reply = run(command, || load_table(profiles))?;
    println!("{}", reply);
    Ok(())
}

/// Pick the profile table: explicit path, then configured path, then bundled
fn load_table(explicit: Option<PathBuf>) -> Result<ProfileTable> {
    let path = match explicit {
        Some(path) => Some(path),
        None => Config::load()?.profiles,
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "using profile table");
            ProfileTable::load(&path)
                .with_context(|| format!("Failed to load profile table {}", path.display()))
        }
        None => ProfileTable::bundled().context("Failed to parse bundled profile table"),
    }
}

/// Build the reply; `table` is only invoked for commands that look up bosses
fn run<F>(command: PetCommand, table: F) -> Result<String>
where
    F: FnOnce() -> Result<ProfileTable>,
{
    match command {
        PetCommand::Manual {
            droprate,
            threshold,
            killcount,
        } => Ok(query::manual_reply(droprate, threshold, killcount)?),
        PetCommand::Chance {
            boss,
            killcount,
            hardmode,
        } => {
            let table = table()?;
            let profile = find(&table, &boss)?;
            Ok(query::chance_reply(profile, killcount, hardmode)?)
        }
        PetCommand::Droprate { boss } => {
            let table = table()?;
            let profile = find(&table, &boss.join(" "))?;
            Ok(query::droprate_reply(profile)?)
        }
        PetCommand::List => Ok(list(&table()?)),
    }
}

fn find<'a>(table: &'a ProfileTable, boss: &str) -> Result<&'a pitycalc::PetProfile> {
    match table.find(boss) {
        Some(profile) => Ok(profile),
        None => bail!(
            "Unknown boss '{}'. Try 'pitycalc pet list' to see all bosses.",
            boss
        ),
    }
}

fn list(table: &ProfileTable) -> String {
    let names = table.names();
    let mut out = format!("Known bosses ({}):\n", names.len());
    for name in names {
        out.push_str(&format!("\n  {}", name));
    }
    out
}
