//! Enrage and streak command handlers

use crate::cli::EnrageCommand;
use anyhow::Result;
use pitycalc::query;

/// Handle the enrage command
pub fn handle(command: EnrageCommand) -> Result<()> {
    println!("{}", reply(command)?);
    Ok(())
}

fn reply(command: EnrageCommand) -> Result<String> {
    let reply = match command {
        EnrageCommand::Bounds { start, end } => query::bounds_reply(start, end)?,
        EnrageCommand::Start { start } => query::start_reply(start)?,
        EnrageCommand::Unique { enrage, streak } => query::unique_chance_reply(enrage, streak)?,
    };
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let out = reply(EnrageCommand::Bounds {
            start: 100,
            end: 1000,
        })
        .unwrap();
        assert!(out.contains("Expected number of kills: 78"));
    }

    #[test]
    fn test_bounds_reversed() {
        let err = reply(EnrageCommand::Bounds {
            start: 1000,
            end: 100,
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Start enrage must be less than end enrage."
        );
    }

    #[test]
    fn test_start_clamped() {
        let out = reply(EnrageCommand::Start { start: 4500 }).unwrap();
        assert!(out.starts_with("Using an enrage of 4000 (max chance)."));
    }

    #[test]
    fn test_unique() {
        let out = reply(EnrageCommand::Unique {
            enrage: 0,
            streak: 0,
        })
        .unwrap();
        assert!(out.ends_with("1/1000 without bonus, 1/615 with bonus."));
    }
}
