mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::*;

fn main() -> Result<()> {
    // RUST_LOG=pitycalc=debug shows the per-block and per-streak terms
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pet { profiles, command } => {
            commands::pet::handle(command, profiles)?;
        }

        Commands::Enrage { command } => {
            commands::enrage::handle(command)?;
        }

        Commands::Configure { profiles, show } => {
            commands::configure::handle(profiles, show)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_input_for_validation() {
        let cli = Cli::try_parse_from(["pitycalc", "pet", "manual", "-5", "10", "20"]).unwrap();
        match cli.command {
            Commands::Pet {
                command: PetCommand::Manual { droprate, .. },
                ..
            } => assert_eq!(droprate, -5),
            _ => panic!("expected pet manual"),
        }
    }

    #[test]
    fn test_parses_enrage_alias() {
        let cli = Cli::try_parse_from(["pitycalc", "e", "bounds", "100", "1000"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Enrage {
                command: EnrageCommand::Bounds {
                    start: 100,
                    end: 1000
                }
            }
        ));
    }

    #[test]
    fn test_parses_hardmode_flag() {
        let cli =
            Cli::try_parse_from(["pitycalc", "pet", "chance", "Raksha", "120", "--hardmode"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Pet {
                command: PetCommand::Chance { hardmode: true, killcount: 120, .. },
                ..
            }
        ));
    }
}
