//! CLI definitions for the pet command

use clap::Subcommand;

#[derive(Subcommand)]
pub enum PetCommand {
    /// Chance of no pet yet, from an explicit droprate and threshold
    Manual {
        /// Droprate denominator (1/droprate)
        #[arg(allow_negative_numbers = true)]
        droprate: i64,

        /// Dry kills between pity increases
        #[arg(allow_negative_numbers = true)]
        threshold: i64,

        /// Kills so far
        #[arg(allow_negative_numbers = true)]
        killcount: i64,
    },

    /// Chance of no pet yet from a named boss
    Chance {
        /// Boss name (e.g., "Vorago", "Kalphite King")
        boss: String,

        /// Kills so far
        #[arg(allow_negative_numbers = true)]
        killcount: i64,

        /// Use the hard mode profile
        #[arg(long)]
        hardmode: bool,
    },

    /// Show the droprate and threshold of a boss's pet
    Droprate {
        /// Boss name to look up
        #[arg(required = true, num_args = 1..)]
        boss: Vec<String>,
    },

    /// List all bosses in the profile table
    List,
}
