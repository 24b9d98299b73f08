//! CLI definitions for the enrage command

use clap::Subcommand;

#[derive(Subcommand)]
pub enum EnrageCommand {
    /// Expected kills and uniques streaking from one enrage to another
    Bounds {
        /// Starting enrage (%)
        #[arg(allow_negative_numbers = true)]
        start: i64,

        /// Target enrage (%)
        #[arg(allow_negative_numbers = true)]
        end: i64,
    },

    /// Streak kills from a starting enrage until a unique is expected
    Start {
        /// Starting enrage (%), capped at 4000
        #[arg(allow_negative_numbers = true)]
        start: i64,
    },

    /// Unique chance of a single kill
    Unique {
        /// Enrage (%), capped at 4000
        #[arg(allow_negative_numbers = true)]
        enrage: i64,

        /// Current streak
        #[arg(allow_negative_numbers = true)]
        streak: i64,
    },
}
