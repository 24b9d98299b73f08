//! # pitycalc
//!
//! Drop chance calculations for boss pets with pity thresholds and for the
//! enrage/streak unique table.
//!
//! This library provides functionality to:
//! - Compute the chance of still not having a pet after N kills, when the
//!   per-kill chance steps up every `threshold` dry kills
//! - Compute the per-kill unique chance from enrage, streak and bonus
//! - Sum expected uniques over a streak and find the kill at which one
//!   unique is expected
//! - Validate raw query input and build reply text
//!
//! Every calculation is a pure function of its arguments.
//!
//! ## Example
//!
//! ```
//! // 50 kills on a 1/100 pet with a threshold of 50
//! assert_eq!(pitycalc::probability_of_no_drop(100, 50, 50), "60.50");
//!
//! // A fresh kill at 0% enrage
//! assert_eq!(pitycalc::instant_drop_probability(0.0, 0, false), 1.0 / 1000.0);
//!
//! // Streaking from 100% to 1000% enrage
//! let range = pitycalc::expected_count_over_range(100.0, 1000.0);
//! assert_eq!(range.streak_total, 78);
//! ```

pub mod aggregate;
pub mod escalation;
pub mod format;
pub mod pity;
pub mod profiles;
pub mod query;

// Re-export commonly used items
#[doc(inline)]
pub use aggregate::{
    attempts_until_expected_unique, expected_count_over_range, RangeExpectation, StreakRange,
    UniqueAttempts, STREAK_INCREASE,
};
#[doc(inline)]
pub use escalation::{
    clamp_escalation, drop_denominator, instant_drop_probability, EscalationQuery,
    DENOMINATOR_CAP, MAX_ESCALATION,
};
#[doc(inline)]
pub use format::sig4;
#[doc(inline)]
pub use pity::{probability_of_no_drop, survival_probability, DropProfile, MAX_PITY_STEP};
#[doc(inline)]
pub use profiles::{PetProfile, ProfileError, ProfileTable};
#[doc(inline)]
pub use query::QueryError;
