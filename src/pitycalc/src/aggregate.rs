//! Expected unique counts while streaking the enrage encounter
//!
//! Each kill in a streak adds [`STREAK_INCREASE`] enrage, so the `i`-th kill
//! from a starting enrage `s` rolls at `s + 11.58 * i` with streak `i`.

use tracing::{debug, trace};

use crate::escalation::instant_drop_probability;
use crate::format::sig4;

/// Enrage gained per streak kill
pub const STREAK_INCREASE: f64 = 11.58;

/// Enrage of the kill at streak position `streak`
fn level_at(start: f64, streak: u32) -> f64 {
    start + STREAK_INCREASE * f64::from(streak)
}

/// A streak from one enrage to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreakRange {
    pub start: f64,
    pub end: f64,
}

impl StreakRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Kills needed to climb from `start` to `end`
    pub fn streak_total(&self) -> u32 {
        let kills = ((self.end - self.start) / STREAK_INCREASE).ceil();
        if kills <= 0.0 {
            0
        } else {
            kills as u32
        }
    }

    pub fn expectation(&self) -> RangeExpectation {
        expected_count_over_range(self.start, self.end)
    }
}

/// Expected uniques over a streak range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeExpectation {
    pub no_bonus: f64,
    pub with_bonus: f64,
    pub streak_total: u32,
}

impl RangeExpectation {
    /// `(no bonus, with bonus, kills)` with the sums at four significant digits
    pub fn formatted(&self) -> (String, String, u32) {
        (sig4(self.no_bonus), sig4(self.with_bonus), self.streak_total)
    }
}

/// Streak kills until the running expectation passes one unique
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueAttempts {
    pub no_bonus: u32,
    pub with_bonus: u32,
}

/// Sum the per-kill unique chances for every kill of the streak from
/// `start` to `end`. The kill at `start` itself is not counted.
pub fn expected_count_over_range(start: f64, end: f64) -> RangeExpectation {
    let streak_total = StreakRange::new(start, end).streak_total();

    let mut no_bonus = 0.0;
    let mut with_bonus = 0.0;
    for streak in 1..=streak_total {
        let level = level_at(start, streak);
        with_bonus += instant_drop_probability(level, streak, true);
        no_bonus += instant_drop_probability(level, streak, false);
        trace!(streak, level, no_bonus, with_bonus, "streak expectation");
    }

    debug!(start, end, streak_total, no_bonus, with_bonus, "range expectation");
    RangeExpectation {
        no_bonus,
        with_bonus,
        streak_total,
    }
}

/// Number of streak kills, counting from streak 0 at `start`, after which the
/// summed unique chance first exceeds 1, with and without the bonus.
///
/// `start` should already be clamped to
/// [`MAX_ESCALATION`](crate::escalation::MAX_ESCALATION).
pub fn attempts_until_expected_unique(start: f64) -> UniqueAttempts {
    let with_bonus = kills_past_one(start, true);
    let no_bonus = kills_past_one(start, false);

    debug!(start, no_bonus, with_bonus, "kills until unique");
    UniqueAttempts {
        no_bonus,
        with_bonus,
    }
}

fn kills_past_one(start: f64, bonus: bool) -> u32 {
    let mut expected = 0.0;
    let mut streak = 0;
    while expected <= 1.0 {
        expected += instant_drop_probability(level_at(start, streak), streak, bonus);
        streak += 1;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escalation::MAX_ESCALATION;

    #[test]
    fn test_empty_range() {
        let result = expected_count_over_range(300.0, 300.0);
        assert_eq!(result.streak_total, 0);
        assert_eq!(result.no_bonus, 0.0);
        assert_eq!(result.with_bonus, 0.0);
        assert_eq!(
            result.formatted(),
            ("0.000".to_string(), "0.000".to_string(), 0)
        );
    }

    #[test]
    fn test_streak_total_rounds_up() {
        assert_eq!(StreakRange::new(0.0, 11.58).streak_total(), 1);
        assert_eq!(StreakRange::new(0.0, 12.0).streak_total(), 2);
        assert_eq!(StreakRange::new(100.0, 1000.0).streak_total(), 78);
        assert_eq!(StreakRange::new(500.0, 100.0).streak_total(), 0);
    }

    #[test]
    fn test_single_kill_range() {
        // One kill at 11.58 enrage, streak 1
        let result = expected_count_over_range(0.0, 10.0);
        assert_eq!(result.streak_total, 1);
        assert_eq!(result.no_bonus, instant_drop_probability(11.58, 1, false));
        assert_eq!(result.with_bonus, instant_drop_probability(11.58, 1, true));
    }

    #[test]
    fn test_bonus_never_worse() {
        let result = StreakRange::new(100.0, 2000.0).expectation();
        assert!(result.with_bonus >= result.no_bonus);
        assert!(result.no_bonus > 0.0);
    }

    #[test]
    fn test_capped_start() {
        // Every kill is 1/9; nine of them sum to just over 1.0 in f64
        let attempts = attempts_until_expected_unique(MAX_ESCALATION);
        assert_eq!(
            attempts,
            UniqueAttempts {
                no_bonus: 9,
                with_bonus: 9
            }
        );
    }

    #[test]
    fn test_known_start_values() {
        assert_eq!(
            attempts_until_expected_unique(0.0),
            UniqueAttempts {
                no_bonus: 57,
                with_bonus: 56
            }
        );
        assert_eq!(
            attempts_until_expected_unique(1000.0),
            UniqueAttempts {
                no_bonus: 29,
                with_bonus: 29
            }
        );
    }

    #[test]
    fn test_known_range_values() {
        assert_eq!(
            expected_count_over_range(100.0, 1000.0).formatted(),
            ("2.128".to_string(), "2.177".to_string(), 78)
        );
        assert_eq!(
            expected_count_over_range(0.0, 4000.0).formatted(),
            ("28.61".to_string(), "28.72".to_string(), 346)
        );
        assert_eq!(
            expected_count_over_range(0.0, 10.0).formatted(),
            ("0.001590".to_string(), "0.002217".to_string(), 1)
        );
    }

    #[test]
    fn test_matches_manual_sum() {
        let attempts = attempts_until_expected_unique(1000.0);
        let mut sum = 0.0;
        for streak in 0..attempts.no_bonus - 1 {
            sum += instant_drop_probability(level_at(1000.0, streak), streak, false);
        }
        assert!(sum <= 1.0);
        let last = attempts.no_bonus - 1;
        sum += instant_drop_probability(level_at(1000.0, last), last, false);
        assert!(sum > 1.0);
    }
}
