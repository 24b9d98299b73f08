//! Pity-threshold survival model
//!
//! A pet with droprate `1/d` and threshold `t` starts at `1/d` per kill. Every
//! `t` dry kills the numerator grows by one (`2/d`, `3/d`, ...) until it
//! reaches `9/d`, after which it stays fixed. The chance of still having no
//! pet after `n` kills is the product of the survival chance of every
//! threshold block walked through.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::format::sig4;
use crate::query::QueryError;

/// Highest pity step; once reached, all remaining kills roll at `9/d`
pub const MAX_PITY_STEP: u32 = 9;

/// Droprate and pity threshold for one boss/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropProfile {
    /// Denominator of the base chance (`1/droprate`)
    pub droprate: u32,
    /// Dry kills between pity increases
    pub threshold: u32,
}

impl DropProfile {
    /// Build a profile from raw, possibly out-of-range integers
    pub fn new(droprate: i64, threshold: i64) -> Result<Self, QueryError> {
        let droprate = u32::try_from(droprate)
            .ok()
            .filter(|&d| d >= 1)
            .ok_or(QueryError::InvalidDroprate)?;
        let threshold = u32::try_from(threshold).map_err(|_| QueryError::InvalidThreshold)?;
        Ok(Self {
            droprate,
            threshold,
        })
    }

    /// Fraction of players still without the pet after `attempts` kills
    pub fn survival(&self, attempts: u32) -> f64 {
        survival_probability(self.droprate, self.threshold, attempts)
    }

    /// [`survival`](Self::survival) as a four-digit percentage string
    pub fn no_drop_chance(&self, attempts: u32) -> String {
        probability_of_no_drop(self.droprate, self.threshold, attempts)
    }
}

/// Probability (0..=1) of not having obtained the drop after `attempts` kills.
///
/// `droprate` must be at least 1. With `threshold == 0` every block is empty,
/// so the rate climbs straight to `9/droprate` before any kill is counted.
pub fn survival_probability(droprate: u32, threshold: u32, attempts: u32) -> f64 {
    let chance = survive_from(f64::from(droprate), threshold, attempts, 1);
    debug!(droprate, threshold, attempts, chance, "pity survival");
    chance
}

/// Percentage chance of not having the drop after `attempts` kills, rendered
/// with four significant digits (`"60.50"`).
pub fn probability_of_no_drop(droprate: u32, threshold: u32, attempts: u32) -> String {
    sig4(survival_probability(droprate, threshold, attempts) * 100.0)
}

// Kept recursive so the product associates as f1 * (f2 * (... * last)); an
// accumulating loop would multiply in the other order and drift in the last
// bits.
fn survive_from(droprate: f64, threshold: u32, remaining: u32, step: u32) -> f64 {
    let per_kill = 1.0 - f64::from(step) / droprate;

    if remaining < threshold || step == MAX_PITY_STEP {
        return per_kill.powf(f64::from(remaining));
    }

    let block = per_kill.powf(f64::from(threshold));
    trace!(step, remaining, block, "pity block");
    block * survive_from(droprate, threshold, remaining - threshold, step + 1)
}
