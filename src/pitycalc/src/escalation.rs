//! Per-kill unique chance for the enrage/streak encounter
//!
//! The chance is `1/N` with
//! `N = floor(10000 / (10 + 0.25 * (enrage + 25 * bonus) + 3 * streak))`,
//! never better than `1/9`.

/// Best achievable denominator
pub const DENOMINATOR_CAP: u32 = 9;

/// Enrage at which the chance is already pinned to the cap
pub const MAX_ESCALATION: f64 = 4000.0;

/// Enrage levels the bonus is worth
const BONUS_LEVELS: f64 = 25.0;

/// Inputs to the drop model for a single kill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscalationQuery {
    pub level: f64,
    pub streak: u32,
    pub bonus: bool,
}

impl EscalationQuery {
    pub fn new(level: f64, streak: u32, bonus: bool) -> Self {
        Self {
            level,
            streak,
            bonus,
        }
    }

    pub fn probability(&self) -> f64 {
        instant_drop_probability(self.level, self.streak, self.bonus)
    }

    pub fn denominator(&self) -> u32 {
        drop_denominator(self.level, self.streak, self.bonus)
    }
}

fn raw_denominator(level: f64, streak: u32, bonus: bool) -> f64 {
    let bonus = if bonus { 1.0 } else { 0.0 };
    (10000.0 / (10.0 + 0.25 * (level + BONUS_LEVELS * bonus) + 3.0 * f64::from(streak))).floor()
}

/// Chance (`0 < p <= 1/9`) of a unique on a kill at `level` enrage with
/// `streak` prior kills.
pub fn instant_drop_probability(level: f64, streak: u32, bonus: bool) -> f64 {
    let denominator = raw_denominator(level, streak, bonus);
    if denominator < f64::from(DENOMINATOR_CAP) {
        return 1.0 / f64::from(DENOMINATOR_CAP);
    }
    1.0 / denominator
}

/// The `N` of the `1/N` chance, already raised to the cap.
pub fn drop_denominator(level: f64, streak: u32, bonus: bool) -> u32 {
    let denominator = raw_denominator(level, streak, bonus);
    if denominator < f64::from(DENOMINATOR_CAP) {
        return DENOMINATOR_CAP;
    }
    // Bounded above by 10000 / 10 on the valid domain
    denominator as u32
}

/// Pin `level` to [`MAX_ESCALATION`], reporting whether it was lowered.
pub fn clamp_escalation(level: f64) -> (f64, bool) {
    if level > MAX_ESCALATION {
        (MAX_ESCALATION, true)
    } else {
        (level, false)
    }
}
