//! Query handlers: validate raw input, run the model, build the reply
//!
//! Inputs arrive as plain integers straight from a command parser, so they
//! may be negative or out of order. Everything below this module assumes
//! valid input; everything here checks it.

use thiserror::Error;

use crate::aggregate::{attempts_until_expected_unique, expected_count_over_range};
use crate::escalation::{clamp_escalation, drop_denominator, MAX_ESCALATION};
use crate::format::sig4;
use crate::pity::DropProfile;
use crate::profiles::PetProfile;

/// Rejected query input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid droprate (use the denominator).")]
    InvalidDroprate,

    #[error("Invalid threshold.")]
    InvalidThreshold,

    #[error("Invalid killcount.")]
    InvalidAttempts,

    #[error("Start enrage must be less than end enrage.")]
    InvalidRange,

    #[error("Invalid enrage.")]
    InvalidEnrage,

    #[error("Invalid streak.")]
    InvalidStreak,

    #[error("End enrage must be at most {}.", MAX_ESCALATION)]
    RangeTooWide,

    #[error("No pet information listed for {0}.")]
    NoPetInfo(String),

    #[error(
        "Droprate 1/{droprate} with threshold {threshold} gives no valid chance \
         after {killcount} kills."
    )]
    ChanceOutOfRange {
        droprate: u32,
        threshold: u32,
        killcount: u32,
    },
}

fn attempts(raw: i64) -> Result<u32, QueryError> {
    u32::try_from(raw).map_err(|_| QueryError::InvalidAttempts)
}

fn enrage(raw: i64) -> Result<f64, QueryError> {
    if raw < 0 {
        return Err(QueryError::InvalidEnrage);
    }
    Ok(raw as f64)
}

/// Percentage chance of no drop, rejected when the model leaves `[0, 1]`.
///
/// Droprates below 9 drive the per-kill survival to zero or below once the
/// pity step passes the droprate, which yields NaN or negative products.
fn no_drop_percent(profile: &DropProfile, killcount: u32) -> Result<String, QueryError> {
    let chance = profile.survival(killcount);
    if !(0.0..=1.0).contains(&chance) {
        return Err(QueryError::ChanceOutOfRange {
            droprate: profile.droprate,
            threshold: profile.threshold,
            killcount,
        });
    }
    Ok(sig4(chance * 100.0))
}

/// Notice prepended when an enrage above the cap is lowered
fn clamp_notice(level: f64) -> (f64, String) {
    let (level, clamped) = clamp_escalation(level);
    let notice = if clamped {
        format!("Using an enrage of {} (max chance).\n", MAX_ESCALATION)
    } else {
        String::new()
    };
    (level, notice)
}

/// Pet chance for an explicit droprate, threshold and killcount
pub fn manual_reply(droprate: i64, threshold: i64, killcount: i64) -> Result<String, QueryError> {
    let profile = DropProfile::new(droprate, threshold)?;
    let killcount = attempts(killcount)?;
    Ok(format!(
        "Your chance of not getting the pet by now is: {}%",
        no_drop_percent(&profile, killcount)?
    ))
}

/// Droprate and threshold of a boss's pet, for every mode it has
pub fn droprate_reply(profile: &PetProfile) -> Result<String, QueryError> {
    let normal = profile
        .normal
        .ok_or_else(|| QueryError::NoPetInfo(profile.name.clone()))?;

    if profile.escalation {
        let enraged = profile.hardmode.unwrap_or(normal);
        let pet = profile.pet_name();
        return Ok(format!(
            "With <100% enrage, {pet} has droprate 1/{} and threshold {}. \
             With >100% enrage, {pet} has droprate 1/{} and threshold {}.",
            normal.droprate, normal.threshold, enraged.droprate, enraged.threshold
        ));
    }

    let mut reply = format!(
        "The pet from {} has droprate 1/{} and threshold {}.",
        profile.name, normal.droprate, normal.threshold
    );
    if let Some(hardmode) = profile.hardmode {
        reply.push_str(&format!(
            " The pet from hardmode {} has droprate 1/{} and threshold {}.",
            profile.name, hardmode.droprate, hardmode.threshold
        ));
    }
    Ok(reply)
}

/// Pet chance for a named boss after `killcount` kills.
///
/// Enrage bosses always use their above-100% profile. Asking for hardmode on
/// a boss without one falls back to normal mode with a notice.
pub fn chance_reply(
    profile: &PetProfile,
    killcount: i64,
    hardmode: bool,
) -> Result<String, QueryError> {
    let normal = profile
        .normal
        .ok_or_else(|| QueryError::NoPetInfo(profile.name.clone()))?;
    let killcount = attempts(killcount)?;

    if profile.escalation {
        let enraged = profile.hardmode.unwrap_or(normal);
        return Ok(format!(
            "Your chance of not getting {} by now is: {}%",
            profile.pet_name(),
            no_drop_percent(&enraged, killcount)?
        ));
    }

    match (hardmode, profile.hardmode) {
        (true, Some(hardmode)) => Ok(format!(
            "Your chance of not getting the pet by now in hardmode is: {}%",
            no_drop_percent(&hardmode, killcount)?
        )),
        (true, None) => Ok(format!(
            "No difference in pet chance, using normal mode.\n\
             Your chance of not getting the pet by now is: {}%",
            no_drop_percent(&normal, killcount)?
        )),
        (false, _) => Ok(format!(
            "Your chance of not getting the pet by now is: {}%",
            no_drop_percent(&normal, killcount)?
        )),
    }
}

/// Expected kills and uniques when streaking from `start` to `end` enrage
pub fn bounds_reply(start: i64, end: i64) -> Result<String, QueryError> {
    if start > end {
        return Err(QueryError::InvalidRange);
    }
    // Past the cap every kill is already 1/9; this also keeps the streak
    // count well inside u32
    if end as f64 > MAX_ESCALATION {
        return Err(QueryError::RangeTooWide);
    }
    let expectation = expected_count_over_range(enrage(start)?, enrage(end)?);
    let (no_bonus, with_bonus, kills) = expectation.formatted();
    Ok(format!(
        "Streaking from {start}% to {end}%:\n\
         Expected number of kills: {kills}\n\
         Expected uniques: {no_bonus} without bonus, {with_bonus} with bonus."
    ))
}

/// Streak kills from `start` enrage until a unique is expected
pub fn start_reply(start: i64) -> Result<String, QueryError> {
    let (start, mut reply) = clamp_notice(enrage(start)?);
    let kills = attempts_until_expected_unique(start);
    reply.push_str(&format!(
        "Streaking from {start}%:\n\
         Expected kills until unique: {} without bonus, {} with bonus.",
        kills.no_bonus, kills.with_bonus
    ));
    Ok(reply)
}

/// Unique chance of a single kill at `level` enrage and `streak`
pub fn unique_chance_reply(level: i64, streak: i64) -> Result<String, QueryError> {
    let streak = u32::try_from(streak).map_err(|_| QueryError::InvalidStreak)?;
    let (level, mut reply) = clamp_notice(enrage(level)?);
    reply.push_str(&format!(
        "A kill with enrage {level}% and streak {streak}:\n\
         Unique chance: 1/{} without bonus, 1/{} with bonus.",
        drop_denominator(level, streak, false),
        drop_denominator(level, streak, true)
    ));
    Ok(reply)
}
