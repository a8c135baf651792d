//! Aging and death conditions
//!
//! `check_death` evaluates the ordered death conditions against a snapshot;
//! `process_death` performs the terminal transition; `update_age` recomputes
//! the derived age stat. None of these mutate their input.

use crate::core::clock::Clock;
use crate::core::types::{MonState, Stage, MS_PER_DAY};
use crate::entity::events::{CareEventKind, MistakeReason};
use crate::entity::mon::Mon;
use serde::{Deserialize, Serialize};

/// Reasons a mon might die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    Neglect,
    OldAge,
    Sickness,
    Injury,
}

/// Days without feeding (at empty hunger and effort) before neglect death
pub const NEGLECT_GRACE_DAYS: i64 = 3;

/// Days of untreated sickness before it becomes fatal
pub const SICKNESS_FATAL_DAYS: i64 = 5;

/// Maximum age in days for Perfect-stage mons
pub const MAX_AGE_PERFECT: u32 = 50;

/// Maximum age in days for Adult-stage mons
pub const MAX_AGE_ADULT: u32 = 30;

/// Evaluate death conditions against a snapshot
///
/// Conditions are checked in a fixed order and the first match wins:
/// already dead (idempotent re-detection), neglect, old age, prolonged
/// sickness. `None` means the mon is alive; that is the expected outcome,
/// not an error.
pub fn check_death(mon: &Mon, clock: &impl Clock) -> Option<DeathCause> {
    if mon.is_dead() {
        return Some(DeathCause::Neglect);
    }

    // Neglect: both meters empty and no feeding inside the grace window.
    // A mon that has never been fed gets the window dated from creation.
    if mon.stats.hunger == 0 && mon.stats.effort == 0 {
        let fed_at = mon.last_fed().unwrap_or(mon.created_at);
        if clock.now_ms() - fed_at > NEGLECT_GRACE_DAYS * MS_PER_DAY {
            return Some(DeathCause::Neglect);
        }
    }

    // Old age only applies from Adult onward; Perfect mons live longer
    if mon.stage >= Stage::Adult {
        let max_age = if mon.stage == Stage::Perfect {
            MAX_AGE_PERFECT
        } else {
            MAX_AGE_ADULT
        };
        if mon.stats.age > max_age {
            return Some(DeathCause::OldAge);
        }
    }

    // Prolonged sickness, dated from the most recent sickness care mistake
    if mon.state == MonState::Sick {
        if let Some(sick_since) = mon.last_mistake(MistakeReason::Sickness) {
            if clock.now_ms() - sick_since > SICKNESS_FATAL_DAYS * MS_PER_DAY {
                return Some(DeathCause::Sickness);
            }
        }
    }

    None
}

/// Perform the terminal transition to Dead
///
/// Appends a death event carrying the cause. A mon that is already dead is
/// returned unchanged; the death event is only ever recorded once.
pub fn process_death(mon: &Mon, cause: DeathCause, clock: &impl Clock) -> Mon {
    if mon.is_dead() {
        return mon.clone();
    }

    tracing::debug!(mon = %mon.id, ?cause, "mon died");

    let mut dead = mon.clone();
    dead.state = MonState::Dead;
    dead.record(clock.now_ms(), CareEventKind::Death { cause });
    dead
}

/// Recompute the age stat as whole days since creation
///
/// Always recomputed from `created_at`, never incremented, so repeated calls
/// are idempotent. Dead mons are returned unchanged.
pub fn update_age(mon: &Mon, clock: &impl Clock) -> Mon {
    if mon.is_dead() {
        return mon.clone();
    }

    let elapsed = (clock.now_ms() - mon.created_at).max(0);
    let mut updated = mon.clone();
    updated.stats.age = (elapsed / MS_PER_DAY) as u32;
    updated
}
