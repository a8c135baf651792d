//! Care actions: feed, clean, heal, sleep toggle
//!
//! Each action validates applicability first and reports the outcome as a
//! value; expected refusals (dead mon, nothing to clean, already full) are
//! not errors. Successful actions return a new snapshot with exactly one
//! appended care event and a refreshed `last_updated`.

use crate::core::clock::Clock;
use crate::core::config::GameConfig;
use crate::core::types::MonState;
use crate::entity::events::{CareEventKind, MistakeReason};
use crate::entity::mon::Mon;

/// Outcome of a care action
///
/// On failure `mon` is the unchanged input snapshot.
#[derive(Debug, Clone)]
pub struct CareOutcome {
    pub success: bool,
    pub message: String,
    pub mon: Mon,
}

impl CareOutcome {
    fn refused(mon: &Mon, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            mon: mon.clone(),
        }
    }

    fn applied(mon: Mon, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            mon,
        }
    }
}

/// Feed the mon, restoring one hunger tick and gaining weight
pub fn feed(mon: &Mon, config: &GameConfig, clock: &impl Clock) -> CareOutcome {
    if mon.is_dead() {
        return CareOutcome::refused(mon, "Cannot feed a deceased mon.");
    }
    if mon.stats.hunger >= config.stats.max_hunger {
        return CareOutcome::refused(mon, "Mon is already full!");
    }

    let mut fed = mon.clone();
    fed.stats.hunger = (fed.stats.hunger + 1).min(config.stats.max_hunger);
    fed.stats.weight += config.stats.base_weight_gain;
    fed.last_updated = clock.now_ms();
    fed.record(clock.now_ms(), CareEventKind::Feed);

    tracing::debug!(mon = %fed.id, hunger = fed.stats.hunger, "fed");
    CareOutcome::applied(fed, "Mon has been fed!")
}

/// Clear all waste; cures sickness that the waste itself caused
pub fn clean(mon: &Mon, _config: &GameConfig, clock: &impl Clock) -> CareOutcome {
    if mon.is_dead() {
        return CareOutcome::refused(mon, "Cannot clean a deceased mon.");
    }
    if mon.stats.poop_count == 0 {
        return CareOutcome::refused(mon, "There's nothing to clean!");
    }

    let mut cleaned = mon.clone();
    cleaned.stats.poop_count = 0;

    // Sickness reverts only when it was waste-induced; sickness from other
    // sources still needs a heal
    if cleaned.state == MonState::Sick && cleaned.has_mistake(MistakeReason::Waste) {
        cleaned.state = MonState::Normal;
    }

    cleaned.last_updated = clock.now_ms();
    cleaned.record(clock.now_ms(), CareEventKind::Clean);

    tracing::debug!(mon = %cleaned.id, state = ?cleaned.state, "cleaned");
    CareOutcome::applied(cleaned, "Mon has been cleaned!")
}

/// Cure sickness or injury
pub fn heal(mon: &Mon, _config: &GameConfig, clock: &impl Clock) -> CareOutcome {
    if mon.is_dead() {
        return CareOutcome::refused(mon, "Cannot heal a deceased mon.");
    }
    if mon.state != MonState::Sick && mon.state != MonState::Injured {
        return CareOutcome::refused(mon, "Mon doesn't need healing.");
    }

    let mut healed = mon.clone();
    healed.state = MonState::Normal;
    healed.last_updated = clock.now_ms();
    healed.record(clock.now_ms(), CareEventKind::Heal);

    tracing::debug!(mon = %healed.id, "healed");
    CareOutcome::applied(healed, "Mon has been healed!")
}

/// Put the mon to sleep or wake it up
pub fn toggle_sleep(mon: &Mon, _config: &GameConfig, clock: &impl Clock) -> CareOutcome {
    if mon.is_dead() {
        return CareOutcome::refused(mon, "Cannot change sleep state of a deceased mon.");
    }
    if mon.state == MonState::Sick || mon.state == MonState::Injured {
        return CareOutcome::refused(mon, "Cannot change sleep state while mon is sick or injured.");
    }

    let mut toggled = mon.clone();
    toggled.last_updated = clock.now_ms();

    if mon.state == MonState::Sleeping {
        toggled.state = MonState::Normal;
        toggled.record(clock.now_ms(), CareEventKind::SleepEnd);
        tracing::debug!(mon = %toggled.id, "woke up");
        CareOutcome::applied(toggled, "Mon is now awake!")
    } else {
        toggled.state = MonState::Sleeping;
        toggled.record(clock.now_ms(), CareEventKind::SleepStart);
        tracing::debug!(mon = %toggled.id, "fell asleep");
        CareOutcome::applied(toggled, "Mon is now sleeping!")
    }
}
