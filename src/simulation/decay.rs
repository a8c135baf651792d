//! Time decay processor
//!
//! Turns elapsed wall-clock time into stat changes: hunger and effort loss,
//! waste generation, HP regeneration, night-time tiredness, and waste-induced
//! sickness. Pure over the input snapshot; elapsed time is always passed in,
//! never read from a hidden clock (the injected clock supplies only the
//! event timestamps and the hour of day).
//!
//! Sub-rules apply in a fixed order within one call, each reading the
//! snapshot as mutated by the previous rule.

use crate::core::clock::Clock;
use crate::core::config::GameConfig;
use crate::core::types::{MonState, Stage, MS_PER_HOUR};
use crate::entity::events::{CareEventKind, MistakeReason};
use crate::entity::mon::Mon;

/// Decay units accrued over `hours` at a rate of one unit per `interval_hours`
///
/// Floored, so partial intervals carry nothing. Saturating float-to-int casts
/// keep absurdly large elapsed times from wrapping.
fn units_elapsed(hours: f64, interval_hours: f64) -> u32 {
    (hours / interval_hours).floor() as u32
}

/// Apply elapsed time to a snapshot
///
/// Returns a new snapshot; the input is untouched. Dead mons and
/// non-positive elapsed times return the snapshot unchanged (zero-elapsed
/// calls do not even refresh `last_updated`, making re-delivery of the same
/// tick safe).
pub fn process_elapsed(
    mon: &Mon,
    elapsed_ms: i64,
    config: &GameConfig,
    clock: &impl Clock,
) -> Mon {
    if mon.is_dead() || elapsed_ms <= 0 {
        return mon.clone();
    }

    let hours = elapsed_ms as f64 / MS_PER_HOUR as f64;
    let time = &config.time;
    let stats_cfg = &config.stats;
    let mut next = mon.clone();

    // Hunger empties one tick per interval
    let hunger_lost = units_elapsed(hours, time.hunger_decay_interval_hours);
    next.stats.hunger = next.stats.hunger.saturating_sub(hunger_lost.min(255) as u8);

    // Waste accumulates, capped at the sickness threshold; eggs produce none
    if next.stage > Stage::Egg {
        let piles = units_elapsed(hours, time.waste_generation_interval_hours);
        next.stats.poop_count = next
            .stats
            .poop_count
            .saturating_add(piles.min(255) as u8)
            .min(stats_cfg.max_waste);
    }

    // Empty stomach starts draining effort; losing any logs a care mistake
    if next.stats.hunger == 0 {
        let effort_lost = units_elapsed(hours, time.effort_decay_interval_hours);
        if effort_lost > 0 {
            next.stats.effort = next.stats.effort.saturating_sub(effort_lost.min(255) as u8);
            next.stats.care_mistakes += 1;
            next.record(
                clock.now_ms(),
                CareEventKind::CareMistake {
                    reason: MistakeReason::Hunger,
                },
            );
        }
    }

    // HP regenerates while below the cap
    if next.stats.hp < stats_cfg.max_hp {
        let regen_per_hour = time.hp_regen_amount as f64 / time.hp_regen_interval_hours;
        let regained = (hours * regen_per_hour).floor() as u32;
        next.stats.hp = next
            .stats
            .hp
            .saturating_add(regained.min(255) as u8)
            .min(stats_cfg.max_hp);
    }

    // Night makes an awake mon tired; sickness, injury and sleep take
    // precedence and are left alone
    if time.is_night(clock.hour_of_day()) && next.state.accepts_tiredness() {
        next.state = MonState::Tired;
    }

    // A full waste screen triggers sickness, logged as a waste care mistake
    // so the clean action can later recognize the sickness as waste-induced
    if next.stats.poop_count >= stats_cfg.max_waste && next.state != MonState::Sick {
        tracing::debug!(mon = %next.id, "waste threshold reached, mon fell sick");
        next.state = MonState::Sick;
        next.record(
            clock.now_ms(),
            CareEventKind::CareMistake {
                reason: MistakeReason::Waste,
            },
        );
    }

    next.last_updated = clock.now_ms();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::types::{MonId, MS_PER_HOUR};

    fn hatched(name: &str) -> Mon {
        let mut mon = Mon::new(MonId::new(), name, "BasicBaby", 0);
        mon.stage = Stage::Baby;
        mon
    }

    #[test]
    fn test_zero_elapsed_is_identity() {
        let mon = hatched("Pip");
        let clock = FixedClock::at(999, 23); // night, but zero elapsed
        let config = GameConfig::default();

        assert_eq!(process_elapsed(&mon, 0, &config, &clock), mon);
        assert_eq!(process_elapsed(&mon, -5_000, &config, &clock), mon);
    }

    #[test]
    fn test_hunger_decays_by_interval() {
        let mon = hatched("Pip");
        let clock = FixedClock::at(0, 12);
        let config = GameConfig::default();

        // 5h interval: 4h loses nothing, 11h loses two ticks
        let after = process_elapsed(&mon, 4 * MS_PER_HOUR, &config, &clock);
        assert_eq!(after.stats.hunger, 3);

        let after = process_elapsed(&mon, 11 * MS_PER_HOUR, &config, &clock);
        assert_eq!(after.stats.hunger, 1);
    }

    #[test]
    fn test_eggs_produce_no_waste() {
        let egg = Mon::new(MonId::new(), "Shell", "BasicEgg", 0);
        let clock = FixedClock::at(0, 12);
        let config = GameConfig::default();

        let after = process_elapsed(&egg, 10 * MS_PER_HOUR, &config, &clock);
        assert_eq!(after.stats.poop_count, 0);
    }

    #[test]
    fn test_effort_loss_logs_one_mistake_per_call() {
        let mut mon = hatched("Pip");
        mon.stats.hunger = 0;
        let clock = FixedClock::at(0, 12);
        let config = GameConfig::default();

        // Two full effort intervals in one call: two hearts lost, one mistake
        let after = process_elapsed(&mon, 8 * MS_PER_HOUR, &config, &clock);
        assert_eq!(after.stats.effort, 1);
        assert_eq!(after.stats.care_mistakes, 1);
        assert_eq!(after.last_mistake(MistakeReason::Hunger), Some(0));
    }

    #[test]
    fn test_hp_regen_capped_at_max() {
        let mut mon = hatched("Pip");
        mon.stats.hp = 98;
        let clock = FixedClock::at(0, 12);
        let config = GameConfig::default();

        // 2.5 HP/hour for 4 hours would be 10, capped at 100
        let after = process_elapsed(&mon, 4 * MS_PER_HOUR, &config, &clock);
        assert_eq!(after.stats.hp, 100);
    }

    #[test]
    fn test_night_sets_tired_but_not_while_sleeping() {
        let mut mon = hatched("Pip");
        let night = FixedClock::at(0, 23);
        let config = GameConfig::default();

        let after = process_elapsed(&mon, MS_PER_HOUR, &config, &night);
        assert_eq!(after.state, MonState::Tired);

        mon.state = MonState::Sleeping;
        let after = process_elapsed(&mon, MS_PER_HOUR, &config, &night);
        assert_eq!(after.state, MonState::Sleeping);
    }

    #[test]
    fn test_waste_threshold_triggers_sickness_with_mistake() {
        let mut mon = hatched("Pip");
        mon.stats.poop_count = 3;
        let clock = FixedClock::at(0, 12);
        let config = GameConfig::default();

        // Exactly one waste interval (2.5h)
        let after = process_elapsed(&mon, (2.5 * MS_PER_HOUR as f64) as i64, &config, &clock);
        assert_eq!(after.stats.poop_count, 4);
        assert_eq!(after.state, MonState::Sick);
        assert!(after.has_mistake(MistakeReason::Waste));
        // Waste mistakes are logged but not counted
        assert_eq!(after.stats.care_mistakes, 0);
    }

    #[test]
    fn test_dead_mon_unchanged() {
        let mut mon = hatched("Pip");
        mon.state = MonState::Dead;
        let clock = FixedClock::at(0, 12);
        let config = GameConfig::default();

        let after = process_elapsed(&mon, 100 * MS_PER_HOUR, &config, &clock);
        assert_eq!(after, mon);
    }
}
