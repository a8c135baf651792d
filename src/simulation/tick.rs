//! Tick pipeline - orchestrates time-driven updates
//!
//! One tick covers the elapsed real time since the caller last ran it
//! (typically on app resume): decay -> age -> death check -> evolution check,
//! each stage consuming the previous stage's snapshot. Care actions and
//! training results are applied separately, outside the pipeline.
//!
//! Re-invoking with zero or negative elapsed time is safe; decay amounts
//! floor to zero and the remaining stages are idempotent.

use crate::core::clock::Clock;
use crate::core::config::GameConfig;
use crate::core::types::{MonState, Species, Stage};
use crate::entity::mon::Mon;
use crate::evolution::{self, EvolutionTable};
use crate::lifecycle::{self, DeathCause};
use crate::simulation::decay::process_elapsed;

/// Notable transitions that occurred during a tick, for caller display
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// Night caught the mon awake
    BecameTired,
    /// Waste buildup made the mon sick
    FellSick,
    Died {
        cause: DeathCause,
    },
    Evolved {
        from_species: Species,
        to_species: Species,
        stage: Stage,
    },
}

/// Run one tick of the time-driven pipeline
///
/// Returns the new snapshot plus the transitions that occurred. A dead mon
/// passes through untouched.
pub fn run_tick(
    mon: &Mon,
    elapsed_ms: i64,
    config: &GameConfig,
    paths: &EvolutionTable,
    clock: &impl Clock,
) -> (Mon, Vec<TickEvent>) {
    let mut events = Vec::new();

    if mon.is_dead() {
        return (mon.clone(), events);
    }

    // 1. Stat decay from elapsed time
    let decayed = process_elapsed(mon, elapsed_ms, config, clock);
    if decayed.state == MonState::Sick && mon.state != MonState::Sick {
        events.push(TickEvent::FellSick);
    } else if decayed.state == MonState::Tired && mon.state != MonState::Tired {
        events.push(TickEvent::BecameTired);
    }

    // 2. Age is derived, recomputed every tick
    let aged = lifecycle::update_age(&decayed, clock);

    // 3. Death ends the pipeline; nothing evolves posthumously
    if let Some(cause) = lifecycle::check_death(&aged, clock) {
        let dead = lifecycle::process_death(&aged, cause, clock);
        events.push(TickEvent::Died { cause });
        return (dead, events);
    }

    // 4. Evolution, at most one step per tick
    if let Some(path) = evolution::check_eligibility(&aged, paths, clock) {
        let evolved = evolution::evolve(&aged, path, clock);
        events.push(TickEvent::Evolved {
            from_species: aged.species.clone(),
            to_species: evolved.species.clone(),
            stage: evolved.stage,
        });
        return (evolved, events);
    }

    (aged, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::types::{MonId, MS_PER_DAY, MS_PER_HOUR};

    #[test]
    fn test_dead_mon_passes_through() {
        let mut mon = Mon::new(MonId::new(), "Pip", "BasicBaby", 0);
        mon.state = MonState::Dead;
        let clock = FixedClock::at(MS_PER_DAY, 12);

        let (after, events) = run_tick(
            &mon,
            MS_PER_DAY,
            &GameConfig::default(),
            &EvolutionTable::with_defaults(),
            &clock,
        );
        assert_eq!(after, mon);
        assert!(events.is_empty());
    }

    #[test]
    fn test_egg_hatches_after_a_day() {
        // One day old, ticked an hour after the last check-in
        let mon = Mon::new(MonId::new(), "Pip", "BasicEgg", 0);
        let clock = FixedClock::at(MS_PER_DAY + MS_PER_HOUR, 12);

        let (after, events) = run_tick(
            &mon,
            MS_PER_HOUR,
            &GameConfig::default(),
            &EvolutionTable::with_defaults(),
            &clock,
        );
        assert_eq!(after.species, "BasicBaby");
        assert_eq!(after.stage, Stage::Baby);
        assert!(events.contains(&TickEvent::Evolved {
            from_species: "BasicEgg".into(),
            to_species: "BasicBaby".into(),
            stage: Stage::Baby,
        }));
    }
}
