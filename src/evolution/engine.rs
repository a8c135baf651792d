//! Eligibility evaluation and stage advancement

use crate::core::clock::Clock;
use crate::entity::events::EvolutionEvent;
use crate::entity::mon::Mon;
use crate::evolution::paths::{EvolutionPath, EvolutionTable, Requirement, SpecialCondition};

/// Hour at which night-only evolutions become available
const NIGHT_EVOLUTION_START_HOUR: u32 = 20;
/// Hour at which night-only evolutions close again
const NIGHT_EVOLUTION_END_HOUR: u32 = 6;

/// Find the evolution path the mon qualifies for, if any
///
/// Dead mons never evolve. Candidate paths for the current species are
/// considered in descending priority (stable, so equal priorities keep
/// table order) and the first path whose requirements all hold wins.
/// `None` is the expected "nothing happens" outcome.
pub fn check_eligibility<'a>(
    mon: &Mon,
    table: &'a EvolutionTable,
    clock: &impl Clock,
) -> Option<&'a EvolutionPath> {
    if mon.is_dead() {
        return None;
    }

    let mut candidates: Vec<&EvolutionPath> = table.paths_from(&mon.species).collect();
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

    candidates
        .into_iter()
        .find(|path| meets_all_requirements(mon, &path.requirements, clock))
}

/// Whether every requirement of a path holds (requirements are conjunctive)
pub fn meets_all_requirements(mon: &Mon, requirements: &[Requirement], clock: &impl Clock) -> bool {
    requirements.iter().all(|req| match *req {
        Requirement::MinAge(days) => mon.stats.age >= days,
        Requirement::MaxAge(days) => mon.stats.age <= days,
        Requirement::MinEffort(hearts) => mon.stats.effort >= hearts,
        Requirement::MaxCareMistakes(count) => mon.stats.care_mistakes <= count,
        Requirement::MinBp(bp) => mon.stats.bp >= bp,
        Requirement::Special(condition) => meets_special_condition(mon, condition, clock),
    })
}

fn meets_special_condition(mon: &Mon, condition: SpecialCondition, clock: &impl Clock) -> bool {
    match condition {
        SpecialCondition::PerfectCare => mon.stats.care_mistakes == 0 && mon.stats.effort == 3,
        SpecialCondition::NightEvolution => {
            let hour = clock.hour_of_day();
            hour >= NIGHT_EVOLUTION_START_HOUR || hour < NIGHT_EVOLUTION_END_HOUR
        }
    }
}

/// Advance the mon along the given path
///
/// Stage moves one step (saturating at Perfect), species becomes the path's
/// target, and an evolution event is appended. No other stats change.
pub fn evolve(mon: &Mon, path: &EvolutionPath, clock: &impl Clock) -> Mon {
    let new_stage = mon.stage.next();

    tracing::debug!(
        mon = %mon.id,
        from = %mon.species,
        to = %path.to_species,
        stage = ?new_stage,
        "mon evolved"
    );

    let mut evolved = mon.clone();
    evolved.species = path.to_species.clone();
    evolved.stage = new_stage;
    evolved.evolution_history.push(EvolutionEvent {
        timestamp: clock.now_ms(),
        from_species: mon.species.clone(),
        to_species: path.to_species.clone(),
        stage: new_stage,
    });
    evolved
}
