//! Property-based invariant checks over randomized inputs
//!
//! Whatever elapsed time or action sequence hits a snapshot, stats stay in
//! bounds, death stays terminal, and stages never move backwards.

use proptest::prelude::*;

use monsim::care;
use monsim::core::clock::FixedClock;
use monsim::core::config::GameConfig;
use monsim::core::types::{MonId, MonState, Stage, MS_PER_HOUR};
use monsim::entity::mon::Mon;
use monsim::evolution::EvolutionTable;
use monsim::simulation::decay::process_elapsed;
use monsim::simulation::tick::run_tick;
use monsim::training::{apply_result, GameCatalog};

fn arb_stage() -> impl Strategy<Value = Stage> {
    prop_oneof![
        Just(Stage::Egg),
        Just(Stage::Baby),
        Just(Stage::Child),
        Just(Stage::Teen),
        Just(Stage::Adult),
        Just(Stage::Perfect),
    ]
}

fn arb_state() -> impl Strategy<Value = MonState> {
    prop_oneof![
        Just(MonState::Normal),
        Just(MonState::Hungry),
        Just(MonState::Tired),
        Just(MonState::Sleeping),
        Just(MonState::Sick),
        Just(MonState::Injured),
    ]
}

/// A live mon with stats anywhere inside the legal ranges
fn arb_mon() -> impl Strategy<Value = Mon> {
    (
        arb_stage(),
        arb_state(),
        0u8..=3,
        0u8..=3,
        0u8..=100,
        0u8..=4,
        0u32..=500,
    )
        .prop_map(|(stage, state, hunger, effort, hp, poop, bp)| {
            let mut mon = Mon::new(MonId::new(), "Prop", "BasicChild", 0);
            mon.stage = stage;
            mon.state = state;
            mon.stats.hunger = hunger;
            mon.stats.effort = effort;
            mon.stats.hp = hp;
            mon.stats.poop_count = poop;
            mon.stats.bp = bp;
            mon
        })
}

proptest! {
    #[test]
    fn prop_decay_keeps_stats_in_bounds(
        mon in arb_mon(),
        elapsed_hours in 0i64..=2_000,
        hour in 0u32..24,
    ) {
        let config = GameConfig::default();
        let clock = FixedClock::at(elapsed_hours * MS_PER_HOUR, hour);

        let after = process_elapsed(&mon, elapsed_hours * MS_PER_HOUR, &config, &clock);

        prop_assert!(after.stats.hunger <= config.stats.max_hunger);
        prop_assert!(after.stats.effort <= config.stats.max_effort);
        prop_assert!(after.stats.hp <= config.stats.max_hp);
        prop_assert!(after.stats.poop_count <= config.stats.max_waste);
        // Elapsed time never feeds or rests a mon
        prop_assert!(after.stats.hunger <= mon.stats.hunger);
        prop_assert!(after.stats.effort <= mon.stats.effort);
    }

    #[test]
    fn prop_zero_elapsed_is_identity(mon in arb_mon(), hour in 0u32..24) {
        let config = GameConfig::default();
        let clock = FixedClock::at(10 * MS_PER_HOUR, hour);

        let after = process_elapsed(&mon, 0, &config, &clock);
        prop_assert_eq!(after, mon);
    }

    #[test]
    fn prop_death_is_terminal_under_any_sequence(
        mon in arb_mon(),
        ops in prop::collection::vec(0u8..5, 1..20),
        elapsed_hours in 1i64..=200,
    ) {
        let config = GameConfig::default();
        let paths = EvolutionTable::with_defaults();
        let catalog = GameCatalog::with_defaults();
        let clock = FixedClock::at(elapsed_hours * MS_PER_HOUR, 12);

        let mut dead = mon.clone();
        dead.state = MonState::Dead;

        let mut current = dead.clone();
        for op in ops {
            current = match op {
                0 => run_tick(&current, elapsed_hours * MS_PER_HOUR, &config, &paths, &clock).0,
                1 => care::feed(&current, &config, &clock).mon,
                2 => care::clean(&current, &config, &clock).mon,
                3 => care::heal(&current, &config, &clock).mon,
                _ => apply_result(&current, "rhythm_tap", 40, &catalog, &clock),
            };
            prop_assert_eq!(current.state, MonState::Dead);
        }
        // Nothing about the snapshot moved either
        prop_assert_eq!(current, dead);
    }

    #[test]
    fn prop_stage_never_decreases_across_ticks(
        mon in arb_mon(),
        hours in prop::collection::vec(1i64..=48, 1..10),
    ) {
        let config = GameConfig::default();
        let paths = EvolutionTable::with_defaults();

        let mut current = mon;
        let mut now = 0i64;
        for h in hours {
            now += h * MS_PER_HOUR;
            let clock = FixedClock::at(now, ((now / MS_PER_HOUR) % 24) as u32);
            let (next, _) = run_tick(&current, h * MS_PER_HOUR, &config, &paths, &clock);
            prop_assert!(next.stage >= current.stage);
            current = next;
        }
    }

    #[test]
    fn prop_care_actions_respect_stat_caps(mon in arb_mon()) {
        let config = GameConfig::default();
        let clock = FixedClock::at(5 * MS_PER_HOUR, 12);

        let fed = care::feed(&mon, &config, &clock).mon;
        prop_assert!(fed.stats.hunger <= config.stats.max_hunger);
        prop_assert!(fed.stats.weight >= mon.stats.weight);

        let cleaned = care::clean(&fed, &config, &clock).mon;
        prop_assert!(
            cleaned.stats.poop_count == 0 || cleaned.stats.poop_count == fed.stats.poop_count
        );

        let healed = care::heal(&cleaned, &config, &clock).mon;
        prop_assert!(healed.stats.hp <= config.stats.max_hp);
    }
}
