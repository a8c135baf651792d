//! Headless caretaker simulation
//!
//! Raises a mon from egg over a configurable number of days with a
//! seeded, imperfect caretaker, then prints what became of it. Useful for
//! eyeballing pacing after config changes.

use clap::Parser;
use monsim::care;
use monsim::core::clock::{Clock, FixedClock};
use monsim::core::config::GameConfig;
use monsim::core::types::{MonId, MonState, MS_PER_HOUR};
use monsim::entity::mon::Mon;
use monsim::evolution::EvolutionTable;
use monsim::simulation::tick::{run_tick, TickEvent};
use monsim::training::{apply_result, GameCatalog};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Simulate days of mon care with a seeded caretaker")]
struct Args {
    /// Days of simulated care
    #[arg(long, default_value_t = 16)]
    days: u32,

    /// RNG seed for the caretaker's lapses
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Chance per hour that the caretaker ignores the mon entirely
    #[arg(long, default_value_t = 0.25)]
    laziness: f64,

    /// Optional TOML config overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name for the mon
    #[arg(long, default_value = "Pip")]
    name: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    if !(0.0..=1.0).contains(&args.laziness) {
        tracing::error!("--laziness must be a probability in 0.0..=1.0, got {}", args.laziness);
        std::process::exit(1);
    }

    let config = match &args.config {
        Some(path) => match std::fs::read_to_string(path)
            .map_err(monsim::core::MonError::from)
            .and_then(|s| GameConfig::from_toml_str(&s))
        {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let paths = EvolutionTable::with_defaults();
    let catalog = GameCatalog::with_defaults();
    let mut rng = StdRng::seed_from_u64(args.seed);

    // Start at 08:00 on day zero
    let mut clock = FixedClock::at(8 * MS_PER_HOUR, 8);
    let mut mon = Mon::new(MonId::new(), args.name.clone(), "BasicEgg", clock.now_ms());

    tracing::info!("raising {} for {} days (seed {})", args.name, args.days, args.seed);

    let mut evolutions = 0u32;
    let mut mistakes_witnessed = 0u32;

    'life: for _day in 0..args.days {
        for _hour in 0..24 {
            clock.advance_hours(1);

            let (next, events) = run_tick(&mon, MS_PER_HOUR, &config, &paths, &clock);
            mon = next;

            for event in &events {
                match event {
                    TickEvent::Evolved {
                        from_species,
                        to_species,
                        stage,
                    } => {
                        evolutions += 1;
                        tracing::info!(
                            "day {}: {} evolved: {} -> {} ({:?})",
                            mon.stats.age,
                            mon.name,
                            from_species,
                            to_species,
                            stage
                        );
                    }
                    TickEvent::Died { cause } => {
                        tracing::info!("day {}: {} died of {:?}", mon.stats.age, mon.name, cause);
                        break 'life;
                    }
                    TickEvent::FellSick => {
                        tracing::info!("day {}: {} fell sick", mon.stats.age, mon.name);
                        mistakes_witnessed += 1;
                    }
                    TickEvent::BecameTired => {}
                }
            }

            // An imperfect caretaker: sometimes just not looking
            if rng.gen_bool(args.laziness) {
                continue;
            }

            if mon.stats.hunger <= 1 {
                let outcome = care::feed(&mon, &config, &clock);
                if outcome.success {
                    mon = outcome.mon;
                }
            }
            if mon.stats.poop_count >= 2 {
                let outcome = care::clean(&mon, &config, &clock);
                if outcome.success {
                    mon = outcome.mon;
                }
            }
            if mon.state == MonState::Sick || mon.state == MonState::Injured {
                let outcome = care::heal(&mon, &config, &clock);
                if outcome.success {
                    mon = outcome.mon;
                }
            }

            // Bedtime and wakeup roughly track the night window
            let hour = clock.hour_of_day();
            if hour == 22 && mon.state != MonState::Sleeping {
                let outcome = care::toggle_sleep(&mon, &config, &clock);
                if outcome.success {
                    mon = outcome.mon;
                }
            }
            if hour == 7 && mon.state == MonState::Sleeping {
                let outcome = care::toggle_sleep(&mon, &config, &clock);
                if outcome.success {
                    mon = outcome.mon;
                }
            }

            // A noon training session most days
            if hour == 12 && mon.state == MonState::Normal && rng.gen_bool(0.8) {
                let score = rng.gen_range(10..60);
                mon = apply_result(&mon, "rhythm_tap", score, &catalog, &clock);
            }
        }
    }

    println!("\n=== {} after {} days ===", mon.name, mon.stats.age);
    println!("species:        {} ({:?})", mon.species, mon.stage);
    println!("state:          {:?}", mon.state);
    println!(
        "stats:          hunger {}/3  effort {}/3  hp {}/100  bp {}  weight {}",
        mon.stats.hunger, mon.stats.effort, mon.stats.hp, mon.stats.bp, mon.stats.weight
    );
    println!(
        "care mistakes:  {} (sick events seen: {})",
        mon.stats.care_mistakes, mistakes_witnessed
    );
    println!(
        "history:        {} care events, {} evolutions",
        mon.care_history.len(),
        evolutions
    );
}
