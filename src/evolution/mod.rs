//! Species evolution: rule table, eligibility, and stage advancement

pub mod engine;
pub mod loader;
pub mod paths;

pub use engine::{check_eligibility, evolve};
pub use loader::{load_paths, parse_paths_toml};
pub use paths::{EvolutionPath, EvolutionTable, Requirement, SpecialCondition};
