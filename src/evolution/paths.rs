//! Evolution path definitions and storage
//!
//! Paths are data, not branching logic: a static ordered table of permitted
//! species transitions with prioritized requirement sets. Priority plus
//! first-match lets divergent branches (good-care vs poor-care) coexist for
//! the same species, as long as the stricter branch carries the higher
//! priority.

use crate::core::types::Species;

/// Named conditions that don't reduce to a single stat threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialCondition {
    /// Zero care mistakes and full effort hearts
    PerfectCare,
    /// Only at night (20:00-06:00 on the injected clock)
    NightEvolution,
}

/// A single requirement within a path; all requirements of a path must hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    MinAge(u32),
    MaxAge(u32),
    MinEffort(u8),
    MaxCareMistakes(u32),
    MinBp(u32),
    Special(SpecialCondition),
}

/// A permitted species transition and its requirements
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionPath {
    pub from_species: Species,
    pub to_species: Species,
    pub requirements: Vec<Requirement>,
    pub priority: i32,
}

/// Ordered storage for all evolution paths
///
/// Table order is the tie-break when priorities are equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvolutionTable {
    paths: Vec<EvolutionPath>,
}

impl EvolutionTable {
    pub fn new(paths: Vec<EvolutionPath>) -> Self {
        Self { paths }
    }

    /// The built-in path table: one basic line with a good-care/poor-care
    /// branch from Child onward, and a Perfect form only off the good branch
    pub fn with_defaults() -> Self {
        use Requirement::*;
        Self::new(vec![
            EvolutionPath {
                from_species: "BasicEgg".into(),
                to_species: "BasicBaby".into(),
                requirements: vec![MinAge(1)],
                priority: 1,
            },
            EvolutionPath {
                from_species: "BasicBaby".into(),
                to_species: "BasicChild".into(),
                requirements: vec![MinAge(3), MinEffort(2)],
                priority: 1,
            },
            // Good-care branch outranks the poor-care fallback
            EvolutionPath {
                from_species: "BasicChild".into(),
                to_species: "GoodTeen".into(),
                requirements: vec![MinAge(5), MinEffort(3), MaxCareMistakes(3)],
                priority: 2,
            },
            EvolutionPath {
                from_species: "BasicChild".into(),
                to_species: "PoorTeen".into(),
                requirements: vec![MinAge(5), MinEffort(1)],
                priority: 1,
            },
            EvolutionPath {
                from_species: "GoodTeen".into(),
                to_species: "GoodAdult".into(),
                requirements: vec![MinAge(8), MinEffort(3), MinBp(30)],
                priority: 1,
            },
            EvolutionPath {
                from_species: "PoorTeen".into(),
                to_species: "PoorAdult".into(),
                requirements: vec![MinAge(8)],
                priority: 1,
            },
            EvolutionPath {
                from_species: "GoodAdult".into(),
                to_species: "PerfectMon".into(),
                requirements: vec![MinAge(12), MinEffort(3), MinBp(100), MaxCareMistakes(5)],
                priority: 1,
            },
        ])
    }

    pub fn push(&mut self, path: EvolutionPath) {
        self.paths.push(path);
    }

    /// All paths leaving the given species, in table order
    pub fn paths_from(&self, species: &str) -> impl Iterator<Item = &EvolutionPath> {
        let species = species.to_owned();
        self.paths.iter().filter(move |p| p.from_species == species)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvolutionPath> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
