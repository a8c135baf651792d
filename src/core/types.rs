//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for mons
///
/// Ids are opaque strings. The surrounding application usually supplies them;
/// `MonId::new` mints a fresh v4 uuid for callers that don't care.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonId(pub String);

impl MonId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for MonId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Epoch milliseconds, the timestamp unit for all recorded events
pub type Timestamp = i64;

/// Species identifier, a key into the evolution path table
pub type Species = String;

pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Evolutionary maturity level, ordered from Egg to Perfect
///
/// A mon's stage only ever increases over its life.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Stage {
    Egg,
    Baby,
    Child,
    Teen,
    Adult,
    Perfect,
}

impl Stage {
    /// The next stage, saturating at Perfect
    pub fn next(self) -> Stage {
        match self {
            Stage::Egg => Stage::Baby,
            Stage::Baby => Stage::Child,
            Stage::Child => Stage::Teen,
            Stage::Teen => Stage::Adult,
            Stage::Adult => Stage::Perfect,
            Stage::Perfect => Stage::Perfect,
        }
    }
}

/// Current status of a mon, mutually exclusive
///
/// Dead is terminal: no component mutates a dead mon beyond the initiating
/// death event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonState {
    Normal,
    Sleeping,
    Tired,
    Hungry,
    Sick,
    Injured,
    Training,
    Dead,
}

impl MonState {
    pub fn is_dead(self) -> bool {
        self == MonState::Dead
    }

    /// Whether the state can be displaced by low-priority transient states
    /// like Tired (sickness, injury, sleep and death all take precedence)
    pub fn accepts_tiredness(self) -> bool {
        matches!(self, MonState::Normal | MonState::Hungry | MonState::Tired)
    }
}
