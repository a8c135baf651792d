//! The mon entity: the virtual pet being simulated
//!
//! Mons are operated on by value. Every component takes a snapshot and
//! returns a new snapshot; the persistence layer above the core owns the
//! authoritative copy and decides when results are kept.

use crate::core::types::{MonId, MonState, Species, Stage, Timestamp};
use crate::entity::events::{CareEvent, CareEventKind, EvolutionEvent, MistakeReason};
use serde::{Deserialize, Serialize};

/// Numeric condition of a mon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonStats {
    /// Age in whole days, derived from creation time (never incremented)
    pub age: u32,
    /// 0-3 hunger ticks; 0 is an empty stomach
    pub hunger: u8,
    /// 0-3 effort hearts, the care-quality stat
    pub effort: u8,
    /// 0-100 health points
    pub hp: u8,
    /// Battle power, unbounded upward
    pub bp: u32,
    /// Weight in arbitrary units
    pub weight: u32,
    /// Lifetime count of logged care mistakes
    pub care_mistakes: u32,
    /// Waste piles currently on screen, 0-4
    pub poop_count: u8,
}

impl Default for MonStats {
    fn default() -> Self {
        // Freshly hatched egg: full stomach, full hearts, full health
        Self {
            age: 0,
            hunger: 3,
            effort: 3,
            hp: 100,
            bp: 0,
            weight: 10,
            care_mistakes: 0,
            poop_count: 0,
        }
    }
}

/// Complete representation of a virtual pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mon {
    pub id: MonId,
    pub name: String,
    pub species: Species,
    pub stage: Stage,
    pub created_at: Timestamp,
    pub stats: MonStats,
    pub care_history: Vec<CareEvent>,
    pub evolution_history: Vec<EvolutionEvent>,
    pub state: MonState,
    pub last_updated: Timestamp,
}

impl Mon {
    /// Create a new mon as an egg with default stats
    pub fn new(id: MonId, name: impl Into<String>, species: impl Into<Species>, now: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into(),
            stage: Stage::Egg,
            created_at: now,
            stats: MonStats::default(),
            care_history: Vec::new(),
            evolution_history: Vec::new(),
            state: MonState::Normal,
            last_updated: now,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    /// Append a care event
    pub(crate) fn record(&mut self, timestamp: Timestamp, kind: CareEventKind) {
        self.care_history.push(CareEvent::new(timestamp, kind));
    }

    /// Timestamp of the most recent feeding, if any
    pub fn last_fed(&self) -> Option<Timestamp> {
        self.care_history
            .iter()
            .rev()
            .find(|e| e.is_feed())
            .map(|e| e.timestamp)
    }

    /// Timestamp of the most recent care mistake with the given reason
    pub fn last_mistake(&self, reason: MistakeReason) -> Option<Timestamp> {
        self.care_history
            .iter()
            .rev()
            .find(|e| e.is_mistake(reason))
            .map(|e| e.timestamp)
    }

    /// Whether any care mistake with the given reason has ever been logged
    pub fn has_mistake(&self, reason: MistakeReason) -> bool {
        self.care_history.iter().any(|e| e.is_mistake(reason))
    }
}
