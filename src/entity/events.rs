//! Event records appended to a mon's histories
//!
//! Both histories are append-only logs. The core never truncates them;
//! several rules (clean recovery, neglect and sickness death) read back
//! through the care history to find the most recent event of a kind.

use crate::core::types::{Species, Stage, Timestamp};
use crate::lifecycle::DeathCause;
use serde::{Deserialize, Serialize};

/// Why a care mistake was logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MistakeReason {
    /// Effort lost because hunger sat at zero
    Hunger,
    /// Sickness triggered by a full waste screen
    Waste,
    /// Sickness left untreated
    Sickness,
}

/// A single recorded care occurrence, with per-kind payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CareEventKind {
    Feed,
    Clean,
    Heal,
    SleepStart,
    SleepEnd,
    CareMistake {
        reason: MistakeReason,
    },
    Train {
        game_id: String,
        score: u32,
        bp_earned: u32,
    },
    Death {
        cause: DeathCause,
    },
}

/// A logged record of an action or automatic occurrence affecting a mon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareEvent {
    pub timestamp: Timestamp,
    pub kind: CareEventKind,
}

impl CareEvent {
    pub fn new(timestamp: Timestamp, kind: CareEventKind) -> Self {
        Self { timestamp, kind }
    }

    pub fn is_feed(&self) -> bool {
        self.kind == CareEventKind::Feed
    }

    pub fn is_mistake(&self, reason: MistakeReason) -> bool {
        matches!(self.kind, CareEventKind::CareMistake { reason: r } if r == reason)
    }
}

/// A recorded species transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionEvent {
    pub timestamp: Timestamp,
    pub from_species: Species,
    pub to_species: Species,
    pub stage: Stage,
}
