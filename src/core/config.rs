//! Game configuration with documented constants
//!
//! All tuning values are collected here with explanations of their purpose.
//! Components receive the config by reference; there is no global instance,
//! so tests and embedding applications can run with different tunings
//! side by side.

use crate::core::error::{MonError, Result};
use serde::{Deserialize, Serialize};

/// Time-based decay and regeneration rates
///
/// All intervals are wall-clock hours. A rate of "1 unit per interval" means
/// the decay processor applies `floor(elapsed_hours / interval)` units per
/// call, so partial intervals carry no effect until a full one has elapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Hours per hunger tick lost
    ///
    /// At the default (5h) a fully fed mon (3/3) empties its stomach in
    /// 15 hours of neglect.
    pub hunger_decay_interval_hours: f64,

    /// Hours per waste pile generated
    ///
    /// At the default (2.5h) the screen fills to the sickness threshold
    /// (4 piles) in 10 unattended hours. Eggs produce no waste.
    pub waste_generation_interval_hours: f64,

    /// Hours per effort heart lost while hunger is empty
    ///
    /// Effort only decays when hunger has already hit zero, so this is the
    /// second stage of neglect. Each decay call that loses effort also logs
    /// a care mistake.
    pub effort_decay_interval_hours: f64,

    /// Hours per HP regeneration step
    pub hp_regen_interval_hours: f64,

    /// HP restored per regeneration step
    ///
    /// Defaults give 2.5 HP/hour, a full recovery from near-death in
    /// about 40 hours.
    pub hp_regen_amount: u8,

    /// Hour (0-23) at which night begins for tiredness purposes
    pub night_start_hour: u32,

    /// Hour (0-23) at which night ends
    ///
    /// The night window wraps midnight: an hour H is night when
    /// `H >= night_start_hour || H < night_end_hour`.
    pub night_end_hour: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            hunger_decay_interval_hours: 5.0,
            waste_generation_interval_hours: 2.5,
            effort_decay_interval_hours: 4.0,
            hp_regen_interval_hours: 2.0,
            hp_regen_amount: 5,
            night_start_hour: 21,
            night_end_hour: 6,
        }
    }
}

impl TimeConfig {
    /// Whether the given hour of day falls inside the night window
    pub fn is_night(&self, hour: u32) -> bool {
        hour >= self.night_start_hour || hour < self.night_end_hour
    }
}

/// Stat caps and care-action magnitudes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Maximum hunger ticks (a full stomach)
    pub max_hunger: u8,

    /// Maximum effort hearts
    pub max_effort: u8,

    /// Maximum health points
    pub max_hp: u8,

    /// Waste piles at which sickness triggers
    pub max_waste: u8,

    /// Weight gained per feeding
    pub base_weight_gain: u32,

    /// Minimum minutes between training sessions
    ///
    /// Carried for callers to enforce; the reward calculator itself applies
    /// every result it is handed.
    pub training_cooldown_minutes: u32,

    /// Minimum hours between heal actions, likewise caller-enforced
    pub healing_cooldown_hours: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            max_hunger: 3,
            max_effort: 3,
            max_hp: 100,
            max_waste: 4,
            base_weight_gain: 2,
            training_cooldown_minutes: 30,
            healing_cooldown_hours: 2.0,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub time: TimeConfig,
    pub stats: StatsConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, falling back to defaults for missing fields
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let t = &self.time;
        if t.hunger_decay_interval_hours <= 0.0
            || t.waste_generation_interval_hours <= 0.0
            || t.effort_decay_interval_hours <= 0.0
            || t.hp_regen_interval_hours <= 0.0
        {
            return Err(MonError::InvalidConfig(
                "decay/regen intervals must be positive".into(),
            ));
        }
        if t.hp_regen_amount == 0 {
            return Err(MonError::InvalidConfig(
                "hp_regen_amount must be positive".into(),
            ));
        }
        if t.night_start_hour > 23 || t.night_end_hour > 23 {
            return Err(MonError::InvalidConfig(format!(
                "night hours must be 0-23, got {}..{}",
                t.night_start_hour, t.night_end_hour
            )));
        }
        if t.night_end_hour >= t.night_start_hour {
            return Err(MonError::InvalidConfig(
                "night window must wrap midnight (night_end_hour < night_start_hour)".into(),
            ));
        }

        let s = &self.stats;
        if s.max_hunger == 0 || s.max_effort == 0 || s.max_hp == 0 || s.max_waste == 0 {
            return Err(MonError::InvalidConfig("stat caps must be positive".into()));
        }
        Ok(())
    }
}
