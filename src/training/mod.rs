//! Training minigames: reward rules and application
//!
//! Input mechanics live in the UI layer; the core only maps a game id and a
//! numeric score to a battle-power reward. The catalog is data, like the
//! evolution path table.

use crate::core::clock::Clock;
use crate::entity::events::CareEventKind;
use crate::entity::mon::Mon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameDifficulty {
    Easy,
    Medium,
    Hard,
}

/// How a game's score maps to battle power
///
/// Every rule is monotonic in the score; results are floored to whole BP.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RewardRule {
    /// Same reward regardless of score
    Flat(u32),
    /// One BP per score point, up to a ceiling
    Capped { max: u32 },
    /// Score scaled by a multiplier
    Linear { multiplier: f64 },
}

/// A training minigame definition
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingGame {
    pub id: String,
    pub name: String,
    pub difficulty: GameDifficulty,
    pub duration_secs: u32,
    pub reward: RewardRule,
}

/// Catalog of available training games
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    games: Vec<TrainingGame>,
}

impl GameCatalog {
    pub fn new(games: Vec<TrainingGame>) -> Self {
        Self { games }
    }

    /// The built-in minigame lineup
    pub fn with_defaults() -> Self {
        Self::new(vec![
            TrainingGame {
                id: "rhythm_tap".into(),
                name: "Rhythm Tap".into(),
                difficulty: GameDifficulty::Easy,
                duration_secs: 30,
                reward: RewardRule::Linear { multiplier: 0.5 },
            },
            TrainingGame {
                id: "quick_reflex".into(),
                name: "Quick Reflex".into(),
                difficulty: GameDifficulty::Medium,
                duration_secs: 45,
                reward: RewardRule::Capped { max: 50 },
            },
            TrainingGame {
                id: "pattern_memory".into(),
                name: "Pattern Memory".into(),
                difficulty: GameDifficulty::Hard,
                duration_secs: 60,
                reward: RewardRule::Linear { multiplier: 2.0 },
            },
        ])
    }

    pub fn get(&self, game_id: &str) -> Option<&TrainingGame> {
        self.games.iter().find(|g| g.id == game_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrainingGame> {
        self.games.iter()
    }
}

/// Battle power earned for a score in the given game, floored
pub fn calculate_reward(game: &TrainingGame, score: u32) -> u32 {
    match game.reward {
        RewardRule::Flat(bp) => bp,
        RewardRule::Capped { max } => score.min(max),
        RewardRule::Linear { multiplier } => (score as f64 * multiplier).floor() as u32,
    }
}

/// Apply a finished training session to a snapshot
///
/// An unknown game id is treated as caller input error: the snapshot comes
/// back unchanged (callers should validate ids against the catalog first).
pub fn apply_result(
    mon: &Mon,
    game_id: &str,
    score: u32,
    catalog: &GameCatalog,
    clock: &impl Clock,
) -> Mon {
    if mon.is_dead() {
        tracing::debug!(mon = %mon.id, game_id, "training result dropped for deceased mon");
        return mon.clone();
    }

    let Some(game) = catalog.get(game_id) else {
        tracing::debug!(mon = %mon.id, game_id, "unknown training game, result dropped");
        return mon.clone();
    };

    let bp_earned = calculate_reward(game, score);

    tracing::debug!(mon = %mon.id, game_id, score, bp_earned, "training applied");

    let mut trained = mon.clone();
    trained.stats.bp += bp_earned;
    trained.last_updated = clock.now_ms();
    trained.record(
        clock.now_ms(),
        CareEventKind::Train {
            game_id: game_id.to_string(),
            score,
            bp_earned,
        },
    );
    trained
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::types::MonId;

    #[test]
    fn test_reward_rules() {
        let flat = TrainingGame {
            id: "flat".into(),
            name: "Flat".into(),
            difficulty: GameDifficulty::Easy,
            duration_secs: 10,
            reward: RewardRule::Flat(7),
        };
        assert_eq!(calculate_reward(&flat, 0), 7);
        assert_eq!(calculate_reward(&flat, 1000), 7);

        let catalog = GameCatalog::with_defaults();
        let rhythm = catalog.get("rhythm_tap").unwrap();
        assert_eq!(calculate_reward(rhythm, 41), 20); // floor(41 * 0.5)

        let reflex = catalog.get("quick_reflex").unwrap();
        assert_eq!(calculate_reward(reflex, 30), 30);
        assert_eq!(calculate_reward(reflex, 80), 50);

        let memory = catalog.get("pattern_memory").unwrap();
        assert_eq!(calculate_reward(memory, 21), 42);
    }

    #[test]
    fn test_apply_result_adds_bp_and_logs() {
        let catalog = GameCatalog::with_defaults();
        let clock = FixedClock::at(9_000, 12);
        let mut mon = Mon::new(MonId::new(), "Pip", "BasicChild", 0);
        mon.stats.bp = 5;

        let trained = apply_result(&mon, "rhythm_tap", 41, &catalog, &clock);
        assert_eq!(trained.stats.bp, 25);
        assert_eq!(trained.care_history.len(), 1);
        assert_eq!(
            trained.care_history[0].kind,
            CareEventKind::Train {
                game_id: "rhythm_tap".into(),
                score: 41,
                bp_earned: 20,
            }
        );
        assert_eq!(trained.last_updated, 9_000);
    }

    #[test]
    fn test_unknown_game_is_a_no_op() {
        let catalog = GameCatalog::with_defaults();
        let clock = FixedClock::at(9_000, 12);
        let mon = Mon::new(MonId::new(), "Pip", "BasicChild", 0);

        let unchanged = apply_result(&mon, "tug_of_war", 99, &catalog, &clock);
        assert_eq!(unchanged, mon);
    }
}
