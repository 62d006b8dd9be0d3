//! Wire types and the narrow persistence interface the engine hands its
//! results to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::battle::types::GameSummary;
use crate::core::constants::VICTORY_MIN_COINS;

/// A completed run as reported to the backend, including the coin reward.
///
/// Counter fields are unsigned, so negative counters cannot occur by
/// construction; only the duration needs a runtime check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub victory: bool,
    pub score: u32,
    pub poke_coins_earned: u32,
    pub waves_completed: u32,
    pub pokemons_caught: u32,
    pub enemies_defeated: u32,
    pub game_duration: f64,
}

/// Rejections of a reported run result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    #[error("game duration cannot be negative")]
    NegativeDuration,
}

impl GameResult {
    /// Builds a result from an engine summary and the coin reward the
    /// service computed for it.
    pub fn from_summary(summary: &GameSummary, poke_coins_earned: u32) -> Self {
        Self {
            victory: summary.victory,
            score: summary.score,
            poke_coins_earned,
            waves_completed: summary.waves_completed,
            pokemons_caught: summary.pokemons_caught,
            enemies_defeated: summary.enemies_defeated,
            game_duration: summary.game_duration,
        }
    }

    /// Boundary validation: a victorious run always pays out at least the
    /// minimum coin reward, and a negative duration is rejected.
    pub fn normalized(mut self) -> Result<Self, ResultError> {
        if self.game_duration < 0.0 {
            return Err(ResultError::NegativeDuration);
        }
        if self.victory && self.poke_coins_earned < VICTORY_MIN_COINS {
            self.poke_coins_earned = VICTORY_MIN_COINS;
        }
        Ok(self)
    }
}

/// One row of the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub username: String,
    pub high_score: u32,
    pub total_waves: u32,
    pub total_pokemons: u32,
    pub total_enemies: u32,
}

/// Aggregate view of one account: leaderboard row, recent runs, balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub leaderboard: LeaderboardEntry,
    pub recent_games: Vec<GameResult>,
    pub poke_coins: i64,
}

/// Failures of the persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("unknown user id")]
    UnknownUser,
}

/// The persistence collaborator the engine's results flow into.
///
/// On run completion the implementation must append the historical record,
/// credit the account's coin balance, and upsert the leaderboard row
/// (high score raised when beaten, totals accumulated).
pub trait GameStore {
    fn record_result(&self, user_id: i64, result: &GameResult) -> Result<(), StoreError>;

    /// Top rows ordered by high score, best first.
    fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry>;

    fn user_stats(&self, user_id: i64) -> Result<UserStats, StoreError>;
}
