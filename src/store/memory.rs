//! In-process [`GameStore`] for single-process deployments and tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::types::{GameResult, GameStore, LeaderboardEntry, StoreError, UserStats};
use crate::core::constants::SIGNUP_COINS;

/// How many recent runs `user_stats` returns.
const RECENT_GAMES_LIMIT: usize = 10;

struct Profile {
    username: String,
    poke_coins: i64,
    /// Completed runs, oldest first.
    history: Vec<GameResult>,
    high_score: u32,
    total_waves: u32,
    total_pokemons: u32,
    total_enemies: u32,
}

/// In-memory store keyed by user id.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    profiles: HashMap<i64, Profile>,
    next_user_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Creates an account with the sign-up coin grant and a zeroed
    /// leaderboard row, returning its id.
    pub fn register_user(&self, username: &str) -> i64 {
        let mut inner = self.lock();
        inner.next_user_id += 1;
        let user_id = inner.next_user_id;
        inner.profiles.insert(
            user_id,
            Profile {
                username: username.to_string(),
                poke_coins: SIGNUP_COINS,
                history: Vec::new(),
                high_score: 0,
                total_waves: 0,
                total_pokemons: 0,
                total_enemies: 0,
            },
        );
        user_id
    }

    /// Adjusts an account's coin balance by `delta`. The balance never
    /// drops below zero. Returns the new balance.
    pub fn adjust_coins(&self, user_id: i64, delta: i64) -> Result<i64, StoreError> {
        let mut inner = self.lock();
        let profile = inner.profiles.get_mut(&user_id).ok_or(StoreError::UnknownUser)?;
        profile.poke_coins = (profile.poke_coins + delta).max(0);
        Ok(profile.poke_coins)
    }

    /// Current coin balance of an account.
    pub fn poke_coins(&self, user_id: i64) -> Result<i64, StoreError> {
        let inner = self.lock();
        inner
            .profiles
            .get(&user_id)
            .map(|p| p.poke_coins)
            .ok_or(StoreError::UnknownUser)
    }
}

impl Profile {
    fn leaderboard_entry(&self, user_id: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            user_id,
            username: self.username.clone(),
            high_score: self.high_score,
            total_waves: self.total_waves,
            total_pokemons: self.total_pokemons,
            total_enemies: self.total_enemies,
        }
    }
}

impl GameStore for MemoryStore {
    fn record_result(&self, user_id: i64, result: &GameResult) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let profile = inner.profiles.get_mut(&user_id).ok_or(StoreError::UnknownUser)?;

        profile.history.push(result.clone());
        profile.poke_coins += result.poke_coins_earned as i64;

        if result.score > profile.high_score {
            profile.high_score = result.score;
        }
        profile.total_waves += result.waves_completed;
        profile.total_pokemons += result.pokemons_caught;
        profile.total_enemies += result.enemies_defeated;
        Ok(())
    }

    fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let inner = self.lock();
        let mut entries: Vec<LeaderboardEntry> = inner
            .profiles
            .iter()
            .map(|(&user_id, profile)| profile.leaderboard_entry(user_id))
            .collect();
        entries.sort_by(|a, b| b.high_score.cmp(&a.high_score));
        entries.truncate(limit);
        entries
    }

    fn user_stats(&self, user_id: i64) -> Result<UserStats, StoreError> {
        let inner = self.lock();
        let profile = inner.profiles.get(&user_id).ok_or(StoreError::UnknownUser)?;

        let recent_games: Vec<GameResult> = profile
            .history
            .iter()
            .rev()
            .take(RECENT_GAMES_LIMIT)
            .cloned()
            .collect();

        Ok(UserStats {
            leaderboard: profile.leaderboard_entry(user_id),
            recent_games,
            poke_coins: profile.poke_coins,
        })
    }
}
