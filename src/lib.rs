//! Poketower - Server-Side Battle Simulation Library
//!
//! This crate holds the game logic for a browser tower-defense game with
//! Pokémon-themed cards: the per-session battle simulator, the session
//! registry that hands out live simulators to request handlers, and the
//! narrow persistence boundary (run results, coin balances, leaderboard).
//!
//! Transport, authentication and the relational mapper live in the
//! embedding service and are not part of this crate.

pub mod battle;
pub mod core;
pub mod session;
pub mod store;

pub use battle::logic::{BattleConfig, BattleSimulator};
pub use battle::types::{
    BattleError, Element, Enemy, FieldPokemon, GameSnapshot, GameSummary, PokemonTemplate,
};
pub use session::registry::{SessionKey, SessionRegistry};
pub use store::memory::MemoryStore;
pub use store::types::{GameResult, GameStore, LeaderboardEntry, ResultError, UserStats};
