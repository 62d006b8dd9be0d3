//! Shared balance constants for the battle simulator.
//!
//! All gameplay tuning numbers live here. Change once, test everywhere.

// Allow dead code - some constants exist for the embedding service
#![allow(dead_code)]

// =============================================================================
// PLAYER START STATE
// =============================================================================

/// Player base health at the start of a run. Never regained.
pub const PLAYER_START_HEALTH: i32 = 100;

/// Pokeballs available for draws at the start of a run.
pub const START_POKEBALLS: u32 = 5;

/// Experience required for the first level-up.
pub const START_MAX_EXP: u32 = 100;

/// Growth factor applied to the exp threshold after each level-up
/// (integer-truncated).
pub const EXP_GROWTH: f64 = 1.2;

/// Cards dealt from the starter pool when a run begins.
pub const STARTING_HAND_SIZE: usize = 2;

// =============================================================================
// ARENA GEOMETRY
// =============================================================================

/// Horizontal extent of the arena.
pub const ARENA_MIN_X: f64 = 0.0;
pub const ARENA_MAX_X: f64 = 800.0;

/// Vertical band where cards may be placed.
pub const PLACEMENT_MIN_Y: f64 = 150.0;
pub const PLACEMENT_MAX_Y: f64 = 450.0;

/// Minimum per-axis spacing between two placed pokemon (box check).
pub const PLACEMENT_SPACING: f64 = 60.0;

/// The player's defense line; enemies that reach it deal base damage.
pub const PLAYER_BASE_Y: f64 = 450.0;

/// The enemy base line; idle field pokemon advance toward it.
pub const ENEMY_BASE_Y: f64 = 100.0;

/// Horizontal spawn band for new enemies (inclusive).
pub const SPAWN_MIN_X: i32 = 50;
pub const SPAWN_MAX_X: i32 = 750;

// =============================================================================
// TIMING
// =============================================================================

/// Seconds between enemy spawns while the wave queue is non-empty.
pub const ENEMY_SPAWN_INTERVAL: f64 = 1.5;

/// Seconds between attacks of a field pokemon.
pub const ATTACK_COOLDOWN: f64 = 0.8;

/// Default tick delta when the caller does not specify one.
pub const DEFAULT_TICK_DELTA: f64 = 0.1;

// =============================================================================
// COMBAT & SCORING
// =============================================================================

/// Damage the player takes when an enemy reaches the base line.
pub const BASE_BREACH_DAMAGE: i32 = 20;

/// Attack radius of every field pokemon, in distance units.
pub const ATTACK_RANGE: f64 = 120.0;

/// Score awarded per enemy kill.
pub const KILL_SCORE: u32 = 15;

/// Experience awarded per enemy kill.
pub const KILL_EXP: u32 = 2;

/// Pokeballs granted on level-up.
pub const LEVEL_UP_POKEBALLS: u32 = 2;

/// Score awarded when a field pokemon reaches the enemy base line.
pub const BASE_LINE_SCORE: u32 = 50;

/// A field pokemon within this distance of the enemy base line stops
/// advancing.
pub const BASE_LINE_SLACK: f64 = 10.0;

/// Converts abstract pokemon speed units into pixels per second.
pub const MOVE_SPEED_SCALE: f64 = 30.0;

// =============================================================================
// WAVES
// =============================================================================

/// The run is won once the wave counter passes this value.
pub const FINAL_WAVE: u32 = 5;

/// Wave size is `WAVE_BASE_COUNT + wave`, capped at `WAVE_MAX_COUNT`.
pub const WAVE_BASE_COUNT: u32 = 3;
pub const WAVE_MAX_COUNT: u32 = 10;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Movement speed assumed for a pokemon template that carries none.
pub const DEFAULT_POKEMON_SPEED: f64 = 1.5;

/// Movement speed assumed for an enemy template that carries none.
pub const DEFAULT_ENEMY_SPEED: f64 = 50.0;

/// Offset added to drawn-card ids so they never collide with starter ids.
pub const CAPTURE_ID_OFFSET: u32 = 100;

// =============================================================================
// BOUNDARY ECONOMICS
// =============================================================================

/// Minimum coin reward a victorious run may report.
pub const VICTORY_MIN_COINS: u32 = 50;

/// Coins granted to a freshly registered account.
pub const SIGNUP_COINS: i64 = 100;
