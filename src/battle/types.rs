use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::constants::*;

/// Elemental type tag of a pokemon or enemy.
///
/// Serialized lowercase to match the JSON the browser client already speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Grass,
    Electric,
    Flying,
    Poison,
    Psychic,
    Fighting,
    Rock,
    Normal,
    Ice,
    Bug,
    Steel,
    Ground,
    Fairy,
    Dark,
    Ghost,
}

/// A pokemon template: static stats plus a session-unique card id.
///
/// Templates sit in the hand until placed; placement turns them into a
/// [`FieldPokemon`]. A card id lives in exactly one of hand or field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonTemplate {
    pub id: u32,
    pub name: String,
    pub element: Element,
    pub health: i32,
    pub attack: u32,
    #[serde(default = "default_pokemon_speed")]
    pub speed: f64,
}

fn default_pokemon_speed() -> f64 {
    DEFAULT_POKEMON_SPEED
}

/// A pokemon placed on the battlefield, with runtime combat state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldPokemon {
    pub id: u32,
    pub name: String,
    pub element: Element,
    /// Base health from the template.
    pub health: i32,
    pub attack: u32,
    pub speed: f64,
    pub x: f64,
    pub y: f64,
    pub current_health: i32,
    /// Seconds until the next attack is allowed.
    pub attack_cooldown: f64,
    pub is_moving: bool,
    /// Id of the enemy currently targeted, if any.
    pub target: Option<u32>,
    pub attack_range: f64,
}

impl FieldPokemon {
    /// Place a hand card at the given position.
    pub fn place(card: PokemonTemplate, x: f64, y: f64) -> Self {
        Self {
            id: card.id,
            name: card.name,
            element: card.element,
            health: card.health,
            attack: card.attack,
            speed: card.speed,
            x,
            y,
            current_health: card.health,
            attack_cooldown: 0.0,
            is_moving: false,
            target: None,
            attack_range: ATTACK_RANGE,
        }
    }

    /// Euclidean distance to an enemy.
    pub fn distance_to(&self, enemy: &Enemy) -> f64 {
        ((self.x - enemy.x).powi(2) + (self.y - enemy.y).powi(2)).sqrt()
    }
}

/// An opposing creature instance advancing toward the player's base.
///
/// Current health is fractional because type multipliers produce
/// non-integer damage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Index within the wave it spawned from. Ids repeat across waves.
    pub id: u32,
    pub name: String,
    pub element: Element,
    /// Base health from the wave template.
    pub health: i32,
    pub attack: u32,
    #[serde(default = "default_enemy_speed")]
    pub speed: f64,
    pub x: f64,
    pub y: f64,
    pub current_health: f64,
}

fn default_enemy_speed() -> f64 {
    DEFAULT_ENEMY_SPEED
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.current_health > 0.0
    }
}

/// An enemy template queued in a wave, waiting to spawn.
#[derive(Debug, Clone)]
pub struct WaveEnemy {
    pub id: u32,
    pub name: &'static str,
    pub element: Element,
    pub health: i32,
    pub attack: u32,
    pub speed: f64,
}

/// Full battle state snapshot returned by every tick and state read.
///
/// Field entries always carry `is_moving`, `target` and `speed`, even when
/// defaulted, because the client renders them unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player_health: i32,
    pub player_level: u32,
    pub player_exp: u32,
    pub player_max_exp: u32,
    pub pokeballs: u32,
    pub hand: Vec<PokemonTemplate>,
    pub field: Vec<FieldPokemon>,
    pub enemies: Vec<Enemy>,
    pub wave: u32,
    pub score: u32,
    pub game_over: bool,
    pub victory: bool,
    pub player_base_y: f64,
    pub enemy_base_y: f64,
}

/// End-of-run summary handed to the persistence boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub victory: bool,
    pub score: u32,
    pub waves_completed: u32,
    pub pokemons_caught: u32,
    /// Derived as `score / KILL_SCORE` for compatibility with shipped
    /// clients; the simulator also tracks real kills separately.
    pub enemies_defeated: u32,
    /// Wall-clock seconds since the run started.
    pub game_duration: f64,
}

/// Recoverable failures of the battle commands.
///
/// All variants are caller errors; the simulator state is untouched when
/// one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("no pokeballs left")]
    NoPokeballs,
    #[error("card not found in hand")]
    CardNotFound,
    #[error("invalid position - must be within play area (y between 150-450)")]
    InvalidPosition,
    #[error("position already occupied")]
    PositionOccupied,
}
