//! The per-session battle simulator.
//!
//! One instance owns all mutable state for a single run and is advanced by
//! discrete `update` calls. The surrounding service must serialize access
//! per session; the simulator itself does no locking.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::VecDeque;

use super::effectiveness::type_multiplier;
use super::pool::{deal_starting_hand, draw_capture};
use super::types::{BattleError, Enemy, FieldPokemon, GameSnapshot, GameSummary, PokemonTemplate, WaveEnemy};
use super::waves::generate_wave;
use crate::core::constants::*;

/// Tuning switches for behaviors that product may want to change without
/// touching the engine.
#[derive(Debug, Clone, Copy)]
pub struct BattleConfig {
    /// Award the base-line score bonus on every tick a pokemon sits on the
    /// enemy base line with no target, matching the shipped behavior.
    /// When false the bonus is granted once per arrival.
    pub repeat_base_line_bonus: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            repeat_base_line_bonus: true,
        }
    }
}

/// Battle state for one session.
///
/// Fields are public so the service layer and tests can inspect and, where
/// needed, stage state directly. All mutation during play goes through
/// [`open_pokeball`](Self::open_pokeball), [`play_card`](Self::play_card)
/// and [`update`](Self::update).
#[derive(Debug, Clone)]
pub struct BattleSimulator {
    pub user_id: i64,
    pub start_time: DateTime<Utc>,
    pub config: BattleConfig,

    pub player_health: i32,
    pub player_level: u32,
    pub player_exp: u32,
    pub player_max_exp: u32,
    pub pokeballs: u32,
    pub score: u32,
    pub wave: u32,
    pub game_over: bool,
    pub victory: bool,

    pub hand: Vec<PokemonTemplate>,
    pub field: Vec<FieldPokemon>,
    pub enemies: Vec<Enemy>,

    /// Spawn queue for the current wave.
    pub wave_queue: VecDeque<WaveEnemy>,
    pub spawn_timer: f64,

    /// Enemies actually killed by field pokemon. The end-of-run summary
    /// still reports the score-derived count for client compatibility.
    pub kills: u32,
}

impl BattleSimulator {
    /// Starts a fresh run for the given account.
    pub fn new(user_id: i64, rng: &mut impl Rng) -> Self {
        let mut sim = Self {
            user_id,
            start_time: Utc::now(),
            config: BattleConfig::default(),
            player_health: PLAYER_START_HEALTH,
            player_level: 1,
            player_exp: 0,
            player_max_exp: START_MAX_EXP,
            pokeballs: START_POKEBALLS,
            score: 0,
            wave: 1,
            game_over: false,
            victory: false,
            hand: Vec::new(),
            field: Vec::new(),
            enemies: Vec::new(),
            wave_queue: VecDeque::new(),
            spawn_timer: 0.0,
            kills: 0,
        };
        sim.reset(rng);
        sim
    }

    /// Resets all battle state to run-start defaults: starter hand dealt,
    /// wave 1 queued, start time recorded.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.start_time = Utc::now();
        self.player_health = PLAYER_START_HEALTH;
        self.player_level = 1;
        self.player_exp = 0;
        self.player_max_exp = START_MAX_EXP;
        self.pokeballs = START_POKEBALLS;
        self.score = 0;
        self.wave = 1;
        self.game_over = false;
        self.victory = false;
        self.hand = deal_starting_hand(rng);
        self.field.clear();
        self.enemies.clear();
        self.wave_queue = generate_wave(rng, self.wave);
        self.spawn_timer = 0.0;
        self.kills = 0;
    }

    /// Opens a pokeball: spends one and draws a card from the capture pool.
    ///
    /// Refused without mutation when no pokeballs remain.
    pub fn open_pokeball(&mut self, rng: &mut impl Rng) -> Result<PokemonTemplate, BattleError> {
        if self.pokeballs == 0 {
            return Err(BattleError::NoPokeballs);
        }
        self.pokeballs -= 1;

        let card = draw_capture(rng, self.hand.len() + self.field.len());
        self.hand.push(card.clone());
        Ok(card)
    }

    /// Places a hand card on the battlefield.
    ///
    /// Validation order: card lookup, play-area bounds, spacing against
    /// every placed pokemon. The first failure wins and nothing mutates.
    pub fn play_card(&mut self, card_id: u32, x: f64, y: f64) -> Result<&[FieldPokemon], BattleError> {
        let card_index = self
            .hand
            .iter()
            .position(|card| card.id == card_id)
            .ok_or(BattleError::CardNotFound)?;

        if !(ARENA_MIN_X..=ARENA_MAX_X).contains(&x) || !(PLACEMENT_MIN_Y..=PLACEMENT_MAX_Y).contains(&y) {
            return Err(BattleError::InvalidPosition);
        }

        for pokemon in &self.field {
            if (pokemon.x - x).abs() < PLACEMENT_SPACING && (pokemon.y - y).abs() < PLACEMENT_SPACING {
                return Err(BattleError::PositionOccupied);
            }
        }

        let card = self.hand.remove(card_index);
        self.field.push(FieldPokemon::place(card, x, y));
        Ok(&self.field)
    }

    /// Advances the battle by `delta_time` seconds.
    ///
    /// A terminal session is left untouched and its snapshot returned as-is.
    /// Otherwise the phases run in fixed order: enemy spawning, enemy
    /// advance, field pokemon targeting and combat, victory check.
    pub fn update(&mut self, delta_time: f64, rng: &mut impl Rng) -> GameSnapshot {
        if self.game_over {
            return self.snapshot();
        }

        self.spawn_enemies(delta_time, rng);
        self.advance_enemies(delta_time);
        self.update_field(delta_time);

        if self.wave > FINAL_WAVE {
            self.game_over = true;
            self.victory = true;
            log::info!(
                "user {} cleared all {} waves with score {}",
                self.user_id,
                FINAL_WAVE,
                self.score
            );
        }

        self.snapshot()
    }

    /// Spawn phase: pops the next queued enemy once the spawn timer fills,
    /// and rolls the wave over when its queue runs dry.
    fn spawn_enemies(&mut self, delta_time: f64, rng: &mut impl Rng) {
        self.spawn_timer += delta_time;
        if self.spawn_timer < ENEMY_SPAWN_INTERVAL {
            return;
        }
        let Some(template) = self.wave_queue.pop_front() else {
            return;
        };

        self.enemies.push(Enemy {
            id: template.id,
            name: template.name.to_string(),
            element: template.element,
            health: template.health,
            attack: template.attack,
            speed: template.speed,
            x: rng.gen_range(SPAWN_MIN_X..=SPAWN_MAX_X) as f64,
            y: ENEMY_BASE_Y,
            current_health: template.health as f64,
        });
        self.spawn_timer = 0.0;

        if self.wave_queue.is_empty() {
            self.wave += 1;
            self.wave_queue = generate_wave(rng, self.wave);
            log::debug!("user {} advanced to wave {}", self.user_id, self.wave);
        }
    }

    /// Movement phase: every enemy steps toward the player base line.
    /// An enemy whose remaining distance is under one step has breached:
    /// it is removed and the player takes base damage.
    ///
    /// The loop always finishes, so several breaches in one tick can push
    /// health below zero; the terminal flag only gates future ticks.
    fn advance_enemies(&mut self, delta_time: f64) {
        let mut i = 0;
        while i < self.enemies.len() {
            let step = self.enemies[i].speed * delta_time;
            let dy = PLAYER_BASE_Y - self.enemies[i].y;

            if dy.abs() < step {
                self.enemies.remove(i);
                self.player_health -= BASE_BREACH_DAMAGE;
                if self.player_health <= 0 && !self.game_over {
                    self.game_over = true;
                    log::info!(
                        "user {} lost on wave {} with score {}",
                        self.user_id,
                        self.wave,
                        self.score
                    );
                }
            } else {
                self.enemies[i].y += if dy > 0.0 { step } else { -step };
                i += 1;
            }
        }
    }

    /// Combat phase: each field pokemon cools down, targets the nearest
    /// enemy strictly within range, and either attacks it or advances
    /// toward the enemy base line.
    fn update_field(&mut self, delta_time: f64) {
        for i in 0..self.field.len() {
            self.field[i].attack_cooldown = (self.field[i].attack_cooldown - delta_time).max(0.0);

            let mut nearest: Option<usize> = None;
            let mut nearest_distance = f64::INFINITY;
            for (j, enemy) in self.enemies.iter().enumerate() {
                let distance = self.field[i].distance_to(enemy);
                if distance < self.field[i].attack_range && distance < nearest_distance {
                    nearest = Some(j);
                    nearest_distance = distance;
                }
            }

            match nearest {
                Some(j) => {
                    self.field[i].is_moving = false;
                    self.field[i].target = Some(self.enemies[j].id);
                    if self.field[i].attack_cooldown <= 0.0 {
                        self.attack_enemy(i, j);
                    }
                }
                None => self.advance_pokemon(i, delta_time),
            }
        }
    }

    /// Resolves one attack of field pokemon `i` against enemy `j`,
    /// including kill rewards and a possible level-up.
    fn attack_enemy(&mut self, i: usize, j: usize) {
        let multiplier = type_multiplier(self.field[i].element, self.enemies[j].element);
        let damage = self.field[i].attack as f64 * multiplier;

        self.enemies[j].current_health -= damage;
        self.field[i].attack_cooldown = ATTACK_COOLDOWN;

        if self.enemies[j].current_health <= 0.0 {
            self.enemies.remove(j);
            self.kills += 1;
            self.score += KILL_SCORE;
            self.player_exp += KILL_EXP;

            if self.player_exp >= self.player_max_exp {
                self.player_level += 1;
                self.pokeballs += LEVEL_UP_POKEBALLS;
                self.player_exp = 0;
                self.player_max_exp = (self.player_max_exp as f64 * EXP_GROWTH) as u32;
                log::debug!("user {} reached level {}", self.user_id, self.player_level);
            }
        }
    }

    /// Moves an idle field pokemon toward the enemy base line, clamping at
    /// the line and granting the base-line score bonus.
    fn advance_pokemon(&mut self, i: usize, delta_time: f64) {
        self.field[i].is_moving = true;
        self.field[i].target = None;

        let was_at_line = self.field[i].y <= ENEMY_BASE_Y;
        let distance = (ENEMY_BASE_Y - self.field[i].y).abs();
        if distance > BASE_LINE_SLACK {
            self.field[i].y -= self.field[i].speed * delta_time * MOVE_SPEED_SCALE;
        }

        if self.field[i].y <= ENEMY_BASE_Y {
            self.field[i].y = ENEMY_BASE_Y;
            if self.config.repeat_base_line_bonus || !was_at_line {
                self.score += BASE_LINE_SCORE;
            }
        }
    }

    /// Serializable snapshot of the full battle state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player_health: self.player_health,
            player_level: self.player_level,
            player_exp: self.player_exp,
            player_max_exp: self.player_max_exp,
            pokeballs: self.pokeballs,
            hand: self.hand.clone(),
            field: self.field.clone(),
            enemies: self.enemies.clone(),
            wave: self.wave,
            score: self.score,
            game_over: self.game_over,
            victory: self.victory,
            player_base_y: PLAYER_BASE_Y,
            enemy_base_y: ENEMY_BASE_Y,
        }
    }

    /// End-of-run summary for the persistence boundary.
    ///
    /// `enemies_defeated` is derived from score rather than the tracked
    /// kill counter because shipped clients expect that value.
    pub fn game_result(&self) -> GameSummary {
        let elapsed = Utc::now() - self.start_time;
        GameSummary {
            victory: self.victory,
            score: self.score,
            waves_completed: self.wave - 1,
            pokemons_caught: (self.hand.len() + self.field.len()) as u32,
            enemies_defeated: self.score / KILL_SCORE,
            game_duration: elapsed.num_milliseconds() as f64 / 1000.0,
        }
    }
}
