//! Procedural wave generation.
//!
//! Each wave is an ordered spawn queue. Size grows with the wave number
//! (capped), and every slot is filled by one of four enemy species with
//! stats scaling linearly in the wave number.

use rand::Rng;
use std::collections::VecDeque;

use super::types::{Element, WaveEnemy};
use crate::core::constants::{WAVE_BASE_COUNT, WAVE_MAX_COUNT};

/// Number of enemies scheduled for the given wave.
pub fn wave_size(wave: u32) -> u32 {
    (WAVE_BASE_COUNT + wave).min(WAVE_MAX_COUNT)
}

/// Rolls one enemy species for the given wave, with scaled stats.
fn roll_wave_enemy(rng: &mut impl Rng, wave: u32) -> (&'static str, Element, i32, u32, f64) {
    let w = wave as i32;
    match rng.gen_range(0..4) {
        0 => ("Rattata", Element::Normal, 25 + w * 4, (8 + w) as u32, (50 + w * 8) as f64),
        1 => ("Spearow", Element::Flying, 20 + w * 3, (10 + w) as u32, (60 + w * 10) as f64),
        2 => ("Zubat", Element::Poison, 30 + w * 5, (12 + w) as u32, (45 + w * 7) as f64),
        _ => ("Geodude", Element::Rock, 40 + w * 6, (15 + w) as u32, (30 + w * 5) as f64),
    }
}

/// Builds the spawn queue for a wave. Enemy ids are the slot index within
/// the wave.
pub fn generate_wave(rng: &mut impl Rng, wave: u32) -> VecDeque<WaveEnemy> {
    (0..wave_size(wave))
        .map(|i| {
            let (name, element, health, attack, speed) = roll_wave_enemy(rng, wave);
            WaveEnemy {
                id: i,
                name,
                element,
                health,
                attack,
                speed,
            }
        })
        .collect()
}
