//! The fixed pokemon pools: starter cards and catchable draws.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Element, PokemonTemplate};
use crate::core::constants::{CAPTURE_ID_OFFSET, STARTING_HAND_SIZE};

/// (id, name, element, health, attack, speed)
const STARTER_POOL: [(u32, &str, Element, i32, u32, f64); 3] = [
    (1, "Charmander", Element::Fire, 60, 12, 2.0),
    (2, "Squirtle", Element::Water, 70, 10, 1.8),
    (3, "Bulbasaur", Element::Grass, 65, 11, 1.6),
];

/// (name, element, health, attack, speed) - ids are assigned at draw time.
const CAPTURE_POOL: [(&str, Element, i32, u32, f64); 7] = [
    ("Pikachu", Element::Electric, 45, 18, 2.5),
    ("Jigglypuff", Element::Normal, 85, 9, 1.2),
    ("Meowth", Element::Normal, 45, 15, 2.2),
    ("Psyduck", Element::Water, 55, 12, 1.5),
    ("Growlithe", Element::Fire, 60, 14, 2.0),
    ("Abra", Element::Psychic, 40, 20, 1.8),
    ("Machop", Element::Fighting, 70, 16, 1.4),
];

fn template(id: u32, name: &str, element: Element, health: i32, attack: u32, speed: f64) -> PokemonTemplate {
    PokemonTemplate {
        id,
        name: name.to_string(),
        element,
        health,
        attack,
        speed,
    }
}

/// Deals the initial hand: two distinct starters, sampled without
/// replacement.
pub fn deal_starting_hand(rng: &mut impl Rng) -> Vec<PokemonTemplate> {
    STARTER_POOL
        .choose_multiple(rng, STARTING_HAND_SIZE)
        .map(|&(id, name, element, health, attack, speed)| {
            template(id, name, element, health, attack, speed)
        })
        .collect()
}

/// Draws one pokemon uniformly from the capture pool.
///
/// The card id is derived from the number of cards the session already
/// owns, offset so it can never collide with a starter or field id.
pub fn draw_capture(rng: &mut impl Rng, owned_count: usize) -> PokemonTemplate {
    let (name, element, health, attack, speed) = CAPTURE_POOL[rng.gen_range(0..CAPTURE_POOL.len())];
    let id = owned_count as u32 + CAPTURE_ID_OFFSET;
    template(id, name, element, health, attack, speed)
}
