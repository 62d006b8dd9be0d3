//! Type-effectiveness chart.
//!
//! The chart is intentionally asymmetric and sparse: any pairing it does
//! not list is neutral (1.0). A 0.0 entry is a full immunity.

use super::types::Element;

/// Damage multiplier for an attacker element hitting a defender element.
pub fn type_multiplier(attacker: Element, defender: Element) -> f64 {
    use Element::*;
    match (attacker, defender) {
        (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => 2.0,
        (Fire, Water) => 0.5,

        (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,
        (Water, Grass) => 0.5,

        (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 2.0,
        (Grass, Fire) | (Grass, Electric) => 0.5,

        (Electric, Water) | (Electric, Flying) => 2.0,
        (Electric, Grass) => 0.5,
        (Electric, Ground) => 0.0,

        (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,
        (Flying, Electric) | (Flying, Rock) => 0.5,

        (Poison, Grass) | (Poison, Fairy) => 2.0,
        (Poison, Poison) | (Poison, Ground) | (Poison, Psychic) => 0.5,

        (Psychic, Fighting) | (Psychic, Poison) => 2.0,
        (Psychic, Ghost) => 0.5,
        (Psychic, Dark) => 0.0,

        (Fighting, Normal) | (Fighting, Rock) | (Fighting, Steel) => 2.0,
        (Fighting, Flying) | (Fighting, Psychic) => 0.5,

        (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 2.0,
        (Rock, Fighting) | (Rock, Ground) => 0.5,

        _ => 1.0,
    }
}
