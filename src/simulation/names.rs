//! Alien naming
//!
//! Small invasions use a curated pool of names in pool order. Larger ones are
//! numbered so the pool can never run dry.

use super::types::Alien;
use crate::error::{ConfigError, Result};

/// Invasions up to this size are named from [`ALIEN_NAMES`]
pub const NAMED_ALIENS_LIMIT: usize = 75;

/// Curated alien names, handed out in order
pub const ALIEN_NAMES: &[&str] = &[
    "Zorg", "Xylox", "Quazar", "Blorp", "Vextra", "Glimmex", "Throk", "Nebulon", "Krill", "Zyphra",
    "Orbix", "Vorlag", "Skreel", "Gorgax", "Pexis", "Ulthar", "Marvok", "Zentrix", "Ixtal", "Drogon",
    "Velkor", "Phaxis", "Qwerl", "Snorx", "Trilax", "Yvex", "Kazmar", "Lurxa", "Mogrith", "Nixel",
    "Ozzak", "Prax", "Rigel", "Saurok", "Tzeeg", "Uvula", "Vorn", "Wexel", "Xarn", "Yllith",
    "Zaphod", "Bleeb", "Cthor", "Dweezil", "Eekor", "Fraxx", "Glorb", "Hexar", "Izzik", "Jornak",
    "Klaxon", "Lumox", "Mekton", "Norv", "Oxxil", "Plonk", "Quix", "Rundar", "Sploog", "Tekk",
    "Urgal", "Voxxa", "Wumpa", "Xenor", "Yorrik", "Zebulax", "Axiom", "Borvex", "Crexis", "Dragoth",
    "Eldrax", "Fizzgig", "Grubnok", "Hurlox", "Irkon",
];

/// Names for an invasion of `count` aliens.
///
/// Up to [`NAMED_ALIENS_LIMIT`] aliens take names from the pool; larger
/// invasions are named `Alien 1`, `Alien 2`, ...
pub fn alien_names(count: usize) -> Result<Vec<Alien>> {
    if count > NAMED_ALIENS_LIMIT {
        return Ok((1..=count).map(|n| Alien::new(format!("Alien {}", n))).collect());
    }

    if count > ALIEN_NAMES.len() {
        return Err(ConfigError::AlienNamesExhausted {
            requested: count,
            available: ALIEN_NAMES.len(),
        }
        .into());
    }

    Ok(ALIEN_NAMES[..count].iter().map(|&name| Alien::from(name)).collect())
}
