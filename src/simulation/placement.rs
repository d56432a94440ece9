//! Initial alien placement

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::names::alien_names;
use super::types::{AlienPositions, City};
use super::world_map::WorldMap;
use crate::error::{ConfigError, Result};

/// Drop `count` aliens onto uniformly random cities of `world_map`.
///
/// Cities are drawn with replacement, so several aliens may land on the same
/// city.
pub fn place_aliens<R: Rng + ?Sized>(
    count: usize,
    world_map: &WorldMap,
    rng: &mut R,
) -> Result<AlienPositions> {
    let cities: Vec<&City> = world_map.cities().collect();
    if cities.is_empty() {
        return Err(ConfigError::EmptyMap.into());
    }

    let mut positions = AlienPositions::new();
    for alien in alien_names(count)? {
        if let Some(&city) = cities.choose(rng) {
            debug!("{} lands in {}", alien, city);
            positions.insert(alien, city.clone());
        }
    }

    Ok(positions)
}
