//! Alien movement
//!
//! All aliens move at once: the next positions are computed from the current
//! snapshot and only then replace it.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::types::{AlienPositions, City};
use super::world_map::WorldMap;

/// Pick the next city for every alien.
///
/// Each alien follows one of the roads leaving its city, chosen uniformly at
/// random. Aliens in an isolated city are trapped and stay where they are.
pub fn next_positions<R: Rng + ?Sized>(
    positions: &AlienPositions,
    world_map: &WorldMap,
    rng: &mut R,
) -> AlienPositions {
    let mut next_positions = AlienPositions::new();

    for (alien, city) in positions {
        let roads: Vec<&City> = world_map
            .neighbors(city)
            .iter()
            .map(|(_, target)| target)
            .collect();

        // no roads: the alien is trapped
        let next = roads.choose(rng).copied().unwrap_or(city);
        next_positions.insert(alien.clone(), next.clone());
    }

    next_positions
}
