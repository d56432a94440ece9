//! Fight rules
//!
//! Two or more aliens in the same city fight. The city is destroyed along with
//! every road leading to it, and the aliens die in the fight.

use std::collections::BTreeMap;
use std::fmt;

use super::types::{Alien, AlienPositions, City};
use super::world_map::WorldMap;

/// A city destroyed in a fight, with the aliens that destroyed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destruction {
    pub city: City,
    pub aliens: Vec<Alien>,
}

impl fmt::Display for Destruction {
    /// `Pinson has been destroyed by Zorg, Xylox and Quazar!`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.aliens.iter().map(Alien::as_str).collect();
        let culprits = match names.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
            Some((last, _)) => last.to_string(),
            None => String::new(),
        };
        write!(f, "{} has been destroyed by {}!", self.city, culprits)
    }
}

/// Destroy every city holding two or more aliens, together with those aliens.
///
/// Occupancy is counted from a single snapshot before anything is removed, so
/// destruction never cascades within one evaluation.
pub fn evaluate_rules(positions: &mut AlienPositions, world_map: &mut WorldMap) -> Vec<Destruction> {
    let mut occupants: BTreeMap<City, Vec<Alien>> = BTreeMap::new();
    for (alien, city) in positions.iter() {
        occupants.entry(city.clone()).or_default().push(alien.clone());
    }

    let destructions: Vec<Destruction> = occupants
        .into_iter()
        .filter(|(_, aliens)| aliens.len() >= 2)
        .map(|(city, aliens)| Destruction { city, aliens })
        .collect();

    for destruction in &destructions {
        for alien in &destruction.aliens {
            positions.remove(alien);
        }
        world_map.remove_city(&destruction.city);
    }

    destructions
}
