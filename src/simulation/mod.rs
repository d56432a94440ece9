//! Invasion simulation core
//!
//! The world map model and the engine that advances it step by step: alien
//! placement, movement and the fight rule. Loading maps from disk and
//! generating them live outside this module.

mod engine;
mod movement;
mod names;
mod placement;
mod rules;
mod types;
mod world_map;

pub use engine::Simulation;
pub use movement::next_positions;
pub use names::{alien_names, ALIEN_NAMES, NAMED_ALIENS_LIMIT};
pub use placement::place_aliens;
pub use rules::{evaluate_rules, Destruction};
pub use types::{Alien, AlienPositions, City, Direction, Neighbors};
pub use world_map::WorldMap;
