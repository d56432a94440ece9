//! Simulation controller
//!
//! Owns the simulation state and drives the step loop until a stop condition
//! holds: the iteration limit is reached, every alien is dead, or every city
//! is destroyed.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::movement::next_positions;
use super::placement::place_aliens;
use super::rules::{evaluate_rules, Destruction};
use super::types::AlienPositions;
use super::world_map::WorldMap;
use crate::config::RunConfig;
use crate::error::{ConfigError, Result};

/// State of one alien invasion
pub struct Simulation {
    iteration: usize,
    iteration_limit: usize,

    /// Shrinks as cities are destroyed; never shares storage with the caller's map
    world_map: WorldMap,

    /// Shrinks as aliens die
    alien_positions: AlienPositions,

    /// Every destruction so far, in the order it happened
    destroyed: Vec<Destruction>,

    rng: StdRng,
}

impl Simulation {
    fn new_internal(
        iteration_limit: usize,
        world_map: &WorldMap,
        alien_positions: AlienPositions,
        rng: StdRng,
    ) -> Self {
        Self {
            iteration: 0,
            iteration_limit,
            world_map: world_map.clone(),
            alien_positions,
            destroyed: Vec::new(),
            rng,
        }
    }

    /// Create a simulation with aliens placed at random on a copy of `world_map`
    pub fn new(iteration_limit: usize, alien_count: usize, world_map: &WorldMap) -> Result<Self> {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_rng(iteration_limit, alien_count, world_map, rng)
    }

    /// Create a simulation with a seeded RNG for reproducible invasions
    pub fn new_with_seed(
        iteration_limit: usize,
        alien_count: usize,
        world_map: &WorldMap,
        seed: u64,
    ) -> Result<Self> {
        let rng = StdRng::seed_from_u64(seed);
        Self::with_rng(iteration_limit, alien_count, world_map, rng)
    }

    /// Create a simulation from run configuration
    pub fn from_config(config: &RunConfig, world_map: &WorldMap) -> Result<Self> {
        match config.seed {
            Some(seed) => {
                Self::new_with_seed(config.iteration_limit, config.alien_count, world_map, seed)
            }
            None => Self::new(config.iteration_limit, config.alien_count, world_map),
        }
    }

    /// Create a simulation with aliens already in place instead of placed at random
    pub fn with_positions(
        iteration_limit: usize,
        world_map: &WorldMap,
        alien_positions: AlienPositions,
        seed: u64,
    ) -> Result<Self> {
        if world_map.is_empty() {
            return Err(ConfigError::EmptyMap.into());
        }
        let rng = StdRng::seed_from_u64(seed);
        Ok(Self::new_internal(iteration_limit, world_map, alien_positions, rng))
    }

    fn with_rng(
        iteration_limit: usize,
        alien_count: usize,
        world_map: &WorldMap,
        mut rng: StdRng,
    ) -> Result<Self> {
        if world_map.is_empty() {
            return Err(ConfigError::EmptyMap.into());
        }
        let alien_positions = place_aliens(alien_count, world_map, &mut rng)?;
        debug!(
            "Placed {} aliens on {} cities",
            alien_positions.len(),
            world_map.len()
        );
        Ok(Self::new_internal(iteration_limit, world_map, alien_positions, rng))
    }

    /// Run steps until a stop condition holds and return the surviving map
    pub fn run(&mut self) -> WorldMap {
        info!("Alien invasion started!");

        while !self.should_stop() {
            self.step();
        }

        info!("Alien invasion finished!");

        self.world_map.clone()
    }

    /// True once the iteration limit is reached or no aliens or cities remain
    pub fn should_stop(&self) -> bool {
        self.iteration >= self.iteration_limit
            || self.alien_positions.is_empty()
            || self.world_map.is_empty()
    }

    /// Move every alien once and let them fight.
    ///
    /// On the very first step the initial placement is evaluated before
    /// anyone moves, so aliens dropped into the same city fight at once.
    pub fn step(&mut self) {
        if self.iteration == 0 {
            self.evaluate_rules();
        }

        self.alien_positions = next_positions(&self.alien_positions, &self.world_map, &mut self.rng);
        self.evaluate_rules();
        self.iteration += 1;

        debug!(
            "Iteration {}: {} aliens, {} cities left",
            self.iteration,
            self.alien_positions.len(),
            self.world_map.len()
        );
    }

    fn evaluate_rules(&mut self) {
        let destructions = evaluate_rules(&mut self.alien_positions, &mut self.world_map);
        for destruction in destructions {
            info!("{}", destruction);
            self.destroyed.push(destruction);
        }
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn iteration_limit(&self) -> usize {
        self.iteration_limit
    }

    pub fn world_map(&self) -> &WorldMap {
        &self.world_map
    }

    pub fn alien_positions(&self) -> &AlienPositions {
        &self.alien_positions
    }

    pub fn destroyed(&self) -> &[Destruction] {
        &self.destroyed
    }

    /// Log the current state of the invasion
    pub fn log_summary(&self) {
        info!("=== INVASION SUMMARY ===");
        info!("Iterations: {}/{}", self.iteration, self.iteration_limit);
        info!("Aliens remaining: {}", self.alien_positions.len());
        info!("Cities remaining: {}", self.world_map.len());
        info!("Cities destroyed: {}", self.destroyed.len());
    }
}
