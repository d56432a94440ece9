//! Run and map generation settings

/// Default number of simulation steps before the invasion is called off
pub const DEFAULT_ITERATION_LIMIT: usize = 10_000;
pub const DEFAULT_ALIEN_COUNT: usize = 50;

pub const DEFAULT_GRID_HEIGHT: usize = 5;
pub const DEFAULT_GRID_WIDTH: usize = 5;
pub const DEFAULT_CITY_COUNT: usize = 20;

/// Settings for a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub iteration_limit: usize,
    pub alien_count: usize,
    /// Seed for reproducible runs; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            alien_count: DEFAULT_ALIEN_COUNT,
            seed: None,
        }
    }
}

/// Settings for grid map generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    pub height: usize,
    pub width: usize,
    pub cities: usize,
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_GRID_HEIGHT,
            width: DEFAULT_GRID_WIDTH,
            cities: DEFAULT_CITY_COUNT,
            seed: None,
        }
    }
}
