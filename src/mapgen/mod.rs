//! Grid-based world map generation
//!
//! Cities are scattered over a `height x width` grid. Two cities in the same
//! row or column with no other city between them are joined by a road.

mod city_names;
mod dot;

use log::debug;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

use crate::config::GridConfig;
use crate::error::{ConfigError, Result};
use crate::simulation::{City, Direction, Neighbors, WorldMap};

pub use city_names::CITY_NAMES;
pub use dot::{highlight_cities, DotGraph};

/// Row and column of a grid cell
pub type Cell = (usize, usize);

/// A generated map together with the grid cell of every city
#[derive(Debug, Clone)]
pub struct GridMap {
    grid: Vec<Vec<Option<City>>>,
    world_map: WorldMap,
    cells: HashMap<City, Cell>,
}

impl GridMap {
    /// Generate a map with `cities` cities on a `height x width` grid
    pub fn generate<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        cities: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if height.checked_mul(width).map_or(true, |cells| cells < cities) {
            return Err(ConfigError::GridTooSmall {
                cities,
                height,
                width,
            }
            .into());
        }

        let names = city_names(cities)?;
        let grid = place_cities(height, width, names, rng);

        let mut world_map = WorldMap::new();
        let mut cells = HashMap::new();
        for (row, line) in grid.iter().enumerate() {
            for (col, slot) in line.iter().enumerate() {
                if let Some(city) = slot {
                    world_map.insert(city.clone(), find_neighbors(&grid, row, col));
                    cells.insert(city.clone(), (row, col));
                }
            }
        }

        debug!(
            "Generated {} cities on a {}x{} grid",
            world_map.len(),
            height,
            width
        );

        Ok(Self {
            grid,
            world_map,
            cells,
        })
    }

    /// Generate a map from generation settings
    pub fn from_config<R: Rng + ?Sized>(config: &GridConfig, rng: &mut R) -> Result<Self> {
        Self::generate(config.height, config.width, config.cities, rng)
    }

    pub fn world_map(&self) -> &WorldMap {
        &self.world_map
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// City placed at `cell`, if any
    pub fn city_at(&self, (row, col): Cell) -> Option<&City> {
        self.grid.get(row)?.get(col)?.as_ref()
    }

    /// Grid cell of `city`
    pub fn cell_of(&self, city: &City) -> Option<Cell> {
        self.cells.get(city).copied()
    }
}

/// The generated map in the map file format
impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.world_map, f)
    }
}

/// The first `count` names of the city name pool
fn city_names(count: usize) -> Result<Vec<City>> {
    if count > CITY_NAMES.len() {
        return Err(ConfigError::CityNamesExhausted {
            requested: count,
            available: CITY_NAMES.len(),
        }
        .into());
    }
    Ok(CITY_NAMES[..count].iter().map(|&name| City::from(name)).collect())
}

/// Put every city on a random free cell.
///
/// Cells are drawn until a free one turns up, which gets slow when the grid
/// is almost full.
fn place_cities<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    cities: Vec<City>,
    rng: &mut R,
) -> Vec<Vec<Option<City>>> {
    let mut grid = vec![vec![None; width]; height];

    for city in cities {
        loop {
            let row = rng.random_range(0..height);
            let col = rng.random_range(0..width);
            if grid[row][col].is_none() {
                grid[row][col] = Some(city);
                break;
            }
        }
    }

    grid
}

/// Nearest city in each direction along the row and column of `(row, col)`
fn find_neighbors(grid: &[Vec<Option<City>>], row: usize, col: usize) -> Neighbors {
    let width = grid[row].len();
    let column = |r: usize| grid[r][col].clone();
    let in_row = |c: usize| grid[row][c].clone();

    let mut neighbors = Neighbors::new();
    neighbors.set(Direction::North, (0..row).rev().find_map(column));
    neighbors.set(Direction::South, (row + 1..grid.len()).find_map(column));
    neighbors.set(Direction::East, (col + 1..width).find_map(in_row));
    neighbors.set(Direction::West, (0..col).rev().find_map(in_row));
    neighbors
}
