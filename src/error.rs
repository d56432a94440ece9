//! Error types shared by the simulation, the map file format and map generation.

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, SimError>;

/// Top-level error returned by library operations
#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("error parsing map file: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Impossible parameters detected before a simulation or map exists
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("map cannot be empty")]
    EmptyMap,

    #[error("too many aliens requested ({requested}), only {available} names available")]
    AlienNamesExhausted { requested: usize, available: usize },

    #[error("maximum number of cities exceeded ({requested} requested, {available} available)")]
    CityNamesExhausted { requested: usize, available: usize },

    #[error("too many cities ({cities}) for provided map dimensions ({height}x{width})")]
    GridTooSmall {
        cities: usize,
        height: usize,
        width: usize,
    },
}

/// Malformed line in a persisted world map
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: line without city")]
    LineWithoutCity { line: usize },

    #[error("line {line}: invalid road: {road}")]
    InvalidRoad { line: usize, road: String },
}
