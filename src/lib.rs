//! Alien Invasion Simulation Library
//!
//! Aliens wander a map of cities connected by roads. Whenever two or more of
//! them meet in a city they fight, destroying the city and themselves.

pub mod config;
pub mod error;
pub mod map_file;
pub mod mapgen;
pub mod simulation;
