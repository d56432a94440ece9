//! Core types for the invasion simulation
//!
//! Cities and aliens are identified by name. A city's roads are stored as at
//! most one neighbor per compass direction.

use std::collections::BTreeMap;
use std::fmt;

/// A named location on the world map
///
/// Names are case-sensitive and never contain whitespace or `=`, both of
/// which are reserved by the map file format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct City(pub String);

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for City {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A named invader
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Alien(pub String);

impl Alien {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Alien {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Alien {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Current city of every alien still alive
pub type AlienPositions = BTreeMap<Alien, City>;

/// One of the four compass directions a road can lead in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in canonical (serialization) order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Keyword used in the map file format
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Parse a map file keyword. Unknown keywords yield `None`.
    pub fn from_keyword(keyword: &str) -> Option<Direction> {
        match keyword {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Roads leaving a city, at most one per direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub north: Option<City>,
    pub south: Option<City>,
    pub east: Option<City>,
    pub west: Option<City>,
}

impl Neighbors {
    pub const fn new() -> Self {
        Self {
            north: None,
            south: None,
            east: None,
            west: None,
        }
    }

    pub fn get(&self, direction: Direction) -> Option<&City> {
        match direction {
            Direction::North => self.north.as_ref(),
            Direction::South => self.south.as_ref(),
            Direction::East => self.east.as_ref(),
            Direction::West => self.west.as_ref(),
        }
    }

    pub fn set(&mut self, direction: Direction, city: Option<City>) {
        let slot = match direction {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        };
        *slot = city;
    }

    /// Builder-style variant of [`Neighbors::set`]
    pub fn with(mut self, direction: Direction, city: impl Into<City>) -> Self {
        self.set(direction, Some(city.into()));
        self
    }

    /// Present roads in canonical direction order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &City)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.get(direction).map(|city| (direction, city)))
    }

    /// Number of roads leaving the city
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// A city with no roads is isolated; aliens there are trapped
    pub fn is_isolated(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Clear every direction that points at `city`
    pub fn clear_references_to(&mut self, city: &City) {
        for direction in Direction::ALL {
            if self.get(direction) == Some(city) {
                self.set(direction, None);
            }
        }
    }
}
