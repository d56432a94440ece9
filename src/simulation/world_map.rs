//! World map: cities and the roads between them
//!
//! The map is an adjacency list keyed by city name. Roads are directed and
//! labelled with a compass direction; reciprocity is common but not required.
//! A road may point at a city that has no entry of its own (a dangling road);
//! such roads are followed like any other.

use petgraph::algo::connected_components;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use super::types::{City, Direction, Neighbors};
use crate::error::ParseError;

static NO_NEIGHBORS: Neighbors = Neighbors::new();

/// Cities and their outgoing roads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldMap {
    cities: BTreeMap<City, Neighbors>,
}

impl WorldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a city together with its roads
    pub fn insert(&mut self, city: impl Into<City>, neighbors: Neighbors) {
        self.cities.insert(city.into(), neighbors);
    }

    /// Roads leaving `city`. Unknown cities have no roads.
    pub fn neighbors(&self, city: &City) -> &Neighbors {
        self.cities.get(city).unwrap_or(&NO_NEIGHBORS)
    }

    pub fn contains(&self, city: &City) -> bool {
        self.cities.contains_key(city)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City names in sorted order
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&City, &Neighbors)> + '_ {
        self.cities.iter()
    }

    /// Remove a city and every road leading to it.
    ///
    /// There is no reverse index, so every remaining city is scanned.
    /// Removing an unknown city still clears dangling roads pointing at it.
    pub fn remove_city(&mut self, city: &City) -> Option<Neighbors> {
        let removed = self.cities.remove(city);
        for neighbors in self.cities.values_mut() {
            neighbors.clear_references_to(city);
        }
        removed
    }

    /// Cities of `initial` that no longer exist in this map, sorted by name
    pub fn destroyed_since(&self, initial: &WorldMap) -> Vec<City> {
        initial
            .cities()
            .filter(|city| !self.contains(city))
            .cloned()
            .collect()
    }

    /// Export the map as a directed graph with one edge per road
    ///
    /// Targets of dangling roads become nodes as well.
    pub fn to_graph(&self) -> (DiGraph<City, Direction>, HashMap<City, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<City, NodeIndex> = HashMap::new();

        for city in self.cities.keys() {
            let index = graph.add_node(city.clone());
            nodes.insert(city.clone(), index);
        }

        for (city, neighbors) in &self.cities {
            let from = nodes[city];
            for (direction, target) in neighbors.iter() {
                let to = *nodes
                    .entry(target.clone())
                    .or_insert_with(|| graph.add_node(target.clone()));
                graph.add_edge(from, to, direction);
            }
        }

        (graph, nodes)
    }

    /// Every city an alien starting at `start` could ever visit, `start` included
    pub fn reachable_from(&self, start: &City) -> BTreeSet<City> {
        let (graph, nodes) = self.to_graph();
        let mut reachable = BTreeSet::new();

        let Some(&start_node) = nodes.get(start) else {
            return reachable;
        };

        let mut bfs = Bfs::new(&graph, start_node);
        while let Some(node) = bfs.next(&graph) {
            reachable.insert(graph[node].clone());
        }
        reachable
    }

    /// Number of weakly connected regions (isolated cities count as one each)
    pub fn region_count(&self) -> usize {
        let (graph, _) = self.to_graph();
        connected_components(&graph)
    }
}

impl FromIterator<(City, Neighbors)> for WorldMap {
    fn from_iter<I: IntoIterator<Item = (City, Neighbors)>>(iter: I) -> Self {
        Self {
            cities: iter.into_iter().collect(),
        }
    }
}

/// Serialize to the map file format, one line per city:
/// `<city>[ north=<city>][ south=<city>][ east=<city>][ west=<city>]`
impl fmt::Display for WorldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (city, neighbors) in &self.cities {
            write!(f, "{}", city)?;
            for (direction, target) in neighbors.iter() {
                write!(f, " {}={}", direction, target)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for WorldMap {
    type Err = ParseError;

    /// Parse the map file format. The structure of the map (reciprocity,
    /// dangling roads) is not validated.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut world_map = WorldMap::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split(' ');
            let city = parts.next().unwrap_or_default();
            if city.is_empty() || city.contains('=') {
                return Err(ParseError::LineWithoutCity { line: line_number });
            }

            let mut neighbors = Neighbors::new();
            for part in parts {
                let road: Vec<&str> = part.split('=').collect();
                let [keyword, target] = road.as_slice() else {
                    return Err(ParseError::InvalidRoad {
                        line: line_number,
                        road: part.to_string(),
                    });
                };

                if let Some(direction) = Direction::from_keyword(keyword) {
                    let target = (!target.is_empty()).then(|| City::new(*target));
                    neighbors.set(direction, target);
                }
            }

            world_map.insert(city, neighbors);
        }

        Ok(world_map)
    }
}
