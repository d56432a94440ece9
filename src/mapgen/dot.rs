//! Graphviz (dot) rendering of generated maps
//!
//! Every grid cell becomes a node named `N<row>_<col>`. Invisible edges keep
//! the nodes aligned on the grid, empty cells are hidden, and roads are drawn
//! as solid edges between city nodes.

use std::collections::HashSet;
use std::fmt;

use super::{Cell, GridMap};
use crate::simulation::City;

/// Dot document for a [`GridMap`], rendered through `Display`
pub struct DotGraph<'a> {
    map: &'a GridMap,
}

impl GridMap {
    pub fn dot_graph(&self) -> DotGraph<'_> {
        DotGraph { map: self }
    }
}

fn node((row, col): Cell) -> String {
    format!("N{}_{}", row, col)
}

impl fmt::Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let height = self.map.height();
        let width = self.map.width();

        writeln!(f, "graph world {{")?;
        writeln!(f, "    node [shape=box, style=filled, fillcolor=\"white\"];")?;
        writeln!(f, "    splines=false;")?;
        writeln!(f)?;

        // grid skeleton
        writeln!(f, "    edge [style=invis];")?;
        for col in 0..width {
            let column: Vec<String> = (0..height).map(|row| node((row, col))).collect();
            writeln!(f, "    {}", column.join(" -- "))?;
        }
        for row in 0..height {
            let line: Vec<String> = (0..width).map(|col| node((row, col))).collect();
            writeln!(f, "    rank=same {{{}}}", line.join(" -- "))?;
        }
        writeln!(f)?;

        for row in 0..height {
            for col in 0..width {
                if self.map.city_at((row, col)).is_none() {
                    writeln!(f, "    {} [style=invis]", node((row, col)))?;
                }
            }
        }
        writeln!(f)?;

        // A road to a city that was already drawn is its reciprocal and is skipped.
        let mut drawn: HashSet<&City> = HashSet::new();
        for row in 0..height {
            for col in 0..width {
                let Some(city) = self.map.city_at((row, col)) else {
                    continue;
                };
                for (_, target) in self.map.world_map().neighbors(city).iter() {
                    if drawn.contains(target) {
                        continue;
                    }
                    if let Some(target_cell) = self.map.cell_of(target) {
                        writeln!(
                            f,
                            "    {} -- {} [style=solid]",
                            node((row, col)),
                            node(target_cell)
                        )?;
                    }
                }
                drawn.insert(city);
            }
        }
        writeln!(f)?;

        for row in 0..height {
            for col in 0..width {
                if let Some(city) = self.map.city_at((row, col)) {
                    writeln!(f, "    {} [label=\"{}\"]", node((row, col)), city)?;
                }
            }
        }

        writeln!(f, "}}")
    }
}

/// Fill the nodes labelled with `cities` in red.
///
/// This is a textual patch of `[label="<city>"]` attributes: only the first
/// occurrence of each label is touched and the graph structure is not parsed.
pub fn highlight_cities(dot: &str, cities: &[City]) -> String {
    let mut patched = dot.to_string();
    for city in cities {
        let old_attrs = format!("[label=\"{}\"]", city);
        let new_attrs = format!("[label=\"{}\", fillcolor=\"red\"]", city);
        patched = patched.replacen(&old_attrs, &new_attrs, 1);
    }
    patched
}
