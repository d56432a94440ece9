//! Reading and writing world map files

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::simulation::WorldMap;

/// Read and parse a world map. The map structure is not validated.
pub fn load(path: impl AsRef<Path>) -> Result<WorldMap> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let world_map: WorldMap = text.parse()?;
    debug!("Loaded {} cities from {}", world_map.len(), path.display());
    Ok(world_map)
}

/// Write a world map in the map file format
pub fn save(path: impl AsRef<Path>, world_map: &WorldMap) -> Result<()> {
    write_text(path, &world_map.to_string())
}

/// Create or truncate `path` and write `text` to it
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}
