//! The line-oriented save format
//!
//! Buildings are saved as plain text, one building after another, with no
//! blank lines. Nesting is implied by the shape of each line.
//!
//! # Overview
//!
//! ```text
//! buildingName
//! floorCount
//! floorNumber:width:length:roomCount[:room,room,...]
//! roomNumber:TYPE:area:sensorCount[:RuleBased|WeightingBased]
//! TemperatureSensor:r1,r2,...[@weight]
//! NoiseSensor:r1,r2,...:frequency[@weight]
//! OccupancySensor:r1,r2,...:frequency:capacity[@weight]
//! CarbonDioxideSensor:r1,r2,...:frequency:idealPPM:variationLimit[@weight]
//! ```
//!
//! Widths, lengths and areas are written with two decimal places.
//!
//! # Usage Example
//!
//! ```rust
//! use building_management_simulator::format::{encode_buildings, parse_buildings};
//!
//! let lines = [
//!     "Hawken",
//!     "1",
//!     "1:10.00:10.00:1:101",
//!     "101:STUDY:20.00:1",
//!     "TemperatureSensor:24,25,26",
//! ];
//! let buildings = parse_buildings(&lines)?;
//! assert_eq!(buildings[0].floors().len(), 1);
//! assert_eq!(encode_buildings(&buildings), lines);
//! # Ok::<(), building_management_simulator::format::FormatError>(())
//! ```

pub mod encoder;
pub mod error;
pub mod parser;

pub use encoder::{encode_building, encode_buildings, encode_floor, encode_room, encode_sensor};
pub use error::{FormatError, FormatResult};
pub use parser::parse_buildings;

use crate::facility::Building;
use crate::simulation::error::SimulationResult;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read every building saved in a file
pub fn read_buildings_file(path: impl AsRef<Path>) -> SimulationResult<Vec<Building>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let lines: Vec<&str> = contents.lines().collect();
    let buildings = parse_buildings(&lines)?;
    info!(path = %path.display(), buildings = buildings.len(), "Loaded buildings");
    Ok(buildings)
}

/// Save buildings to a file, replacing its contents
///
/// Lines are separated by newlines, with no newline after the last one.
pub fn write_buildings_file(path: impl AsRef<Path>, buildings: &[Building]) -> SimulationResult<()> {
    let path = path.as_ref();
    fs::write(path, encode_buildings(buildings).join("\n"))?;
    info!(path = %path.display(), buildings = buildings.len(), "Saved buildings");
    Ok(())
}
