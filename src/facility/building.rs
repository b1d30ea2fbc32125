//! Building management and floor organization
//!
//! This module contains the Building struct, which owns an ordered list of
//! floors numbered contiguously from 1.

use crate::facility::error::{FacilityError, FacilityResult};
use crate::facility::floor::Floor;
use crate::types::RoomType;
use std::fmt;
use tracing::{debug, info};

/// Represents a building made of floors
#[derive(Debug, Clone)]
pub struct Building {
    name: String,
    floors: Vec<Floor>,
}

impl Building {
    /// Create a building with no floors
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), floors: Vec::new() }
    }

    /// Human-readable name of the building
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Floors in insertion order
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Look up a floor by number
    pub fn floor(&self, number: u32) -> Option<&Floor> {
        self.floors.iter().find(|f| f.number() == number)
    }

    /// Look up a floor by number for mutation
    pub fn floor_mut(&mut self, number: u32) -> Option<&mut Floor> {
        self.floors.iter_mut().find(|f| f.number() == number)
    }

    /// Total number of rooms over all floors
    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|f| f.rooms().len()).sum()
    }

    /// Add a floor on top of the existing ones
    ///
    /// Floors are added from the ground up: floor `n` needs floor `n - 1`
    /// to exist already, unless `n` is 1.
    pub fn add_floor(&mut self, floor: Floor) -> FacilityResult<()> {
        let number = floor.number();
        if self.floor(number).is_some() {
            return Err(FacilityError::DuplicateFloor(number));
        }
        if number > 1 && self.floor(number - 1).is_none() {
            return Err(FacilityError::NoFloorBelow(number));
        }

        debug!(building = %self.name, floor = number, "Floor added");
        self.floors.push(floor);
        Ok(())
    }

    /// Start a fire drill on every floor
    ///
    /// Only rooms of `room_type` are affected when one is given. Fails when
    /// the building has no floors or no rooms.
    pub fn fire_drill(&mut self, room_type: Option<RoomType>) -> FacilityResult<()> {
        if self.floors.is_empty() {
            return Err(FacilityError::fire_drill(format!(
                "Building \"{}\" has no floors",
                self.name
            )));
        }
        if self.room_count() == 0 {
            return Err(FacilityError::fire_drill(format!(
                "Building \"{}\" has no rooms",
                self.name
            )));
        }

        for floor in &mut self.floors {
            floor.fire_drill(room_type);
        }
        info!(building = %self.name, room_type = ?room_type, "Fire drill started");
        Ok(())
    }

    /// End any fire drill in the building
    pub fn cancel_fire_drill(&mut self) {
        for floor in &mut self.floors {
            floor.cancel_fire_drill();
        }
    }
}

impl PartialEq for Building {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.floors.len() == other.floors.len()
            && self.floors.iter().all(|f| other.floors.contains(f))
            && other.floors.iter().all(|f| self.floors.contains(f))
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Building: name=\"{}\", floors={}", self.name, self.floors.len())
    }
}
