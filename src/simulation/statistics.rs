//! Statistics collection and reporting
//!
//! A snapshot of the model and clock, taken on demand and serialisable for
//! the `--summary` output.

use crate::facility::Building;
use crate::simulation::clock::SimulationClock;
use crate::types::RoomState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a running simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStatistics {
    // Clock
    /// Simulated time the run started at
    pub start_time: DateTime<Utc>,
    /// Current simulated time
    pub current_time: DateTime<Utc>,
    /// Minutes simulated so far
    pub minutes_elapsed: u64,
    /// Number of handles registered with the clock
    pub registered_entities: usize,

    // Model
    /// Number of buildings
    pub total_buildings: usize,
    /// Number of floors over all buildings
    pub total_floors: usize,
    /// Number of rooms over all buildings
    pub total_rooms: usize,
    /// Number of installed sensors
    pub total_sensors: usize,
    /// Number of floors with a maintenance schedule
    pub maintenance_schedules: usize,

    // Room states
    /// Rooms that must be evacuated
    pub evacuating_rooms: usize,
    /// Rooms under maintenance
    pub rooms_under_maintenance: usize,
    /// Rooms open for use
    pub open_rooms: usize,
}

impl SimulationStatistics {
    /// Take a snapshot of the buildings and the clock
    pub fn collect(buildings: &[Building], clock: &SimulationClock) -> Self {
        let floors = || buildings.iter().flat_map(Building::floors);
        let rooms = || floors().flat_map(|f| f.rooms());
        let in_state = |state: RoomState| rooms().filter(|r| r.evaluate_room_state() == state).count();

        Self {
            start_time: clock.start_time(),
            current_time: clock.current_time(),
            minutes_elapsed: clock.minutes_elapsed(),
            registered_entities: clock.entities().len(),
            total_buildings: buildings.len(),
            total_floors: floors().count(),
            total_rooms: rooms().count(),
            total_sensors: rooms().map(|r| r.sensors().len()).sum(),
            maintenance_schedules: floors().filter(|f| f.maintenance_schedule().is_some()).count(),
            evacuating_rooms: in_state(RoomState::Evacuate),
            rooms_under_maintenance: in_state(RoomState::Maintenance),
            open_rooms: in_state(RoomState::Open),
        }
    }

    /// Print the statistics as pretty JSON to stdout
    pub fn print_json(&self) -> Result<(), serde_json::Error> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

impl fmt::Display for SimulationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Statistics:")?;
        writeln!(
            f,
            "  Time: {} minutes ({} -> {})",
            self.minutes_elapsed,
            self.start_time.to_rfc3339(),
            self.current_time.to_rfc3339()
        )?;
        writeln!(
            f,
            "  Model: {} buildings, {} floors, {} rooms, {} sensors",
            self.total_buildings, self.total_floors, self.total_rooms, self.total_sensors
        )?;
        writeln!(
            f,
            "  Timed entities: {} ({} maintenance schedules)",
            self.registered_entities, self.maintenance_schedules
        )?;
        write!(
            f,
            "  Rooms: {} open, {} under maintenance, {} evacuating",
            self.open_rooms, self.rooms_under_maintenance, self.evacuating_rooms
        )
    }
}
