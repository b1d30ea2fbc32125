//! Buildings, floors and rooms
//!
//! This module holds the building model and the operations that change it.
//! Every mutator checks its preconditions first and leaves the model
//! untouched when it fails.
//!
//! # Overview
//!
//! The facility module provides a hierarchical model of a building:
//!
//! - **Building**: Floors numbered contiguously from 1
//! - **Floor**: Rooms that fit within the floor's footprint, plus an optional
//!   maintenance schedule
//! - **Room**: Sensors (at most one per kind), an optional hazard evaluator and
//!   fire drill and maintenance flags
//! - **MaintenanceSchedule**: Cyclic rotation over rooms of one floor
//! - **BuildingGenerator**: Random buildings for tests and demos
//! - **recommend_study_room**: Picks a comfortable open study room
//!
//! # Usage Example
//!
//! ```rust
//! use building_management_simulator::facility::*;
//! use building_management_simulator::sensors::TemperatureSensor;
//! use building_management_simulator::types::RoomType;
//!
//! let mut room = Room::new(101, RoomType::Study, 20.0)?;
//! room.add_sensor(TemperatureSensor::new(vec![22, 23])?)?;
//!
//! let mut floor = Floor::new(1, 10.0, 10.0)?;
//! floor.add_room(room)?;
//! floor.create_maintenance_schedule(vec![101])?;
//!
//! let mut building = Building::new("General Purpose South");
//! building.add_floor(floor)?;
//!
//! assert_eq!(recommend_study_room(&building).map(Room::number), Some(101));
//! # Ok::<(), FacilityError>(())
//! ```

pub mod building;
pub mod error;
pub mod floor;
pub mod generator;
pub mod maintenance;
pub mod recommender;
pub mod room;

// Re-export all public types for convenience
pub use building::Building;
pub use error::{FacilityError, FacilityResult};
pub use floor::Floor;
pub use generator::{BuildingGenerator, MAX_GENERATED_FLOORS, MAX_GENERATED_ROOMS};
pub use maintenance::MaintenanceSchedule;
pub use recommender::recommend_study_room;
pub use room::Room;
