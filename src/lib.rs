//! Building Management Simulator
//!
//! A discrete-time simulation of buildings, their floors and rooms, and the
//! environmental sensors installed in those rooms.
//!
//! # Overview
//!
//! Buildings are made of numbered floors, floors of numbered rooms. Rooms carry
//! at most one sensor of each kind and optionally a hazard evaluator. Sensors
//! replay cyclic buffers of readings as simulated minutes pass, and floors can
//! rotate maintenance through their rooms. From these the simulator derives
//! room states, hazard levels and comfort levels, and recommends study rooms.
//!
//! ## Key Features
//!
//! - **Sensor Modeling**: Temperature, occupancy, noise and CO2 sensors with
//!   hazard and comfort formulas
//! - **Hazard Evaluation**: Rule-based and weighting-based evaluators
//! - **Floor Management**: Space checks, fire drills and maintenance rotations
//! - **Save Format**: A line-based text format with a strict parser and encoder
//! - **Simulation Clock**: Minute-by-minute ticking of every timed entity
//! - **Generation**: Random, reproducible buildings for testing and demos
//!
//! ## Quick Start
//!
//! ```rust
//! use building_management_simulator::*;
//! use chrono::Utc;
//!
//! let lines = [
//!     "Hawken",
//!     "1",
//!     "1:10.00:10.00:1",
//!     "101:STUDY:20.00:1",
//!     "TemperatureSensor:24,25,26",
//! ];
//! let buildings = parse_buildings(&lines)?;
//!
//! let mut simulation = Simulation::with_buildings(Utc::now(), buildings);
//! simulation.run(1);
//!
//! let room = simulation.recommend_study_room(0).unwrap();
//! assert_eq!(room.number(), 101);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Enumerations and configuration
//! - [`sensors`]: Timed sensors and their hazard and comfort levels
//! - [`hazard`]: Hazard evaluators
//! - [`facility`]: Rooms, floors, buildings, maintenance and generation
//! - [`format`]: The save format parser and encoder
//! - [`simulation`]: Clock, orchestration, statistics and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Sensors   │    │   Hazard    │
//! │             │    │             │    │             │
//! │ Enums       │◄───┤ Timed       │◄───┤ Rule-based  │
//! │ Config      │    │ Kinds       │    │ Weighting   │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │ Simulation  │    │   Format    │    │  Facility   │
//! │             │    │             │    │             │
//! │ Clock       │───►│ Parser      │───►│ Buildings   │
//! │ Statistics  │    │ Encoder     │    │ Floors      │
//! │ Logging     │    │             │    │ Rooms       │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod facility;
pub mod format;
pub mod hazard;
pub mod sensors;
pub mod simulation;
pub mod types;

// Core types
pub use types::{
    CliArgs, ConfigError, ConfigValidationError, RoomState, RoomType, SensorKind,
    SimulationConfig,
};

// Sensors and hazard evaluation
pub use hazard::{HazardEvaluator, RuleBasedHazardEvaluator, WeightingBasedHazardEvaluator};
pub use sensors::{
    CarbonDioxideSensor, ComfortSensor, HazardSensor, NoiseSensor, OccupancySensor, Sensor,
    TemperatureSensor, Timed,
};

// Facility types and functionality
pub use facility::{
    recommend_study_room, Building, BuildingGenerator, FacilityError, Floor, MaintenanceSchedule,
    Room,
};

// Save format
pub use format::{
    encode_buildings, parse_buildings, read_buildings_file, write_buildings_file, FormatError,
};

// Simulation types and functionality
pub use simulation::{
    LoggingConfig, Simulation, SimulationClock, SimulationError, SimulationStatistics, TimedEntity,
};
