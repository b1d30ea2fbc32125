//! Simulation orchestration and control
//!
//! This module contains the simulation clock, the orchestrator that keeps it
//! in step with the buildings, statistics, logging setup and error handling.
//!
//! # Overview
//!
//! - **SimulationClock**: Ordered handles to sensors and maintenance schedules,
//!   advanced one simulated minute at a time
//! - **Simulation**: Owns buildings and clock, registers new timed entities
//! - **SimulationStatistics**: Serialisable snapshot of a run
//! - **LoggingConfig**: Tracing subscriber setup for the binary
//! - **SimulationError**: Errors of the driver layer
//!
//! # Usage Example
//!
//! ```rust
//! use building_management_simulator::facility::BuildingGenerator;
//! use building_management_simulator::simulation::*;
//! use chrono::Utc;
//!
//! let building = BuildingGenerator::with_seed(42).generate_building("Hawken", 2, 3)?;
//! let mut simulation = Simulation::new(Utc::now());
//! simulation.add_building(building);
//!
//! simulation.run(60);
//! let stats = simulation.statistics();
//! assert_eq!(stats.minutes_elapsed, 60);
//! assert_eq!(stats.total_rooms, 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clock;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod statistics;

// Re-export all public types for convenience
pub use clock::*;
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use statistics::*;
