//! Environmental sensors
//!
//! This module contains the sensors that rooms carry. Every sensor replays a
//! cyclic buffer of readings as simulated time passes and turns its current
//! reading into hazard and comfort levels.
//!
//! # Overview
//!
//! - **TimedSensor**: Reading buffer and update cadence shared by all kinds
//! - **TemperatureSensor**, **OccupancySensor**, **NoiseSensor**,
//!   **CarbonDioxideSensor**: The concrete kinds and their formulas
//! - **Sensor**: Closed enum over the kinds, used wherever a room stores sensors
//!
//! # Usage Example
//!
//! ```rust
//! use building_management_simulator::sensors::*;
//!
//! let mut sensor: Sensor = TemperatureSensor::new(vec![24, 25, 26]).unwrap().into();
//! assert_eq!(sensor.current_reading(), 24);
//!
//! sensor.elapse_one_minute();
//! assert_eq!(sensor.current_reading(), 25);
//! assert_eq!(sensor.hazard_level(), 0);
//! ```

pub mod kinds;
pub mod sensor;
pub mod timed;

// Re-export all public types for convenience
pub use kinds::{
    CarbonDioxideSensor, ComfortSensor, HazardSensor, NoiseSensor, OccupancySensor,
    TemperatureSensor,
};
pub use sensor::Sensor;
pub use timed::{Timed, TimedSensor};
