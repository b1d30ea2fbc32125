//! Core types and configuration for the building simulator
//!
//! This module contains the enumerations and configuration structures used
//! throughout the simulation system.
//!
//! # Overview
//!
//! - **Enums**: Room types, derived room states and sensor kinds
//! - **Configuration**: Command line arguments, config files and validation
//!
//! # Usage Example
//!
//! ```rust
//! use building_management_simulator::types::*;
//!
//! let room_type: RoomType = "LABORATORY".parse().unwrap();
//! assert_eq!(room_type.maintenance_multiplier(), 2.0);
//! assert_eq!(SensorKind::Noise.tag(), "NoiseSensor");
//!
//! let config = SimulationConfig {
//!     generate_floors: Some(3),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
