//! Error types and handling
//!
//! This module contains the error type for the simulation driver, which wraps
//! the facility and save format errors together with I/O and configuration
//! problems.

use crate::facility::FacilityError;
use crate::format::FormatError;
use thiserror::Error;

/// Errors that can occur while loading, running or saving a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Save file could not be read
    #[error(transparent)]
    FormatError(#[from] FormatError),

    /// A model operation was rejected
    #[error("Facility error: {0}")]
    FacilityError(#[from] FacilityError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A building, floor, room or sensor does not exist
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create an unknown entity error
    pub fn unknown_entity(msg: impl Into<String>) -> Self {
        Self::UnknownEntity(msg.into())
    }

    /// Check if this is a recoverable error
    ///
    /// A rejected model operation or a missing entity leaves the simulation
    /// intact; anything else means the run cannot go on.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::ConfigurationError(_) => false,
            SimulationError::IoError(_) => false,
            SimulationError::FormatError(_) => false,
            SimulationError::FacilityError(_) => true,
            SimulationError::SerializationError(_) => true,
            SimulationError::UnknownEntity(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::IoError(_) => "IO",
            SimulationError::FormatError(_) => "Format",
            SimulationError::FacilityError(e) => e.category(),
            SimulationError::SerializationError(_) => "Serialization",
            SimulationError::UnknownEntity(_) => "Unknown Entity",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
