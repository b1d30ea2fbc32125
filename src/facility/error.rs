//! Domain errors raised by facility mutators
//!
//! Every mutator checks its preconditions before touching any state, so an
//! error always leaves the model exactly as it was.

use crate::types::SensorKind;
use thiserror::Error;

/// Errors raised when a floor, room, sensor or evaluator operation would
/// break a model invariant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FacilityError {
    /// A floor with this number already exists in the building
    #[error("Duplicate floor: floor {0} already exists")]
    DuplicateFloor(u32),

    /// The floor directly below the new floor does not exist yet
    #[error("No floor below: floor {0} requires floor {below} first", below = .0.saturating_sub(1))]
    NoFloorBelow(u32),

    /// New floor dimensions cannot hold the rooms already on the floor
    #[error("Floor too small: new area {new_area:.2}m^2 is less than occupied area {occupied_area:.2}m^2")]
    FloorTooSmall {
        /// Area the floor would have after the change
        new_area: f64,
        /// Area currently occupied by rooms
        occupied_area: f64,
    },

    /// A room with this number already exists on the floor
    #[error("Duplicate room: room number {0} is already taken on this floor")]
    DuplicateRoom(u32),

    /// The floor does not have enough free area for the room
    #[error("Insufficient space to add room. Floor area: {floor_area:.2}m^2, Occupied area: {occupied_area:.2}m^2, This room: {room_area:.2}m^2")]
    InsufficientSpace {
        /// Total floor area
        floor_area: f64,
        /// Area already occupied by rooms
        occupied_area: f64,
        /// Area of the rejected room
        room_area: f64,
    },

    /// The room already has a sensor of this kind
    #[error("Duplicate sensor of type: {0}")]
    DuplicateSensor(SensorKind),

    /// An argument is outside its legal range or shape
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A fire drill could not be started
    #[error("Fire drill error: {0}")]
    FireDrill(String),
}

impl FacilityError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a fire drill error
    pub fn fire_drill(msg: impl Into<String>) -> Self {
        Self::FireDrill(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            FacilityError::DuplicateFloor(_) => "Duplicate Floor",
            FacilityError::NoFloorBelow(_) => "No Floor Below",
            FacilityError::FloorTooSmall { .. } => "Floor Too Small",
            FacilityError::DuplicateRoom(_) => "Duplicate Room",
            FacilityError::InsufficientSpace { .. } => "Insufficient Space",
            FacilityError::DuplicateSensor(_) => "Duplicate Sensor",
            FacilityError::InvalidArgument(_) => "Invalid Argument",
            FacilityError::FireDrill(_) => "Fire Drill",
        }
    }
}

/// Result type for facility operations
pub type FacilityResult<T> = Result<T, FacilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FacilityError::NoFloorBelow(3).to_string(),
            "No floor below: floor 3 requires floor 2 first"
        );
        assert_eq!(
            FacilityError::DuplicateSensor(SensorKind::Noise).to_string(),
            "Duplicate sensor of type: NoiseSensor"
        );
        let err = FacilityError::InsufficientSpace {
            floor_area: 25.0,
            occupied_area: 25.0,
            room_area: 5.0,
        };
        assert!(err.to_string().contains("Floor area: 25.00m^2"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(FacilityError::DuplicateFloor(1).category(), "Duplicate Floor");
        assert_eq!(FacilityError::invalid_argument("bad").category(), "Invalid Argument");
        assert_eq!(FacilityError::fire_drill("no rooms").category(), "Fire Drill");
        assert_eq!(
            FacilityError::FloorTooSmall { new_area: 1.0, occupied_area: 2.0 }.category(),
            "Floor Too Small"
        );
    }
}
