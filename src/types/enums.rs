//! Enumeration types for the building simulator
//!
//! This module contains the enumeration types used throughout the simulator,
//! including room types, aggregate room states and sensor kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Intended purpose of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    /// Quiet study space
    Study,
    /// Office space
    Office,
    /// Laboratory space
    Laboratory,
}

impl RoomType {
    /// All room types, in declaration order
    pub const ALL: [RoomType; 3] = [RoomType::Study, RoomType::Office, RoomType::Laboratory];

    /// Multiplier applied to the extra area of a room when computing how long
    /// its maintenance takes
    pub fn maintenance_multiplier(&self) -> f64 {
        match self {
            RoomType::Study => 1.0,
            RoomType::Office => 1.5,
            RoomType::Laboratory => 2.0,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Study => write!(f, "STUDY"),
            RoomType::Office => write!(f, "OFFICE"),
            RoomType::Laboratory => write!(f, "LABORATORY"),
        }
    }
}

impl FromStr for RoomType {
    type Err = String;

    // Case sensitive: the save format only ever contains the upper-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STUDY" => Ok(RoomType::Study),
            "OFFICE" => Ok(RoomType::Office),
            "LABORATORY" => Ok(RoomType::Laboratory),
            _ => Err(format!("Unknown room type: {}", s)),
        }
    }
}

/// Aggregate state of a room, derived on demand from its sensors and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomState {
    /// Occupants must leave (fire drill or dangerous temperature)
    Evacuate,
    /// Maintenance is being carried out
    Maintenance,
    /// Open for normal use
    Open,
}

impl fmt::Display for RoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomState::Evacuate => write!(f, "EVACUATE"),
            RoomState::Maintenance => write!(f, "MAINTENANCE"),
            RoomState::Open => write!(f, "OPEN"),
        }
    }
}

/// Concrete kind of an environmental sensor
///
/// The derived ordering is alphabetical by tag and is the order in which a
/// room keeps its sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SensorKind {
    /// Carbon dioxide concentration in ppm
    CarbonDioxide,
    /// Noise level in decibels
    Noise,
    /// Number of people present
    Occupancy,
    /// Temperature in degrees Celsius
    Temperature,
}

impl SensorKind {
    /// All sensor kinds, in room order
    pub const ALL: [SensorKind; 4] = [
        SensorKind::CarbonDioxide,
        SensorKind::Noise,
        SensorKind::Occupancy,
        SensorKind::Temperature,
    ];

    /// Tag used for this kind in the save format
    pub fn tag(&self) -> &'static str {
        match self {
            SensorKind::CarbonDioxide => "CarbonDioxideSensor",
            SensorKind::Noise => "NoiseSensor",
            SensorKind::Occupancy => "OccupancySensor",
            SensorKind::Temperature => "TemperatureSensor",
        }
    }

    /// Number of colon-separated fields a save-format line of this kind has,
    /// including the tag itself
    pub fn field_count(&self) -> usize {
        match self {
            SensorKind::Temperature => 2,
            SensorKind::Noise => 3,
            SensorKind::Occupancy => 4,
            SensorKind::CarbonDioxide => 5,
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SensorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| format!("Unknown sensor kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_round_trip() {
        for room_type in RoomType::ALL {
            let parsed: RoomType = room_type.to_string().parse().unwrap();
            assert_eq!(parsed, room_type);
        }
    }

    #[test]
    fn test_room_type_is_case_sensitive() {
        assert!("study".parse::<RoomType>().is_err());
        assert!("Lab".parse::<RoomType>().is_err());
        assert_eq!("LABORATORY".parse::<RoomType>().unwrap(), RoomType::Laboratory);
    }

    #[test]
    fn test_maintenance_multipliers() {
        assert_eq!(RoomType::Study.maintenance_multiplier(), 1.0);
        assert_eq!(RoomType::Office.maintenance_multiplier(), 1.5);
        assert_eq!(RoomType::Laboratory.maintenance_multiplier(), 2.0);
    }

    #[test]
    fn test_sensor_kind_order_is_alphabetical() {
        let mut kinds = vec![
            SensorKind::Temperature,
            SensorKind::Occupancy,
            SensorKind::CarbonDioxide,
            SensorKind::Noise,
        ];
        kinds.sort();
        let tags: Vec<_> = kinds.iter().map(|k| k.tag()).collect();
        let mut sorted_tags = tags.clone();
        sorted_tags.sort();
        assert_eq!(tags, sorted_tags);
    }

    #[test]
    fn test_sensor_kind_tags() {
        assert_eq!("NoiseSensor".parse::<SensorKind>().unwrap(), SensorKind::Noise);
        assert!("HumiditySensor".parse::<SensorKind>().is_err());
        assert_eq!(SensorKind::CarbonDioxide.field_count(), 5);
        assert_eq!(SensorKind::Temperature.to_string(), "TemperatureSensor");
    }
}
