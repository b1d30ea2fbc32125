//! Room management and sensor ownership
//!
//! This module contains the Room struct, which owns the sensors installed in a
//! room and its optional hazard evaluator, and derives the room's aggregate
//! state from them.

use crate::facility::error::{FacilityError, FacilityResult};
use crate::hazard::HazardEvaluator;
use crate::sensors::{ComfortSensor, HazardSensor, Sensor};
use crate::types::{RoomState, RoomType, SensorKind};
use std::fmt;
use tracing::debug;

/// Tolerance used when comparing areas and dimensions
pub(crate) const AREA_TOLERANCE: f64 = 0.001;

/// Represents a room on a floor
#[derive(Debug, Clone)]
pub struct Room {
    number: u32,
    room_type: RoomType,
    area: f64,
    /// At most one sensor per kind, kept sorted by kind
    sensors: Vec<Sensor>,
    hazard_evaluator: Option<HazardEvaluator>,
    fire_drill: bool,
    maintenance: bool,
}

impl Room {
    /// Minimum area of any room, in square metres
    pub const MIN_AREA: f64 = 5.0;

    /// Create a new room with no sensors
    pub fn new(number: u32, room_type: RoomType, area: f64) -> FacilityResult<Self> {
        if !area.is_finite() || area < Self::MIN_AREA {
            return Err(FacilityError::invalid_argument(format!(
                "Area cannot be less than {}",
                Self::MIN_AREA
            )));
        }
        Ok(Self {
            number,
            room_type,
            area,
            sensors: Vec::new(),
            hazard_evaluator: None,
            fire_drill: false,
            maintenance: false,
        })
    }

    /// Room number, unique on its floor
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Intended purpose of the room
    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Area in square metres
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Installed sensors, sorted by kind
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// The installed sensor of the given kind
    pub fn sensor(&self, kind: SensorKind) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.kind() == kind)
    }

    pub(crate) fn sensor_mut(&mut self, kind: SensorKind) -> Option<&mut Sensor> {
        self.sensors.iter_mut().find(|s| s.kind() == kind)
    }

    /// Install a sensor
    ///
    /// Fails if a sensor of the same kind is already installed. Installing a
    /// sensor removes the hazard evaluator, which was built over the previous
    /// set of sensors.
    pub fn add_sensor(&mut self, sensor: impl Into<Sensor>) -> FacilityResult<()> {
        let sensor = sensor.into();
        let kind = sensor.kind();
        if self.sensor(kind).is_some() {
            return Err(FacilityError::DuplicateSensor(kind));
        }

        let position = self.sensors.partition_point(|s| s.kind() < kind);
        self.sensors.insert(position, sensor);
        if self.hazard_evaluator.take().is_some() {
            debug!(room = self.number, "Cleared hazard evaluator after adding {}", kind);
        }
        Ok(())
    }

    /// The hazard evaluator, if one is attached
    pub fn hazard_evaluator(&self) -> Option<&HazardEvaluator> {
        self.hazard_evaluator.as_ref()
    }

    /// Attach, replace or remove the hazard evaluator
    ///
    /// Every sensor the evaluator reads must be installed in this room, and
    /// no sensor may be listed twice.
    pub fn set_hazard_evaluator(&mut self, evaluator: Option<HazardEvaluator>) -> FacilityResult<()> {
        if let Some(evaluator) = &evaluator {
            let kinds = evaluator.sensor_kinds();
            for (i, kind) in kinds.iter().enumerate() {
                if self.sensor(*kind).is_none() {
                    return Err(FacilityError::invalid_argument(format!(
                        "Room {} has no {} for the hazard evaluator",
                        self.number, kind
                    )));
                }
                if kinds[..i].contains(kind) {
                    return Err(FacilityError::invalid_argument(format!(
                        "{} listed more than once in the hazard evaluator",
                        kind
                    )));
                }
            }
        }
        self.hazard_evaluator = evaluator;
        Ok(())
    }

    /// Hazard level reported by the evaluator, if one is attached
    pub fn evaluate_hazard_level(&self) -> Option<u8> {
        self.hazard_evaluator.as_ref().map(|e| e.evaluate_hazard_level(&self.sensors))
    }

    /// Whether a fire drill is currently taking place
    pub fn fire_drill_ongoing(&self) -> bool {
        self.fire_drill
    }

    /// Start or stop a fire drill
    pub fn set_fire_drill(&mut self, fire_drill: bool) {
        self.fire_drill = fire_drill;
    }

    /// Whether maintenance is currently being carried out
    pub fn maintenance_ongoing(&self) -> bool {
        self.maintenance
    }

    /// Start or stop maintenance
    pub fn set_maintenance(&mut self, maintenance: bool) {
        self.maintenance = maintenance;
    }

    /// Derive the aggregate state of the room
    ///
    /// A dangerous temperature or a fire drill means evacuation, which takes
    /// precedence over maintenance.
    pub fn evaluate_room_state(&self) -> RoomState {
        let too_hot = self
            .sensor(SensorKind::Temperature)
            .is_some_and(|t| t.hazard_level() == 100);
        if too_hot || self.fire_drill {
            RoomState::Evacuate
        } else if self.maintenance {
            RoomState::Maintenance
        } else {
            RoomState::Open
        }
    }

    /// Average comfort level of the installed sensors, 0 without sensors
    pub fn comfort_level(&self) -> f64 {
        if self.sensors.is_empty() {
            return 0.0;
        }
        let total: u32 = self.sensors.iter().map(|s| u32::from(s.comfort_level())).sum();
        f64::from(total) / self.sensors.len() as f64
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
            && self.room_type == other.room_type
            && (self.area - other.area).abs() <= AREA_TOLERANCE
            && self.sensors == other.sensors
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room #{}: type={}, area={:.2}m^2, sensors={}",
            self.number,
            self.room_type,
            self.area,
            self.sensors.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::{RuleBasedHazardEvaluator, WeightingBasedHazardEvaluator};
    use crate::sensors::{NoiseSensor, OccupancySensor, TemperatureSensor};

    fn study(number: u32) -> Room {
        Room::new(number, RoomType::Study, 20.0).unwrap()
    }

    #[test]
    fn test_room_creation() {
        let room = study(101);
        assert_eq!(room.number(), 101);
        assert_eq!(room.room_type(), RoomType::Study);
        assert!(room.sensors().is_empty());
        assert!(room.hazard_evaluator().is_none());
        assert_eq!(room.evaluate_room_state(), RoomState::Open);
    }

    #[test]
    fn test_minimum_area() {
        assert!(Room::new(1, RoomType::Office, 4.99).is_err());
        assert!(Room::new(1, RoomType::Office, f64::NAN).is_err());
        assert!(Room::new(1, RoomType::Office, 5.0).is_ok());
    }

    #[test]
    fn test_sensors_kept_in_kind_order() {
        let mut room = study(1);
        room.add_sensor(TemperatureSensor::new(vec![20]).unwrap()).unwrap();
        room.add_sensor(NoiseSensor::new(vec![40], 1).unwrap()).unwrap();
        room.add_sensor(OccupancySensor::new(vec![1], 1, 5).unwrap()).unwrap();

        let kinds: Vec<_> = room.sensors().iter().map(Sensor::kind).collect();
        assert_eq!(
            kinds,
            vec![SensorKind::Noise, SensorKind::Occupancy, SensorKind::Temperature]
        );
    }

    #[test]
    fn test_duplicate_sensor_rejected() {
        let mut room = study(1);
        room.add_sensor(TemperatureSensor::new(vec![20]).unwrap()).unwrap();
        let result = room.add_sensor(TemperatureSensor::new(vec![30]).unwrap());
        assert_eq!(result, Err(FacilityError::DuplicateSensor(SensorKind::Temperature)));
        assert_eq!(room.sensors().len(), 1);
        assert_eq!(room.sensors()[0].current_reading(), 20);
    }

    #[test]
    fn test_adding_sensor_clears_evaluator() {
        let mut room = study(1);
        room.add_sensor(TemperatureSensor::new(vec![20]).unwrap()).unwrap();
        room.set_hazard_evaluator(Some(
            RuleBasedHazardEvaluator::new(vec![SensorKind::Temperature]).into(),
        ))
        .unwrap();
        assert!(room.hazard_evaluator().is_some());

        room.add_sensor(NoiseSensor::new(vec![40], 1).unwrap()).unwrap();
        assert!(room.hazard_evaluator().is_none());
        assert_eq!(room.evaluate_hazard_level(), None);
    }

    #[test]
    fn test_evaluator_must_reference_installed_sensors() {
        let mut room = study(1);
        room.add_sensor(NoiseSensor::new(vec![40], 1).unwrap()).unwrap();
        let evaluator =
            WeightingBasedHazardEvaluator::new(vec![(SensorKind::Temperature, 100)]).unwrap();
        assert!(room.set_hazard_evaluator(Some(evaluator.into())).is_err());
        assert!(room.hazard_evaluator().is_none());

        let duplicated = RuleBasedHazardEvaluator::new(vec![SensorKind::Noise, SensorKind::Noise]);
        assert!(room.set_hazard_evaluator(Some(duplicated.into())).is_err());
    }

    #[test]
    fn test_room_state_precedence() {
        let mut room = study(1);
        room.set_maintenance(true);
        assert_eq!(room.evaluate_room_state(), RoomState::Maintenance);

        room.set_fire_drill(true);
        assert_eq!(room.evaluate_room_state(), RoomState::Evacuate);

        room.set_fire_drill(false);
        room.add_sensor(TemperatureSensor::new(vec![68]).unwrap()).unwrap();
        assert_eq!(room.evaluate_room_state(), RoomState::Evacuate);
    }

    #[test]
    fn test_comfort_level_average() {
        let mut room = study(1);
        assert_eq!(room.comfort_level(), 0.0);
        room.add_sensor(TemperatureSensor::new(vec![22]).unwrap()).unwrap();
        room.add_sensor(OccupancySensor::new(vec![2], 1, 4).unwrap()).unwrap();
        assert_eq!(room.comfort_level(), 75.0);
    }

    #[test]
    fn test_equality_ignores_flags_and_evaluator() {
        let mut a = study(1);
        let b = study(1);
        a.set_fire_drill(true);
        a.set_maintenance(true);
        assert_eq!(a, b);
        assert_ne!(a, Room::new(1, RoomType::Office, 20.0).unwrap());
        assert_eq!(a, Room::new(1, RoomType::Study, 20.0004).unwrap());
    }

    #[test]
    fn test_display() {
        let mut room = study(101);
        room.add_sensor(TemperatureSensor::new(vec![20]).unwrap()).unwrap();
        assert_eq!(room.to_string(), "Room #101: type=STUDY, area=20.00m^2, sensors=1");
    }
}
