//! Simulated time and the entities that advance with it
//!
//! The clock owns an ordered list of handles to timed entities: sensors and
//! floor maintenance schedules. Handles name their target by position in the
//! building list and by floor, room and sensor kind, and are resolved against
//! the buildings on every tick. Each tick advances every entity by one minute
//! in registration order.

use crate::facility::Building;
use crate::sensors::Timed;
use crate::types::SensorKind;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{trace, warn};

/// Handle to something that advances once per simulated minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimedEntity {
    /// A sensor installed in a room
    Sensor {
        /// Index of the building in the simulation
        building: usize,
        /// Floor number
        floor: u32,
        /// Room number
        room: u32,
        /// Kind of the sensor within the room
        kind: SensorKind,
    },
    /// The maintenance schedule of a floor
    MaintenanceSchedule {
        /// Index of the building in the simulation
        building: usize,
        /// Floor number
        floor: u32,
    },
}

impl TimedEntity {
    /// Advance the entity by one minute
    ///
    /// Returns false if the handle does not resolve to an existing entity.
    fn elapse_one_minute(&self, buildings: &mut [Building]) -> bool {
        match *self {
            TimedEntity::Sensor { building, floor, room, kind } => {
                let sensor = buildings
                    .get_mut(building)
                    .and_then(|b| b.floor_mut(floor))
                    .and_then(|f| f.room_mut(room))
                    .and_then(|r| r.sensor_mut(kind));
                match sensor {
                    Some(sensor) => {
                        sensor.elapse_one_minute();
                        true
                    }
                    None => false,
                }
            }
            TimedEntity::MaintenanceSchedule { building, floor } => {
                let floor = buildings
                    .get_mut(building)
                    .and_then(|b| b.floor_mut(floor))
                    .filter(|f| f.maintenance_schedule().is_some());
                match floor {
                    Some(floor) => {
                        floor.elapse_one_minute();
                        true
                    }
                    None => false,
                }
            }
        }
    }
}

impl fmt::Display for TimedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimedEntity::Sensor { building, floor, room, kind } => {
                write!(f, "{} in building {} floor {} room {}", kind, building, floor, room)
            }
            TimedEntity::MaintenanceSchedule { building, floor } => {
                write!(f, "maintenance schedule of building {} floor {}", building, floor)
            }
        }
    }
}

/// Discrete simulation clock
#[derive(Debug, Clone)]
pub struct SimulationClock {
    start_time: DateTime<Utc>,
    minutes_elapsed: u64,
    entities: Vec<TimedEntity>,
    registered: HashSet<TimedEntity>,
}

impl SimulationClock {
    /// Create a clock starting at `start_time` with nothing registered
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self { start_time, minutes_elapsed: 0, entities: Vec::new(), registered: HashSet::new() }
    }

    /// Register an entity to be ticked after all earlier registrations
    ///
    /// Returns false if the entity was already registered.
    pub fn register(&mut self, entity: TimedEntity) -> bool {
        if !self.registered.insert(entity) {
            return false;
        }
        trace!(%entity, "Registered timed entity");
        self.entities.push(entity);
        true
    }

    /// Registered entities in tick order
    pub fn entities(&self) -> &[TimedEntity] {
        &self.entities
    }

    /// Simulated time the clock started at
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Number of minutes ticked so far
    pub fn minutes_elapsed(&self) -> u64 {
        self.minutes_elapsed
    }

    /// Current simulated time
    pub fn current_time(&self) -> DateTime<Utc> {
        let minutes = i64::try_from(self.minutes_elapsed).unwrap_or(i64::MAX);
        self.start_time + Duration::minutes(minutes)
    }

    /// Advance every registered entity by one minute
    ///
    /// Returns the number of entities that were advanced. Handles that no
    /// longer resolve are skipped with a warning.
    pub fn tick(&mut self, buildings: &mut [Building]) -> usize {
        let mut advanced = 0;
        for entity in &self.entities {
            if entity.elapse_one_minute(buildings) {
                advanced += 1;
            } else {
                warn!(%entity, "Timed entity no longer exists");
            }
        }
        self.minutes_elapsed += 1;
        advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{Floor, Room};
    use crate::sensors::TemperatureSensor;
    use crate::types::RoomType;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()
    }

    fn building() -> Building {
        let mut room = Room::new(101, RoomType::Study, 10.0).unwrap();
        room.add_sensor(TemperatureSensor::new(vec![24, 25, 26]).unwrap()).unwrap();
        let mut floor = Floor::new(1, 10.0, 10.0).unwrap();
        floor.add_room(room).unwrap();
        floor.create_maintenance_schedule(vec![101]).unwrap();
        let mut building = Building::new("Hawken");
        building.add_floor(floor).unwrap();
        building
    }

    fn reading(buildings: &[Building]) -> u32 {
        let room = buildings[0].floor(1).unwrap().room(101).unwrap();
        room.sensor(SensorKind::Temperature).unwrap().current_reading()
    }

    #[test]
    fn test_register_deduplicates() {
        let mut clock = SimulationClock::new(start());
        let handle = TimedEntity::MaintenanceSchedule { building: 0, floor: 1 };
        assert!(clock.register(handle));
        assert!(!clock.register(handle));
        assert_eq!(clock.entities().len(), 1);
    }

    #[test]
    fn test_tick_cycles_sensor() {
        let mut buildings = vec![building()];
        let mut clock = SimulationClock::new(start());
        clock.register(TimedEntity::Sensor {
            building: 0,
            floor: 1,
            room: 101,
            kind: SensorKind::Temperature,
        });

        let mut seen = vec![reading(&buildings)];
        for _ in 0..3 {
            assert_eq!(clock.tick(&mut buildings), 1);
            seen.push(reading(&buildings));
        }
        assert_eq!(seen, vec![24, 25, 26, 24]);
        assert_eq!(clock.minutes_elapsed(), 3);
        assert_eq!(clock.current_time(), start() + Duration::minutes(3));
    }

    #[test]
    fn test_tick_advances_schedule() {
        let mut buildings = vec![building()];
        let mut clock = SimulationClock::new(start());
        clock.register(TimedEntity::MaintenanceSchedule { building: 0, floor: 1 });
        clock.tick(&mut buildings);

        let floor = buildings[0].floor(1).unwrap();
        assert_eq!(floor.maintenance_schedule().unwrap().time_elapsed_current_room(), 1);
        assert!(floor.room(101).unwrap().maintenance_ongoing());
    }

    #[test]
    fn test_unresolved_handles_are_skipped() {
        let mut buildings = vec![building()];
        let mut clock = SimulationClock::new(start());
        clock.register(TimedEntity::Sensor {
            building: 0,
            floor: 1,
            room: 101,
            kind: SensorKind::Noise,
        });
        clock.register(TimedEntity::MaintenanceSchedule { building: 3, floor: 1 });
        assert_eq!(clock.tick(&mut buildings), 0);
        assert_eq!(clock.minutes_elapsed(), 1);
    }
}
