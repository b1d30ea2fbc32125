//! Simulation orchestration
//!
//! This module contains the Simulation, which owns the buildings and the
//! clock and keeps the clock's registrations in step with the model.

use crate::facility::{recommend_study_room, Building, Floor, Room};
use crate::sensors::Sensor;
use crate::simulation::clock::{SimulationClock, TimedEntity};
use crate::simulation::error::{SimulationError, SimulationResult};
use crate::simulation::statistics::SimulationStatistics;
use crate::types::RoomType;
use crate::{perf_span, sim_event};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Buildings advancing together under one clock
#[derive(Debug, Clone)]
pub struct Simulation {
    buildings: Vec<Building>,
    clock: SimulationClock,
}

impl Simulation {
    /// Create an empty simulation starting at `start_time`
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self { buildings: Vec::new(), clock: SimulationClock::new(start_time) }
    }

    /// Create a simulation holding the given buildings
    pub fn with_buildings(start_time: DateTime<Utc>, buildings: Vec<Building>) -> Self {
        let mut simulation = Self::new(start_time);
        for building in buildings {
            simulation.add_building(building);
        }
        simulation
    }

    /// Add a building and register its sensors and maintenance schedules
    ///
    /// Floor by floor, every sensor is registered in room order and then the
    /// floor's maintenance schedule, if any. Returns the building's index.
    #[instrument(skip(self, building), fields(building = %building.name()))]
    pub fn add_building(&mut self, building: Building) -> usize {
        let index = self.buildings.len();
        self.buildings.push(building);
        let registered = self.register_building(index);
        debug!(index, registered, "Building added to simulation");
        index
    }

    fn register_building(&mut self, index: usize) -> usize {
        let Some(building) = self.buildings.get(index) else {
            return 0;
        };
        let mut registered = 0;
        for floor in building.floors() {
            for room in floor.rooms() {
                for sensor in room.sensors() {
                    let entity = TimedEntity::Sensor {
                        building: index,
                        floor: floor.number(),
                        room: room.number(),
                        kind: sensor.kind(),
                    };
                    registered += usize::from(self.clock.register(entity));
                }
            }
            if floor.maintenance_schedule().is_some() {
                let entity = TimedEntity::MaintenanceSchedule { building: index, floor: floor.number() };
                registered += usize::from(self.clock.register(entity));
            }
        }
        registered
    }

    /// Register any sensor or schedule added through [`Simulation::building_mut`]
    ///
    /// Returns the number of new registrations.
    pub fn sync_registrations(&mut self) -> usize {
        (0..self.buildings.len()).map(|i| self.register_building(i)).sum()
    }

    /// Buildings in the order they were added
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Look up a building by index
    pub fn building(&self, index: usize) -> Option<&Building> {
        self.buildings.get(index)
    }

    /// Look up a building by index for mutation
    ///
    /// Sensors and schedules added this way only start ticking once
    /// [`Simulation::sync_registrations`] is called.
    pub fn building_mut(&mut self, index: usize) -> Option<&mut Building> {
        self.buildings.get_mut(index)
    }

    /// Hand back the buildings, dropping the clock
    pub fn into_buildings(self) -> Vec<Building> {
        self.buildings
    }

    /// The simulation clock
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    fn floor_mut(&mut self, building: usize, floor: u32) -> SimulationResult<&mut Floor> {
        self.buildings
            .get_mut(building)
            .ok_or_else(|| SimulationError::unknown_entity(format!("building {}", building)))?
            .floor_mut(floor)
            .ok_or_else(|| {
                SimulationError::unknown_entity(format!("floor {} of building {}", floor, building))
            })
    }

    /// Install a sensor in a room and register it with the clock
    pub fn add_sensor(
        &mut self,
        building: usize,
        floor: u32,
        room: u32,
        sensor: impl Into<Sensor>,
    ) -> SimulationResult<()> {
        let sensor = sensor.into();
        let kind = sensor.kind();
        self.floor_mut(building, floor)?
            .room_mut(room)
            .ok_or_else(|| {
                SimulationError::unknown_entity(format!("room {} on floor {}", room, floor))
            })?
            .add_sensor(sensor)?;
        self.clock.register(TimedEntity::Sensor { building, floor, room, kind });
        Ok(())
    }

    /// Replace a floor's maintenance schedule and register it with the clock
    ///
    /// A floor has one schedule handle, so a replacement schedule takes over
    /// its predecessor's place in the tick order.
    pub fn create_maintenance_schedule(
        &mut self,
        building: usize,
        floor: u32,
        room_order: Vec<u32>,
    ) -> SimulationResult<()> {
        self.floor_mut(building, floor)?.create_maintenance_schedule(room_order)?;
        self.clock.register(TimedEntity::MaintenanceSchedule { building, floor });
        Ok(())
    }

    /// Start a fire drill in a building
    pub fn fire_drill(&mut self, building: usize, room_type: Option<RoomType>) -> SimulationResult<()> {
        let target = self
            .buildings
            .get_mut(building)
            .ok_or_else(|| SimulationError::unknown_entity(format!("building {}", building)))?;
        target.fire_drill(room_type)?;
        sim_event!(info, "Fire drill started", building = building, minute = self.clock.minutes_elapsed());
        Ok(())
    }

    /// End any fire drill in a building
    pub fn cancel_fire_drill(&mut self, building: usize) -> SimulationResult<()> {
        self.buildings
            .get_mut(building)
            .ok_or_else(|| SimulationError::unknown_entity(format!("building {}", building)))?
            .cancel_fire_drill();
        Ok(())
    }

    /// Recommend a study room in a building
    pub fn recommend_study_room(&self, building: usize) -> Option<&Room> {
        self.buildings.get(building).and_then(recommend_study_room)
    }

    /// Advance the simulation by one minute
    pub fn tick(&mut self) {
        let advanced = self.clock.tick(&mut self.buildings);
        debug!(minute = self.clock.minutes_elapsed(), advanced, "Tick");
    }

    /// Advance the simulation by `minutes` minutes
    pub fn run(&mut self, minutes: u64) {
        let span = perf_span!("simulation_run", minutes = minutes);
        let _enter = span.enter();

        for _ in 0..minutes {
            self.tick();
        }
        sim_event!(
            info,
            "Simulation run complete",
            minutes = minutes,
            total_minutes = self.clock.minutes_elapsed(),
            entities = self.clock.entities().len()
        );
    }

    /// Snapshot of the buildings and clock
    pub fn statistics(&self) -> SimulationStatistics {
        SimulationStatistics::collect(&self.buildings, &self.clock)
    }
}
