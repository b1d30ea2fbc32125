//! Building generation
//!
//! Produces random buildings that satisfy every model invariant and survive
//! a save and reload unchanged. Rooms are numbered `floor * 100 + k`, so a
//! room header always begins with its floor's number and never with another
//! room's number, which is what the save format's block detection relies on.

use crate::facility::building::Building;
use crate::facility::error::{FacilityError, FacilityResult};
use crate::facility::floor::Floor;
use crate::facility::room::Room;
use crate::hazard::{HazardEvaluator, RuleBasedHazardEvaluator, WeightingBasedHazardEvaluator};
use crate::sensors::{CarbonDioxideSensor, NoiseSensor, OccupancySensor, Sensor, TemperatureSensor};
use crate::types::{RoomType, SensorKind};
use rand::{prelude::*, rngs::StdRng, RngCore, SeedableRng};
use std::fmt;
use tracing::debug;

/// Highest floor count the generator produces
pub const MAX_GENERATED_FLOORS: u32 = 9;
/// Highest number of rooms per floor the generator produces
pub const MAX_GENERATED_ROOMS: u32 = 20;

const BUILDING_NAMES: &[&str] = &[
    "General Purpose South",
    "Forgan Smith",
    "Advanced Engineering",
    "Hawken",
    "Central Library",
    "Steele",
    "Mansergh Shaw",
    "Sir Llew Edwards",
];

/// Largest room area the generator picks; floors are sized to hold a full
/// floor of rooms this big.
const MAX_ROOM_AREA: f64 = 10.0;

/// Generator for random, invariant-satisfying buildings
pub struct BuildingGenerator {
    rng: Box<dyn RngCore>,
}

impl fmt::Debug for BuildingGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildingGenerator").finish()
    }
}

impl BuildingGenerator {
    /// Create a new building generator
    pub fn new() -> Self {
        Self { rng: Box::new(thread_rng()) }
    }

    /// Create a new building generator with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)) }
    }

    /// Generate a building with the given number of floors and rooms per floor
    ///
    /// Fails if `floors` is outside 1..=9 or `rooms_per_floor` outside 1..=20.
    pub fn generate_building(
        &mut self,
        name: impl Into<String>,
        floors: u32,
        rooms_per_floor: u32,
    ) -> FacilityResult<Building> {
        if !(1..=MAX_GENERATED_FLOORS).contains(&floors) {
            return Err(FacilityError::invalid_argument(format!(
                "Generated floor count must be between 1 and {}, got {}",
                MAX_GENERATED_FLOORS, floors
            )));
        }
        if !(1..=MAX_GENERATED_ROOMS).contains(&rooms_per_floor) {
            return Err(FacilityError::invalid_argument(format!(
                "Generated room count must be between 1 and {}, got {}",
                MAX_GENERATED_ROOMS, rooms_per_floor
            )));
        }

        let mut building = Building::new(name);
        for number in 1..=floors {
            let floor = self.generate_floor(number, rooms_per_floor)?;
            building.add_floor(floor)?;
        }
        debug!(building = %building.name(), floors, rooms_per_floor, "Generated building");
        Ok(building)
    }

    /// Generate several buildings with distinct names
    pub fn generate_buildings(
        &mut self,
        count: usize,
        floors: u32,
        rooms_per_floor: u32,
    ) -> FacilityResult<Vec<Building>> {
        (0..count)
            .map(|i| {
                let name = self.generate_building_name(i);
                self.generate_building(name, floors, rooms_per_floor)
            })
            .collect()
    }

    fn generate_floor(&mut self, number: u32, rooms: u32) -> FacilityResult<Floor> {
        let width = round_to_cents(self.rng.gen_range(Floor::MIN_WIDTH..30.0));
        let min_length = (f64::from(rooms) * MAX_ROOM_AREA / width).max(Floor::MIN_LENGTH);
        let length = ceil_to_cents(self.rng.gen_range(min_length..min_length + 20.0));
        let mut floor = Floor::new(number, width, length)?;

        for k in 1..=rooms {
            let room = self.generate_room(number * 100 + k)?;
            floor.add_room(room)?;
        }

        if self.rng.gen_bool(0.5) {
            let mut order: Vec<u32> = floor.rooms().iter().map(Room::number).collect();
            order.shuffle(&mut self.rng);
            let keep = self.rng.gen_range(1..=order.len());
            order.truncate(keep);
            floor.create_maintenance_schedule(order)?;
        }
        Ok(floor)
    }

    fn generate_room(&mut self, number: u32) -> FacilityResult<Room> {
        let room_type = *RoomType::ALL.choose(&mut self.rng).unwrap_or(&RoomType::Study);
        let area = round_to_cents(self.rng.gen_range(Room::MIN_AREA..=MAX_ROOM_AREA));
        let mut room = Room::new(number, room_type, area)?;

        let mut kinds: Vec<SensorKind> =
            SensorKind::ALL.iter().copied().filter(|_| self.rng.gen_bool(0.6)).collect();
        kinds.sort();
        for kind in &kinds {
            let sensor = self.generate_sensor(*kind)?;
            room.add_sensor(sensor)?;
        }

        let evaluator = match self.rng.gen_range(0..3) {
            1 => Some(RuleBasedHazardEvaluator::new(kinds).into()),
            2 if !kinds.is_empty() => Some(self.generate_weightings(kinds)?),
            _ => None,
        };
        room.set_hazard_evaluator(evaluator)?;
        Ok(room)
    }

    fn generate_sensor(&mut self, kind: SensorKind) -> FacilityResult<Sensor> {
        let count = self.rng.gen_range(1..=6);
        let frequency = self.rng.gen_range(1..=5);
        let sensor = match kind {
            SensorKind::CarbonDioxide => {
                let ideal = self.rng.gen_range(400..=800);
                let limit = self.rng.gen_range(50..=300);
                let readings = self.readings(count, 300..=3500);
                CarbonDioxideSensor::new(readings, frequency, ideal, limit)?.into()
            }
            SensorKind::Noise => NoiseSensor::new(self.readings(count, 30..=90), frequency)?.into(),
            SensorKind::Occupancy => {
                let capacity = self.rng.gen_range(1..=30);
                let readings = self.readings(count, 0..=capacity + 2);
                OccupancySensor::new(readings, frequency, capacity)?.into()
            }
            SensorKind::Temperature => TemperatureSensor::new(self.readings(count, 15..=70))?.into(),
        };
        Ok(sensor)
    }

    fn readings(&mut self, count: usize, range: std::ops::RangeInclusive<u32>) -> Vec<u32> {
        (0..count).map(|_| self.rng.gen_range(range.clone())).collect()
    }

    /// Split a total weight of 100 over the given kinds at random cut points
    fn generate_weightings(&mut self, kinds: Vec<SensorKind>) -> FacilityResult<HazardEvaluator> {
        let total = WeightingBasedHazardEvaluator::TOTAL_WEIGHT;
        let mut cuts: Vec<u32> =
            (1..kinds.len()).map(|_| self.rng.gen_range(0..=total)).collect();
        cuts.push(0);
        cuts.push(total);
        cuts.sort_unstable();

        let weightings = kinds.into_iter().zip(cuts.windows(2).map(|w| w[1] - w[0])).collect();
        Ok(WeightingBasedHazardEvaluator::new(weightings)?.into())
    }

    fn generate_building_name(&mut self, index: usize) -> String {
        let base = BUILDING_NAMES.choose(&mut self.rng).copied().unwrap_or("Building");
        format!("{} {}", base, index + 1)
    }
}

impl Default for BuildingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn ceil_to_cents(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}
