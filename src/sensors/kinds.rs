//! Concrete sensor kinds
//!
//! Each kind wraps a [`TimedSensor`] and adds its own parameters together
//! with the hazard and comfort formulas for that kind of measurement.

use super::timed::{Timed, TimedSensor};
use crate::facility::error::{FacilityError, FacilityResult};
use std::fmt;

/// Sensor that can report how dangerous its current reading is
pub trait HazardSensor {
    /// Hazard level between 0 (safe) and 100 (dangerous)
    fn hazard_level(&self) -> u8;
}

/// Sensor that can report how comfortable its current reading is
pub trait ComfortSensor {
    /// Comfort level between 0 (uncomfortable) and 100 (comfortable)
    fn comfort_level(&self) -> u8;
}

/// Round a percentage to the nearest integer and clamp it into 0..=100
fn to_level(percent: f64) -> u8 {
    percent.round().clamp(0.0, 100.0) as u8
}

/// Temperature sensor, in degrees Celsius, updated every minute
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSensor {
    timed: TimedSensor,
}

impl TemperatureSensor {
    /// Temperature at or above which the room must be evacuated
    pub const FIRE_THRESHOLD: u32 = 68;

    /// Create a temperature sensor; temperature sensors always update every minute
    pub fn new(readings: Vec<u32>) -> FacilityResult<Self> {
        Ok(Self { timed: TimedSensor::new(readings, 1)? })
    }

    /// The underlying reading buffer
    pub fn timed(&self) -> &TimedSensor {
        &self.timed
    }
}

impl HazardSensor for TemperatureSensor {
    fn hazard_level(&self) -> u8 {
        if self.timed.current_reading() >= Self::FIRE_THRESHOLD {
            100
        } else {
            0
        }
    }
}

impl ComfortSensor for TemperatureSensor {
    fn comfort_level(&self) -> u8 {
        match self.timed.current_reading() {
            20..=26 => 100,
            t if t <= 15 || t >= 31 => 0,
            _ => 80,
        }
    }
}

impl Timed for TemperatureSensor {
    fn elapse_one_minute(&mut self) {
        self.timed.elapse_one_minute();
    }
}

impl fmt::Display for TemperatureSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, type=TemperatureSensor", self.timed)
    }
}

/// Occupancy sensor, counting the people present against a room capacity
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancySensor {
    timed: TimedSensor,
    capacity: u32,
}

impl OccupancySensor {
    /// Create an occupancy sensor
    pub fn new(readings: Vec<u32>, update_frequency: u32, capacity: u32) -> FacilityResult<Self> {
        Ok(Self { timed: TimedSensor::new(readings, update_frequency)?, capacity })
    }

    /// Maximum number of people the room is meant to hold
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The underlying reading buffer
    pub fn timed(&self) -> &TimedSensor {
        &self.timed
    }
}

impl HazardSensor for OccupancySensor {
    fn hazard_level(&self) -> u8 {
        let reading = self.timed.current_reading();
        if reading >= self.capacity {
            return 100;
        }
        to_level(100.0 * f64::from(reading) / f64::from(self.capacity))
    }
}

impl ComfortSensor for OccupancySensor {
    fn comfort_level(&self) -> u8 {
        let reading = self.timed.current_reading();
        if self.capacity == 0 || reading > self.capacity {
            return 0;
        }
        to_level(100.0 * (1.0 - f64::from(reading) / f64::from(self.capacity)))
    }
}

impl Timed for OccupancySensor {
    fn elapse_one_minute(&mut self) {
        self.timed.elapse_one_minute();
    }
}

impl fmt::Display for OccupancySensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, type=OccupancySensor, capacity={}", self.timed, self.capacity)
    }
}

/// Noise sensor, in decibels
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseSensor {
    timed: TimedSensor,
}

impl NoiseSensor {
    /// Loudness in decibels that is perceived as the reference loudness
    pub const REFERENCE_LOUDNESS_DB: f64 = 70.0;

    /// Create a noise sensor
    pub fn new(readings: Vec<u32>, update_frequency: u32) -> FacilityResult<Self> {
        Ok(Self { timed: TimedSensor::new(readings, update_frequency)? })
    }

    /// Perceived loudness relative to 70dB; doubles for every 10dB increase
    pub fn relative_loudness(&self) -> f64 {
        let db = f64::from(self.timed.current_reading());
        2f64.powf((db - Self::REFERENCE_LOUDNESS_DB) / 10.0)
    }

    /// The underlying reading buffer
    pub fn timed(&self) -> &TimedSensor {
        &self.timed
    }
}

impl HazardSensor for NoiseSensor {
    fn hazard_level(&self) -> u8 {
        to_level(100.0 * self.relative_loudness())
    }
}

impl ComfortSensor for NoiseSensor {
    fn comfort_level(&self) -> u8 {
        to_level(100.0 * (1.0 - self.relative_loudness()))
    }
}

impl Timed for NoiseSensor {
    fn elapse_one_minute(&mut self) {
        self.timed.elapse_one_minute();
    }
}

impl fmt::Display for NoiseSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, type=NoiseSensor", self.timed)
    }
}

/// Carbon dioxide sensor, in parts per million
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonDioxideSensor {
    timed: TimedSensor,
    ideal_value: u32,
    variation_limit: u32,
}

impl CarbonDioxideSensor {
    /// Create a carbon dioxide sensor
    ///
    /// `ideal_value` is the most comfortable concentration and
    /// `variation_limit` how far a reading may stray from it before comfort
    /// drops to zero. Both must be positive, and the limit may not exceed the
    /// ideal value.
    pub fn new(
        readings: Vec<u32>,
        update_frequency: u32,
        ideal_value: u32,
        variation_limit: u32,
    ) -> FacilityResult<Self> {
        if ideal_value == 0 {
            return Err(FacilityError::invalid_argument("Ideal CO2 value must be > 0"));
        }
        if variation_limit == 0 {
            return Err(FacilityError::invalid_argument("CO2 variation limit must be > 0"));
        }
        if variation_limit > ideal_value {
            return Err(FacilityError::invalid_argument(
                "CO2 variation limit must not exceed the ideal value",
            ));
        }
        Ok(Self { timed: TimedSensor::new(readings, update_frequency)?, ideal_value, variation_limit })
    }

    /// Most comfortable concentration in ppm
    pub fn ideal_value(&self) -> u32 {
        self.ideal_value
    }

    /// Largest comfortable deviation from the ideal value in ppm
    pub fn variation_limit(&self) -> u32 {
        self.variation_limit
    }

    /// The underlying reading buffer
    pub fn timed(&self) -> &TimedSensor {
        &self.timed
    }
}

impl HazardSensor for CarbonDioxideSensor {
    fn hazard_level(&self) -> u8 {
        match self.timed.current_reading() {
            0..=999 => 0,
            1000..=1999 => 25,
            2000..=2999 => 50,
            _ => 100,
        }
    }
}

impl ComfortSensor for CarbonDioxideSensor {
    fn comfort_level(&self) -> u8 {
        let deviation = f64::from(self.timed.current_reading().abs_diff(self.ideal_value));
        to_level(100.0 * (1.0 - deviation / f64::from(self.variation_limit)))
    }
}

impl Timed for CarbonDioxideSensor {
    fn elapse_one_minute(&mut self) {
        self.timed.elapse_one_minute();
    }
}

impl fmt::Display for CarbonDioxideSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, type=CarbonDioxideSensor, idealPPM={}, varLimit={}",
            self.timed, self.ideal_value, self.variation_limit
        )
    }
}
