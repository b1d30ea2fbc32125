//! Cyclic reading buffer shared by every sensor kind
//!
//! A timed sensor replays a fixed list of readings forever. Each reading is
//! held for `update_frequency` simulated minutes before the next one becomes
//! current, and the list wraps around when exhausted.

use crate::facility::error::{FacilityError, FacilityResult};
use std::fmt;

/// Anything that advances by exactly one simulated minute per clock tick
pub trait Timed {
    /// Advance internal state by one simulated minute
    fn elapse_one_minute(&mut self);
}

/// Reading buffer and update cadence of a sensor
#[derive(Debug, Clone)]
pub struct TimedSensor {
    readings: Vec<u32>,
    current_reading: u32,
    time_elapsed: u64,
    update_frequency: u32,
}

impl TimedSensor {
    /// Shortest allowed update cadence in minutes
    pub const MIN_UPDATE_FREQUENCY: u32 = 1;
    /// Longest allowed update cadence in minutes
    pub const MAX_UPDATE_FREQUENCY: u32 = 5;

    /// Create a new timed sensor starting at the first reading
    ///
    /// Fails if `readings` is empty or `update_frequency` is outside 1..=5.
    /// Readings are unsigned, so the non-negative invariant holds by type.
    pub fn new(readings: Vec<u32>, update_frequency: u32) -> FacilityResult<Self> {
        if !(Self::MIN_UPDATE_FREQUENCY..=Self::MAX_UPDATE_FREQUENCY).contains(&update_frequency) {
            return Err(FacilityError::invalid_argument(format!(
                "Update frequency must be between {} and {} minutes (inclusive), got {}",
                Self::MIN_UPDATE_FREQUENCY,
                Self::MAX_UPDATE_FREQUENCY,
                update_frequency
            )));
        }
        let first = *readings.first().ok_or_else(|| {
            FacilityError::invalid_argument("Sensor readings must have at least one element")
        })?;

        Ok(Self { readings, current_reading: first, time_elapsed: 0, update_frequency })
    }

    /// The full reading buffer, in replay order
    pub fn readings(&self) -> &[u32] {
        &self.readings
    }

    /// The reading the sensor currently reports
    pub fn current_reading(&self) -> u32 {
        self.current_reading
    }

    /// Minutes elapsed since the sensor was created
    pub fn time_elapsed(&self) -> u64 {
        self.time_elapsed
    }

    /// Minutes each reading is held for
    pub fn update_frequency(&self) -> u32 {
        self.update_frequency
    }

    /// Comma-separated readings, as written in the save format
    pub fn encode_readings(&self) -> String {
        self.readings.iter().map(u32::to_string).collect::<Vec<_>>().join(",")
    }
}

impl Timed for TimedSensor {
    fn elapse_one_minute(&mut self) {
        self.time_elapsed += 1;
        let rotation = self.readings.len() as u64 * u64::from(self.update_frequency);
        let index = (self.time_elapsed % rotation) / u64::from(self.update_frequency);
        self.current_reading = self.readings[index as usize];
    }
}

// Cycling state is not part of a sensor's identity.
impl PartialEq for TimedSensor {
    fn eq(&self, other: &Self) -> bool {
        self.update_frequency == other.update_frequency && self.readings == other.readings
    }
}

impl fmt::Display for TimedSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimedSensor: freq={}, readings={}", self.update_frequency, self.encode_readings())
    }
}
