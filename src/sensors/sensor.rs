//! Closed set of sensor kinds a room can hold

use super::kinds::{
    CarbonDioxideSensor, ComfortSensor, HazardSensor, NoiseSensor, OccupancySensor,
    TemperatureSensor,
};
use super::timed::{Timed, TimedSensor};
use crate::types::SensorKind;
use std::fmt;

/// A sensor of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum Sensor {
    /// Carbon dioxide sensor
    CarbonDioxide(CarbonDioxideSensor),
    /// Noise sensor
    Noise(NoiseSensor),
    /// Occupancy sensor
    Occupancy(OccupancySensor),
    /// Temperature sensor
    Temperature(TemperatureSensor),
}

impl Sensor {
    /// The kind of this sensor
    pub fn kind(&self) -> SensorKind {
        match self {
            Sensor::CarbonDioxide(_) => SensorKind::CarbonDioxide,
            Sensor::Noise(_) => SensorKind::Noise,
            Sensor::Occupancy(_) => SensorKind::Occupancy,
            Sensor::Temperature(_) => SensorKind::Temperature,
        }
    }

    /// The reading buffer shared by all kinds
    pub fn timed(&self) -> &TimedSensor {
        match self {
            Sensor::CarbonDioxide(s) => s.timed(),
            Sensor::Noise(s) => s.timed(),
            Sensor::Occupancy(s) => s.timed(),
            Sensor::Temperature(s) => s.timed(),
        }
    }

    /// The reading the sensor currently reports
    pub fn current_reading(&self) -> u32 {
        self.timed().current_reading()
    }

    /// Minutes each reading is held for
    pub fn update_frequency(&self) -> u32 {
        self.timed().update_frequency()
    }

    /// This sensor as an occupancy sensor, if it is one
    pub fn as_occupancy(&self) -> Option<&OccupancySensor> {
        match self {
            Sensor::Occupancy(s) => Some(s),
            _ => None,
        }
    }

    /// This sensor as a temperature sensor, if it is one
    pub fn as_temperature(&self) -> Option<&TemperatureSensor> {
        match self {
            Sensor::Temperature(s) => Some(s),
            _ => None,
        }
    }
}

impl HazardSensor for Sensor {
    fn hazard_level(&self) -> u8 {
        match self {
            Sensor::CarbonDioxide(s) => s.hazard_level(),
            Sensor::Noise(s) => s.hazard_level(),
            Sensor::Occupancy(s) => s.hazard_level(),
            Sensor::Temperature(s) => s.hazard_level(),
        }
    }
}

impl ComfortSensor for Sensor {
    fn comfort_level(&self) -> u8 {
        match self {
            Sensor::CarbonDioxide(s) => s.comfort_level(),
            Sensor::Noise(s) => s.comfort_level(),
            Sensor::Occupancy(s) => s.comfort_level(),
            Sensor::Temperature(s) => s.comfort_level(),
        }
    }
}

impl Timed for Sensor {
    fn elapse_one_minute(&mut self) {
        match self {
            Sensor::CarbonDioxide(s) => s.elapse_one_minute(),
            Sensor::Noise(s) => s.elapse_one_minute(),
            Sensor::Occupancy(s) => s.elapse_one_minute(),
            Sensor::Temperature(s) => s.elapse_one_minute(),
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensor::CarbonDioxide(s) => fmt::Display::fmt(s, f),
            Sensor::Noise(s) => fmt::Display::fmt(s, f),
            Sensor::Occupancy(s) => fmt::Display::fmt(s, f),
            Sensor::Temperature(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<CarbonDioxideSensor> for Sensor {
    fn from(sensor: CarbonDioxideSensor) -> Self {
        Sensor::CarbonDioxide(sensor)
    }
}

impl From<NoiseSensor> for Sensor {
    fn from(sensor: NoiseSensor) -> Self {
        Sensor::Noise(sensor)
    }
}

impl From<OccupancySensor> for Sensor {
    fn from(sensor: OccupancySensor) -> Self {
        Sensor::Occupancy(sensor)
    }
}

impl From<TemperatureSensor> for Sensor {
    fn from(sensor: TemperatureSensor) -> Self {
        Sensor::Temperature(sensor)
    }
}
