//! Rule-based hazard evaluation

use crate::sensors::{HazardSensor, Sensor};
use crate::types::SensorKind;
use tracing::trace;

/// Combines sensor hazard levels with a fixed set of rules
///
/// - no sensors: 0
/// - one sensor: that sensor's hazard level
/// - otherwise any non-occupancy sensor at 100 makes the room 100; if none
///   is, the non-occupancy levels are averaged and the average is scaled by
///   the occupancy sensor's level as a fraction of 100 (when one is present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBasedHazardEvaluator {
    sensors: Vec<SensorKind>,
}

impl RuleBasedHazardEvaluator {
    /// Create an evaluator over the given sensors
    pub fn new(sensors: Vec<SensorKind>) -> Self {
        Self { sensors }
    }

    /// The sensors this evaluator reads, in evaluation order
    pub fn sensors(&self) -> &[SensorKind] {
        &self.sensors
    }

    /// Evaluate the hazard level against the sensors currently installed
    ///
    /// Kinds no longer present in `installed` are skipped.
    pub fn evaluate_hazard_level(&self, installed: &[Sensor]) -> u8 {
        let sensors: Vec<&Sensor> = self
            .sensors
            .iter()
            .filter_map(|kind| installed.iter().find(|s| s.kind() == *kind))
            .collect();

        match sensors.as_slice() {
            [] => 0,
            [only] => only.hazard_level(),
            _ => {
                let mut occupancy = None;
                let mut others = Vec::with_capacity(sensors.len());
                for sensor in sensors {
                    match sensor.as_occupancy() {
                        Some(o) => occupancy = Some(o),
                        None => {
                            let level = sensor.hazard_level();
                            if level == 100 {
                                trace!("{} reports maximum hazard", sensor.kind());
                                return 100;
                            }
                            others.push(f64::from(level));
                        }
                    }
                }

                // At most one occupancy sensor, so at least one other remains.
                let mut average = others.iter().sum::<f64>() / others.len() as f64;
                if let Some(occupancy) = occupancy {
                    average *= f64::from(occupancy.hazard_level()) / 100.0;
                }
                average.round() as u8
            }
        }
    }
}
