//! Weighting-based hazard evaluation

use crate::facility::error::{FacilityError, FacilityResult};
use crate::sensors::{HazardSensor, Sensor};
use crate::types::SensorKind;

/// Weighted average of sensor hazard levels
///
/// Each sensor carries an integer weight in 0..=100 and the weights sum to
/// exactly 100. Weights are applied as fractions, so a weight of 30 scales
/// its sensor's level by 0.3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightingBasedHazardEvaluator {
    weightings: Vec<(SensorKind, u8)>,
}

impl WeightingBasedHazardEvaluator {
    /// Required total of all weights
    pub const TOTAL_WEIGHT: u32 = 100;

    /// Create an evaluator from `(sensor, weight)` pairs
    ///
    /// Fails if any weight is outside 0..=100, a sensor appears twice, or the
    /// weights do not sum to exactly 100.
    pub fn new(weightings: Vec<(SensorKind, u32)>) -> FacilityResult<Self> {
        let mut total = 0;
        let mut checked: Vec<(SensorKind, u8)> = Vec::with_capacity(weightings.len());
        for (kind, weight) in weightings {
            let weight = u8::try_from(weight)
                .ok()
                .filter(|w| u32::from(*w) <= Self::TOTAL_WEIGHT)
                .ok_or_else(|| {
                    FacilityError::invalid_argument(format!(
                        "Weight for {} must be between 0 and 100, got {}",
                        kind, weight
                    ))
                })?;
            if checked.iter().any(|(k, _)| *k == kind) {
                return Err(FacilityError::invalid_argument(format!(
                    "{} weighted more than once",
                    kind
                )));
            }
            total += u32::from(weight);
            checked.push((kind, weight));
        }
        if total != Self::TOTAL_WEIGHT {
            return Err(FacilityError::invalid_argument(format!(
                "Weights must sum to 100, got {}",
                total
            )));
        }
        Ok(Self { weightings: checked })
    }

    /// The `(sensor, weight)` pairs, in construction order
    pub fn weightings(&self) -> &[(SensorKind, u8)] {
        &self.weightings
    }

    /// Weight assigned to a sensor kind, if it is part of this evaluator
    pub fn weight(&self, kind: SensorKind) -> Option<u8> {
        self.weightings.iter().find(|(k, _)| *k == kind).map(|(_, w)| *w)
    }

    /// Evaluate the hazard level against the sensors currently installed
    pub fn evaluate_hazard_level(&self, installed: &[Sensor]) -> u8 {
        let weighted: f64 = self
            .weightings
            .iter()
            .filter_map(|(kind, weight)| {
                installed
                    .iter()
                    .find(|s| s.kind() == *kind)
                    .map(|s| f64::from(s.hazard_level()) * f64::from(*weight) / 100.0)
            })
            .sum();
        weighted.round() as u8
    }
}
