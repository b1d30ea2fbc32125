//! Hazard evaluation strategies
//!
//! A room may carry one hazard evaluator that turns the hazard levels of its
//! sensors into a single score between 0 and 100.
//!
//! # Overview
//!
//! - **RuleBasedHazardEvaluator**: Short-circuit, average and occupancy scaling rules
//! - **WeightingBasedHazardEvaluator**: Weighted average with weights summing to 100
//! - **HazardEvaluator**: The variant a room stores
//!
//! Evaluators refer to sensors by kind and are evaluated against the sensors a
//! room currently holds. Adding a sensor to a room discards its evaluator, so
//! the set of kinds an evaluator was built over never goes stale.

pub mod rule_based;
pub mod weighting_based;

pub use rule_based::RuleBasedHazardEvaluator;
pub use weighting_based::WeightingBasedHazardEvaluator;

use crate::sensors::Sensor;
use crate::types::SensorKind;
use std::fmt;

/// Hazard evaluator attached to a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HazardEvaluator {
    /// Rule-based evaluation
    RuleBased(RuleBasedHazardEvaluator),
    /// Weighting-based evaluation
    WeightingBased(WeightingBasedHazardEvaluator),
}

impl HazardEvaluator {
    /// Save-format tag of the rule-based variant
    pub const RULE_BASED_TAG: &'static str = "RuleBased";
    /// Save-format tag of the weighting-based variant
    pub const WEIGHTING_BASED_TAG: &'static str = "WeightingBased";

    /// Save-format tag of this evaluator
    pub fn tag(&self) -> &'static str {
        match self {
            HazardEvaluator::RuleBased(_) => Self::RULE_BASED_TAG,
            HazardEvaluator::WeightingBased(_) => Self::WEIGHTING_BASED_TAG,
        }
    }

    /// Sensor kinds this evaluator reads
    pub fn sensor_kinds(&self) -> Vec<SensorKind> {
        match self {
            HazardEvaluator::RuleBased(e) => e.sensors().to_vec(),
            HazardEvaluator::WeightingBased(e) => e.weightings().iter().map(|(k, _)| *k).collect(),
        }
    }

    /// Evaluate the hazard level against the sensors currently installed
    pub fn evaluate_hazard_level(&self, installed: &[Sensor]) -> u8 {
        match self {
            HazardEvaluator::RuleBased(e) => e.evaluate_hazard_level(installed),
            HazardEvaluator::WeightingBased(e) => e.evaluate_hazard_level(installed),
        }
    }

    /// Weight of a sensor when this is a weighting-based evaluator
    pub fn weight(&self, kind: SensorKind) -> Option<u8> {
        match self {
            HazardEvaluator::RuleBased(_) => None,
            HazardEvaluator::WeightingBased(e) => e.weight(kind),
        }
    }
}

impl fmt::Display for HazardEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<RuleBasedHazardEvaluator> for HazardEvaluator {
    fn from(evaluator: RuleBasedHazardEvaluator) -> Self {
        HazardEvaluator::RuleBased(evaluator)
    }
}

impl From<WeightingBasedHazardEvaluator> for HazardEvaluator {
    fn from(evaluator: WeightingBasedHazardEvaluator) -> Self {
        HazardEvaluator::WeightingBased(evaluator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        let rule: HazardEvaluator = RuleBasedHazardEvaluator::new(vec![]).into();
        assert_eq!(rule.to_string(), "RuleBased");
        assert_eq!(rule.weight(SensorKind::Noise), None);

        let weighting: HazardEvaluator =
            WeightingBasedHazardEvaluator::new(vec![(SensorKind::Noise, 100)]).unwrap().into();
        assert_eq!(weighting.tag(), "WeightingBased");
        assert_eq!(weighting.sensor_kinds(), vec![SensorKind::Noise]);
        assert_eq!(weighting.weight(SensorKind::Noise), Some(100));
    }
}
