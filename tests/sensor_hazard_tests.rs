//! Tests for sensors, hazard evaluation and room state
//!
//! These tests drive sensors and evaluators through the public API the way a
//! room uses them.

use building_management_simulator::facility::Room;
use building_management_simulator::hazard::{
    HazardEvaluator, RuleBasedHazardEvaluator, WeightingBasedHazardEvaluator,
};
use building_management_simulator::sensors::*;
use building_management_simulator::types::{RoomState, RoomType, SensorKind};

#[test]
fn test_sensor_readings_cycle() {
    let mut sensor: Sensor = TemperatureSensor::new(vec![24, 25, 26]).unwrap().into();
    let mut seen = vec![sensor.current_reading()];
    for _ in 0..3 {
        sensor.elapse_one_minute();
        seen.push(sensor.current_reading());
    }
    assert_eq!(seen, vec![24, 25, 26, 24]);
}

#[test]
fn test_update_frequency_holds_readings() {
    let mut sensor = NoiseSensor::new(vec![40, 50], 3).unwrap();
    let mut seen = Vec::new();
    for _ in 0..7 {
        seen.push(sensor.timed().current_reading());
        sensor.elapse_one_minute();
    }
    assert_eq!(seen, vec![40, 40, 40, 50, 50, 50, 40]);
}

#[test]
fn test_sensor_construction_limits() {
    assert!(TemperatureSensor::new(vec![]).is_err());
    assert!(NoiseSensor::new(vec![40], 0).is_err());
    assert!(NoiseSensor::new(vec![40], 6).is_err());
    assert!(NoiseSensor::new(vec![40], 5).is_ok());
    assert!(CarbonDioxideSensor::new(vec![600], 1, 600, 700).is_err());
    assert!(CarbonDioxideSensor::new(vec![600], 1, 0, 0).is_err());
    assert!(CarbonDioxideSensor::new(vec![600], 1, 600, 600).is_ok());
}

#[test]
fn test_hazard_and_comfort_levels() {
    let occupancy = OccupancySensor::new(vec![3], 1, 4).unwrap();
    assert_eq!(occupancy.hazard_level(), 75);
    assert_eq!(occupancy.comfort_level(), 25);

    let noise = NoiseSensor::new(vec![70], 1).unwrap();
    assert_eq!(noise.hazard_level(), 100);
    assert_eq!(noise.comfort_level(), 0);

    let quiet = NoiseSensor::new(vec![60], 1).unwrap();
    assert_eq!(quiet.hazard_level(), 50);
    assert_eq!(quiet.comfort_level(), 50);

    let co2 = CarbonDioxideSensor::new(vec![700], 1, 600, 200).unwrap();
    assert_eq!(co2.hazard_level(), 0);
    assert_eq!(co2.comfort_level(), 50);

    let hot = TemperatureSensor::new(vec![68]).unwrap();
    assert_eq!(hot.hazard_level(), 100);
    assert_eq!(hot.comfort_level(), 0);
}

#[test]
fn test_rule_based_short_circuit() {
    let installed: Vec<Sensor> = vec![
        NoiseSensor::new(vec![80], 1).unwrap().into(),
        OccupancySensor::new(vec![0], 1, 10).unwrap().into(),
        TemperatureSensor::new(vec![20]).unwrap().into(),
    ];
    let evaluator = RuleBasedHazardEvaluator::new(installed.iter().map(Sensor::kind).collect());

    // Occupancy at zero would otherwise scale the average down to nothing
    assert_eq!(evaluator.evaluate_hazard_level(&installed), 100);
}

#[test]
fn test_rule_based_occupancy_scaling() {
    let installed: Vec<Sensor> = vec![
        NoiseSensor::new(vec![60], 1).unwrap().into(),
        OccupancySensor::new(vec![5], 1, 10).unwrap().into(),
        TemperatureSensor::new(vec![20]).unwrap().into(),
    ];
    let evaluator = RuleBasedHazardEvaluator::new(installed.iter().map(Sensor::kind).collect());

    // ((50 + 0) / 2) * 0.5 = 12.5
    assert_eq!(evaluator.evaluate_hazard_level(&installed), 13);
}

#[test]
fn test_weighting_validation() {
    let result = WeightingBasedHazardEvaluator::new(vec![
        (SensorKind::Noise, 10),
        (SensorKind::Temperature, 20),
    ]);
    assert!(result.is_err());

    let result = WeightingBasedHazardEvaluator::new(vec![
        (SensorKind::Noise, 50),
        (SensorKind::Temperature, 50),
    ]);
    assert!(result.is_ok());

    let result = WeightingBasedHazardEvaluator::new(vec![
        (SensorKind::Noise, 50),
        (SensorKind::Noise, 50),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_weighted_hazard_level() {
    let installed: Vec<Sensor> = vec![
        NoiseSensor::new(vec![60], 1).unwrap().into(),
        OccupancySensor::new(vec![3], 1, 4).unwrap().into(),
    ];
    let evaluator = WeightingBasedHazardEvaluator::new(vec![
        (SensorKind::Noise, 40),
        (SensorKind::Occupancy, 60),
    ])
    .unwrap();

    // 50 * 0.4 + 75 * 0.6 = 65
    assert_eq!(evaluator.evaluate_hazard_level(&installed), 65);
}

#[test]
fn test_room_evaluator_must_match_sensors() {
    let mut room = Room::new(101, RoomType::Laboratory, 20.0).unwrap();
    room.add_sensor(NoiseSensor::new(vec![60], 1).unwrap()).unwrap();

    let missing: HazardEvaluator =
        RuleBasedHazardEvaluator::new(vec![SensorKind::Noise, SensorKind::Temperature]).into();
    assert!(room.set_hazard_evaluator(Some(missing)).is_err());
    assert!(room.hazard_evaluator().is_none());

    let evaluator: HazardEvaluator = RuleBasedHazardEvaluator::new(vec![SensorKind::Noise]).into();
    room.set_hazard_evaluator(Some(evaluator)).unwrap();
    assert_eq!(room.evaluate_hazard_level(), Some(50));

    // A new sensor invalidates the evaluator
    room.add_sensor(TemperatureSensor::new(vec![20]).unwrap()).unwrap();
    assert!(room.hazard_evaluator().is_none());
    assert_eq!(room.evaluate_hazard_level(), None);
}

#[test]
fn test_room_state_precedence() {
    let mut room = Room::new(101, RoomType::Study, 10.0).unwrap();
    assert_eq!(room.evaluate_room_state(), RoomState::Open);

    room.set_maintenance(true);
    assert_eq!(room.evaluate_room_state(), RoomState::Maintenance);

    room.set_fire_drill(true);
    assert_eq!(room.evaluate_room_state(), RoomState::Evacuate);

    room.set_fire_drill(false);
    room.add_sensor(TemperatureSensor::new(vec![20, 70]).unwrap()).unwrap();
    assert_eq!(room.evaluate_room_state(), RoomState::Maintenance);
}

#[test]
fn test_room_comfort_level_average() {
    let mut room = Room::new(101, RoomType::Study, 10.0).unwrap();
    assert_eq!(room.comfort_level(), 0.0);

    room.add_sensor(TemperatureSensor::new(vec![22]).unwrap()).unwrap();
    room.add_sensor(NoiseSensor::new(vec![60], 1).unwrap()).unwrap();
    assert_eq!(room.comfort_level(), 75.0);
    assert!(room.add_sensor(NoiseSensor::new(vec![50], 1).unwrap()).is_err());
}
