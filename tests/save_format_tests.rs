//! Tests for the line-based save format
//!
//! These tests verify that parsing rejects malformed input with a format
//! error, that generated buildings survive an encode/parse cycle, and that
//! save files can be written and read back from disk.

use building_management_simulator::facility::BuildingGenerator;
use building_management_simulator::format::{
    encode_buildings, parse_buildings, read_buildings_file, write_buildings_file, FormatError,
};
use building_management_simulator::hazard::HazardEvaluator;
use building_management_simulator::simulation::SimulationError;
use building_management_simulator::types::{RoomType, SensorKind};
use tempfile::TempDir;

/// Parse and expect a format error, returning its message
fn parse_error(lines: &[&str]) -> String {
    match parse_buildings(lines) {
        Err(e) => e.message().to_string(),
        Ok(buildings) => panic!("expected a format error, parsed {} buildings", buildings.len()),
    }
}

/// A small but complete save file with two buildings
fn campus() -> Vec<&'static str> {
    vec![
        "Hawken",
        "2",
        "1:10.00:12.50:2:101,102",
        "101:STUDY:20.00:2:RuleBased",
        "NoiseSensor:55,62:3",
        "TemperatureSensor:24,25,26",
        "102:OFFICE:15.00:0",
        "2:10.00:10.00:1",
        "201:LABORATORY:30.00:2:WeightingBased",
        "CarbonDioxideSensor:700,900:2:800:300@30",
        "OccupancySensor:3,5:1:10@70",
        "Steele",
        "1",
        "1:6.00:6.00:1",
        "101:STUDY:5.00:0",
    ]
}

#[test]
fn test_parse_complete_file() {
    let buildings = parse_buildings(&campus()).unwrap();
    assert_eq!(buildings.len(), 2);

    let hawken = &buildings[0];
    assert_eq!(hawken.name(), "Hawken");
    assert_eq!(hawken.floors().len(), 2);
    assert_eq!(hawken.room_count(), 3);

    let ground = hawken.floor(1).unwrap();
    assert_eq!(ground.maintenance_schedule().unwrap().room_order(), &[101, 102]);
    let study = ground.room(101).unwrap();
    assert_eq!(study.room_type(), RoomType::Study);
    assert_eq!(study.sensors().len(), 2);
    assert!(matches!(study.hazard_evaluator(), Some(HazardEvaluator::RuleBased(_))));

    let lab = hawken.floor(2).unwrap().room(201).unwrap();
    match lab.hazard_evaluator() {
        Some(evaluator) => {
            assert_eq!(evaluator.weight(SensorKind::CarbonDioxide), Some(30));
            assert_eq!(evaluator.weight(SensorKind::Occupancy), Some(70));
        }
        None => panic!("laboratory should have a weighting evaluator"),
    }

    assert_eq!(buildings[1].name(), "Steele");
    assert_eq!(buildings[1].room_count(), 1);
}

#[test]
fn test_encode_reproduces_input() {
    let lines = campus();
    let buildings = parse_buildings(&lines).unwrap();
    assert_eq!(encode_buildings(&buildings), lines);
}

#[test]
fn test_generated_buildings_round_trip() {
    for seed in [1, 7, 42, 1234] {
        let buildings = BuildingGenerator::with_seed(seed).generate_buildings(3, 4, 5).unwrap();
        let lines = encode_buildings(&buildings);
        let parsed = parse_buildings(&lines).unwrap();
        assert_eq!(parsed, buildings, "seed {} did not round trip", seed);
        assert_eq!(encode_buildings(&parsed), lines);
    }
}

#[test]
fn test_generator_limits_round_trip() {
    let building = BuildingGenerator::with_seed(99).generate_building("Tower", 9, 20).unwrap();
    let parsed = parse_buildings(&encode_buildings(&[building.clone()])).unwrap();
    assert_eq!(parsed, vec![building]);
}

#[test]
fn test_empty_input_rejected() {
    let lines: [&str; 0] = [];
    assert!(parse_buildings(&lines).is_err());
}

#[test]
fn test_empty_line_rejected() {
    let mut lines = campus();
    lines.insert(7, "");
    assert!(parse_error(&lines).contains("Empty line"));
}

#[test]
fn test_floor_count_mismatch() {
    let lines = ["Hawken", "2", "1:10.00:10.00:1", "101:STUDY:20.00:0"];
    assert!(parse_error(&lines).contains("declares 2 floors but has 1"));
}

#[test]
fn test_room_count_mismatch() {
    let lines = ["Hawken", "1", "1:10.00:10.00:2", "101:STUDY:20.00:0"];
    assert!(parse_error(&lines).contains("declares 2 rooms but has 1"));
}

#[test]
fn test_sensor_count_mismatch() {
    let lines = ["Hawken", "1", "1:10.00:10.00:1", "101:STUDY:20.00:2", "TemperatureSensor:20"];
    assert!(parse_error(&lines).contains("declares 2 sensors but has 1"));
}

#[test]
fn test_zero_floors_rejected() {
    let lines = ["Hawken", "0"];
    assert!(parse_buildings(&lines).is_err());
}

#[test]
fn test_unknown_room_type() {
    let lines = ["Hawken", "1", "1:10.00:10.00:1", "101:KITCHEN:20.00:0"];
    assert!(parse_error(&lines).contains("room type"));

    // Room types are case sensitive
    let lines = ["Hawken", "1", "1:10.00:10.00:1", "101:study:20.00:0"];
    assert!(parse_buildings(&lines).is_err());
}

#[test]
fn test_unknown_evaluator_tag() {
    let lines = [
        "Hawken",
        "1",
        "1:10.00:10.00:1",
        "101:STUDY:20.00:1:FuzzyLogic",
        "TemperatureSensor:20",
    ];
    assert!(parse_error(&lines).contains("Unknown hazard evaluator"));
}

#[test]
fn test_unknown_sensor_type() {
    let lines = ["Hawken", "1", "1:10.00:10.00:1", "101:STUDY:20.00:1", "HumiditySensor:40,45"];
    assert!(parse_error(&lines).contains("sensor type"));
}

#[test]
fn test_sensor_arity() {
    let lines = ["Hawken", "1", "1:10.00:10.00:1", "101:STUDY:20.00:1", "NoiseSensor:40,45"];
    assert!(parse_error(&lines).contains("needs 3 fields"));

    let lines = ["Hawken", "1", "1:10.00:10.00:1", "101:STUDY:20.00:1", "OccupancySensor:1:1:4:9"];
    assert!(parse_error(&lines).contains("needs 4 fields"));
}

#[test]
fn test_missing_weight_rejected() {
    let lines = [
        "Hawken",
        "1",
        "1:10.00:10.00:1",
        "101:STUDY:20.00:2:WeightingBased",
        "NoiseSensor:40:1@50",
        "TemperatureSensor:20",
    ];
    assert!(parse_error(&lines).contains("has no weight"));
}

#[test]
fn test_weights_must_sum_to_one_hundred() {
    let lines = [
        "Hawken",
        "1",
        "1:10.00:10.00:1",
        "101:STUDY:20.00:2:WeightingBased",
        "NoiseSensor:40:1@10",
        "TemperatureSensor:20@20",
    ];
    assert!(parse_error(&lines).contains("sum to 100"));
}

#[test]
fn test_rotation_naming_missing_room() {
    let lines = ["Hawken", "1", "1:10.00:10.00:1:101,105", "101:STUDY:20.00:0"];
    assert!(parse_error(&lines).contains("room 105"));
}

#[test]
fn test_rotation_with_adjacent_repeat() {
    let lines = [
        "Hawken",
        "1",
        "1:10.00:10.00:2:101,101,102",
        "101:STUDY:20.00:0",
        "102:STUDY:20.00:0",
    ];
    assert!(parse_buildings(&lines).is_err());
}

#[test]
fn test_model_errors_become_format_errors() {
    // Room larger than the floor
    let lines = ["Hawken", "1", "1:5.00:5.00:1", "101:STUDY:30.00:0"];
    assert!(parse_error(&lines).contains("Insufficient space"));

    // Floor 2 without floor 1
    let lines = ["Hawken", "1", "2:10.00:10.00:1", "201:STUDY:20.00:0"];
    assert!(parse_buildings(&lines).is_err());

    // Duplicate sensor kinds in one room
    let lines = [
        "Hawken",
        "1",
        "1:10.00:10.00:1",
        "101:STUDY:20.00:2",
        "TemperatureSensor:20",
        "TemperatureSensor:21",
    ];
    assert!(parse_buildings(&lines).is_err());

    // Update cadence out of range
    let lines = ["Hawken", "1", "1:10.00:10.00:1", "101:STUDY:20.00:1", "NoiseSensor:40:9"];
    assert!(parse_buildings(&lines).is_err());
}

#[test]
fn test_format_error_display() {
    let error = FormatError::new("Bad line");
    assert_eq!(error.to_string(), "Format error: Bad line");
}

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("campus.txt");

    let buildings = BuildingGenerator::with_seed(5).generate_buildings(2, 3, 4).unwrap();
    write_buildings_file(&path, &buildings).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.ends_with('\n'));
    assert_eq!(contents.lines().count(), encode_buildings(&buildings).len());

    let loaded = read_buildings_file(&path).unwrap();
    assert_eq!(loaded, buildings);
}

#[test]
fn test_read_errors() {
    let dir = TempDir::new().unwrap();

    let missing = read_buildings_file(dir.path().join("missing.txt"));
    assert!(matches!(missing, Err(SimulationError::IoError(_))));

    let path = dir.path().join("broken.txt");
    std::fs::write(&path, "Hawken\n1\n1:10.00:10.00:3\n101:STUDY:20.00:0").unwrap();
    let broken = read_buildings_file(&path);
    assert!(matches!(broken, Err(SimulationError::FormatError(_))));
}
