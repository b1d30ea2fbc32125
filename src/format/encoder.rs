//! Writing buildings in the save format
//!
//! Every header carries counts computed from the model at encoding time, so a
//! building assembled in code encodes just as consistently as a loaded one.

use crate::facility::{Building, Floor, Room};
use crate::hazard::HazardEvaluator;
use crate::sensors::Sensor;

/// Encode several buildings, one after another
pub fn encode_buildings(buildings: &[Building]) -> Vec<String> {
    buildings.iter().flat_map(encode_building).collect()
}

/// Encode a building: its name, its floor count and then every floor
pub fn encode_building(building: &Building) -> Vec<String> {
    let mut lines = vec![building.name().to_string(), building.floors().len().to_string()];
    for floor in building.floors() {
        lines.extend(encode_floor(floor));
    }
    lines
}

/// Encode a floor header followed by its rooms
///
/// The header is `number:width:length:roomCount`, with the maintenance
/// rotation appended as a fifth field when the floor has one.
pub fn encode_floor(floor: &Floor) -> Vec<String> {
    let mut header = format!(
        "{}:{:.2}:{:.2}:{}",
        floor.number(),
        floor.width(),
        floor.length(),
        floor.rooms().len()
    );
    if let Some(schedule) = floor.maintenance_schedule() {
        header.push(':');
        header.push_str(&schedule.encode());
    }

    let mut lines = vec![header];
    for room in floor.rooms() {
        lines.extend(encode_room(room));
    }
    lines
}

/// Encode a room header followed by one line per sensor
pub fn encode_room(room: &Room) -> Vec<String> {
    let mut header = format!(
        "{}:{}:{:.2}:{}",
        room.number(),
        room.room_type(),
        room.area(),
        room.sensors().len()
    );
    let evaluator = room.hazard_evaluator();
    if let Some(evaluator) = evaluator {
        header.push(':');
        header.push_str(evaluator.tag());
    }

    let mut lines = vec![header];
    for sensor in room.sensors() {
        let mut line = encode_sensor(sensor);
        if let Some(HazardEvaluator::WeightingBased(weighting)) = evaluator {
            let weight = weighting.weight(sensor.kind()).unwrap_or(0);
            line.push_str(&format!("@{}", weight));
        }
        lines.push(line);
    }
    lines
}

/// Encode one sensor line, without any weight
pub fn encode_sensor(sensor: &Sensor) -> String {
    let readings = sensor.timed().encode_readings();
    match sensor {
        Sensor::Temperature(_) => format!("{}:{}", sensor.kind(), readings),
        Sensor::Noise(noise) => {
            format!("{}:{}:{}", sensor.kind(), readings, noise.timed().update_frequency())
        }
        Sensor::Occupancy(occupancy) => format!(
            "{}:{}:{}:{}",
            sensor.kind(),
            readings,
            occupancy.timed().update_frequency(),
            occupancy.capacity()
        ),
        Sensor::CarbonDioxide(co2) => format!(
            "{}:{}:{}:{}:{}",
            sensor.kind(),
            readings,
            co2.timed().update_frequency(),
            co2.ideal_value(),
            co2.variation_limit()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::{RuleBasedHazardEvaluator, WeightingBasedHazardEvaluator};
    use crate::sensors::{CarbonDioxideSensor, NoiseSensor, OccupancySensor, TemperatureSensor};
    use crate::types::{RoomType, SensorKind};

    #[test]
    fn test_encode_sensor_lines() {
        let temperature = Sensor::from(TemperatureSensor::new(vec![24, 25, 26]).unwrap());
        assert_eq!(encode_sensor(&temperature), "TemperatureSensor:24,25,26");

        let noise = Sensor::from(NoiseSensor::new(vec![55, 62], 3).unwrap());
        assert_eq!(encode_sensor(&noise), "NoiseSensor:55,62:3");

        let occupancy = Sensor::from(OccupancySensor::new(vec![1, 2], 2, 4).unwrap());
        assert_eq!(encode_sensor(&occupancy), "OccupancySensor:1,2:2:4");

        let co2 = Sensor::from(CarbonDioxideSensor::new(vec![690], 5, 700, 20).unwrap());
        assert_eq!(encode_sensor(&co2), "CarbonDioxideSensor:690:5:700:20");
    }

    #[test]
    fn test_encode_room_with_weights() {
        let mut room = Room::new(101, RoomType::Study, 23.5).unwrap();
        room.add_sensor(TemperatureSensor::new(vec![20]).unwrap()).unwrap();
        room.add_sensor(NoiseSensor::new(vec![55], 1).unwrap()).unwrap();
        let evaluator = WeightingBasedHazardEvaluator::new(vec![
            (SensorKind::Noise, 30),
            (SensorKind::Temperature, 70),
        ])
        .unwrap();
        room.set_hazard_evaluator(Some(evaluator.into())).unwrap();

        assert_eq!(
            encode_room(&room),
            vec![
                "101:STUDY:23.50:2:WeightingBased",
                "NoiseSensor:55:1@30",
                "TemperatureSensor:20@70",
            ]
        );
    }

    #[test]
    fn test_unweighted_sensor_encodes_zero() {
        let mut room = Room::new(101, RoomType::Study, 20.0).unwrap();
        room.add_sensor(TemperatureSensor::new(vec![20]).unwrap()).unwrap();
        room.add_sensor(NoiseSensor::new(vec![55], 1).unwrap()).unwrap();
        let evaluator =
            WeightingBasedHazardEvaluator::new(vec![(SensorKind::Temperature, 100)]).unwrap();
        room.set_hazard_evaluator(Some(evaluator.into())).unwrap();

        let lines = encode_room(&room);
        assert_eq!(lines[1], "NoiseSensor:55:1@0");
        assert_eq!(lines[2], "TemperatureSensor:20@100");
    }

    #[test]
    fn test_encode_floor_and_building() {
        let mut room = Room::new(101, RoomType::Laboratory, 10.0).unwrap();
        room.add_sensor(TemperatureSensor::new(vec![20]).unwrap()).unwrap();
        room.set_hazard_evaluator(Some(
            RuleBasedHazardEvaluator::new(vec![SensorKind::Temperature]).into(),
        ))
        .unwrap();
        let mut floor = Floor::new(1, 10.0, 12.5).unwrap();
        floor.add_room(room).unwrap();
        floor.add_room(Room::new(102, RoomType::Office, 5.0).unwrap()).unwrap();
        floor.create_maintenance_schedule(vec![102, 101]).unwrap();
        let mut building = Building::new("Hawken");
        building.add_floor(floor).unwrap();

        assert_eq!(
            encode_building(&building),
            vec![
                "Hawken",
                "1",
                "1:10.00:12.50:2:102,101",
                "101:LABORATORY:10.00:1:RuleBased",
                "TemperatureSensor:20",
                "102:OFFICE:5.00:0",
            ]
        );
    }
}
