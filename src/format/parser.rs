//! Reading buildings from the save format
//!
//! The save format has no explicit delimiters between nested blocks. Block
//! boundaries are recovered from positional markers in two passes: the first
//! pass collects the start index of every block at one nesting level, the
//! second slices the lines at those indices and parses each slice.
//!
//! - A building starts at line 0 and at every later line whose following line
//!   is a bare integer (the floor count).
//! - Inside a building, a floor starts at line 2 and at every later line whose
//!   leading colon field is an integer that the following line begins with.
//! - Inside a floor, a room starts at line 1 and at every later line whose
//!   leading colon field is an integer.
//!
//! A malformed number only means "not a boundary". The block counts declared
//! in the headers catch the resulting mis-segmentation.

use crate::facility::{Building, Floor, Room};
use crate::format::error::{FormatError, FormatResult};
use crate::hazard::{HazardEvaluator, RuleBasedHazardEvaluator, WeightingBasedHazardEvaluator};
use crate::sensors::{CarbonDioxideSensor, NoiseSensor, OccupancySensor, Sensor, TemperatureSensor};
use crate::types::{RoomType, SensorKind};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Parse every building in a sequence of save-format lines
///
/// Fails on the first defect of any kind, including an empty line anywhere
/// or no lines at all.
#[instrument(skip(lines), fields(line_count = lines.len()))]
pub fn parse_buildings<S: AsRef<str>>(lines: &[S]) -> FormatResult<Vec<Building>> {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    if lines.is_empty() {
        return Err(FormatError::new("No buildings in input"));
    }
    if let Some(index) = lines.iter().position(|l| l.is_empty()) {
        return Err(FormatError::new(format!("Empty line at line {}", index + 1)));
    }

    let starts = building_starts(&lines);
    debug!(buildings = starts.len(), "Segmented input into buildings");
    let parsed: FormatResult<Vec<Building>> = blocks(&lines, &starts).map(parse_building).collect();
    if let Err(e) = &parsed {
        debug!(error = %e, "Rejected input");
    }
    parsed
}

/// Leading colon field parsed as an integer, if it is one
fn leading_number(line: &str) -> Option<i32> {
    line.split(':').next().and_then(|field| field.parse().ok())
}

fn building_starts(lines: &[&str]) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend((1..lines.len()).filter(|&i| {
        lines.get(i + 1).is_some_and(|next| next.parse::<i32>().is_ok())
    }));
    starts
}

fn floor_starts(block: &[&str]) -> Vec<usize> {
    let mut starts = vec![2];
    starts.extend((3..block.len()).filter(|&i| {
        match (leading_number(block[i]), block.get(i + 1)) {
            (Some(number), Some(next)) => next.starts_with(&number.to_string()),
            _ => false,
        }
    }));
    starts
}

fn room_starts(block: &[&str]) -> Vec<usize> {
    let mut starts = Vec::new();
    if block.len() > 1 {
        starts.push(1);
    }
    starts.extend((2..block.len()).filter(|&i| leading_number(block[i]).is_some()));
    starts
}

/// Slice `lines` into consecutive blocks beginning at each of `starts`
fn blocks<'a, 'b>(
    lines: &'b [&'a str],
    starts: &'b [usize],
) -> impl Iterator<Item = &'b [&'a str]> + 'b {
    starts.iter().enumerate().map(move |(i, &start)| {
        let end = starts.get(i + 1).copied().unwrap_or(lines.len());
        lines.get(start..end).unwrap_or(&[])
    })
}

/// Colon-separated fields of a line, without trailing empty fields
fn fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(':').collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Comma-separated items of a field, without trailing empty items
///
/// A field with no comma is kept as its single item, even when empty.
fn list_items(field: &str) -> Vec<&str> {
    let mut items: Vec<&str> = field.split(',').collect();
    if items.len() > 1 {
        while items.last().is_some_and(|i| i.is_empty()) {
            items.pop();
        }
    }
    items
}

fn parse_field<T: FromStr>(field: &str, what: &str) -> FormatResult<T> {
    field
        .parse()
        .map_err(|_| FormatError::new(format!("Invalid {}: \"{}\"", what, field)))
}

fn parse_building(block: &[&str]) -> FormatResult<Building> {
    let name = block[0];
    let count_line = block
        .get(1)
        .ok_or_else(|| FormatError::new(format!("Building \"{}\" has no floor count", name)))?;
    let floor_count: usize = parse_field(count_line, "floor count")?;

    let starts = floor_starts(block);
    if starts.len() != floor_count {
        return Err(FormatError::new(format!(
            "Building \"{}\" declares {} floors but has {}",
            name,
            floor_count,
            starts.len()
        )));
    }

    let mut building = Building::new(name);
    for floor_block in blocks(block, &starts) {
        if floor_block.is_empty() {
            return Err(FormatError::new(format!("Building \"{}\" is missing a floor", name)));
        }
        building.add_floor(parse_floor(floor_block)?)?;
    }
    debug!(building = name, floors = floor_count, "Parsed building");
    Ok(building)
}

fn parse_floor(block: &[&str]) -> FormatResult<Floor> {
    let header = fields(block[0]);
    if !(4..=5).contains(&header.len()) {
        return Err(FormatError::new(format!("Malformed floor header: \"{}\"", block[0])));
    }
    let number: u32 = parse_field(header[0], "floor number")?;
    let width: f64 = parse_field(header[1], "floor width")?;
    let length: f64 = parse_field(header[2], "floor length")?;
    let room_count: usize = parse_field(header[3], "room count")?;
    let mut floor = Floor::new(number, width, length)?;

    let starts = room_starts(block);
    if starts.len() != room_count {
        return Err(FormatError::new(format!(
            "Floor {} declares {} rooms but has {}",
            number,
            room_count,
            starts.len()
        )));
    }
    for room_block in blocks(block, &starts) {
        floor.add_room(parse_room(room_block)?)?;
    }

    if let Some(rotation) = header.get(4) {
        let order = list_items(rotation)
            .into_iter()
            .map(|n| parse_field::<u32>(n, "maintenance room"))
            .collect::<FormatResult<Vec<_>>>()?;
        if let Some(missing) = order.iter().find(|n| floor.room(**n).is_none()) {
            return Err(FormatError::new(format!(
                "Maintenance rotation names room {} which is not on floor {}",
                missing, number
            )));
        }
        if !order.is_empty() {
            floor.create_maintenance_schedule(order)?;
        }
    }
    Ok(floor)
}

fn parse_room(block: &[&str]) -> FormatResult<Room> {
    let header = fields(block[0]);
    if !(4..=5).contains(&header.len()) {
        return Err(FormatError::new(format!("Malformed room header: \"{}\"", block[0])));
    }
    let number: u32 = parse_field(header[0], "room number")?;
    let room_type: RoomType = parse_field(header[1], "room type")?;
    let area: f64 = parse_field(header[2], "room area")?;
    let sensor_count: usize = parse_field(header[3], "sensor count")?;
    let tag = header.get(4).copied();
    if let Some(tag) = tag {
        if tag != HazardEvaluator::RULE_BASED_TAG && tag != HazardEvaluator::WEIGHTING_BASED_TAG {
            return Err(FormatError::new(format!("Unknown hazard evaluator: \"{}\"", tag)));
        }
    }

    let sensor_lines = &block[1..];
    if sensor_lines.len() != sensor_count {
        return Err(FormatError::new(format!(
            "Room {} declares {} sensors but has {}",
            number,
            sensor_count,
            sensor_lines.len()
        )));
    }

    let mut room = Room::new(number, room_type, area)?;
    let mut weightings = Vec::with_capacity(sensor_count);
    for line in sensor_lines {
        let (sensor, weight) = parse_sensor(line)?;
        weightings.push((sensor.kind(), weight));
        room.add_sensor(sensor)?;
    }

    let evaluator: Option<HazardEvaluator> = match tag {
        Some(HazardEvaluator::RULE_BASED_TAG) => {
            let kinds = room.sensors().iter().map(Sensor::kind).collect();
            Some(RuleBasedHazardEvaluator::new(kinds).into())
        }
        Some(_) => {
            let weightings = weightings
                .into_iter()
                .map(|(kind, weight)| {
                    weight.map(|w| (kind, w)).ok_or_else(|| {
                        FormatError::new(format!("{} in room {} has no weight", kind, number))
                    })
                })
                .collect::<FormatResult<Vec<_>>>()?;
            Some(WeightingBasedHazardEvaluator::new(weightings)?.into())
        }
        None => None,
    };
    room.set_hazard_evaluator(evaluator)?;
    Ok(room)
}

/// Parse one sensor line into the sensor and its optional `@weight`
fn parse_sensor(line: &str) -> FormatResult<(Sensor, Option<u32>)> {
    let fields = fields(line);
    let kind: SensorKind = parse_field(fields[0], "sensor type")?;
    if fields.len() != kind.field_count() {
        return Err(FormatError::new(format!(
            "{} line needs {} fields, got {}: \"{}\"",
            kind,
            kind.field_count(),
            fields.len(),
            line
        )));
    }

    // The weight rides on the last field, which for temperature sensors is
    // the readings list itself.
    let last = fields.len() - 1;
    let (last_value, weight) = match fields[last].split_once('@') {
        Some((value, weight)) => (value, Some(parse_field(weight, "sensor weight")?)),
        None => (fields[last], None),
    };
    let field = |i: usize| if i == last { last_value } else { fields[i] };

    let readings = list_items(field(1))
        .into_iter()
        .map(|r| parse_field(r, "sensor reading"))
        .collect::<FormatResult<Vec<u32>>>()?;

    let sensor: Sensor = match kind {
        SensorKind::Temperature => TemperatureSensor::new(readings)?.into(),
        SensorKind::Noise => {
            NoiseSensor::new(readings, parse_field(field(2), "update frequency")?)?.into()
        }
        SensorKind::Occupancy => OccupancySensor::new(
            readings,
            parse_field(field(2), "update frequency")?,
            parse_field(field(3), "capacity")?,
        )?
        .into(),
        SensorKind::CarbonDioxide => CarbonDioxideSensor::new(
            readings,
            parse_field(field(2), "update frequency")?,
            parse_field(field(3), "ideal CO2 value")?,
            parse_field(field(4), "CO2 variation limit")?,
        )?
        .into(),
    };
    Ok((sensor, weight))
}
