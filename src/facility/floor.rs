//! Floor management and room organization
//!
//! A floor owns its rooms and an optional maintenance schedule, and keeps
//! the rooms' combined area within its own footprint.

use crate::facility::error::{FacilityError, FacilityResult};
use crate::facility::maintenance::MaintenanceSchedule;
use crate::facility::room::{Room, AREA_TOLERANCE};
use crate::sensors::Timed;
use crate::types::RoomType;
use std::fmt;
use tracing::debug;

/// Represents one floor of a building
#[derive(Debug, Clone)]
pub struct Floor {
    number: u32,
    width: f64,
    length: f64,
    rooms: Vec<Room>,
    maintenance_schedule: Option<MaintenanceSchedule>,
}

impl Floor {
    /// Minimum floor width in metres
    pub const MIN_WIDTH: f64 = 5.0;
    /// Minimum floor length in metres
    pub const MIN_LENGTH: f64 = 5.0;

    /// Create an empty floor
    pub fn new(number: u32, width: f64, length: f64) -> FacilityResult<Self> {
        if number < 1 {
            return Err(FacilityError::invalid_argument("Floor number must be at least 1"));
        }
        Self::check_dimensions(width, length)?;
        Ok(Self { number, width, length, rooms: Vec::new(), maintenance_schedule: None })
    }

    fn check_dimensions(width: f64, length: f64) -> FacilityResult<()> {
        let valid = |value: f64, min: f64| value.is_finite() && value >= min;
        if !valid(width, Self::MIN_WIDTH) || !valid(length, Self::MIN_LENGTH) {
            return Err(FacilityError::invalid_argument(format!(
                "Floor dimensions must be at least {}m x {}m, got {}m x {}m",
                Self::MIN_WIDTH,
                Self::MIN_LENGTH,
                width,
                length
            )));
        }
        Ok(())
    }

    /// Floor number, 1 for the ground floor
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Width in metres
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Length in metres
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Total floor area in square metres
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Combined area of all rooms on the floor
    pub fn occupied_area(&self) -> f64 {
        self.rooms.iter().map(Room::area).sum()
    }

    /// Rooms in insertion order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by number
    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number() == number)
    }

    /// Look up a room by number for mutation
    pub fn room_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.number() == number)
    }

    /// Add a room to the floor
    ///
    /// Fails if the room number is taken or the room does not fit in the
    /// remaining area.
    pub fn add_room(&mut self, room: Room) -> FacilityResult<()> {
        if self.room(room.number()).is_some() {
            return Err(FacilityError::DuplicateRoom(room.number()));
        }
        let occupied_area = self.occupied_area();
        if occupied_area + room.area() > self.area() {
            return Err(FacilityError::InsufficientSpace {
                floor_area: self.area(),
                occupied_area,
                room_area: room.area(),
            });
        }

        debug!(floor = self.number, room = room.number(), "Room added");
        self.rooms.push(room);
        Ok(())
    }

    /// Resize the floor
    ///
    /// Fails if a dimension is below its minimum or the new area could not
    /// hold the rooms already on the floor.
    pub fn change_dimensions(&mut self, width: f64, length: f64) -> FacilityResult<()> {
        Self::check_dimensions(width, length)?;
        let new_area = width * length;
        let occupied_area = self.occupied_area();
        if new_area < occupied_area {
            return Err(FacilityError::FloorTooSmall { new_area, occupied_area });
        }
        self.width = width;
        self.length = length;
        Ok(())
    }

    /// Start a fire drill in rooms of the given type, or in every room
    pub fn fire_drill(&mut self, room_type: Option<RoomType>) {
        for room in &mut self.rooms {
            if room_type.map_or(true, |t| t == room.room_type()) {
                room.set_fire_drill(true);
            }
        }
    }

    /// End any fire drill on this floor
    pub fn cancel_fire_drill(&mut self) {
        for room in &mut self.rooms {
            room.set_fire_drill(false);
        }
    }

    /// The current maintenance schedule, if any
    pub fn maintenance_schedule(&self) -> Option<&MaintenanceSchedule> {
        self.maintenance_schedule.as_ref()
    }

    /// Replace the maintenance schedule with a rotation over the given rooms
    ///
    /// The rotation must be non-empty, name only rooms on this floor and never
    /// visit the same room twice in a row, counting the wrap from last to
    /// first. The previous schedule's current room stops being maintained.
    pub fn create_maintenance_schedule(&mut self, room_order: Vec<u32>) -> FacilityResult<()> {
        if room_order.is_empty() {
            return Err(FacilityError::invalid_argument("Maintenance rotation cannot be empty"));
        }
        let len = room_order.len();
        for (i, room) in room_order.iter().enumerate() {
            let next = (i + 1) % len;
            if next != i && room_order[next] == *room {
                return Err(FacilityError::invalid_argument(format!(
                    "Room {} appears twice in a row in the maintenance rotation",
                    room
                )));
            }
        }
        if let Some(missing) = room_order.iter().find(|n| self.room(**n).is_none()) {
            return Err(FacilityError::invalid_argument(format!(
                "Room {} is not on floor {}",
                missing, self.number
            )));
        }

        if let Some(previous) = self.maintenance_schedule.take() {
            if let Some(room) = self.room_mut(previous.current_room()) {
                room.set_maintenance(false);
            }
        }
        debug!(floor = self.number, rooms = len, "Maintenance schedule created");
        self.maintenance_schedule = Some(MaintenanceSchedule::new(room_order));
        Ok(())
    }

    /// Move the maintenance schedule on to its next room
    ///
    /// Returns false if the floor has no schedule.
    pub fn skip_current_maintenance(&mut self) -> bool {
        match &mut self.maintenance_schedule {
            Some(schedule) => {
                schedule.skip_current_maintenance();
                true
            }
            None => false,
        }
    }
}

impl Timed for Floor {
    /// Advance the floor's maintenance schedule, if it has one
    fn elapse_one_minute(&mut self) {
        if let Some(schedule) = &mut self.maintenance_schedule {
            schedule.elapse_one_minute(&mut self.rooms);
        }
    }
}

impl PartialEq for Floor {
    fn eq(&self, other: &Self) -> bool {
        (self.width - other.width).abs() <= AREA_TOLERANCE
            && (self.length - other.length).abs() <= AREA_TOLERANCE
            && self.rooms.len() == other.rooms.len()
            && self.rooms.iter().all(|r| other.rooms.contains(r))
            && other.rooms.iter().all(|r| self.rooms.contains(r))
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Floor #{}: width={:.2}m, length={:.2}m, rooms={}",
            self.number,
            self.width,
            self.length,
            self.rooms.len()
        )
    }
}
