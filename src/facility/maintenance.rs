//! Maintenance rotation for the rooms of one floor
//!
//! The schedule visits its rooms cyclically. Rooms are held by number and
//! resolved through the owning floor's rooms on every access, so the schedule
//! never aliases the floor's room list.

use crate::facility::room::Room;
use crate::types::RoomState;
use std::fmt;
use tracing::{debug, trace};

/// Cyclic maintenance rotation over rooms of a floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceSchedule {
    room_order: Vec<u32>,
    current_room_index: usize,
    time_elapsed: u32,
}

impl MaintenanceSchedule {
    /// Create a schedule starting at the first room of `room_order`
    ///
    /// The floor validates the order before constructing a schedule.
    pub(crate) fn new(room_order: Vec<u32>) -> Self {
        Self { room_order, current_room_index: 0, time_elapsed: 0 }
    }

    /// Minutes needed to maintain a room
    ///
    /// The minimum room area plus a fifth of the extra area, scaled by the
    /// room type's multiplier, rounded to whole minutes.
    pub fn maintenance_time(room: &Room) -> u32 {
        let extra_area = room.area() - Room::MIN_AREA;
        let minutes = Room::MIN_AREA + room.room_type().maintenance_multiplier() * extra_area * 0.2;
        minutes.round() as u32
    }

    /// Room numbers in rotation order
    pub fn room_order(&self) -> &[u32] {
        &self.room_order
    }

    /// Number of the room currently being maintained
    pub fn current_room(&self) -> u32 {
        self.room_order[self.current_room_index]
    }

    /// Minutes spent so far on the current room
    pub fn time_elapsed_current_room(&self) -> u32 {
        self.time_elapsed
    }

    /// Move on to the next room in the rotation without finishing the current one
    pub fn skip_current_maintenance(&mut self) {
        self.current_room_index = (self.current_room_index + 1) % self.room_order.len();
        self.time_elapsed = 0;
    }

    /// Progress maintenance by one minute
    ///
    /// Nothing happens while the current room is being evacuated. Otherwise
    /// the elapsed time grows, the rotation advances once the current room's
    /// maintenance time is reached, and the (possibly new) current room is
    /// flagged as under maintenance.
    pub fn elapse_one_minute(&mut self, rooms: &mut [Room]) {
        let current = self.current_room();
        let Some(room) = rooms.iter_mut().find(|r| r.number() == current) else {
            debug!(room = current, "Scheduled room not found on floor");
            return;
        };
        if room.evaluate_room_state() == RoomState::Evacuate {
            trace!(room = current, "Maintenance paused during evacuation");
            return;
        }

        self.time_elapsed += 1;
        if self.time_elapsed >= Self::maintenance_time(room) {
            room.set_maintenance(false);
            self.skip_current_maintenance();
            debug!(finished = current, next = self.current_room(), "Maintenance rotated");
        }

        let next = self.current_room();
        if let Some(room) = rooms.iter_mut().find(|r| r.number() == next) {
            room.set_maintenance(true);
        }
    }

    /// Comma-separated room numbers, as written in the save format
    pub fn encode(&self) -> String {
        self.room_order.iter().map(u32::to_string).collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for MaintenanceSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MaintenanceSchedule: currentRoom=#{}, currentElapsed={}",
            self.current_room(),
            self.time_elapsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomType;

    #[test]
    fn test_maintenance_time_by_type() {
        let study = Room::new(1, RoomType::Study, 10.0).unwrap();
        let office = Room::new(2, RoomType::Office, 10.0).unwrap();
        let lab = Room::new(3, RoomType::Laboratory, 10.0).unwrap();
        let minimal = Room::new(4, RoomType::Laboratory, 5.0).unwrap();

        assert_eq!(MaintenanceSchedule::maintenance_time(&study), 6);
        assert_eq!(MaintenanceSchedule::maintenance_time(&office), 7); // 6.5 rounds up
        assert_eq!(MaintenanceSchedule::maintenance_time(&lab), 7);
        assert_eq!(MaintenanceSchedule::maintenance_time(&minimal), 5);
    }

    #[test]
    fn test_skip_wraps() {
        let mut schedule = MaintenanceSchedule::new(vec![1, 2]);
        schedule.skip_current_maintenance();
        assert_eq!(schedule.current_room(), 2);
        schedule.skip_current_maintenance();
        assert_eq!(schedule.current_room(), 1);
        assert_eq!(schedule.time_elapsed_current_room(), 0);
    }

    #[test]
    fn test_first_tick_flags_current_room() {
        let mut rooms = vec![Room::new(1, RoomType::Study, 5.0).unwrap()];
        let mut schedule = MaintenanceSchedule::new(vec![1]);
        assert!(!rooms[0].maintenance_ongoing());
        schedule.elapse_one_minute(&mut rooms);
        assert!(rooms[0].maintenance_ongoing());
        assert_eq!(schedule.time_elapsed_current_room(), 1);
    }

    #[test]
    fn test_paused_during_fire_drill() {
        let mut rooms = vec![Room::new(1, RoomType::Study, 5.0).unwrap()];
        rooms[0].set_fire_drill(true);
        let mut schedule = MaintenanceSchedule::new(vec![1]);
        schedule.elapse_one_minute(&mut rooms);
        assert_eq!(schedule.time_elapsed_current_room(), 0);
        assert!(!rooms[0].maintenance_ongoing());
    }

    #[test]
    fn test_encode_and_display() {
        let schedule = MaintenanceSchedule::new(vec![101, 102, 101, 103]);
        assert_eq!(schedule.encode(), "101,102,101,103");
        assert_eq!(schedule.to_string(), "MaintenanceSchedule: currentRoom=#101, currentElapsed=0");
    }
}
