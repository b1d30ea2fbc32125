//! Study room recommendation
//!
//! Finds a comfortable open study room, preferring lower floors.

use crate::facility::building::Building;
use crate::facility::room::Room;
use crate::types::{RoomState, RoomType};
use tracing::debug;

/// Recommend the most comfortable open study room in a building
///
/// Floors are visited from the ground up. On each floor the most comfortable
/// open study room is picked, and it replaces the running best when it is at
/// least as comfortable. The scan stops at the first floor whose best room is
/// less comfortable than the running best. Floors without an open study room
/// are passed over.
pub fn recommend_study_room(building: &Building) -> Option<&Room> {
    let mut floors: Vec<_> = building.floors().iter().collect();
    floors.sort_by_key(|f| f.number());

    let mut best: Option<(&Room, f64)> = None;
    for floor in floors {
        let mut floor_best: Option<(&Room, f64)> = None;
        for room in floor.rooms() {
            if room.room_type() != RoomType::Study || room.evaluate_room_state() != RoomState::Open {
                continue;
            }
            let comfort = room.comfort_level();
            if floor_best.map_or(true, |(_, c)| comfort > c) {
                floor_best = Some((room, comfort));
            }
        }

        let Some((room, comfort)) = floor_best else {
            continue;
        };
        match best {
            Some((_, best_comfort)) if comfort < best_comfort => {
                debug!(floor = floor.number(), "Stopping scan, floor is less comfortable");
                break;
            }
            _ => best = Some((room, comfort)),
        }
    }
    best.map(|(room, _)| room)
}
