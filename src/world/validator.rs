use std::collections::HashSet;

use super::model::{ItemKind, World};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(super) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist
    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    if world.max_health == 0 {
        errors.push(ValidationError::new("max_health must be above zero"));
    }

    // Validate exits
    for (room_id, room) in &world.rooms {
        for exit in &room.exits {
            if exit.direction.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    room_id
                )));
            }
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }
        }
    }

    // Every tag a key unlocks must be carried by at least one room
    let all_tags: HashSet<&str> = world
        .rooms
        .values()
        .flat_map(|r| r.tags.iter().map(|t| t.as_str()))
        .collect();

    for room in world.rooms.values() {
        for item in room.chest.list_items().values() {
            if let ItemKind::Key { unlocks } = &item.kind {
                if !all_tags.contains(unlocks.as_str()) {
                    errors.push(ValidationError::new(format!(
                        "key '{}' unlocks '{}' but no room carries that tag",
                        item.name, unlocks
                    )));
                }
            }
        }
    }

    errors
}
