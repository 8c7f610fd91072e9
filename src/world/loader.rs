use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::error::WorldError;
use super::model::{Item, ItemKind, Room, WIN_LOCATION, World};
use super::validator::{ValidationError, validate_world};

/// The castle shipped with the game.
pub const CASTLE_TOML: &str = include_str!("../../public/castle.toml");

const DEFAULT_MOVE_COST: u32 = 15;
const DEFAULT_MAX_HEALTH: u32 = 100;
const DEFAULT_HEAL: u32 = 20;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    help: String,
    #[serde(default = "default_move_cost")]
    move_cost: u32,
    #[serde(default = "default_max_health")]
    max_health: u32,
    #[serde(default)]
    death_text: String,
    #[serde(default)]
    escape_text: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    tags: Vec<String>,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,

    /// Room whose floor the item starts on.
    start_room: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    weight: u32,

    #[serde(default)]
    kind: Option<String>, // "simple", "heal", "key"

    #[serde(default)]
    heal: Option<u32>,

    #[serde(default)]
    unlocks: Option<String>,
}

// Helpers for serde defaults
fn default_move_cost() -> u32 {
    DEFAULT_MOVE_COST
}

fn default_max_health() -> u32 {
    DEFAULT_MAX_HEALTH
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// The built-in castle.
pub fn default_world() -> Result<World, WorldError> {
    load_world_from_str(CASTLE_TOML)
}

pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    // Basic validation
    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::Empty("world.id"));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::Empty("world.start_room"));
    }

    // Build rooms map
    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if room_cfg.id.trim().is_empty() {
            return Err(WorldError::Empty("room.id"));
        }
        if rooms_map.contains_key(&room_cfg.id) {
            return Err(WorldError::Duplicate {
                kind: "room",
                id: room_cfg.id,
            });
        }

        let mut room = Room::new(room_cfg.id.clone(), room_cfg.name, room_cfg.desc);
        for exit in room_cfg.exit {
            room.add_exit(exit.direction, exit.target);
        }
        room.tags.extend(room_cfg.tags);

        rooms_map.insert(room_cfg.id, room);
    }

    // Place items on their starting floors
    let mut seen_items: HashSet<String> = HashSet::new();
    let mut misplaced: Vec<ValidationError> = Vec::new();

    for item_cfg in world_file.item {
        let name = item_cfg.name.trim().to_lowercase();
        if name.is_empty() {
            return Err(WorldError::Empty("item.name"));
        }
        if !seen_items.insert(name.clone()) {
            return Err(WorldError::Duplicate {
                kind: "item",
                id: name,
            });
        }

        let kind = match item_cfg.kind.as_deref().unwrap_or("simple") {
            "simple" => ItemKind::Simple,
            "heal" => ItemKind::Heal {
                amount: item_cfg.heal.unwrap_or(DEFAULT_HEAL),
            },
            "key" => ItemKind::Key {
                unlocks: item_cfg
                    .unlocks
                    .unwrap_or_else(|| WIN_LOCATION.to_string()),
            },
            other => {
                return Err(WorldError::UnknownKind {
                    item: name,
                    kind: other.to_string(),
                });
            }
        };

        let desc = if item_cfg.desc.trim().is_empty() {
            item_cfg.name.trim().to_string()
        } else {
            item_cfg.desc
        };

        match rooms_map.get_mut(&item_cfg.start_room) {
            Some(room) => room
                .chest
                .put(&name, Item::new(name.clone(), desc, item_cfg.weight, kind)),
            None => misplaced.push(ValidationError::new(format!(
                "item '{}' start_room '{}' not found",
                name, item_cfg.start_room
            ))),
        }
    }

    let header = world_file.world;
    let world = World {
        id: header.id,
        name: header.name,
        desc: header.desc,
        help: header.help,
        start_room: header.start_room,
        move_cost: header.move_cost,
        max_health: header.max_health,
        death_text: header.death_text,
        escape_text: header.escape_text,
        rooms: rooms_map,
    };

    let mut errors = misplaced;
    errors.extend(validate_world(&world));
    if !errors.is_empty() {
        return Err(WorldError::Invalid(errors));
    }

    log::info!(
        "loaded world '{}' ({} rooms)",
        world.id,
        world.rooms.len()
    );
    Ok(world)
}
