use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::container::Container;

/// Tag marking the room(s) where a key opens the way out.
pub const WIN_LOCATION: &str = "win-location";

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub help: String,
    pub start_room: String,
    pub move_cost: u32,
    pub max_health: u32,
    pub death_text: String,
    pub escape_text: String,
    pub rooms: HashMap<String, Room>,
}

impl World {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub exits: Vec<Exit>,
    pub tags: HashSet<String>,
    pub chest: Container,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exit {
    pub direction: String,
    pub target: String,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            id: id.into(),
            name: name.into(),
            desc: desc.into(),
            exits: Vec::new(),
            tags: HashSet::new(),
            chest: Container::new(),
        }
    }

    /// Register a one-way exit. A second exit with the same direction replaces the first
    /// but keeps its position in the listing.
    pub fn add_exit(&mut self, direction: impl Into<String>, target: impl Into<String>) {
        let direction = direction.into();
        let target = target.into();
        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => exit.target = target,
            None => self.exits.push(Exit { direction, target }),
        }
    }

    /// Case-sensitive lookup; returns the id of the room behind the exit.
    pub fn get_exit(&self, direction: &str) -> Option<&str> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target.as_str())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn long_description(&self) -> String {
        format!("You are {}.\n{}", self.desc.trim(), self.exit_line())
    }

    pub fn exit_line(&self) -> String {
        if self.exits.is_empty() {
            "Exits: (none)".to_string()
        } else {
            let dirs = self
                .exits
                .iter()
                .map(|e| e.direction.as_str())
                .collect::<Vec<&str>>()
                .join(", ");
            format!("Exits: {}", dirs)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Simple,
    Heal { amount: u32 },
    Key { unlocks: String },
}

/// Immutable item value. Lives in exactly one container at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub desc: String,
    pub weight: u32,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, weight: u32, kind: ItemKind) -> Self {
        Item {
            name: name.into().to_lowercase(),
            desc: desc.into(),
            weight,
            kind,
        }
    }
}

/// What happened when an item was used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UseOutcome {
    pub consumed: bool,
    pub triggers_escape: bool,
    pub healed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseError {
    #[error("You aren't carrying that.")]
    NotCarried,
    #[error("The {item} is no use here.")]
    WrongPlace { item: String, unlocks: String },
    #[error("Nothing happens.")]
    NotUsable,
}

impl ItemKind {
    /// Decide the effect of using an item of this kind in `room`.
    pub fn apply(&self, item_name: &str, room: &Room) -> Result<UseOutcome, UseError> {
        match self {
            ItemKind::Simple => Err(UseError::NotUsable),
            ItemKind::Heal { amount } => Ok(UseOutcome {
                consumed: true,
                triggers_escape: false,
                healed: *amount,
            }),
            ItemKind::Key { unlocks } => {
                if room.has_tag(unlocks) {
                    Ok(UseOutcome {
                        consumed: false,
                        triggers_escape: true,
                        healed: 0,
                    })
                } else {
                    Err(UseError::WrongPlace {
                        item: item_name.to_string(),
                        unlocks: unlocks.clone(),
                    })
                }
            }
        }
    }
}
