use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world::{self, UseError, UseOutcome};

pub fn handle_take(
    out: &mut Output,
    world: &mut world::World,
    player: &mut Player,
    target_name: &str,
) {
    let query = target_name.trim().to_lowercase();
    if query.is_empty() {
        out.say("Take what?");
        return;
    }

    let Some(room) = world.room_mut(&player.current_room) else {
        out.say("You don't see that here.");
        return;
    };

    if player.take_from_chest(room, &query) {
        out.say(format!("You take the {}.", query));
    } else {
        out.say("You don't see that here.");
    }
}

pub fn handle_drop(
    out: &mut Output,
    world: &mut world::World,
    player: &mut Player,
    target_name: &str,
) {
    let query = target_name.trim().to_lowercase();
    if query.is_empty() {
        out.say("Drop what?");
        return;
    }

    let Some(room) = world.room_mut(&player.current_room) else {
        out.say("You aren't carrying that.");
        return;
    };

    if player.drop_to_chest(room, &query) {
        out.say(format!("You drop the {}.", query));
    } else {
        out.say("You aren't carrying that.");
    }
}

/// Use a carried item where the player stands. Returns the outcome so the caller
/// can apply game-level consequences such as escaping.
pub fn handle_use(
    out: &mut Output,
    world: &world::World,
    player: &mut Player,
    target_name: &str,
) -> Option<UseOutcome> {
    let query = target_name.trim().to_lowercase();
    if query.is_empty() {
        out.say("Use what?");
        return None;
    }

    let room = world.room(&player.current_room)?;

    match player.use_item(&query, room) {
        Ok(outcome) => {
            if outcome.consumed {
                out.say(format!(
                    "You use the {}. Your health is now {}.",
                    query,
                    player.health()
                ));
            }
            Some(outcome)
        }
        Err(UseError::WrongPlace { item, unlocks }) => {
            out.say(wrong_place_message(world, &item, &unlocks));
            None
        }
        Err(err) => {
            out.say(err.to_string());
            None
        }
    }
}

/// "You can only use the key in the courtyard." naming every room that carries the tag.
fn wrong_place_message(world: &world::World, item: &str, tag: &str) -> String {
    let mut places: Vec<String> = world
        .rooms
        .values()
        .filter(|r| r.has_tag(tag))
        .map(|r| format!("the {}", r.name.to_lowercase()))
        .collect();
    places.sort();

    if places.is_empty() {
        UseError::WrongPlace {
            item: item.to_string(),
            unlocks: tag.to_string(),
        }
        .to_string()
    } else {
        format!("You can only use the {} in {}.", item, places.join(" or "))
    }
}
