use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::parser::valid_commands;
use crate::world;

/// Room name followed by its long description.
pub fn render_room(out: &mut Output, room: &world::Room) {
    out.title(room.name.clone());
    out.say(room.long_description());
}

/// `look`: the room again, plus whatever lies on the floor.
pub fn render_look(out: &mut Output, room: &world::Room) {
    render_room(out, room);

    if room.chest.is_empty() {
        return;
    }

    out.say("Items in this room:");
    for (_, item) in room.chest.sorted() {
        out.say(format!("{} - ({} kg)", item.desc, item.weight));
    }
}

/// `status`: health and everything carried.
pub fn render_status(out: &mut Output, player: &Player) {
    out.say(format!("Your health is: {}", player.health()));

    let carried = player.inventory().sorted();
    if carried.is_empty() {
        out.say("You have no items in your inventory.");
        return;
    }

    out.say("Your current items:");
    for (name, item) in carried {
        out.say(format!("- {}: Weight {}", name, item.weight));
    }
}

pub fn render_help(out: &mut Output, world: &world::World) {
    out.say(world.help.trim());
    out.say("Your command words are:");
    out.say(valid_commands());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Item, ItemKind, Room};

    #[test]
    fn look_lists_floor_items_sorted() {
        let mut hall = Room::new("hall", "Grand Hall", "in the grand hall");
        hall.add_exit("courtyard", "courtyard");
        hall.chest.put("rope", Item::new("rope", "Rope", 5, ItemKind::Simple));
        hall.chest.put(
            "medkit",
            Item::new("medkit", "Medkit", 20, ItemKind::Heal { amount: 20 }),
        );

        let mut out = Output::new();
        render_look(&mut out, &hall);

        assert_eq!(
            out.text(),
            "Grand Hall\nYou are in the grand hall.\nExits: courtyard\nItems in this room:\nMedkit - (20 kg)\nRope - (5 kg)"
        );
    }

    #[test]
    fn status_with_empty_inventory() {
        let player = Player::new("hall", 100);
        let mut out = Output::new();
        render_status(&mut out, &player);

        assert_eq!(
            out.text(),
            "Your health is: 100\nYou have no items in your inventory."
        );
    }
}
