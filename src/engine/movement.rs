use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::engine::render::render_room;
use crate::world;

/// Follow the exit named `direction` out of the player's room.
/// Every successful move costs `world.move_cost` health, dead ends included.
/// Returns true if the player changed rooms.
pub fn handle_go(
    out: &mut Output,
    world: &world::World,
    player: &mut Player,
    direction: &str,
) -> bool {
    let Some(room) = world.room(&player.current_room) else {
        out.say(format!(
            "Error: you are in an unknown room '{}'",
            player.current_room
        ));
        return false;
    };

    let Some(target) = room.get_exit(direction) else {
        out.say(format!("There is no path to {}!", direction));
        return false;
    };

    let Some(next) = world.room(target) else {
        out.say(format!(
            "You try to go {}, but something feels wrong (room not found).",
            direction
        ));
        return false;
    };

    player.damage(world.move_cost);
    player.move_to(next.id.clone());
    log::debug!(
        "moved {} -> {} (health {})",
        room.id,
        next.id,
        player.health()
    );

    render_room(out, next);
    true
}
