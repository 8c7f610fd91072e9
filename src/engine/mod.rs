mod items;
mod movement;
mod output;
mod player;
mod render;

pub use items::{handle_drop, handle_take, handle_use};

pub use movement::handle_go;
pub use output::{Output, OutputBlock};
pub use player::Player;
pub use render::{render_help, render_look, render_room, render_status};
