mod container;
mod error;
mod loader;
mod model;
mod validator;

pub use loader::{CASTLE_TOML, default_world, load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use container::Container;
pub use error::WorldError;
pub use model::{Exit, Item, ItemKind, Room, UseError, UseOutcome, WIN_LOCATION, World};
pub use validator::{ValidationError, validate_world};
