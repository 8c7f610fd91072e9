pub mod engine;
pub mod parser;
pub mod world;

use engine::{
    Output, Player, handle_drop, handle_go, handle_take, handle_use, render_help, render_look,
    render_room, render_status,
};
use parser::{Command, Verb, parse_command};
use world::World;

pub use world::{default_world, load_world_from_file, load_world_from_str};

/// Where the game stands. Only `Exploring` accepts ordinary commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exploring,
    Escaped,
    Dead,
    Ended,
}

pub struct GameState {
    pub world: World,
    pub player: Player,
    pub phase: Phase,
    pub turn_index: u64,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
        initialized: bool,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a TOML world string. Call `init()` to get the initial render.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world =
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state: GameState::new(world),
                initialized: false,
            })
        }

        /// Initialize the game and return the welcome banner and first room.
        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            self.initialized = true;
            match self.state.initialize() {
                Some(out) => to_value(&WasmStepResult {
                    blocks: out.blocks,
                    quit: false,
                })
                .unwrap_or(JsValue::NULL),
                None => JsValue::NULL,
            }
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        /// If `init()` was never called, the welcome banner and first room come first.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let mut blocks = Vec::new();
            if !self.initialized {
                self.initialized = true;
                if let Some(intro) = self.state.initialize() {
                    blocks.extend(intro.blocks);
                }
            }
            let (out, quit) = self.state.step_line(input);
            blocks.extend(out.blocks);
            to_value(&WasmStepResult { blocks, quit }).unwrap_or(JsValue::NULL)
        }
    }
}

impl GameState {
    pub fn new(world: World) -> Self {
        let player = Player::new(world.start_room.clone(), world.max_health);
        GameState {
            world,
            player,
            phase: Phase::Exploring,
            turn_index: 0,
        }
    }

    /// Welcome banner followed by the starting room.
    pub fn initialize(&mut self) -> Option<Output> {
        self.player.move_to(self.world.start_room.clone());
        let room = self.world.room(&self.player.current_room)?;

        let mut out = Output::new();
        out.say(format!("Welcome to {}!", self.world.name));
        out.say(self.world.desc.trim());
        out.say("Type 'help' if you need help.");
        render_room(&mut out, room);
        Some(out)
    }

    /// Parse and process one line of input; blank lines do nothing.
    pub fn step_line(&mut self, input: &str) -> (Output, bool) {
        match parse_command(input) {
            Some(cmd) => self.step(&cmd),
            None => (Output::new(), false),
        }
    }

    /// Process a single command; returns (output, quit?)
    pub fn step(&mut self, cmd: &Command) -> (Output, bool) {
        let mut out = Output::new();
        self.turn_index = self.turn_index.wrapping_add(1);
        log::debug!(
            "turn {}: {:?} {:?} in {:?}",
            self.turn_index,
            cmd.verb,
            cmd.second_word,
            self.phase
        );

        let wants_quit = cmd.verb == Some(Verb::Quit);

        match self.phase {
            Phase::Ended => return (out, true),
            Phase::Dead if !wants_quit => {
                out.say("You died");
                out.say("You can only use the command:");
                out.say("quit");
                return (out, false);
            }
            Phase::Escaped if !wants_quit => {
                out.say("You have already escaped the castle.");
                out.say("The only allowed command is 'quit'.");
                return (out, false);
            }
            _ => {}
        }

        let Some(verb) = cmd.verb else {
            out.say("I don't know what you mean...");
            return (out, false);
        };
        let arg = cmd.second_word.as_deref().unwrap_or_default();

        match verb {
            Verb::Help => render_help(&mut out, &self.world),
            Verb::Look => {
                if let Some(room) = self.world.room(&self.player.current_room) {
                    render_look(&mut out, room);
                }
            }
            Verb::Status => render_status(&mut out, &self.player),
            Verb::Take if !cmd.has_second_word() => out.say("Take what?"),
            Verb::Take => handle_take(&mut out, &mut self.world, &mut self.player, arg),
            Verb::Drop if !cmd.has_second_word() => out.say("Drop what?"),
            Verb::Drop => handle_drop(&mut out, &mut self.world, &mut self.player, arg),
            Verb::Go if !cmd.has_second_word() => out.say("Go where?"),
            Verb::Go => {
                if handle_go(&mut out, &self.world, &mut self.player, arg) && !self.player.is_alive()
                {
                    out.event(self.world.death_text.trim());
                    self.enter(Phase::Dead);
                }
            }
            Verb::Use if !cmd.has_second_word() => out.say("Use what?"),
            Verb::Use => {
                let outcome = handle_use(&mut out, &self.world, &mut self.player, arg);
                if outcome.is_some_and(|o| o.triggers_escape) {
                    out.event(self.world.escape_text.trim());
                    self.enter(Phase::Escaped);
                }
            }
            Verb::Quit => {
                out.say("Thank you for playing.");
                self.enter(Phase::Ended);
                return (out, true);
            }
        }

        (out, false)
    }

    fn enter(&mut self, phase: Phase) {
        log::info!(
            "game {:?} -> {:?} after {} turns",
            self.phase,
            phase,
            self.turn_index
        );
        self.phase = phase;
    }
}
