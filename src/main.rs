use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use castle_escape::engine::{Output, OutputBlock};
use castle_escape::world::{self, World};
use castle_escape::{GameState, Phase};
use clap::Parser;

#[derive(Parser)]
#[command(name = "castle_escape")]
#[command(about = "Escape the castle: a small text adventure")]
struct Args {
    /// World file to play instead of the built-in castle
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Log verbosity on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    // RUST_LOG wins over the flags when set
    builder.parse_default_env();
    builder.target(env_logger::Target::Stderr);
    builder.init();
}

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
        }
    }
}

fn load_world(path: Option<&PathBuf>) -> anyhow::Result<World> {
    match path {
        Some(p) => world::load_world_from_file(p)
            .with_context(|| format!("failed to load world file '{}'", p.display())),
        None => world::default_world().context("built-in castle failed to load"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let world = load_world(args.world.as_ref())?;
    let mut game = GameState::new(world);

    let intro = game
        .initialize()
        .context("start room missing from the world")?;
    flush_output(intro);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\nGoodbye.");
            return Ok(());
        };
        let line = line?;

        let (out, quit) = game.step_line(&line);
        flush_output(out);

        if quit {
            break;
        }
    }

    debug_assert_eq!(game.phase, Phase::Ended);
    println!("Press [Enter] to continue.");
    io::stdout().flush()?;
    lines.next().transpose()?;

    Ok(())
}
