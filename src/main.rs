use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, info, warn};

use text_adventure::engine;
use text_adventure::world::{self, World};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [path] = args.as_slice() else {
        eprintln!("Usage: text_adventure <world.toml>");
        return ExitCode::from(2);
    };
    let path = PathBuf::from(path);

    let world = match world::load_world_from_file(&path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load world file '{}': {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    info!(
        path = %path.display(),
        rooms = world.rooms.len(),
        start_room = %world.start_room,
        "world loaded"
    );

    // Advisory only: a dangling exit is not a load failure, the player
    // just has to walk into it.
    for err in world::validate_world(&world) {
        warn!("world validation: {}", err.message);
    }

    match run(&world) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(world: &World) -> anyhow::Result<()> {
    println!("Welcome, adventurer!");
    println!(
        "Commands: go <direction>, take <object>, open <object>, \
         use <object> [target], look [object|direction]"
    );
    println!("Type 'quit' or 'exit' to leave.\n");

    let mut current_room = world.start_room.clone();
    println!("{}", room_description(world, &current_room)?);

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // EOF reads as a quit.
            println!("\nGoodbye.");
            break;
        }

        let input = line.trim();
        if is_quit(input) {
            println!("Goodbye.");
            break;
        }

        let room = world
            .room(&current_room)
            .with_context(|| format!("current room '{current_room}' vanished from the world"))?;

        let turn = engine::process_input(input, room);
        debug!(input, next_room = %turn.room, "command processed");

        current_room = turn.room;
        println!("{}", turn.response);
        // This lookup is where a dangling exit reference finally fails.
        println!("{}", room_description(world, &current_room)?);
    }

    Ok(())
}

fn room_description<'a>(world: &'a World, room_id: &str) -> anyhow::Result<&'a str> {
    let room = world.room(room_id).with_context(|| {
        format!("current room '{room_id}' is not defined in the world document")
    })?;
    Ok(&room.description)
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit")
}
