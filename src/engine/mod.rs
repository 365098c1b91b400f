mod command;
mod items;
mod look;
mod movement;
mod normalize;

pub use command::{Command, parse};
pub use items::{handle_open, handle_take, handle_use};
pub use look::handle_look;
pub use movement::handle_go;
pub use normalize::normalize;

use crate::world::Room;

/// The result of one player command: the (possibly new) current-room
/// identifier plus the text shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub room: String,
    pub response: String,
}

impl Turn {
    /// A turn that leaves the player where they are.
    pub fn stay(room: &Room, response: impl Into<String>) -> Self {
        Turn {
            room: room.id.clone(),
            response: response.into(),
        }
    }
}

/// Normalize, parse, and dispatch one line of player input against the
/// current room. Only `go` can return a different room id, and the id it
/// returns is not resolved here; the caller discovers dangling references
/// at its next room lookup.
pub fn process_input(raw: &str, room: &Room) -> Turn {
    let normalized = normalize(raw);

    match parse(&normalized) {
        None => Turn::stay(room, "Invalid command. Try again."),
        Some(Command::Go(direction)) => handle_go(&direction, room),
        Some(Command::Take(object_id)) => handle_take(&object_id, room),
        Some(Command::Open(object_id)) => handle_open(&object_id, room),
        Some(Command::Use(args)) => handle_use(&args, room),
        Some(Command::Look(args)) => handle_look(&args, room),
    }
}
