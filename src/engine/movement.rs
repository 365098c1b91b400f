use crate::engine::Turn;
use crate::world::{Direction, Room};

/// The only state-changing handler. A direction the room never declares
/// (or a word that is no direction at all) is rejected outright; a
/// declared-but-empty exit is a dead end. A successful move returns the
/// exit's target identifier as the new current room without resolving it
/// against the world, so a dangling reference surfaces at the caller's
/// next room lookup, not here.
pub fn handle_go(direction: &str, room: &Room) -> Turn {
    let Some(direction) = Direction::parse(direction) else {
        return Turn::stay(room, "Invalid direction.");
    };

    match room.exits.get(&direction) {
        None => Turn::stay(room, "Invalid direction."),
        Some(None) => Turn::stay(room, "You can't go that way."),
        Some(Some(target)) => Turn {
            room: target.clone(),
            response: format!("You move {direction} to the {target}."),
        },
    }
}
