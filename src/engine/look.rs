use crate::engine::Turn;
use crate::world::{Direction, Room};

/// Pure query, resolved in a fixed order: no argument shows the room
/// itself, then an exact object id match, then a cardinal direction.
/// Objects therefore shadow direction names. Unlike `go`, looking at an
/// undeclared direction and a declared-but-empty one read the same.
pub fn handle_look(args: &str, room: &Room) -> Turn {
    if args.is_empty() {
        return Turn::stay(room, room.description.clone());
    }

    if let Some(object) = room.object(args) {
        return Turn::stay(room, object.description.clone());
    }

    if let Some(direction) = Direction::parse(args) {
        return match room.exits.get(&direction) {
            Some(Some(target)) => {
                Turn::stay(room, format!("You see {target} to the {direction}."))
            }
            _ => Turn::stay(room, "Nothing in that direction."),
        };
    }

    Turn::stay(room, "You don't see anything special.")
}
