use crate::engine::Turn;
use crate::world::{Interaction, Room};

pub fn handle_take(object_id: &str, room: &Room) -> Turn {
    interact(room, object_id, Interaction::Take)
}

pub fn handle_open(object_id: &str, room: &Room) -> Turn {
    interact(room, object_id, Interaction::Open)
}

/// `use` with one argument behaves like take/open. With two arguments it
/// applies the first object "on" the second; only the first object is
/// looked up, so "use key door" succeeds whether or not a door is present
/// in the room. Everything else is malformed.
pub fn handle_use(args: &str, room: &Room) -> Turn {
    let tokens: Vec<&str> = args.split_whitespace().collect();

    match tokens.as_slice() {
        [object_id] => interact(room, object_id, Interaction::Use),
        [first, second] => match room.object(first) {
            Some(object) if object.supports(Interaction::Use) => {
                Turn::stay(room, format!("You use the {first} on the {second}."))
            }
            _ => Turn::stay(room, "Nothing happens."),
        },
        _ => Turn::stay(room, "Invalid use command."),
    }
}

/// Shared scan for take/open/single-use: exact id match against the
/// room's objects, in declaration order.
fn interact(room: &Room, object_id: &str, interaction: Interaction) -> Turn {
    match room.object(object_id) {
        Some(object) if object.supports(interaction) => {
            Turn::stay(room, format!("You {interaction} the {object_id}."))
        }
        Some(_) => Turn::stay(room, format!("You can't {interaction} this object.")),
        None => Turn::stay(room, "There is no such object here."),
    }
}
