use std::collections::{BTreeMap, HashMap};
use std::fmt;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop. Loaded once, never mutated.
#[derive(Debug)]
pub struct World {
    /// First room declared in the document; where the session begins.
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
}

impl World {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }
}

#[derive(Debug)]
pub struct Room {
    pub id: String,
    pub description: String,
    /// Key absent: the direction was never declared for this room.
    /// `None`: declared, but leads nowhere. The two answer differently
    /// to `go` (see the movement handler).
    pub exits: BTreeMap<Direction, Option<String>>,
    /// Objects in declaration order; command lookups scan in this order.
    pub objects: Vec<Object>,
}

impl Room {
    /// Exact, case-sensitive id match. No fuzzy matching.
    pub fn object(&self, id: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.id == id)
    }
}

#[derive(Debug)]
pub struct Object {
    pub id: String,
    pub description: String,
    pub interactions: Vec<Interaction>,
}

impl Object {
    pub fn supports(&self, interaction: Interaction) -> bool {
        self.interactions.contains(&interaction)
    }
}

/// The four cardinal directions a room may declare exits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Direction> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }
}

/// Player-facing messages spell directions in uppercase.
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        })
    }
}

/// A capability an object may support. Objects with none of these are
/// scenery: they only respond to `look`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Take,
    Open,
    Use,
}

impl Interaction {
    /// Document verbs are conventionally uppercase ("TAKE"); accept any case.
    pub fn parse(s: &str) -> Option<Interaction> {
        match s.to_ascii_lowercase().as_str() {
            "take" => Some(Interaction::Take),
            "open" => Some(Interaction::Open),
            "use" => Some(Interaction::Use),
            _ => None,
        }
    }
}

/// Lowercase verb form, as embedded in handler responses.
impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Interaction::Take => "take",
            Interaction::Open => "open",
            Interaction::Use => "use",
        })
    }
}
