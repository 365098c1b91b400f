use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::model::{Direction, Interaction, Object, Room, World};

/// Fatal load failure: the document is unreadable or structurally invalid.
/// Exit targets are deliberately not checked here; a dangling exit only
/// surfaces when the player walks through it.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read world file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid world document: {0}")]
    Parse(#[from] Box<toml::de::Error>),
    #[error("world document declares no rooms")]
    NoRooms,
    #[error("duplicate room id '{0}'")]
    DuplicateRoom(String),
    #[error("room '{room}' declares duplicate object id '{object}'")]
    DuplicateObject { room: String, object: String },
    #[error("object '{object}' in room '{room}' has unknown interaction '{verb}'")]
    UnknownInteraction {
        room: String,
        object: String,
        verb: String,
    },
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks, in declaration order
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,

    #[serde(default)]
    description: String,

    // A direction left out entirely is "not declared"; an empty string is
    // "declared, leads nowhere". TOML cannot express null, so absence is
    // the only way to leave a direction undeclared.
    north: Option<String>,
    south: Option<String>,
    east: Option<String>,
    west: Option<String>,

    #[serde(default)]
    object: Vec<ObjectConfig>, // [[room.object]] blocks
}

#[derive(Deserialize)]
struct ObjectConfig {
    id: String,

    #[serde(default)]
    description: String,

    #[serde(default)]
    interactions: Vec<String>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_world_from_str(&contents)
}

/// Public API: load a world from TOML text. This is the entry point used
/// by tests and by anything embedding the interpreter.
pub fn load_world_from_str(contents: &str) -> Result<World, LoadError> {
    let world_file: WorldFile = toml::from_str(contents).map_err(Box::new)?;

    if world_file.room.is_empty() {
        return Err(LoadError::NoRooms);
    }

    // The session starts in the first declared room.
    let start_room = world_file.room[0].id.clone();

    let mut rooms: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if rooms.contains_key(&room_cfg.id) {
            return Err(LoadError::DuplicateRoom(room_cfg.id));
        }

        let mut exits: BTreeMap<Direction, Option<String>> = BTreeMap::new();
        for (direction, value) in [
            (Direction::North, room_cfg.north),
            (Direction::South, room_cfg.south),
            (Direction::East, room_cfg.east),
            (Direction::West, room_cfg.west),
        ] {
            if let Some(target) = value {
                let target = target.trim();
                exits.insert(
                    direction,
                    if target.is_empty() {
                        None
                    } else {
                        Some(target.to_string())
                    },
                );
            }
        }

        let mut objects: Vec<Object> = Vec::new();
        for obj_cfg in room_cfg.object {
            if objects.iter().any(|o| o.id == obj_cfg.id) {
                return Err(LoadError::DuplicateObject {
                    room: room_cfg.id,
                    object: obj_cfg.id,
                });
            }

            let mut interactions: Vec<Interaction> = Vec::new();
            for verb in obj_cfg.interactions {
                match Interaction::parse(&verb) {
                    Some(interaction) => {
                        if !interactions.contains(&interaction) {
                            interactions.push(interaction);
                        }
                    }
                    None => {
                        return Err(LoadError::UnknownInteraction {
                            room: room_cfg.id,
                            object: obj_cfg.id,
                            verb,
                        });
                    }
                }
            }

            objects.push(Object {
                id: obj_cfg.id,
                description: obj_cfg.description,
                interactions,
            });
        }

        rooms.insert(
            room_cfg.id.clone(),
            Room {
                id: room_cfg.id,
                description: room_cfg.description,
                exits,
                objects,
            },
        );
    }

    Ok(World { start_room, rooms })
}
