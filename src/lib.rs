pub mod engine;
pub mod world;

pub use engine::{Command, Turn, process_input};
pub use world::{LoadError, World, load_world_from_file, load_world_from_str};
