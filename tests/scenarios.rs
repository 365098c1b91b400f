//! End-to-end scenario tests: a world loaded from TOML text, driven
//! through the same `process_input` entry point the binary uses.

use text_adventure::world::{World, load_world_from_str};
use text_adventure::{Turn, process_input};

const FIXTURE: &str = r#"
[[room]]
id = "CELL"
description = "A cold stone cell. A rusted door hangs ajar to the north."
north = "HALL"
south = ""

[[room.object]]
id = "key"
description = "A small brass key."
interactions = ["TAKE", "USE"]

[[room.object]]
id = "statue"
description = "A weathered statue of a forgotten knight."
interactions = []

[[room]]
id = "HALL"
description = "A torch-lit hall. Doorways lead in several directions."
north = ""
south = "CELL"

[[room.object]]
id = "chest"
description = "An oak chest bound with iron."
interactions = ["OPEN"]
"#;

fn world() -> World {
    load_world_from_str(FIXTURE).expect("fixture world loads")
}

fn turn(world: &World, room_id: &str, input: &str) -> Turn {
    let room = world.room(room_id).expect("room exists");
    process_input(input, room)
}

#[test]
fn session_starts_in_the_first_declared_room() {
    assert_eq!(world().start_room, "CELL");
}

#[test]
fn go_moves_through_an_open_exit() {
    let world = world();
    let turn = turn(&world, "CELL", "go north");
    assert_eq!(turn.room, "HALL");
    assert_eq!(turn.response, "You move NORTH to the HALL.");
}

#[test]
fn look_after_go_returns_the_destination_description_verbatim() {
    let world = world();
    let moved = turn(&world, "CELL", "go north");
    let looked = turn(&world, &moved.room, "look");
    assert_eq!(
        looked.response,
        "A torch-lit hall. Doorways lead in several directions."
    );
}

#[test]
fn stop_words_are_filtered_before_parsing() {
    let world = world();
    let turn = turn(&world, "CELL", "take the key");
    assert_eq!(turn.room, "CELL");
    assert_eq!(turn.response, "You take the key.");
}

#[test]
fn open_without_the_capability_fails() {
    let world = world();
    assert_eq!(
        turn(&world, "CELL", "open key").response,
        "You can't open this object."
    );
}

#[test]
fn use_on_a_target_ignores_the_target_entirely() {
    let world = world();
    // No "door" object exists anywhere in the world.
    assert_eq!(
        turn(&world, "CELL", "use key on the door").response,
        "You use the key on the door."
    );
}

#[test]
fn unrecognized_verbs_are_invalid_commands() {
    let world = world();
    let turn = turn(&world, "CELL", "fly north");
    assert_eq!(turn.room, "CELL");
    assert_eq!(turn.response, "Invalid command. Try again.");
}

#[test]
fn empty_and_stop_word_only_input_is_an_invalid_command() {
    let world = world();
    for input in ["", "   ", "the a an", "to with on in is"] {
        let turn = turn(&world, "CELL", input);
        assert_eq!(turn.response, "Invalid command. Try again.");
        assert_eq!(turn.room, "CELL");
    }
}

#[test]
fn surrounding_whitespace_does_not_change_routing() {
    let world = world();
    let plain = turn(&world, "CELL", "go north");
    let padded = turn(&world, "CELL", "   GO    north  ");
    assert_eq!(plain, padded);
}

#[test]
fn only_go_ever_changes_the_current_room() {
    let world = world();
    for input in [
        "take key",
        "open key",
        "use key",
        "use key door",
        "look",
        "look key",
        "look north",
        "look south",
        "fly north",
        "go up",
        "go south",
    ] {
        assert_eq!(turn(&world, "CELL", input).room, "CELL", "input: {input}");
    }
    assert_eq!(turn(&world, "CELL", "go north").room, "HALL");
}

#[test]
fn taken_objects_are_not_removed() {
    let world = world();
    assert_eq!(turn(&world, "CELL", "take key").response, "You take the key.");
    assert_eq!(turn(&world, "CELL", "take key").response, "You take the key.");
    assert_eq!(
        turn(&world, "CELL", "look key").response,
        "A small brass key."
    );
}

#[test]
fn scenery_objects_answer_look_but_nothing_else() {
    let world = world();
    assert_eq!(
        turn(&world, "CELL", "look statue").response,
        "A weathered statue of a forgotten knight."
    );
    assert_eq!(
        turn(&world, "CELL", "take statue").response,
        "You can't take this object."
    );
    assert_eq!(
        turn(&world, "CELL", "use statue").response,
        "You can't use this object."
    );
}

#[test]
fn look_toward_an_exit_names_the_destination_id() {
    let world = world();
    assert_eq!(
        turn(&world, "CELL", "look north").response,
        "You see HALL to the NORTH."
    );
    // Declared-but-empty and undeclared directions read the same to look.
    assert_eq!(
        turn(&world, "CELL", "look south").response,
        "Nothing in that direction."
    );
    assert_eq!(
        turn(&world, "CELL", "look east").response,
        "Nothing in that direction."
    );
}

#[test]
fn dangling_exit_is_discovered_only_when_traversed() {
    let world = load_world_from_str(
        r#"
        [[room]]
        id = "CELL"
        north = "NOWHERE"
        "#,
    )
    .expect("dangling targets are legal at load time");

    let room = world.room("CELL").expect("room exists");
    let turn = process_input("go north", room);

    // The handler reports success and hands back the dangling id; the
    // caller's next lookup is what fails.
    assert_eq!(turn.response, "You move NORTH to the NOWHERE.");
    assert_eq!(turn.room, "NOWHERE");
    assert!(world.room(&turn.room).is_none());
}
