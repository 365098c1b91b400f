use super::model::World;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Advisory post-load lint. A dangling exit target is legal in the
/// document and only fails when traversed; this reports such exits so
/// authors hear about them before a player does. The binary logs the
/// results as warnings and proceeds either way.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    for (room_id, room) in &world.rooms {
        for (direction, target) in &room.exits {
            if let Some(target) = target {
                if !world.rooms.contains_key(target) {
                    errors.push(ValidationError::new(format!(
                        "room '{}' exit {} targets missing room '{}'",
                        room_id, direction, target
                    )));
                }
            }
        }

        for object in &room.objects {
            if object.description.trim().is_empty() && object.interactions.is_empty() {
                errors.push(ValidationError::new(format!(
                    "object '{}' in room '{}' has no description and no interactions",
                    object.id, room_id
                )));
            }
        }
    }

    errors
}
