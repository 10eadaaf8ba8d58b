use bevy_ecs::prelude::Component;

use crate::components::charactermotion::Direction;

/// CharacterSprite is identified by the name of a 3x4 character sheet, the
/// horizontal frame (pattern) inside the current row, and the facing that
/// selects the row. The host renderer reads it after the idle systems run.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct CharacterSprite {
    pub sheet_name: String,
    pub pattern: i32,
    pub facing: Direction,
}

impl CharacterSprite {
    pub fn new(sheet_name: impl Into<String>, pattern: i32, facing: Direction) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            pattern,
            facing,
        }
    }
}
