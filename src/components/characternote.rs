//! Raw free-text annotation attached to a character.
//!
//! Hosts copy the note field of an actor or map event into this component.
//! Whenever it is added or replaced, the
//! [`refresh_idle_profiles`](crate::systems::idleanimation::refresh_idle_profiles)
//! system parses it again and rebuilds the character's
//! [`IdleProfile`](crate::components::idleanimation::IdleProfile).

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterNote {
    pub text: String,
}

impl CharacterNote {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
