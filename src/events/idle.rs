//! Idle playback notifications.
//!
//! Triggered by the idle systems so scripted hosts can react, e.g. play a
//! sound when a character yawns. A playback cancelled by motion emits no
//! [`IdleFinishedEvent`].
//!
//! # Related
//!
//! - [`crate::systems::idleanimation::idle_animation_system`] – emits both events
//! - [`crate::events::idlerequest::request_idle_observer`] – emits [`IdleStartedEvent`]

use bevy_ecs::prelude::*;

/// Event emitted when a character starts an idle animation.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct IdleStartedEvent {
    /// The idling character.
    pub entity: Entity,
    /// Sheet name of the chosen animation.
    pub animation: String,
}

/// Event emitted when an idle animation plays to the end and the original
/// sheet is restored.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleFinishedEvent {
    pub entity: Entity,
}
