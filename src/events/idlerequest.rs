//! Event and observer to start an idle animation on demand.
//!
//! Scripted scenes trigger a [`RequestIdleEvent`] to make a character idle
//! right away, without waiting for the idle timer or the probability roll.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::charactermotion::CharacterMotion;
use crate::components::charactersprite::CharacterSprite;
use crate::components::idleanimation::{IdleProfile, IdleState};
use crate::events::idle::IdleStartedEvent;
use crate::resources::idlerng::IdleRng;

/// Event asking `entity` to start idling now.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestIdleEvent {
    pub entity: Entity,
}

/// Observer that starts an idle for the requested character.
///
/// The request is dropped if the character has no idle components, is moving,
/// is already idling, or has no animations.
pub fn request_idle_observer(
    trigger: On<RequestIdleEvent>,
    mut query: Query<(
        &IdleProfile,
        &mut IdleState,
        &CharacterMotion,
        &mut CharacterSprite,
    )>,
    mut rng: ResMut<IdleRng>,
    mut commands: Commands,
) {
    let entity = trigger.event().entity;
    let Ok((profile, mut state, motion, mut sprite)) = query.get_mut(entity) else {
        debug!("Idle request for {:?} ignored: not an idle character", entity);
        return;
    };

    if state.request_idle(profile, motion, &mut sprite, &mut rng.0) {
        commands.trigger(IdleStartedEvent {
            entity,
            animation: sprite.sheet_name.clone(),
        });
    } else {
        debug!(
            "Idle request for {:?} ignored (moving={}, idling={}, animations={})",
            entity,
            motion.moving,
            state.is_idling(),
            profile.animations.len()
        );
    }
}
