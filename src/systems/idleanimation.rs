//! Idle animation systems.
//!
//! - [`refresh_idle_profiles`] rebuilds a character's [`IdleProfile`] whenever
//!   its [`CharacterNote`] is added or replaced.
//! - [`idle_animation_system`] advances the idle state machine of every
//!   character by one tick.
//!
//! # Ordering
//!
//! Run `idle_animation_system` after the host's movement system so it sees
//! this tick's motion, and after `refresh_idle_profiles` so freshly loaded
//! notes apply on the same tick:
//!
//! ```ignore
//! update.add_systems(refresh_idle_profiles);
//! update.add_systems(
//!     idle_animation_system
//!         .after(refresh_idle_profiles)
//!         .after(movement),
//! );
//! ```

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::charactermotion::CharacterMotion;
use crate::components::characternote::CharacterNote;
use crate::components::charactersprite::CharacterSprite;
use crate::components::idleanimation::{IdleProfile, IdleState, IdleTransition};
use crate::events::idle::{IdleFinishedEvent, IdleStartedEvent};
use crate::notetags::parse_idle_notes;
use crate::resources::idleconfig::IdleConfig;
use crate::resources::idlerng::IdleRng;

/// Parse changed notes into fresh profiles.
///
/// Characters seen for the first time also get a default [`IdleState`]. A
/// reload keeps the existing state so a running idle is not cut short.
pub fn refresh_idle_profiles(
    query: Query<(Entity, &CharacterNote, Has<IdleState>), Changed<CharacterNote>>,
    config: Res<IdleConfig>,
    mut commands: Commands,
) {
    for (entity, note, has_state) in query.iter() {
        let profile = IdleProfile::from_notes(parse_idle_notes(&note.text), &config);
        debug!(
            "Idle profile for {:?}: {} animations, min={}s max={}s",
            entity,
            profile.animations.len(),
            profile.min_idle_time,
            profile.max_idle_time
        );

        let mut entity_commands = commands.entity(entity);
        entity_commands.insert(profile);
        if !has_state {
            entity_commands.insert(IdleState::default());
        }
    }
}

/// Advance every character's idle state machine by one tick.
///
/// Contract
/// - Reads [`CharacterMotion`] and the character's [`IdleProfile`].
/// - Mutates [`IdleState`] and the displayed [`CharacterSprite`].
/// - Triggers [`IdleStartedEvent`] and [`IdleFinishedEvent`].
pub fn idle_animation_system(
    mut query: Query<(
        Entity,
        &IdleProfile,
        &mut IdleState,
        &CharacterMotion,
        &mut CharacterSprite,
    )>,
    config: Res<IdleConfig>,
    mut rng: ResMut<IdleRng>,
    mut commands: Commands,
) {
    for (entity, profile, mut state, motion, mut sprite) in query.iter_mut() {
        match state.tick(profile, motion, &mut sprite, &config, &mut rng.0) {
            IdleTransition::Started(animation) => {
                commands.trigger(IdleStartedEvent { entity, animation });
            }
            IdleTransition::Completed => {
                commands.trigger(IdleFinishedEvent { entity });
            }
            IdleTransition::Reset { interrupted: true } => {
                debug!("Idle of {:?} interrupted by motion", entity);
            }
            _ => {}
        }
    }
}
