//! Idle animation data and the per-character idle state machine.
//!
//! A character carries an [`IdleProfile`] (static, rebuilt when its note is
//! reloaded) and an [`IdleState`] (working memory). Once per tick the
//! [`idle_animation_system`](crate::systems::idleanimation::idle_animation_system)
//! calls [`IdleState::tick`], which reads the character's
//! [`CharacterMotion`] and writes its [`CharacterSprite`].
//!
//! # States
//!
//! - *Active*: moving or blocked. The timer is held at zero.
//! - *Awaiting trigger*: standing still, the timer accumulates. Once it reaches
//!   `min_idle_time` a roll against the global idle probability is made every
//!   tick; past `max_idle_time` the idle starts regardless of the roll.
//! - *Idling*: a weighted-random animation plays, one pattern every
//!   [`FRAMES_PER_PATTERN`] ticks. When it finishes the sheet and pattern are
//!   restored and the timer starts over.
//!
//! Motion always wins: it cancels a running idle immediately without restoring
//! the original sheet.

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::components::charactermotion::{CharacterMotion, Direction};
use crate::components::charactersprite::CharacterSprite;
use crate::notetags::IdleNotes;
use crate::resources::idleconfig::IdleConfig;

/// Ticks each pattern stays on screen while idling.
pub const FRAMES_PER_PATTERN: u32 = 15;

/// Selection weight used when a definition does not give one.
pub const DEFAULT_WEIGHT: u32 = 100;

/// One idle animation a character can play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleAnimationDefinition {
    /// Name of the alternate character sheet.
    pub name: String,
    /// First pattern shown, inclusive.
    pub start_pattern: i32,
    /// Last pattern shown, inclusive.
    pub end_pattern: i32,
    /// Relative weight against the other definitions of the same profile.
    pub probability: u32,
}

impl IdleAnimationDefinition {
    pub fn new(name: impl Into<String>, start_pattern: i32, end_pattern: i32) -> Self {
        Self {
            name: name.into(),
            start_pattern,
            end_pattern,
            probability: DEFAULT_WEIGHT,
        }
    }

    pub fn with_probability(mut self, probability: u32) -> Self {
        self.probability = probability;
        self
    }

    /// Number of patterns played. A reversed range plays its start pattern once.
    pub fn pattern_count(&self) -> u32 {
        let count = i64::from(self.end_pattern) - i64::from(self.start_pattern) + 1;
        count.clamp(1, i64::from(u32::MAX / FRAMES_PER_PATTERN)) as u32
    }

    /// Total ticks of a full playback.
    pub fn frame_count_total(&self) -> u32 {
        self.pattern_count() * FRAMES_PER_PATTERN
    }
}

/// Idle animations and timing of one character.
#[derive(Debug, Clone, PartialEq, Component, Serialize, Deserialize)]
pub struct IdleProfile {
    /// Definitions in note order. Order only matters for the selection walk.
    pub animations: Vec<IdleAnimationDefinition>,
    /// Seconds standing still before the first roll.
    pub min_idle_time: f32,
    /// Seconds standing still after which the idle is forced.
    pub max_idle_time: f32,
}

impl IdleProfile {
    pub fn with_times(
        animations: Vec<IdleAnimationDefinition>,
        min_idle_time: f32,
        max_idle_time: f32,
    ) -> Self {
        if min_idle_time > max_idle_time {
            warn!(
                "Idle min time {} is greater than max time {}; idles will be forced as soon as min time is reached",
                min_idle_time, max_idle_time
            );
        }
        Self {
            animations,
            min_idle_time,
            max_idle_time,
        }
    }

    /// Resolve parsed note overrides against the configured defaults.
    pub fn from_notes(notes: IdleNotes, config: &IdleConfig) -> Self {
        Self::with_times(
            notes.animations,
            notes.min_idle_time.unwrap_or(config.min_idle_time),
            notes.max_idle_time.unwrap_or(config.max_idle_time),
        )
    }
}

/// Outcome of one [`IdleState::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdleTransition {
    /// The character moved or was blocked. `interrupted` is set when a
    /// running idle was cancelled by it.
    Reset { interrupted: bool },
    /// Standing still, no idle started this tick.
    Waiting,
    /// An idle animation started using the named sheet.
    Started(String),
    /// A running idle advanced by one tick.
    Advanced,
    /// A running idle finished and the original sheet was restored.
    Completed,
}

/// Working memory of the idle state machine.
#[derive(Debug, Clone, Default, PartialEq, Component)]
pub struct IdleState {
    pub is_idling: bool,
    /// Ticks spent standing still since the last motion or the last idle.
    pub idle_ticks: u32,
    pub current_animation: Option<IdleAnimationDefinition>,
    pub original_sheet_name: String,
    pub original_pattern: i32,
    pub facing_at_idle_start: Direction,
    pub frame_counter: u32,
    pub frame_count_total: u32,
}

impl IdleState {
    pub fn is_idling(&self) -> bool {
        self.is_idling
    }

    /// Seconds spent standing still, given the host tick rate.
    pub fn idle_timer(&self, tick_rate: u32) -> f32 {
        self.idle_ticks as f32 / tick_rate.max(1) as f32
    }

    /// Run one simulation tick. Must be called after the host has updated
    /// `motion` for this tick.
    pub fn tick(
        &mut self,
        profile: &IdleProfile,
        motion: &CharacterMotion,
        sprite: &mut CharacterSprite,
        config: &IdleConfig,
        rng: &mut Rng,
    ) -> IdleTransition {
        if motion.is_busy() {
            let interrupted = self.is_idling;
            // The idle sheet stays on screen until the host redraws it.
            self.idle_ticks = 0;
            self.is_idling = false;
            self.current_animation = None;
            return IdleTransition::Reset { interrupted };
        }

        if self.is_idling {
            return self.advance(sprite);
        }

        let timer = self.idle_timer(config.tick_rate);
        if timer >= profile.min_idle_time {
            let roll = rng.f32() * 100.0;
            if timer > profile.max_idle_time || roll < config.idle_probability {
                if let Some(animation) = self.begin(profile, motion, sprite, rng) {
                    return IdleTransition::Started(animation.name.clone());
                }
            }
        }

        self.idle_ticks = self.idle_ticks.saturating_add(1);
        IdleTransition::Waiting
    }

    /// Start an idle right away, skipping the timer and the probability roll.
    ///
    /// Returns false if the character is moving, already idling, or has no
    /// animations.
    pub fn request_idle(
        &mut self,
        profile: &IdleProfile,
        motion: &CharacterMotion,
        sprite: &mut CharacterSprite,
        rng: &mut Rng,
    ) -> bool {
        if motion.moving || self.is_idling {
            return false;
        }
        self.begin(profile, motion, sprite, rng).is_some()
    }

    fn begin<'a>(
        &mut self,
        profile: &'a IdleProfile,
        motion: &CharacterMotion,
        sprite: &mut CharacterSprite,
        rng: &mut Rng,
    ) -> Option<&'a IdleAnimationDefinition> {
        let animation = select_animation(&profile.animations, rng)?;

        self.original_sheet_name = sprite.sheet_name.clone();
        self.original_pattern = sprite.pattern;
        self.facing_at_idle_start = motion.facing;

        sprite.sheet_name = animation.name.clone();
        sprite.pattern = animation.start_pattern;
        sprite.facing = motion.facing;

        self.frame_count_total = animation.frame_count_total();
        self.frame_counter = 0;
        self.current_animation = Some(animation.clone());
        self.is_idling = true;

        debug!(
            "Idle '{}' started facing {:?} after {} ticks",
            animation.name, motion.facing, self.idle_ticks
        );
        Some(animation)
    }

    fn advance(&mut self, sprite: &mut CharacterSprite) -> IdleTransition {
        self.frame_counter = self.frame_counter.saturating_add(1);

        if self.frame_counter >= self.frame_count_total {
            return self.complete(sprite);
        }
        let Some(animation) = self.current_animation.as_ref() else {
            return self.complete(sprite);
        };

        let pattern_index = (self.frame_counter / FRAMES_PER_PATTERN) % animation.pattern_count();
        sprite.pattern = animation.start_pattern + pattern_index as i32;
        sprite.facing = self.facing_at_idle_start;
        IdleTransition::Advanced
    }

    fn complete(&mut self, sprite: &mut CharacterSprite) -> IdleTransition {
        sprite.sheet_name = std::mem::take(&mut self.original_sheet_name);
        sprite.pattern = self.original_pattern;

        self.is_idling = false;
        self.current_animation = None;
        self.idle_ticks = 0;
        debug!("Idle finished, restored sheet '{}'", sprite.sheet_name);
        IdleTransition::Completed
    }
}

/// Weighted-random pick among `animations`. `None` only if the list is empty.
pub fn select_animation<'a>(
    animations: &'a [IdleAnimationDefinition],
    rng: &mut Rng,
) -> Option<&'a IdleAnimationDefinition> {
    if animations.is_empty() {
        return None;
    }
    let total: f64 = animations.iter().map(|a| f64::from(a.probability)).sum();
    select_weighted(animations, rng.f64() * total)
}

/// Walk `animations` subtracting each weight from `draw`; the first one that
/// brings the remainder to zero or below wins. Falls back to the first
/// definition if the walk never gets there.
pub fn select_weighted(
    animations: &[IdleAnimationDefinition],
    draw: f64,
) -> Option<&IdleAnimationDefinition> {
    let mut remainder = draw;
    for animation in animations {
        remainder -= f64::from(animation.probability);
        if remainder <= 0.0 {
            return Some(animation);
        }
    }
    animations.first()
}
