//! Idle animation library.
//!
//! Direction-aware idle animations for sprite-sheet characters, as ECS
//! components, resources, systems, and events for use by a host engine and
//! in integration tests.

pub mod components;
pub mod events;
pub mod notetags;
pub mod resources;
pub mod systems;
