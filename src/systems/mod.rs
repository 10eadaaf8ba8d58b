//! Idle systems.
//!
//! Submodules overview
//! - [`idleanimation`] – rebuild profiles from notes and advance idle playback

pub mod idleanimation;
