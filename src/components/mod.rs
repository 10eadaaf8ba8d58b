//! ECS components for idle-capable characters.
//!
//! Submodules overview:
//! - [`charactermotion`] – per-tick motion snapshot written by the host, and [`charactermotion::Direction`]
//! - [`characternote`] – raw note text the idle profile is parsed from
//! - [`charactersprite`] – displayed sheet, pattern and facing read by the host renderer
//! - [`idleanimation`] – idle definitions, per-character profile and the idle state machine

pub mod charactermotion;
pub mod characternote;
pub mod charactersprite;
pub mod idleanimation;
