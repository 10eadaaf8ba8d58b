//! Event types and observers for idle animations.
//!
//! Submodules:
//! - [`idle`] – notifications emitted when an idle starts or finishes
//! - [`idlerequest`] – on-demand idle requests from scripted scenes
pub mod idle;
pub mod idlerequest;
