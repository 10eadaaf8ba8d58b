//! ECS resources made available to the idle systems.
//!
//! Overview
//! - `idleconfig` – process-wide idle timing defaults loaded from INI
//! - `idlerng` – seedable random source for idle rolls and selection
pub mod idleconfig;
pub mod idlerng;
