//! Random source for idle rolls and animation selection.
//!
//! Kept as a resource so tests and replays can seed it.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug, Clone)]
pub struct IdleRng(pub Rng);

impl Default for IdleRng {
    fn default() -> Self {
        IdleRng(Rng::new())
    }
}

impl IdleRng {
    pub fn with_seed(seed: u64) -> Self {
        IdleRng(Rng::with_seed(seed))
    }
}
