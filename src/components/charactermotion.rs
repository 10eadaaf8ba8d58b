//! Motion state of a character as computed by the host each tick.
//!
//! The idle systems only read this component. The host's own movement logic
//! is responsible for writing it before the idle systems run.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// One of the four cardinal facings. Selects the row of a character sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Down,
    Left,
    Right,
    Up,
}

impl Direction {
    /// Build a direction from the numeric-keypad code used by tile-based
    /// hosts (2 = down, 4 = left, 6 = right, 8 = up).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(Direction::Down),
            4 => Some(Direction::Left),
            6 => Some(Direction::Right),
            8 => Some(Direction::Up),
            _ => None,
        }
    }

    /// Numeric-keypad code of this direction.
    pub fn code(self) -> u8 {
        match self {
            Direction::Down => 2,
            Direction::Left => 4,
            Direction::Right => 6,
            Direction::Up => 8,
        }
    }
}

/// Per-tick motion snapshot of a character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct CharacterMotion {
    /// The character is walking or otherwise changing position.
    pub moving: bool,
    /// The character is held by a wait or delay and must not start idling.
    pub blocked: bool,
    /// Direction the character currently faces.
    pub facing: Direction,
}

impl CharacterMotion {
    pub fn standing(facing: Direction) -> Self {
        Self {
            moving: false,
            blocked: false,
            facing,
        }
    }

    /// True if the character is moving or blocked this tick.
    pub fn is_busy(&self) -> bool {
        self.moving || self.blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_codes_follow_keypad_layout() {
        for dir in [
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::Up,
        ] {
            assert_eq!(Direction::from_code(dir.code()), Some(dir));
        }
        assert_eq!(Direction::from_code(5), None);
        assert_eq!(Direction::from_code(0), None);
    }

    #[test]
    fn blocked_counts_as_busy() {
        let mut motion = CharacterMotion::standing(Direction::Left);
        assert!(!motion.is_busy());
        motion.blocked = true;
        assert!(motion.is_busy());
    }
}
