//! Idle animation note tags.
//!
//! Characters describe their idle animations in free-text notes. At most one
//! tag is read per line; text around a `<...>` tag and lines without a
//! recognised tag are ignored.
//!
//! ```text
//! <IdleAnim: Actor1_yawn, 0, 2, 70> mostly yawns
//! IdleAnim: Actor1_stretch, 0, 2
//! IdleAnimMinTime: 3.5
//! IdleAnimMaxTime: 8
//! ```
//!
//! Tag names are case-insensitive and the angle brackets are optional.
//! Parsing never fails: malformed tags are skipped and unset timings fall
//! back to the configured defaults.

use log::{debug, trace};

use crate::components::idleanimation::{DEFAULT_WEIGHT, IdleAnimationDefinition};

const ANIM_TAG: &str = "IdleAnim";
const MIN_TIME_TAG: &str = "IdleAnimMinTime";
const MAX_TIME_TAG: &str = "IdleAnimMaxTime";

/// Result of parsing a note block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdleNotes {
    /// `IdleAnim` definitions in note order.
    pub animations: Vec<IdleAnimationDefinition>,
    /// Last valid `IdleAnimMinTime`, if any.
    pub min_idle_time: Option<f32>,
    /// Last valid `IdleAnimMaxTime`, if any.
    pub max_idle_time: Option<f32>,
}

impl IdleNotes {
    /// True if the note contained no usable idle tag.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty() && self.min_idle_time.is_none() && self.max_idle_time.is_none()
    }
}

/// Parse every idle tag found in `text`.
pub fn parse_idle_notes(text: &str) -> IdleNotes {
    let mut notes = IdleNotes::default();

    for line in text.lines() {
        let Some((tag, value)) = split_tag(line) else {
            continue;
        };

        if tag.eq_ignore_ascii_case(MIN_TIME_TAG) {
            match parse_seconds(value) {
                Some(seconds) => notes.min_idle_time = Some(seconds),
                None => trace!("Ignoring {} with bad value '{}'", MIN_TIME_TAG, value),
            }
        } else if tag.eq_ignore_ascii_case(MAX_TIME_TAG) {
            match parse_seconds(value) {
                Some(seconds) => notes.max_idle_time = Some(seconds),
                None => trace!("Ignoring {} with bad value '{}'", MAX_TIME_TAG, value),
            }
        } else if tag.eq_ignore_ascii_case(ANIM_TAG) {
            match parse_definition(value) {
                Some(definition) => {
                    debug!(
                        "Idle animation '{}' patterns {}..={} weight {}",
                        definition.name,
                        definition.start_pattern,
                        definition.end_pattern,
                        definition.probability
                    );
                    notes.animations.push(definition);
                }
                None => trace!("Ignoring malformed {} '{}'", ANIM_TAG, value),
            }
        }
    }

    notes
}

/// Split `Tag: value` into trimmed parts. If the line has a `<`, only the
/// text between it and the next `>` is used and the rest is ignored.
fn split_tag(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let inner = match line.find('<') {
        Some(open) => {
            let rest = &line[open + 1..];
            rest.find('>').map_or(rest, |close| &rest[..close])
        }
        None => line,
    };
    let (tag, value) = inner.split_once(':')?;
    Some((tag.trim(), value.trim()))
}

fn parse_seconds(value: &str) -> Option<f32> {
    value.parse::<f32>().ok().filter(|s| s.is_finite())
}

/// `name, start, end[, weight]`
fn parse_definition(value: &str) -> Option<IdleAnimationDefinition> {
    let mut fields = value.split(',').map(str::trim);

    let name = fields.next().filter(|name| !name.is_empty())?;
    let start_pattern = fields.next()?.parse::<i32>().ok()?;
    let end_pattern = fields.next()?.parse::<i32>().ok()?;
    let probability = fields
        .next()
        .and_then(|weight| weight.parse::<u32>().ok())
        .unwrap_or(DEFAULT_WEIGHT);

    Some(IdleAnimationDefinition {
        name: name.to_string(),
        start_pattern,
        end_pattern,
        probability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_without_tags_is_empty() {
        for text in ["", "just a villager", "Note: nothing here\n<Other: 1, 2>"] {
            let notes = parse_idle_notes(text);
            assert!(notes.is_empty(), "unexpected tags in {text:?}");
        }
    }

    #[test]
    fn test_anim_default_weight() {
        let notes = parse_idle_notes("IdleAnim: Foo, 0, 2");
        assert_eq!(
            notes.animations,
            vec![IdleAnimationDefinition {
                name: "Foo".to_string(),
                start_pattern: 0,
                end_pattern: 2,
                probability: 100,
            }]
        );
    }

    #[test]
    fn test_anim_with_weight_and_brackets() {
        let notes = parse_idle_notes("<idleanim:  Actor1 yawn , 1, 2, 30>");
        let anim = &notes.animations[0];
        assert_eq!(anim.name, "Actor1 yawn");
        assert_eq!((anim.start_pattern, anim.end_pattern), (1, 2));
        assert_eq!(anim.probability, 30);
    }

    #[test]
    fn test_non_numeric_weight_defaults() {
        let notes = parse_idle_notes("IdleAnim: Foo, 0, 2, often\nIdleAnim: Bar, 0, 2, -5");
        assert_eq!(notes.animations[0].probability, 100);
        assert_eq!(notes.animations[1].probability, 100);
    }

    #[test]
    fn test_malformed_anim_lines_skipped() {
        let text = "IdleAnim: Foo, 0\nIdleAnim: , 0, 2\nIdleAnim: Foo, a, 2\nIdleAnim Foo, 0, 2";
        assert!(parse_idle_notes(text).animations.is_empty());
    }

    #[test]
    fn test_animations_keep_note_order() {
        let text = "A villager.\nIdleAnim: First, 0, 2\nsome text\nIDLEANIM: Second, 0, 1, 50\n";
        let names: Vec<_> = parse_idle_notes(text)
            .animations
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn test_times_last_valid_wins() {
        let text = "IdleAnimMinTime: 2\nIdleAnimMaxTime: 4.5\nidleanimmintime: 3.25\nIdleAnimMaxTime: soon";
        let notes = parse_idle_notes(text);
        assert_eq!(notes.min_idle_time, Some(3.25));
        assert_eq!(notes.max_idle_time, Some(4.5));
        assert!(notes.animations.is_empty());
    }

    #[test]
    fn test_tags_embedded_in_free_text() {
        let trailing = parse_idle_notes("<IdleAnim: A, 0, 2> yawns a lot");
        assert_eq!(trailing.animations, vec![IdleAnimationDefinition::new("A", 0, 2)]);

        let leading = parse_idle_notes("Villager <IdleAnim: B, 0, 2>");
        assert_eq!(leading.animations, vec![IdleAnimationDefinition::new("B", 0, 2)]);

        let timed = parse_idle_notes("<IdleAnimMinTime: 3> seconds");
        assert_eq!(timed.min_idle_time, Some(3.0));
    }

    #[test]
    fn test_time_tags_are_not_anim_tags() {
        let notes = parse_idle_notes("<IdleAnimMinTime: 1>");
        assert!(notes.animations.is_empty());
        assert_eq!(notes.min_idle_time, Some(1.0));
    }
}
