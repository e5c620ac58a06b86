//! Compass headings and the clockwise rotation.

use serde::{Serialize, Serializer};

/// One of the four cardinal headings.
///
/// The wire protocol carries headings as strings; inside the crate a heading
/// is always one of these four. Lenient parsing lives at the boundary
/// ([`Heading::parse`]), and serialization is the single-letter form the
/// decision message requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Parse a heading string from the host.
    ///
    /// Accepts single-letter and full-word forms, case-insensitive.
    /// Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Some(Self::North),
            "E" | "EAST" => Some(Self::East),
            "S" | "SOUTH" => Some(Self::South),
            "W" | "WEST" => Some(Self::West),
            _ => None,
        }
    }

    /// The single-letter wire form.
    pub fn letter(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }

    /// The 90° clockwise rotation: North → East → South → West → North.
    pub fn right_turn(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The heading directly opposite this one.
    pub fn opposite(self) -> Self {
        self.right_turn().right_turn()
    }

    /// Unit-step displacement on the grid: north is y+1, east is x+1.
    pub fn step(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl Serialize for Heading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_and_words_case_insensitively() {
        assert_eq!(Heading::parse("N"), Some(Heading::North));
        assert_eq!(Heading::parse("north"), Some(Heading::North));
        assert_eq!(Heading::parse("nOrTh"), Some(Heading::North));
        assert_eq!(Heading::parse("e"), Some(Heading::East));
        assert_eq!(Heading::parse("SOUTH"), Some(Heading::South));
        assert_eq!(Heading::parse(" west "), Some(Heading::West));
    }

    #[test]
    fn rejects_unrecognized_strings() {
        assert_eq!(Heading::parse("UP"), None);
        assert_eq!(Heading::parse(""), None);
        assert_eq!(Heading::parse("northeast"), None);
    }

    #[test]
    fn right_turn_is_a_four_cycle() {
        for start in [Heading::North, Heading::East, Heading::South, Heading::West] {
            let mut h = start;
            for _ in 0..4 {
                h = h.right_turn();
            }
            assert_eq!(h, start);
        }
    }

    #[test]
    fn right_turn_is_never_a_reversal() {
        for h in [Heading::North, Heading::East, Heading::South, Heading::West] {
            assert_ne!(h.right_turn(), h.opposite());
            assert_ne!(h.right_turn(), h);
        }
    }

    #[test]
    fn steps_are_unit_displacements() {
        assert_eq!(Heading::North.step(), (0, 1));
        assert_eq!(Heading::South.step(), (0, -1));
        assert_eq!(Heading::East.step(), (1, 0));
        assert_eq!(Heading::West.step(), (-1, 0));
    }

    #[test]
    fn serializes_as_single_letter() {
        let json = serde_json::to_string(&Heading::West).unwrap();
        assert_eq!(json, "\"W\"");
    }
}
