//! The boundary predicate: would a one-step move leave the operational area?

use serde::Deserialize;

use crate::model::{Heading, Position};

/// The inclusive operational rectangle, `[min_x, max_x] × [min_y, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

/// The standard 160×160 mission area.
impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: 1,
            max_x: 160,
            min_y: 1,
            max_y: 160,
        }
    }
}

impl Bounds {
    /// Whether a position lies inside the rectangle.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Whether one step along `heading` from `position` would leave the
    /// rectangle. Pure and total.
    pub fn would_exit(&self, heading: Heading, position: Position) -> bool {
        let (dx, dy) = heading.step();
        !self.contains(Position::new(position.x + dx, position.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_in_and_out_of_bounds() {
        let bounds = Bounds::default();
        assert!(!bounds.would_exit(Heading::North, Position::new(80, 150)));
        assert!(bounds.would_exit(Heading::North, Position::new(80, 160)));
    }

    #[test]
    fn south_in_and_out_of_bounds() {
        let bounds = Bounds::default();
        assert!(!bounds.would_exit(Heading::South, Position::new(80, 5)));
        assert!(bounds.would_exit(Heading::South, Position::new(80, 1)));
    }

    #[test]
    fn east_in_and_out_of_bounds() {
        let bounds = Bounds::default();
        assert!(!bounds.would_exit(Heading::East, Position::new(159, 80)));
        assert!(bounds.would_exit(Heading::East, Position::new(160, 80)));
    }

    #[test]
    fn west_in_and_out_of_bounds() {
        let bounds = Bounds::default();
        assert!(!bounds.would_exit(Heading::West, Position::new(5, 80)));
        assert!(bounds.would_exit(Heading::West, Position::new(1, 80)));
    }

    #[test]
    fn respects_custom_rectangles() {
        let bounds = Bounds {
            min_x: 0,
            max_x: 9,
            min_y: 0,
            max_y: 9,
        };
        assert!(bounds.contains(Position::new(0, 0)));
        assert!(bounds.would_exit(Heading::West, Position::new(0, 5)));
        assert!(bounds.would_exit(Heading::North, Position::new(5, 9)));
        assert!(!bounds.would_exit(Heading::East, Position::new(8, 9)));
    }

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let bounds = Bounds::default();
        assert!(bounds.contains(Position::new(1, 1)));
        assert!(bounds.contains(Position::new(160, 160)));
        assert!(!bounds.contains(Position::new(0, 80)));
        assert!(!bounds.contains(Position::new(80, 161)));
    }
}
