//! Exploration heuristics behind a capability seam.
//!
//! The turn state machine in [`crate::decide`] is fixed; what varied across
//! the old drone fleet was when to scan, which way to rotate when dodging,
//! and what counts as blocked. Those three live behind this trait so an
//! alternative sweep can be substituted without touching the engine's
//! control flow.

use crate::bounds::Bounds;
use crate::config::MissionConfig;
use crate::model::{Heading, Position};

pub trait Heuristic {
    /// Whether this turn should be spent scanning.
    fn scan_due(&self, turn_counter: u32, nothing_visited: bool) -> bool;

    /// The rotation used to dodge obstacles and boundaries.
    fn rotate(&self, heading: Heading) -> Heading;

    /// Whether one step along `heading` from `position` is off limits.
    fn blocked(&self, heading: Heading, position: Position) -> bool;
}

/// The default heuristic: scan on a fixed cadence, rotate clockwise, never
/// step over the configured rectangle.
///
/// A greedy local rule, not a search strategy.
#[derive(Debug, Clone)]
pub struct RightHandSweep {
    bounds: Bounds,
    scan_period: u32,
}

impl RightHandSweep {
    pub fn new(config: &MissionConfig) -> Self {
        Self {
            bounds: config.bounds,
            scan_period: config.scan_period,
        }
    }
}

impl Heuristic for RightHandSweep {
    fn scan_due(&self, turn_counter: u32, nothing_visited: bool) -> bool {
        turn_counter % self.scan_period == 0 || nothing_visited
    }

    fn rotate(&self, heading: Heading) -> Heading {
        heading.right_turn()
    }

    fn blocked(&self, heading: Heading, position: Position) -> bool {
        self.bounds.would_exit(heading, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep() -> RightHandSweep {
        RightHandSweep::new(&MissionConfig::default())
    }

    #[test]
    fn scans_on_the_cadence() {
        let sweep = sweep();
        assert!(sweep.scan_due(0, false));
        assert!(!sweep.scan_due(1, false));
        assert!(!sweep.scan_due(2, false));
        assert!(sweep.scan_due(3, false));
        assert!(sweep.scan_due(6, false));
    }

    #[test]
    fn scans_whenever_nothing_is_visited() {
        let sweep = sweep();
        assert!(sweep.scan_due(1, true));
        assert!(sweep.scan_due(2, true));
    }

    #[test]
    fn rotation_is_the_clockwise_turn() {
        let sweep = sweep();
        assert_eq!(sweep.rotate(Heading::East), Heading::South);
        assert_eq!(sweep.rotate(Heading::West), Heading::North);
    }

    #[test]
    fn blocked_matches_the_boundary_predicate() {
        let sweep = sweep();
        assert!(sweep.blocked(Heading::East, Position::new(160, 80)));
        assert!(!sweep.blocked(Heading::East, Position::new(159, 80)));
    }
}
