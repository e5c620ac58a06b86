//! The drone's per-run state.

use std::collections::HashSet;

use crate::discovery::DiscoveryLog;
use crate::model::{Heading, InitMessage, Position};

/// Where every run begins, regardless of anything else the host sends.
pub const ORIGIN: Position = Position::new(1, 1);

/// Everything the drone knows mid-run.
///
/// Created once at initialization, mutated once per turn by the feedback
/// applier (plus the decision engine's own bookkeeping), and dropped after
/// the final report. The protocol is strictly sequential, so the single
/// owner needs no synchronization.
#[derive(Debug)]
pub struct AgentState {
    /// Authoritative position. Only feedback moves it.
    pub position: Position,

    /// Authoritative heading. Only feedback rotates it.
    pub heading: Heading,

    /// Remaining energy. Decreases only by host-reported costs.
    pub energy: i64,

    /// Turns taken so far; drives the scan cadence.
    pub turn_counter: u32,

    /// Cells the drone has touched.
    pub visited: HashSet<Position>,

    /// The latest terrain observation, joined with `,` when the host sends
    /// several at once.
    pub last_terrain: String,

    /// Set on host-signalled loss, exhausted energy, or a forced
    /// out-of-range position. Every decision afterwards is a stop.
    pub mission_over: bool,

    /// Discovered points of interest.
    pub discoveries: DiscoveryLog,
}

impl AgentState {
    /// Build the starting state from the host's init message.
    ///
    /// An unrecognized heading string defaults to East.
    pub fn new(init: &InitMessage) -> Self {
        Self {
            position: ORIGIN,
            heading: Heading::parse(&init.initial_heading).unwrap_or(Heading::East),
            energy: init.energy_budget,
            turn_counter: 0,
            visited: HashSet::new(),
            last_terrain: String::new(),
            mission_over: false,
            discoveries: DiscoveryLog::default(),
        }
    }
}
