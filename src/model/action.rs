//! Actions: the decisions the drone sends to the host.

use serde::Serialize;

use super::Heading;

/// One decision message, serialized exactly as the host expects.
///
/// Tagged on `action` so each variant is self-describing on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// End the mission; the final report follows.
    Stop,

    /// Reveal the current cell's terrain and any points of interest there.
    Scan,

    /// Advance one cell along the current heading.
    Fly,

    /// Rotate to a new heading, always exactly 90° from the current one.
    #[serde(rename = "heading")]
    Turn { direction: Heading },
}
