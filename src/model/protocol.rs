//! Wire messages from the simulation host.
//!
//! One JSON object per line in each direction. Every optional field of a
//! turn result means "no update" when absent, never an error.

use serde::Deserialize;

use super::Position;

/// The first message of a run: the energy budget and starting heading.
///
/// Both fields are required; a missing or malformed field is a protocol
/// violation. The heading string is parsed leniently and defaults to East
/// when unrecognized. Any position the host also supplies is ignored — runs
/// start at the configured origin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitMessage {
    pub energy_budget: i64,
    pub initial_heading: String,
}

/// The host's response to one executed action.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnResult {
    /// Energy spent executing the action.
    pub cost: i64,

    /// Outcome class. `"MIA"` (case-insensitive) means the drone was lost.
    pub status: String,

    #[serde(default)]
    pub extras: Extras,
}

/// Optional per-turn updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Extras {
    /// Authoritative heading after the action.
    pub heading: Option<String>,

    /// Authoritative position after the action.
    pub position: Option<Position>,

    /// Points of interest revealed by a scan.
    pub discovered: Option<Vec<Discovery>>,

    /// Terrain observed at the current cell.
    pub terrain: Option<Vec<String>>,
}

/// A point of interest revealed by a scan.
///
/// `kind` is `"site"` or `"creek"`, matched case-insensitively.
#[derive(Debug, Clone, Deserialize)]
pub struct Discovery {
    pub kind: String,
    pub id: String,
}
