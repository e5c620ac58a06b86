//! Applying a turn result to the drone's state.

use tracing::warn;

use crate::bounds::Bounds;
use crate::model::{Heading, Position, TurnResult};
use crate::state::AgentState;

/// Status class meaning the drone was lost. Matched case-insensitively.
const LOST: &str = "mia";

/// Fold one turn result into the state.
///
/// Energy always drops by the reported cost. A lost-drone status or
/// exhausted energy ends the mission immediately and nothing else in the
/// message is read. Otherwise each present extra updates its slice of state;
/// an absent field is "no update". A host-reported position outside the
/// operational rectangle is a forced abort: the next decision is a stop.
pub fn apply(state: &mut AgentState, result: &TurnResult, bounds: &Bounds) {
    state.energy -= result.cost;

    if result.status.eq_ignore_ascii_case(LOST) || state.energy <= 0 {
        warn!(status = %result.status, energy = state.energy, "mission over");
        state.mission_over = true;
        return;
    }

    let extras = &result.extras;

    if let Some(heading) = extras.heading.as_deref().and_then(Heading::parse) {
        state.heading = heading;
    }

    if let Some(position) = extras.position {
        state.position = position;
        state.visited.insert(position);
    }

    for poi in extras.discovered.iter().flatten() {
        if poi.kind.eq_ignore_ascii_case("creek") {
            let distance = state.position.manhattan(Position::new(0, 0));
            state.discoveries.register_creek(&poi.id, distance);
        } else if poi.kind.eq_ignore_ascii_case("site") {
            state.discoveries.register_site(&poi.id);
        }
    }

    if let Some(terrain) = &extras.terrain {
        state.last_terrain = terrain.join(",");
    }

    if !bounds.contains(state.position) {
        warn!(x = state.position.x, y = state.position.y, "out-of-range position reported by host");
        state.mission_over = true;
    }
}
