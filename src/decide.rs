//! The decision engine: one action per turn, first match wins.

use tracing::debug;

use crate::config::MissionConfig;
use crate::model::Action;
use crate::policy::Heuristic;
use crate::state::AgentState;

/// Pick the next action.
///
/// Ordered checks, first match wins:
///
/// 1. mission over, energy below the safety threshold, or site and creek
///    both found → stop;
/// 2. scan cadence hit, or nothing visited yet → scan (so the first decision
///    of a run is always a scan);
/// 3. the last terrain reads as ocean → rotate;
/// 4. flying ahead would leave the rectangle → rotate;
/// 5. otherwise fly.
///
/// Scanning and flying mark the current cell visited; the turn counter
/// advances once per non-terminal decision. The rotation is a single 90°
/// turn, so the engine never requests the opposite heading in one decision.
/// Authoritative position and heading change only through feedback.
pub fn decide(state: &mut AgentState, config: &MissionConfig, policy: &impl Heuristic) -> Action {
    if state.mission_over
        || state.energy < config.safety_threshold
        || (state.discoveries.site().is_some() && state.discoveries.any_creek())
    {
        return Action::Stop;
    }

    let action = explore(state, policy);
    state.turn_counter += 1;
    debug!(turn = state.turn_counter, ?action, energy = state.energy, "decided");
    action
}

fn explore(state: &mut AgentState, policy: &impl Heuristic) -> Action {
    if policy.scan_due(state.turn_counter, state.visited.is_empty()) {
        state.visited.insert(state.position);
        return Action::Scan;
    }

    if is_ocean(&state.last_terrain) {
        return Action::Turn {
            direction: policy.rotate(state.heading),
        };
    }

    if policy.blocked(state.heading, state.position) {
        return Action::Turn {
            direction: policy.rotate(state.heading),
        };
    }

    state.visited.insert(state.position);
    Action::Fly
}

/// Case-insensitive match on the impassable-terrain marker.
fn is_ocean(terrain: &str) -> bool {
    terrain.to_ascii_uppercase().contains("OCEAN")
}
