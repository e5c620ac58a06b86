//! The mission loop: the synchronous turn protocol with the host.
//!
//! One JSON object per line in each direction. Initialization builds the
//! state, then host and drone alternate exactly one decision and one result
//! per turn until the drone stops, and the final report goes out as a plain
//! line. Nothing here retries: the drone issues exactly one message per turn.

use std::io::{BufRead, Write};

use tracing::info;

use crate::config::MissionConfig;
use crate::decide::decide;
use crate::feedback::apply;
use crate::model::{Action, InitMessage, TurnResult};
use crate::policy::RightHandSweep;
use crate::state::AgentState;

/// A violation of the host protocol. Fatal: the run is abandoned.
///
/// Host-side trouble the protocol can express — lost drone, exhausted
/// energy, an out-of-range position — is not an error; it folds into the
/// state and the drone stops on its own.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("host closed the channel mid-run")]
    HostClosed,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

/// Run one mission over the given channel and return the final report.
///
/// Reads the init message, alternates decisions and results until the
/// decision is a stop, then writes the report as the last line.
pub fn run(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    config: &MissionConfig,
) -> Result<String> {
    let init: InitMessage = serde_json::from_str(&read_line(reader)?)?;
    info!(budget = init.energy_budget, heading = %init.initial_heading, "initialized");

    let mut state = AgentState::new(&init);
    let policy = RightHandSweep::new(config);

    loop {
        let action = decide(&mut state, config, &policy);
        let mut line = serde_json::to_string(&action)?;
        line.push('\n');
        writer.write_all(line.as_bytes())?;
        writer.flush()?;

        if action == Action::Stop {
            break;
        }

        let result: TurnResult = serde_json::from_str(&read_line(reader)?)?;
        apply(&mut state, &result, &config.bounds);
    }

    let report = state.discoveries.final_report();
    info!(
        report = %report,
        site = ?state.discoveries.site(),
        turns = state.turn_counter,
        energy = state.energy,
        "mission complete"
    );
    writer.write_all(report.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(report)
}

/// Read one non-empty line from the host.
fn read_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(ProtocolError::HostClosed);
        }
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}
