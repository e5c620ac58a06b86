//! Core data model for Skimmer.
//!
//! Headings, grid positions, the actions the drone can take, and the wire
//! messages exchanged with the simulation host.

mod action;
mod heading;
mod position;
mod protocol;

pub use action::Action;
pub use heading::Heading;
pub use position::Position;
pub use protocol::{Discovery, Extras, InitMessage, TurnResult};
