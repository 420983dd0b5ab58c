//! Game rules: the state machine and its collaborators.
//!
//! - [`Game`] applies actions, alternates turns, detects the end of a fight
//!   and schedules the monster's counter-attack
//! - [`RestartDecider`] answers the "new game?" prompt
//! - [`Command`] is the text/button form of the operations for front ends

pub mod command;
pub mod decider;
pub mod engine;

pub use command::{Command, ParseCommandError};
pub use decider::{AlwaysRestart, NeverRestart, RecordingDecider, RestartDecider};
pub use engine::{ActionReport, DeferredAction, Game, GameResult};
