//! Core game types: combatants, scores, actions, RNG, configuration, state.
//!
//! This module holds plain data and its invariants. The turn rules that
//! drive it live in [`crate::rules`].

pub mod combatant;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use combatant::{Combatant, ScoreTable};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, MAX_BASE_POINTS, MAX_STARTING_HEALTH};
pub use action::{ActionMethod, ActionRecord};
pub use state::{GameState, Phase, PublicState};
pub use error::{ConfigError, GameError};
