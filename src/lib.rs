//! # monster-slayer
//!
//! A turn-based player vs. monster game engine.
//!
//! ## Rules
//!
//! 1. **Two combatants**: player and monster start at 100 health each.
//!
//! 2. **Alternating turns**: every logged action hands the turn to the
//!    other side. The player may attack (5-10), special-attack (5-15) or
//!    heal (5-10); the monster only attacks, automatically, after a short
//!    delay.
//!
//! 3. **Game over**: when the turn passes to a combatant at or below zero
//!    health, the other side wins and the front end is asked whether to
//!    start again.
//!
//! ## Architecture
//!
//! - **Explicit transitions**: turn alternation and the game-over check run
//!   synchronously after each action, never as hidden subscriptions.
//!
//! - **Virtual clock**: the monster's delay is a cancellable task on a
//!   clock the caller advances, so games are fully deterministic under a
//!   fixed seed.
//!
//! - **Persistent log**: the battle log uses `im-rs`, so snapshots for
//!   rendering are O(1).
//!
//! ## Modules
//!
//! - `core`: Combatants, scores, action records, RNG, configuration, state
//! - `rules`: The `Game` state machine, restart deciders, commands
//! - `schedule`: Virtual-clock task scheduler

pub mod core;
pub mod rules;
pub mod schedule;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Combatant, ScoreTable,
    GameRng, GameRngState,
    GameConfig,
    ActionMethod, ActionRecord,
    Phase, PublicState, GameState,
    ConfigError, GameError,
};

pub use crate::rules::{
    ActionReport, Command, DeferredAction, Game, GameResult, ParseCommandError,
    AlwaysRestart, NeverRestart, RecordingDecider, RestartDecider,
};

pub use crate::schedule::{Scheduler, TaskHandle};
