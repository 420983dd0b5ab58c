//! Game state: the observable surface and the full state behind it.
//!
//! ## PublicState
//!
//! Everything a renderer needs:
//! - Whether a game is running and whose turn it is
//! - Health of both combatants
//! - The battle log, newest first
//! - The winner, once the fight is decided
//!
//! ## GameState
//!
//! Public state plus the RNG that drives the rolls.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::combatant::{Combatant, ScoreTable};
use super::rng::GameRng;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Before the first `start()`, or after giving up.
    NotStarted,
    /// The player is to act.
    PlayerTurn,
    /// The monster is to act (its attack is scheduled).
    MonsterTurn,
    /// A combatant was defeated and no restart was confirmed.
    GameOver { winner: Combatant },
}

impl Phase {
    /// Check if actions are accepted in this phase.
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, Phase::PlayerTurn | Phase::MonsterTurn)
    }
}

/// Observable game state.
///
/// The action log is an `im::Vector`, so cloning a `PublicState` for a
/// renderer is O(1) regardless of how long the fight has gone on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// Set by `start()`, cleared by giving up.
    pub started: bool,

    /// The combatant whose action comes next.
    pub current_turn: Combatant,

    /// Health per combatant.
    pub scores: ScoreTable,

    /// Battle log, newest first.
    pub action_log: Vector<ActionRecord>,

    /// Winner of the last decided fight, until the next `start()`.
    pub winner: Option<Combatant>,
}

impl PublicState {
    /// Create the state of a game that has not started yet.
    #[must_use]
    pub fn new(starting_health: i64) -> Self {
        Self {
            started: false,
            current_turn: Combatant::Player,
            scores: ScoreTable::with_value(starting_health),
            action_log: Vector::new(),
            winner: None,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.started {
            return Phase::NotStarted;
        }
        if let Some(winner) = self.winner {
            return Phase::GameOver { winner };
        }
        match self.current_turn {
            Combatant::Player => Phase::PlayerTurn,
            Combatant::Monster => Phase::MonsterTurn,
        }
    }

    /// Begin a fresh fight: full health, empty log, player to act.
    pub fn reset(&mut self, starting_health: i64) {
        self.scores.reset(starting_health);
        self.action_log.clear();
        self.current_turn = Combatant::Player;
        self.winner = None;
        self.started = true;
    }

    // === Action Log ===

    /// Record an action at the front of the log and apply its health change.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.action_log.push_front(record);
        self.scores.modify(record.affected(), record.health_delta());
    }

    /// The most recent action, if any.
    #[must_use]
    pub fn last_action(&self) -> Option<&ActionRecord> {
        self.action_log.front()
    }

    // === Turn ===

    /// Hand the turn to the other combatant.
    ///
    /// Returns `(previous, incoming)`.
    pub fn flip_turn(&mut self) -> (Combatant, Combatant) {
        let previous = self.current_turn;
        self.current_turn = previous.opponent();
        (previous, self.current_turn)
    }
}

/// Full game state.
pub struct GameState {
    /// Public state (observable by renderers).
    pub public: PublicState,

    /// Deterministic RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Create a new game state.
    #[must_use]
    pub fn new(starting_health: i64, rng: GameRng) -> Self {
        Self {
            public: PublicState::new(starting_health),
            rng,
        }
    }
}
