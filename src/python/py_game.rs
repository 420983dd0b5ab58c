//! Game bindings for Python.

use std::collections::HashMap;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Combatant, GameConfig, Phase};
use crate::rules::{Command, Game, RestartDecider};

use super::py_core::PyActionRecord;

/// Restart decider backed by an optional Python callable.
///
/// Without a callable every restart is declined.
pub struct PyRestartDecider {
    callback: Option<PyObject>,
}

impl RestartDecider for PyRestartDecider {
    fn confirm_restart(&mut self, winner: Combatant) -> bool {
        let Some(callback) = &self.callback else {
            return false;
        };

        Python::with_gil(|py| match callback.call1(py, (winner.as_str(),)) {
            Ok(result) => match result.extract::<bool>(py) {
                Ok(answer) => answer,
                Err(e) => {
                    tracing::warn!("confirm_restart returned a non-bool: {}", e);
                    false
                }
            },
            Err(e) => {
                tracing::warn!("confirm_restart call failed: {}", e);
                false
            }
        })
    }
}

/// Python wrapper for the game state machine.
#[pyclass(name = "MonsterSlayer")]
pub struct PyMonsterSlayer {
    game: Game<PyRestartDecider>,
}

fn game_error(err: crate::core::GameError) -> PyErr {
    PyRuntimeError::new_err(err.to_string())
}

#[pymethods]
impl PyMonsterSlayer {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games (default: random)
    /// - starting_health: Health of both combatants at start (default: 100)
    /// - monster_delay_ms: Delay before the monster strikes back (default: 100)
    /// - confirm_restart: Callable(winner: str) -> bool asked when a fight ends
    #[new]
    #[pyo3(signature = (
        seed = None,
        starting_health = 100,
        monster_delay_ms = 100,
        confirm_restart = None
    ))]
    fn new(
        seed: Option<u64>,
        starting_health: i64,
        monster_delay_ms: u64,
        confirm_restart: Option<PyObject>,
    ) -> PyResult<Self> {
        let mut config = GameConfig::default()
            .with_starting_health(starting_health)
            .with_monster_delay_ms(monster_delay_ms);
        config.seed = seed;

        let decider = PyRestartDecider {
            callback: confirm_restart,
        };
        let game = Game::new(config, decider).map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self { game })
    }

    fn start(&mut self) {
        self.game.start();
    }

    /// Attack for the combatant whose turn it is.
    #[pyo3(signature = (special = false))]
    fn attack(&mut self, special: bool) -> PyResult<PyActionRecord> {
        let report = self.game.attack(special).map_err(game_error)?;
        Ok(PyActionRecord(report.record))
    }

    fn heal(&mut self) -> PyResult<PyActionRecord> {
        let report = self.game.heal().map_err(game_error)?;
        Ok(PyActionRecord(report.record))
    }

    fn give_up(&mut self) {
        self.game.give_up();
    }

    /// Run a command by name ("attack", "special", "heal", "give-up", "start").
    fn execute(&mut self, command: &str) -> PyResult<Option<PyActionRecord>> {
        let command: Command = command
            .parse()
            .map_err(|e: crate::rules::ParseCommandError| PyValueError::new_err(e.to_string()))?;
        let report = self.game.execute(command).map_err(game_error)?;
        Ok(report.map(|r| PyActionRecord(r.record)))
    }

    /// Commands a front end should offer right now.
    fn available_commands(&self) -> Vec<&'static str> {
        self.game
            .available_commands()
            .into_iter()
            .map(Command::as_str)
            .collect()
    }

    /// Advance the game clock, returning the records of actions that ran.
    fn advance_clock(&mut self, ms: u64) -> Vec<PyActionRecord> {
        self.game
            .advance_clock(ms)
            .into_iter()
            .map(|r| PyActionRecord(r.record))
            .collect()
    }

    #[getter]
    fn started(&self) -> bool {
        self.game.started()
    }

    #[getter]
    fn current_turn(&self) -> &'static str {
        self.game.current_turn().as_str()
    }

    /// "not_started", "player_turn", "monster_turn" or "game_over".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.game.phase() {
            Phase::NotStarted => "not_started",
            Phase::PlayerTurn => "player_turn",
            Phase::MonsterTurn => "monster_turn",
            Phase::GameOver { .. } => "game_over",
        }
    }

    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.game.winner().map(Combatant::as_str)
    }

    fn scores(&self) -> HashMap<&'static str, i64> {
        self.game
            .scores()
            .iter()
            .map(|(c, health)| (c.as_str(), health))
            .collect()
    }

    /// Battle log, newest first.
    fn action_log(&self) -> Vec<PyActionRecord> {
        self.game
            .action_log()
            .iter()
            .map(|r| PyActionRecord(*r))
            .collect()
    }

    fn __repr__(&self) -> String {
        let scores = self.game.scores();
        format!(
            "MonsterSlayer(phase={}, player={}, monster={})",
            self.phase(),
            scores.player(),
            scores.monster()
        )
    }
}
