//! Python bindings for the monster-slayer game engine.
//!
//! This module lets a Python front end (a web view, a notebook, a bot)
//! drive the game while Rust keeps the rules.
//!
//! # Quick Start
//!
//! ```python
//! import monster_slayer as ms
//!
//! # Decline restarts; pass any callable taking the winner's name
//! game = ms.MonsterSlayer(seed=42, confirm_restart=lambda winner: False)
//!
//! game.start()
//! record = game.attack(special=True)
//! print(record)              # PLAYER HITS MONSTER FOR 12
//!
//! # Let the monster answer
//! game.advance_clock(100)
//! print(game.scores())       # {'player': 93, 'monster': 88}
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// monster_slayer: a turn-based player vs. monster game.
///
/// This module provides:
/// - The game state machine (MonsterSlayer)
/// - Battle log records (ActionRecord)
#[pymodule]
fn monster_slayer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyActionRecord>()?;
    m.add_class::<PyMonsterSlayer>()?;

    Ok(())
}
