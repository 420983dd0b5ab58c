//! Front-end commands.
//!
//! The buttons a front end shows, and a parser for their text form. Which
//! commands are offered depends on the phase, see
//! [`Game::available_commands`](super::Game::available_commands).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A user-facing command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    Start,
    Attack,
    SpecialAttack,
    Heal,
    GiveUp,
}

impl Command {
    /// Canonical text form, accepted by `from_str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Attack => "attack",
            Command::SpecialAttack => "special",
            Command::Heal => "heal",
            Command::GiveUp => "give-up",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized command text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0:?}")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "new" | "s" => Ok(Command::Start),
            "attack" | "a" => Ok(Command::Attack),
            "special" | "special-attack" | "sp" => Ok(Command::SpecialAttack),
            "heal" | "h" => Ok(Command::Heal),
            "give-up" | "giveup" | "quit-game" | "g" => Ok(Command::GiveUp),
            other => Err(ParseCommandError(other.to_string())),
        }
    }
}
