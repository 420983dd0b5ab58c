//! Error types for game operations.

use super::combatant::Combatant;

/// Errors returned when an action is requested in a state that cannot take it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// No game is running: never started, or given up.
    #[error("no game in progress")]
    NotStarted,

    /// The fight is decided and the restart was declined.
    #[error("game is over: {winner} won")]
    GameOver { winner: Combatant },
}

/// Errors found while validating a [`GameConfig`](super::GameConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("starting health must be positive, got {0}")]
    NonPositiveHealth(i64),

    #[error("starting health must be at most {max}, got {got}")]
    HealthTooLarge { got: i64, max: i64 },

    #[error("base points must be positive, got {0}")]
    NonPositiveBasePoints(i64),

    #[error("base points must be at most {max}, got {got}")]
    BasePointsTooLarge { got: i64, max: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(GameError::NotStarted.to_string(), "no game in progress");
        assert_eq!(
            GameError::GameOver { winner: Combatant::Player }.to_string(),
            "game is over: player won"
        );
        assert_eq!(
            ConfigError::NonPositiveHealth(-3).to_string(),
            "starting health must be positive, got -3"
        );
    }
}
