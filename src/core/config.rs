//! Game configuration.
//!
//! All the numbers that shape a fight: starting health, the roll
//! parameters for each action, and how long the monster waits before
//! striking back. Defaults reproduce the classic game.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest accepted starting health.
pub const MAX_STARTING_HEALTH: i64 = 1_000_000_000;

/// Largest accepted minimum roll.
pub const MAX_BASE_POINTS: i64 = 1_000_000_000;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Health of both combatants after `start()` (default: 100).
    pub starting_health: i64,

    /// Minimum points of every roll (default: 5).
    pub base_points: i64,

    /// Spread of a normal attack: damage is in `[base, base + factor]` (default: 5).
    pub attack_factor: u32,

    /// Spread of a special attack (default: 10).
    pub special_attack_factor: u32,

    /// Spread of a heal (default: 5).
    pub heal_factor: u32,

    /// Delay before the monster's automatic attack, in milliseconds (default: 100).
    pub monster_delay_ms: u64,

    /// RNG seed. `None` seeds from the operating system.
    /// Same seed produces the same game for the same inputs.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            base_points: 5,
            attack_factor: 5,
            special_attack_factor: 10,
            heal_factor: 5,
            monster_delay_ms: 100,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the starting health.
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the monster's reaction delay.
    pub fn with_monster_delay_ms(mut self, delay_ms: u64) -> Self {
        self.monster_delay_ms = delay_ms;
        self
    }

    /// Set the minimum roll.
    pub fn with_base_points(mut self, points: i64) -> Self {
        self.base_points = points;
        self
    }

    /// Roll spread for an attack of the given kind.
    #[must_use]
    pub fn attack_factor_for(&self, is_special: bool) -> u32 {
        if is_special {
            self.special_attack_factor
        } else {
            self.attack_factor
        }
    }

    /// Check the configuration for values that would break the game rules.
    ///
    /// Every action must move at least one point of health, and a fresh game
    /// must not start already decided. Upper bounds keep health arithmetic
    /// far from `i64` overflow.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health <= 0 {
            return Err(ConfigError::NonPositiveHealth(self.starting_health));
        }
        if self.starting_health > MAX_STARTING_HEALTH {
            return Err(ConfigError::HealthTooLarge {
                got: self.starting_health,
                max: MAX_STARTING_HEALTH,
            });
        }
        if self.base_points <= 0 {
            return Err(ConfigError::NonPositiveBasePoints(self.base_points));
        }
        if self.base_points > MAX_BASE_POINTS {
            return Err(ConfigError::BasePointsTooLarge {
                got: self.base_points,
                max: MAX_BASE_POINTS,
            });
        }
        Ok(())
    }
}
