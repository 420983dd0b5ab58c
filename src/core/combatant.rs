//! Combatant identification and per-combatant health storage.
//!
//! ## Combatant
//!
//! The two sides of a fight: the player and the monster.
//!
//! ## ScoreTable
//!
//! Health per combatant, indexable by `Combatant`. Values are plain `i64`
//! and are never clamped: damage may push health below zero and healing
//! may push it above the starting value.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants in a fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combatant {
    /// The human-controlled side. Always moves first.
    Player,
    /// The computer-controlled side.
    Monster,
}

impl Combatant {
    /// Both combatants, in turn order.
    pub const ALL: [Combatant; 2] = [Combatant::Player, Combatant::Monster];

    /// The other combatant.
    ///
    /// ```
    /// use monster_slayer::core::Combatant;
    ///
    /// assert_eq!(Combatant::Player.opponent(), Combatant::Monster);
    /// assert_eq!(Combatant::Monster.opponent(), Combatant::Player);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Combatant::Player => Combatant::Monster,
            Combatant::Monster => Combatant::Player,
        }
    }

    /// Lowercase name, as shown in prompts and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Combatant::Player => "player",
            Combatant::Monster => "monster",
        }
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health per combatant.
///
/// One field per combatant, so every combatant always has exactly
/// one entry.
///
/// ## Example
///
/// ```
/// use monster_slayer::core::{Combatant, ScoreTable};
///
/// let mut scores = ScoreTable::with_value(100);
/// scores[Combatant::Monster] -= 7;
///
/// assert_eq!(scores[Combatant::Player], 100);
/// assert_eq!(scores.monster(), 93);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreTable {
    player: i64,
    monster: i64,
}

impl ScoreTable {
    /// Create a table with both combatants at `health`.
    #[must_use]
    pub const fn with_value(health: i64) -> Self {
        Self {
            player: health,
            monster: health,
        }
    }

    /// Reset both combatants to `health`.
    pub fn reset(&mut self, health: i64) {
        *self = Self::with_value(health);
    }

    /// Player health.
    #[must_use]
    pub const fn player(&self) -> i64 {
        self.player
    }

    /// Monster health.
    #[must_use]
    pub const fn monster(&self) -> i64 {
        self.monster
    }

    /// Add `delta` (possibly negative) to a combatant's health.
    ///
    /// Saturates at the `i64` bounds instead of wrapping.
    pub fn modify(&mut self, combatant: Combatant, delta: i64) {
        let health = &mut self[combatant];
        *health = health.saturating_add(delta);
    }

    /// Check whether a combatant has been defeated (health <= 0).
    #[must_use]
    pub fn is_defeated(&self, combatant: Combatant) -> bool {
        self[combatant] <= 0
    }

    /// Iterate over (Combatant, health) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Combatant, i64)> + '_ {
        Combatant::ALL.into_iter().map(move |c| (c, self[c]))
    }
}

impl Index<Combatant> for ScoreTable {
    type Output = i64;

    fn index(&self, combatant: Combatant) -> &Self::Output {
        match combatant {
            Combatant::Player => &self.player,
            Combatant::Monster => &self.monster,
        }
    }
}

impl IndexMut<Combatant> for ScoreTable {
    fn index_mut(&mut self, combatant: Combatant) -> &mut Self::Output {
        match combatant {
            Combatant::Player => &mut self.player,
            Combatant::Monster => &mut self.monster,
        }
    }
}
