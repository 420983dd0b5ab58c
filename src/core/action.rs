//! Action records: the immutable entries of the battle log.
//!
//! Every executed action produces exactly one record:
//! - "Attack" = actor + victim + damage points
//! - "Heal" = actor + healing points (the actor heals itself, no victim)
//!
//! Records are built through the two constructors only, so an attack always
//! has its actor's opponent as victim and a heal never has one. Deserialization
//! goes through the same constructors and rejects any other shape.

use serde::{Deserialize, Deserializer, Serialize};

use super::combatant::Combatant;

/// What kind of action a record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMethod {
    /// Damage dealt to the opponent.
    Attack,
    /// Health restored to the actor.
    Heal,
}

/// One executed action.
///
/// ## Example
///
/// ```
/// use monster_slayer::core::{ActionMethod, ActionRecord, Combatant};
///
/// let hit = ActionRecord::attack(Combatant::Player, 7);
/// assert_eq!(hit.method(), ActionMethod::Attack);
/// assert_eq!(hit.victim(), Some(Combatant::Monster));
/// assert_eq!(hit.to_string(), "PLAYER HITS MONSTER FOR 7");
///
/// let heal = ActionRecord::heal(Combatant::Player, 6);
/// assert_eq!(heal.victim(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ActionRecord {
    method: ActionMethod,
    actor: Combatant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    victim: Option<Combatant>,
    points: i64,
}

impl ActionRecord {
    /// Record an attack by `actor` against its opponent.
    #[must_use]
    pub fn attack(actor: Combatant, points: i64) -> Self {
        Self {
            method: ActionMethod::Attack,
            actor,
            victim: Some(actor.opponent()),
            points,
        }
    }

    /// Record `actor` healing itself.
    #[must_use]
    pub fn heal(actor: Combatant, points: i64) -> Self {
        Self {
            method: ActionMethod::Heal,
            actor,
            victim: None,
            points,
        }
    }

    #[must_use]
    pub fn method(&self) -> ActionMethod {
        self.method
    }

    #[must_use]
    pub fn actor(&self) -> Combatant {
        self.actor
    }

    /// The combatant that took the damage. `None` for heals.
    #[must_use]
    pub fn victim(&self) -> Option<Combatant> {
        self.victim
    }

    #[must_use]
    pub fn points(&self) -> i64 {
        self.points
    }

    /// The combatant whose health this action changed.
    #[must_use]
    pub fn affected(&self) -> Combatant {
        self.victim.unwrap_or(self.actor)
    }

    /// Signed health change applied to `affected()`.
    #[must_use]
    pub fn health_delta(&self) -> i64 {
        match self.method {
            ActionMethod::Attack => -self.points,
            ActionMethod::Heal => self.points,
        }
    }
}

impl<'de> Deserialize<'de> for ActionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            method: ActionMethod,
            actor: Combatant,
            #[serde(default)]
            victim: Option<Combatant>,
            points: i64,
        }

        let fields = Fields::deserialize(deserializer)?;
        let record = match fields.method {
            ActionMethod::Attack => Self::attack(fields.actor, fields.points),
            ActionMethod::Heal => Self::heal(fields.actor, fields.points),
        };

        if record.victim != fields.victim {
            return Err(serde::de::Error::custom(format!(
                "{:?} by {} cannot have victim {:?}",
                fields.method, fields.actor, fields.victim
            )));
        }
        Ok(record)
    }
}

impl std::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let actor = self.actor.as_str().to_uppercase();
        match self.victim {
            Some(victim) => write!(
                f,
                "{} HITS {} FOR {}",
                actor,
                victim.as_str().to_uppercase(),
                self.points
            ),
            None => write!(f, "{} HEALS HIMSELF FOR {}", actor, self.points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_targets_opponent() {
        let record = ActionRecord::attack(Combatant::Monster, 9);

        assert_eq!(record.method(), ActionMethod::Attack);
        assert_eq!(record.actor(), Combatant::Monster);
        assert_eq!(record.victim(), Some(Combatant::Player));
        assert_eq!(record.points(), 9);
        assert_eq!(record.affected(), Combatant::Player);
        assert_eq!(record.health_delta(), -9);
    }

    #[test]
    fn test_heal_has_no_victim() {
        let record = ActionRecord::heal(Combatant::Player, 5);

        assert_eq!(record.method(), ActionMethod::Heal);
        assert_eq!(record.victim(), None);
        assert_eq!(record.affected(), Combatant::Player);
        assert_eq!(record.health_delta(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ActionRecord::attack(Combatant::Monster, 10).to_string(),
            "MONSTER HITS PLAYER FOR 10"
        );
        assert_eq!(
            ActionRecord::heal(Combatant::Player, 8).to_string(),
            "PLAYER HEALS HIMSELF FOR 8"
        );
    }

    #[test]
    fn test_serialization_shape() {
        let attack = ActionRecord::attack(Combatant::Player, 7);
        let json = serde_json::to_string(&attack).unwrap();
        assert_eq!(
            json,
            r#"{"method":"attack","actor":"player","victim":"monster","points":7}"#
        );

        let heal = ActionRecord::heal(Combatant::Monster, 6);
        let json = serde_json::to_string(&heal).unwrap();
        assert_eq!(json, r#"{"method":"heal","actor":"monster","points":6}"#);

        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, heal);
    }

    #[test]
    fn test_deserialize_rejects_malformed_records() {
        // Attack without a victim would damage the actor
        let missing = r#"{"method":"attack","actor":"player","points":7}"#;
        assert!(serde_json::from_str::<ActionRecord>(missing).is_err());

        let self_hit = r#"{"method":"attack","actor":"player","victim":"player","points":7}"#;
        assert!(serde_json::from_str::<ActionRecord>(self_hit).is_err());

        let heal_other = r#"{"method":"heal","actor":"player","victim":"monster","points":5}"#;
        assert!(serde_json::from_str::<ActionRecord>(heal_other).is_err());

        let attack = r#"{"method":"attack","actor":"monster","victim":"player","points":9}"#;
        assert_eq!(
            serde_json::from_str::<ActionRecord>(attack).unwrap(),
            ActionRecord::attack(Combatant::Monster, 9)
        );
    }
}
