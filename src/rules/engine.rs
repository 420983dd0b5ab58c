//! The game state machine.
//!
//! `Game` owns the state and applies the rules:
//! - What each action does to health and the battle log
//! - Turn alternation after every logged action
//! - The game-over check against the combatant about to act
//! - The monster's automatic, delayed counter-attack

use serde::{Deserialize, Serialize};

use crate::core::{
    ActionRecord, Combatant, ConfigError, GameConfig, GameError, GameRng, GameRngState,
    GameState, Phase, PublicState, ScoreTable,
};
use crate::schedule::{Scheduler, TaskHandle};

use super::command::Command;
use super::decider::RestartDecider;

/// Outcome of a decided fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The combatant left standing.
    pub winner: Combatant,
    /// Whether the restart was confirmed and a new fight already began.
    pub restarted: bool,
}

/// What one action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionReport {
    /// The record prepended to the battle log.
    pub record: ActionRecord,
    /// Set when this action decided the fight.
    pub result: Option<GameResult>,
    /// Handle of the monster attack this action scheduled, if any.
    pub monster_attack: Option<TaskHandle>,
}

/// Work deferred on the game clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// The monster's automatic normal attack.
    MonsterAttack,
}

/// Turn-based player vs. monster game.
///
/// All mutation goes through `&mut self`, one call at a time. Time only
/// passes when the caller drives the clock with [`advance_clock`] or
/// [`run_pending`].
///
/// ## Example
///
/// ```
/// use monster_slayer::core::{Combatant, GameConfig, Phase};
/// use monster_slayer::rules::{Game, NeverRestart};
///
/// let config = GameConfig::default().with_seed(42);
/// let mut game = Game::new(config, NeverRestart).unwrap();
///
/// game.start();
/// let report = game.attack(false).unwrap();
/// assert_eq!(report.record.victim(), Some(Combatant::Monster));
/// assert_eq!(game.phase(), Phase::MonsterTurn);
///
/// // The monster strikes back after its delay.
/// let reports = game.advance_clock(100);
/// assert_eq!(reports.len(), 1);
/// assert_eq!(game.phase(), Phase::PlayerTurn);
/// ```
///
/// [`advance_clock`]: Game::advance_clock
/// [`run_pending`]: Game::run_pending
pub struct Game<D> {
    config: GameConfig,
    state: GameState,
    scheduler: Scheduler<DeferredAction>,
    monster_attack: Option<TaskHandle>,
    decider: D,
}

impl<D: RestartDecider> Game<D> {
    /// Create a game that has not started yet.
    ///
    /// Seeds the RNG from `config.seed`, or from the OS if unset.
    pub fn new(config: GameConfig, decider: D) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Ok(Self {
            state: GameState::new(config.starting_health, rng),
            config,
            scheduler: Scheduler::new(),
            monster_attack: None,
            decider,
        })
    }

    // === Operations ===

    /// Start a fresh fight.
    ///
    /// Resets both combatants to full health, clears the battle log and
    /// gives the player the first move. Any pending monster attack from the
    /// previous fight is cancelled.
    pub fn start(&mut self) {
        self.cancel_monster_attack();
        self.state.public.reset(self.config.starting_health);

        tracing::info!(
            "New game: both combatants at {} health",
            self.config.starting_health
        );
    }

    /// Attack the opponent of the combatant whose turn it is.
    ///
    /// Damage is `[base, base + attack_factor]`, or up to
    /// `special_attack_factor` for a special attack.
    pub fn attack(&mut self, is_special: bool) -> Result<ActionReport, GameError> {
        self.ensure_in_progress()?;

        let actor = self.state.public.current_turn;
        let factor = self.config.attack_factor_for(is_special);
        let points = self.state.rng.roll(self.config.base_points, factor);

        tracing::debug!(
            "{} {}attacks {} for {}",
            actor,
            if is_special { "special-" } else { "" },
            actor.opponent(),
            points
        );

        Ok(self.commit(ActionRecord::attack(actor, points)))
    }

    /// Heal the combatant whose turn it is. Health is not capped.
    pub fn heal(&mut self) -> Result<ActionReport, GameError> {
        self.ensure_in_progress()?;

        let actor = self.state.public.current_turn;
        let points = self
            .state
            .rng
            .roll(self.config.base_points, self.config.heal_factor);

        tracing::debug!("{} heals for {}", actor, points);

        Ok(self.commit(ActionRecord::heal(actor, points)))
    }

    /// Abandon the current fight.
    ///
    /// Keeps scores and the battle log on display; declares no winner.
    /// The pending monster attack, if any, is cancelled.
    pub fn give_up(&mut self) {
        self.state.public.started = false;
        self.cancel_monster_attack();

        tracing::info!("Game abandoned by the player");
    }

    /// Run a front-end command.
    ///
    /// Returns the action report for `Attack`, `SpecialAttack` and `Heal`.
    pub fn execute(&mut self, command: Command) -> Result<Option<ActionReport>, GameError> {
        match command {
            Command::Start => {
                self.start();
                Ok(None)
            }
            Command::Attack => self.attack(false).map(Some),
            Command::SpecialAttack => self.attack(true).map(Some),
            Command::Heal => self.heal().map(Some),
            Command::GiveUp => {
                self.give_up();
                Ok(None)
            }
        }
    }

    /// Commands a front end should offer in the current phase.
    ///
    /// During the monster's turn only giving up is offered; the monster
    /// acts on its own.
    #[must_use]
    pub fn available_commands(&self) -> Vec<Command> {
        match self.phase() {
            Phase::NotStarted | Phase::GameOver { .. } => vec![Command::Start],
            Phase::PlayerTurn => vec![
                Command::Attack,
                Command::SpecialAttack,
                Command::Heal,
                Command::GiveUp,
            ],
            Phase::MonsterTurn => vec![Command::GiveUp],
        }
    }

    // === Clock ===

    /// Advance the game clock by `ms` and run every deferred action that
    /// comes due, in order.
    ///
    /// Returns the reports of the actions performed.
    pub fn advance_clock(&mut self, ms: u64) -> Vec<ActionReport> {
        let mut reports = Vec::new();
        let mut fired = self.scheduler.advance(ms);

        while !fired.is_empty() {
            for (handle, task) in fired {
                if let Some(report) = self.run_deferred(handle, task) {
                    reports.push(report);
                }
            }
            // Work scheduled with zero delay by the tasks above is due now
            fired = self.scheduler.advance(0);
        }

        reports
    }

    /// Jump the clock to the next deferred action and run it.
    ///
    /// Returns `None` if nothing was pending or the action was discarded.
    pub fn run_pending(&mut self) -> Option<ActionReport> {
        let (handle, task) = self.scheduler.advance_to_next()?;
        self.run_deferred(handle, task)
    }

    // === Observable State ===

    #[must_use]
    pub fn started(&self) -> bool {
        self.state.public.started
    }

    #[must_use]
    pub fn current_turn(&self) -> Combatant {
        self.state.public.current_turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.public.phase()
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTable {
        &self.state.public.scores
    }

    #[must_use]
    pub fn health(&self, combatant: Combatant) -> i64 {
        self.state.public.scores[combatant]
    }

    /// Battle log, newest first.
    #[must_use]
    pub fn action_log(&self) -> &im::Vector<ActionRecord> {
        &self.state.public.action_log
    }

    /// Winner of the last decided fight, until the next `start()`.
    #[must_use]
    pub fn winner(&self) -> Option<Combatant> {
        self.state.public.winner
    }

    /// Cheap copy of everything a renderer shows.
    #[must_use]
    pub fn snapshot(&self) -> PublicState {
        self.state.public.clone()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// RNG position, enough to replay the rest of the game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.state.rng.state()
    }

    /// The monster attack waiting on the clock, if any.
    #[must_use]
    pub fn pending_monster_attack(&self) -> Option<TaskHandle> {
        self.monster_attack
    }

    /// Current game clock in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now()
    }

    #[must_use]
    pub fn decider(&self) -> &D {
        &self.decider
    }

    // === Transitions ===

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.phase() {
            Phase::PlayerTurn | Phase::MonsterTurn => Ok(()),
            Phase::NotStarted => Err(GameError::NotStarted),
            Phase::GameOver { winner } => Err(GameError::GameOver { winner }),
        }
    }

    /// Log the action, apply it, then hand over the turn.
    fn commit(&mut self, record: ActionRecord) -> ActionReport {
        // Whoever acts consumes the monster's pending move
        self.cancel_monster_attack();
        self.state.public.record_action(record);
        self.alternate_turn(record)
    }

    /// Runs after every logged action, never after the log is cleared.
    fn alternate_turn(&mut self, record: ActionRecord) -> ActionReport {
        let (previous, incoming) = self.state.public.flip_turn();
        let result = self.check_game_over(previous, incoming);
        let monster_attack = self.schedule_monster_turn();

        ActionReport {
            record,
            result,
            monster_attack,
        }
    }

    /// Runs on every turn flip, against the combatant about to act.
    ///
    /// A declined restart leaves `current_turn` on the defeated side; the
    /// `GameOver` phase then rejects further actions.
    fn check_game_over(&mut self, previous: Combatant, incoming: Combatant) -> Option<GameResult> {
        if !self.state.public.scores.is_defeated(incoming) {
            return None;
        }

        let winner = previous;
        self.state.public.winner = Some(winner);
        tracing::info!(
            "{} wins ({} at {} health)",
            winner,
            incoming,
            self.state.public.scores[incoming]
        );

        let restarted = self.decider.confirm_restart(winner);
        if restarted {
            self.start();
        } else {
            tracing::info!("Restart declined, game stays over");
        }

        Some(GameResult { winner, restarted })
    }

    /// Queue the monster's counter-attack if it is now the monster's move.
    fn schedule_monster_turn(&mut self) -> Option<TaskHandle> {
        if self.phase() != Phase::MonsterTurn {
            return None;
        }

        let handle = self
            .scheduler
            .schedule(self.config.monster_delay_ms, DeferredAction::MonsterAttack);
        self.monster_attack = Some(handle);

        tracing::debug!(
            "Monster attack scheduled as {} in {}ms",
            handle,
            self.config.monster_delay_ms
        );

        Some(handle)
    }

    fn cancel_monster_attack(&mut self) {
        if let Some(handle) = self.monster_attack.take() {
            if self.scheduler.cancel(handle) {
                tracing::debug!("Cancelled pending monster attack {}", handle);
            }
        }
    }

    fn run_deferred(&mut self, handle: TaskHandle, task: DeferredAction) -> Option<ActionReport> {
        match task {
            DeferredAction::MonsterAttack => {
                if self.monster_attack == Some(handle) {
                    self.monster_attack = None;
                }

                if self.phase() != Phase::MonsterTurn {
                    tracing::warn!(
                        "Discarding stale monster attack {} in phase {:?}",
                        handle,
                        self.phase()
                    );
                    return None;
                }

                match self.attack(false) {
                    Ok(report) => Some(report),
                    Err(err) => {
                        tracing::warn!("Monster attack {} failed: {}", handle, err);
                        None
                    }
                }
            }
        }
    }
}
