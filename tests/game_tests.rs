//! Game state machine integration tests.
//!
//! These tests play whole fights through the public API: turn alternation,
//! the game-over prompt, restarts, and the monster's delayed attack.

use monster_slayer::core::{ActionMethod, Combatant, GameConfig, GameError, Phase, ScoreTable};
use monster_slayer::rules::{
    AlwaysRestart, Command, Game, GameResult, NeverRestart, RecordingDecider, RestartDecider,
};

fn seeded<D: RestartDecider>(seed: u64, decider: D) -> Game<D> {
    Game::new(GameConfig::default().with_seed(seed), decider).unwrap()
}

// =============================================================================
// Basic Turn Flow
// =============================================================================

/// Player attacks first; the monster loses 5-10 and the turn passes.
#[test]
fn test_first_player_attack() {
    let mut game = seeded(42, NeverRestart);
    game.start();

    let report = game.attack(false).unwrap();
    let damage = 100 - game.health(Combatant::Monster);

    assert!((5..=10).contains(&damage));
    assert_eq!(damage, report.record.points());
    assert_eq!(game.health(Combatant::Player), 100);

    assert_eq!(game.action_log().len(), 1);
    let record = game.action_log()[0];
    assert_eq!(record.method(), ActionMethod::Attack);
    assert_eq!(record.actor(), Combatant::Player);
    assert_eq!(record.victim(), Some(Combatant::Monster));

    assert_eq!(game.current_turn(), Combatant::Monster);
}

/// Every action adds exactly one record at the front and flips the turn.
#[test]
fn test_each_action_prepends_and_flips() {
    let mut game = seeded(7, NeverRestart);
    game.start();

    for round in 0..10 {
        let before_len = game.action_log().len();
        let before_turn = game.current_turn();

        let report = if round % 3 == 0 {
            game.heal().unwrap()
        } else {
            game.attack(round % 3 == 1).unwrap()
        };

        assert_eq!(game.action_log().len(), before_len + 1);
        assert_eq!(game.action_log()[0], report.record);
        assert_eq!(report.record.actor(), before_turn);
        assert_eq!(game.current_turn(), before_turn.opponent());

        if report.result.is_some() {
            break;
        }
    }
}

/// Actors in the log strictly alternate, starting with the player.
#[test]
fn test_strict_alternation_over_a_fight() {
    let mut game = seeded(11, NeverRestart);
    game.start();

    for _ in 0..500 {
        if game.phase() != Phase::PlayerTurn {
            break;
        }
        game.attack(false).unwrap();
        game.run_pending();
    }

    let actors: Vec<_> = game.action_log().iter().rev().map(|r| r.actor()).collect();
    assert!(!actors.is_empty());
    assert_eq!(actors[0], Combatant::Player);
    for pair in actors.windows(2) {
        assert_ne!(pair[0], pair[1], "same actor twice in a row");
    }
}

/// Heals are never capped at the starting health.
#[test]
fn test_heals_are_uncapped() {
    let mut game = seeded(3, NeverRestart);
    game.start();

    let mut last = *game.scores();
    for _ in 0..10 {
        let report = game.heal().unwrap();
        let healed = report.record.actor();

        assert!((5..=10).contains(&report.record.points()));
        assert_eq!(game.health(healed), last[healed] + report.record.points());
        last = *game.scores();
    }

    assert!(game.health(Combatant::Player) > 100);
    assert!(game.health(Combatant::Monster) > 100);
}

// =============================================================================
// Start and Restart
// =============================================================================

/// `start` restores full health and an empty log from any state.
#[test]
fn test_start_resets_from_any_state() {
    let mut game = seeded(5, NeverRestart);
    game.start();
    game.attack(true).unwrap();
    game.run_pending();
    game.heal().unwrap();

    game.start();
    assert_eq!(*game.scores(), ScoreTable::with_value(100));
    assert!(game.action_log().is_empty());
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.pending_monster_attack(), None);

    game.attack(false).unwrap();
    game.give_up();
    game.start();
    assert_eq!(*game.scores(), ScoreTable::with_value(100));
    assert!(game.action_log().is_empty());
    assert!(game.started());
}

/// Clearing the log on start does not count as an action.
#[test]
fn test_start_does_not_flip_turn() {
    let mut game = seeded(5, NeverRestart);
    game.start();
    game.start();

    assert_eq!(game.current_turn(), Combatant::Player);
    assert!(game.advance_clock(1_000).is_empty());
}

/// Beating the monster signals the player's win and prompts before
/// anything else happens.
#[test]
fn test_player_win_prompts_for_restart() {
    let mut game = seeded(21, RecordingDecider::new(false));
    game.start();

    let mut result = None;
    for _ in 0..1_000 {
        let report = game.attack(true).unwrap();
        if report.result.is_some() {
            result = report.result;
            break;
        }
        // Spend the monster's turn healing so only the monster can fall
        let report = game.heal().unwrap();
        assert!(report.result.is_none());
    }

    assert_eq!(
        result,
        Some(GameResult { winner: Combatant::Player, restarted: false })
    );
    assert!(game.health(Combatant::Monster) <= 0);
    assert_eq!(game.decider().prompts(), &[Combatant::Player]);
    assert_eq!(game.winner(), Some(Combatant::Player));

    // Nothing proceeds afterwards
    assert_eq!(game.pending_monster_attack(), None);
    let log_len = game.action_log().len();
    assert!(game.advance_clock(10_000).is_empty());
    assert_eq!(game.action_log().len(), log_len);
}

/// A declined restart leaves the turn on the defeated side, which can no
/// longer act.
#[test]
fn test_declined_restart_leaves_dangling_turn() {
    let config = GameConfig::default().with_seed(8).with_starting_health(5);
    let mut game = Game::new(config, NeverRestart).unwrap();
    game.start();

    let report = game.attack(false).unwrap();

    assert_eq!(report.result.map(|r| r.winner), Some(Combatant::Player));
    assert_eq!(game.current_turn(), Combatant::Monster);
    assert!(game.started());
    assert_eq!(game.phase(), Phase::GameOver { winner: Combatant::Player });
    assert_eq!(game.available_commands(), vec![Command::Start]);

    let over = GameError::GameOver { winner: Combatant::Player };
    assert_eq!(game.attack(false), Err(over));
    assert_eq!(game.heal(), Err(over));
    assert_eq!(game.action_log().len(), 1);
}

/// An accepted restart begins a clean fight with the player to move.
#[test]
fn test_accepted_restart_starts_clean() {
    let config = GameConfig::default().with_seed(8).with_starting_health(5);
    let mut game = Game::new(config, AlwaysRestart).unwrap();
    game.start();

    let report = game.attack(false).unwrap();

    assert_eq!(report.result.map(|r| r.restarted), Some(true));
    assert_eq!(report.monster_attack, None);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(*game.scores(), ScoreTable::with_value(5));
    assert!(game.action_log().is_empty());
    assert!(game.advance_clock(1_000).is_empty());
}

/// Fights can be played back to back through restarts.
#[test]
fn test_consecutive_fights_with_restart() {
    let config = GameConfig::default().with_seed(13).with_starting_health(20);
    let mut game = Game::new(config, RecordingDecider::new(true)).unwrap();
    game.start();

    let mut actions = 0;
    while game.decider().prompts().len() < 3 && actions < 10_000 {
        game.attack(true).unwrap();
        game.run_pending();
        actions += 1;
    }

    assert_eq!(game.decider().prompts().len(), 3);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

// =============================================================================
// Deferred Monster Attack
// =============================================================================

/// The monster only ever performs normal attacks.
#[test]
fn test_monster_only_normal_attacks() {
    let mut game = seeded(99, NeverRestart);
    game.start();

    for _ in 0..200 {
        if game.phase() != Phase::PlayerTurn {
            break;
        }
        game.heal().unwrap();
        if let Some(report) = game.run_pending() {
            assert_eq!(report.record.actor(), Combatant::Monster);
            assert_eq!(report.record.method(), ActionMethod::Attack);
            assert!((5..=10).contains(&report.record.points()));
        }
    }
}

/// The monster waits exactly the configured delay.
#[test]
fn test_monster_delay_is_configurable() {
    let config = GameConfig::default().with_seed(1).with_monster_delay_ms(250);
    let mut game = Game::new(config, NeverRestart).unwrap();
    game.start();
    game.attack(false).unwrap();

    assert!(game.advance_clock(249).is_empty());
    assert_eq!(game.advance_clock(1).len(), 1);
    assert_eq!(game.now_ms(), 250);
}

/// Giving up during the monster's wind-up cancels its attack.
#[test]
fn test_give_up_mid_game_stops_monster() {
    let mut game = seeded(4, NeverRestart);
    game.start();
    game.attack(false).unwrap();
    assert!(game.pending_monster_attack().is_some());

    game.give_up();

    assert!(!game.started());
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.pending_monster_attack(), None);

    let before = game.snapshot();
    assert!(game.advance_clock(10_000).is_empty());
    assert!(game.run_pending().is_none());
    assert_eq!(game.snapshot(), before);

    // History and scores stay visible
    assert_eq!(game.action_log().len(), 1);
    assert!(game.health(Combatant::Monster) < 100);
    assert_eq!(game.attack(false), Err(GameError::NotStarted));
}

/// Restarting during the monster's wind-up drops the old attack.
#[test]
fn test_start_mid_turn_drops_stale_attack() {
    let mut game = seeded(4, NeverRestart);
    game.start();
    game.attack(false).unwrap();

    game.start();

    assert!(game.advance_clock(10_000).is_empty());
    assert_eq!(*game.scores(), ScoreTable::with_value(100));
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

// =============================================================================
// Determinism and Snapshots
// =============================================================================

/// Same seed and same commands produce the same fight.
#[test]
fn test_deterministic_replay() {
    let commands = [
        Command::Start,
        Command::Attack,
        Command::SpecialAttack,
        Command::Heal,
        Command::Attack,
        Command::SpecialAttack,
    ];

    let play = || {
        let mut game = seeded(12345, NeverRestart);
        for command in commands {
            let _ = game.execute(command);
            game.run_pending();
        }
        game.snapshot()
    };

    assert_eq!(play(), play());
}

/// The snapshot serializes to the shape a renderer expects.
#[test]
fn test_snapshot_json() {
    let mut game = seeded(42, NeverRestart);
    game.start();
    game.attack(false).unwrap();

    let json = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(json["started"], true);
    assert_eq!(json["current_turn"], "monster");
    assert_eq!(json["scores"]["player"], 100);
    assert_eq!(json["action_log"][0]["actor"], "player");
    assert_eq!(json["action_log"][0]["victim"], "monster");
    assert_eq!(json["winner"], serde_json::Value::Null);
}
