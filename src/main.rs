//! Terminal front end.
//!
//! Reads one command per line, drives the game clock in real time while the
//! monster winds up, and asks on stdin whether to play again.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use monster_slayer::core::{Combatant, GameConfig, Phase};
use monster_slayer::rules::{ActionReport, Command, Game, RestartDecider};

#[derive(Debug, Parser)]
#[command(name = "monster-slayer", about = "Fight a monster, one turn at a time")]
struct Args {
    /// RNG seed; same seed and inputs replay the same fight
    #[arg(long)]
    seed: Option<u64>,

    /// Health of both combatants at the start of a fight
    #[arg(long, default_value_t = 100)]
    starting_health: i64,

    /// How long the monster waits before striking back
    #[arg(long, default_value_t = 100)]
    monster_delay_ms: u64,

    /// Global log level when `RUST_LOG` sets none (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Print the full state as JSON after every command
    #[arg(long)]
    json: bool,
}

/// Asks "New game?" on stdin.
struct StdinDecider;

impl RestartDecider for StdinDecider {
    fn confirm_restart(&mut self, winner: Combatant) -> bool {
        print!("{} wins! New game? [y/N] ", winner);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG directives take precedence over --log-level
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(args.log_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut config = GameConfig::default()
        .with_starting_health(args.starting_health)
        .with_monster_delay_ms(args.monster_delay_ms);
    config.seed = args.seed;

    let mut game = Game::new(config, StdinDecider).context("invalid game configuration")?;

    println!("Monster Slayer. Type a command, or `quit` to leave.");
    render(&game, args.json)?;

    let stdin = io::stdin();
    loop {
        print!("[{}] > ", command_list(&game.available_commands()));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "q" {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match game.execute(command) {
            Ok(Some(report)) => announce(&report),
            Ok(None) => {}
            Err(err) => println!("{}", err),
        }

        // Let the monster answer in real time
        while game.pending_monster_attack().is_some() {
            let delay = game.config().monster_delay_ms;
            std::thread::sleep(Duration::from_millis(delay));
            for report in game.advance_clock(delay) {
                announce(&report);
            }
        }

        render(&game, args.json)?;
    }

    Ok(())
}

fn announce(report: &ActionReport) {
    println!("  {}", report.record);
    if let Some(result) = report.result {
        if result.restarted {
            println!("  A new fight begins.");
        } else {
            println!("  {} won. Type `start` to fight again.", result.winner);
        }
    }
}

fn render<D: RestartDecider>(game: &Game<D>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&game.snapshot())?);
        return Ok(());
    }

    let scores = game.scores();
    let status = match game.phase() {
        Phase::NotStarted => "not started".to_string(),
        Phase::PlayerTurn => "your turn".to_string(),
        Phase::MonsterTurn => "monster's turn".to_string(),
        Phase::GameOver { winner } => format!("over, {} won", winner),
    };
    println!(
        "YOU {:>4} | MONSTER {:>4} | {}",
        scores.player(),
        scores.monster(),
        status
    );
    Ok(())
}

fn command_list(commands: &[Command]) -> String {
    commands
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join("/")
}
