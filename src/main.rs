//! Headless runner (default binary).
//!
//! Drives a game with no display attached. A simulated clock advances by the
//! interval the game reports before each gravity tick, an optional action
//! script is replayed one action per tick, and the result is logged and
//! optionally dumped as a JSON snapshot.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blocktris::core::{GameState, UniformPieces};
use blocktris::types::{GameAction, LockEvent};

#[derive(Debug, Parser)]
#[command(name = "blocktris", about = "Play a headless falling-block game")]
struct Args {
    /// Seed for the piece generator; omit for a non-reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many gravity ticks
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// Comma-separated actions replayed one per tick, cycling
    /// (e.g. "moveLeft,rotate,hardDrop")
    #[arg(long)]
    actions: Option<String>,

    /// Print the final snapshot as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default)]
struct RunSummary {
    ticks: u64,
    elapsed_ms: u64,
    pieces_locked: u64,
}

impl RunSummary {
    fn record(&mut self, event: Option<LockEvent>) {
        let Some(event) = event else {
            return;
        };
        self.pieces_locked += 1;
        if event.lines_cleared > 0 {
            debug!(
                lines = event.lines_cleared,
                points = event.points,
                at_ms = self.elapsed_ms,
                "lines cleared"
            );
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let script = match args.actions.as_deref() {
        Some(text) => parse_script(text)?,
        None => Vec::new(),
    };

    let source = match args.seed {
        Some(seed) => UniformPieces::new(seed),
        None => UniformPieces::from_entropy(),
    };
    let mut game = GameState::with_source(source);

    let summary = run(&mut game, &script, args.max_ticks);

    info!(
        ticks = summary.ticks,
        simulated_ms = summary.elapsed_ms,
        pieces = summary.pieces_locked,
        score = game.score(),
        level = game.level(),
        lines = game.lines(),
        game_over = game.is_game_over(),
        "run finished"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&game.snapshot())
            .context("serializing final snapshot")?;
        println!("{json}");
    }

    Ok(())
}

/// Advance until game over or `max_ticks` gravity ticks have run.
fn run(game: &mut GameState, script: &[GameAction], max_ticks: u64) -> RunSummary {
    let mut summary = RunSummary::default();
    let mut actions = script.iter().cycle();

    while summary.ticks < max_ticks && !game.is_game_over() {
        if let Some(&action) = actions.next() {
            game.apply_action(action);
            summary.record(game.take_last_event());
        }

        summary.elapsed_ms += u64::from(game.tick_interval_ms());
        game.tick();
        summary.record(game.take_last_event());

        // One simulated frame per tick.
        game.decay_combo();
        summary.ticks += 1;
    }

    summary
}

fn parse_script(text: &str) -> Result<Vec<GameAction>> {
    let actions = text
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| GameAction::from_str(name).with_context(|| format!("unknown action {name:?}")))
        .collect::<Result<Vec<_>>>()?;

    if actions.is_empty() {
        bail!("action script {text:?} contains no actions");
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let actions = parse_script("moveLeft, rotate,HARDDROP").unwrap();
        assert_eq!(
            actions,
            vec![GameAction::MoveLeft, GameAction::Rotate, GameAction::HardDrop]
        );
    }

    #[test]
    fn test_parse_script_rejects_unknown_and_empty() {
        assert!(parse_script("moveLeft,teleport").is_err());
        assert!(parse_script(" , ").is_err());
    }

    #[test]
    fn test_run_stops_at_game_over() {
        let mut game = GameState::new(3);
        let summary = run(&mut game, &[GameAction::HardDrop], 10_000);

        assert!(game.is_game_over());
        assert!(summary.ticks < 10_000);
        assert!(summary.pieces_locked > 0);
        assert!(summary.elapsed_ms >= summary.ticks * 100);
    }

    #[test]
    fn test_run_respects_tick_budget() {
        let mut game = GameState::new(3);
        let summary = run(&mut game, &[], 5);

        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.elapsed_ms, 5 * 500);
    }
}
