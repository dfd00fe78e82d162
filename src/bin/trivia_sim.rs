//! Headless trivia board simulator.
//!
//! Plays batches of seeded games with simulated players and prints a
//! summary per game plus win counts. `--watch` plays a single game through
//! the paced stepper and prints every event as it happens.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use trivia_board::autoplay::{play_game, AutoplayConfig, AutoplaySummary};
use trivia_board::core::{EngineConfig, GameRng, GameStatus, NewPlayer, MAX_PLAYERS};
use trivia_board::pacing::{share, start_paced_roll};
use trivia_board::rules::TurnEngine;

#[derive(Debug, Parser)]
#[command(name = "trivia-sim", version)]
#[command(about = "Simulate four-category trivia board games")]
struct Args {
    /// Player names (comma-separated, in turn order)
    #[arg(long, default_value = "Ana,Bo")]
    players: String,

    /// Seed of the first game; later games use consecutive seeds
    #[arg(long, default_value_t = 1337)]
    seed: u64,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u64,

    /// Chance that a simulated player answers correctly
    #[arg(long, default_value_t = 0.6)]
    accuracy: f64,

    /// Roll cap per game
    #[arg(long, default_value_t = 5_000)]
    max_rolls: usize,

    /// Play one paced game and print each event
    #[arg(long)]
    watch: bool,

    /// Milliseconds between steps in watch mode
    #[arg(long, default_value_t = 300)]
    step_ms: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let names = split_names(&args.players);
    if names.is_empty() || names.len() > MAX_PLAYERS {
        bail!("expected 1-{MAX_PLAYERS} player names, got {}", names.len());
    }
    if !(0.0..=1.0).contains(&args.accuracy) {
        bail!("accuracy must be within 0.0-1.0, got {}", args.accuracy);
    }

    let config = AutoplayConfig::new()
        .with_answer_accuracy(args.accuracy)
        .with_max_rolls(args.max_rolls)
        .with_seed(args.seed);

    if args.watch {
        return watch(&names, &config, Duration::from_millis(args.step_ms)).await;
    }

    let mut summaries = Vec::new();
    for offset in 0..args.games {
        let seed = args.seed.wrapping_add(offset);
        let summary = play_game(&names, &config.clone().with_seed(seed))
            .with_context(|| format!("game with seed {seed} failed"))?;
        print_summary(&summary);
        summaries.push(summary);
    }
    print_totals(&names, &summaries);
    Ok(())
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn print_summary(summary: &AutoplaySummary) {
    let result = summary.winner_name.as_deref().unwrap_or("no winner");
    let wedges: Vec<String> = summary
        .wedges
        .iter()
        .map(|(id, n)| format!("{id}: {n}"))
        .collect();
    println!(
        "seed {:>6}  {:<12} rolls {:>5}  right {:>4}  wrong {:>4}  [{}]",
        summary.seed,
        result,
        summary.rolls,
        summary.correct_answers,
        summary.wrong_answers,
        wedges.join(", ")
    );
}

fn print_totals(names: &[String], summaries: &[AutoplaySummary]) {
    if summaries.is_empty() {
        return;
    }
    println!();
    for name in names {
        let wins = summaries
            .iter()
            .filter(|s| s.winner_name.as_deref() == Some(name.as_str()))
            .count();
        println!("{name:<12} {wins} wins");
    }
    let unfinished = summaries.iter().filter(|s| !s.finished()).count();
    let rolls: usize = summaries.iter().map(|s| s.rolls).sum();
    println!(
        "unfinished {unfinished}, mean rolls {:.1}",
        rolls as f64 / summaries.len() as f64
    );
}

async fn watch(names: &[String], config: &AutoplayConfig, step: Duration) -> Result<()> {
    let engine_config = EngineConfig::new()
        .with_seed(config.seed)
        .with_step_interval(step);
    let mut engine = TurnEngine::new(engine_config)?;
    for name in names {
        engine.add_player(NewPlayer::new(name.as_str()))?;
    }
    engine.start_game()?;

    let engine = share(engine);
    let mut answers = GameRng::new(config.seed).for_context("answers");
    let mut printed = 0;

    for _ in 0..config.max_rolls {
        let paced = start_paced_roll(&engine).await?;
        paced.handle.await.context("paced roll task panicked")??;

        let mut guard = engine.lock().await;
        guard.answer_question(answers.gen_bool(config.answer_accuracy))?;
        for event in guard.state().history.iter().skip(printed) {
            println!("{event}");
        }
        printed = guard.state().history.len();
        if guard.status() == GameStatus::GameOver {
            return Ok(());
        }
    }
    println!("no winner after {} rolls", config.max_rolls);
    Ok(())
}
