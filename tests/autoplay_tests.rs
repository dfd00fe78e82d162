//! Headless self-play tests.

use trivia_board::autoplay::{play_game, AutoplayConfig, Autoplayer};
use trivia_board::core::{Category, EngineConfig, GameStatus, NewPlayer, ScriptedDice};
use trivia_board::rules::{CommandError, TurnEngine};

/// Test finished games always end with a four-wedge winner.
#[test]
fn test_winners_hold_every_wedge() {
    for seed in 0..20 {
        let config = AutoplayConfig::new().with_answer_accuracy(0.8).with_seed(seed);
        let summary = play_game(&["A", "B", "C"], &config).unwrap();
        let Some(winner) = summary.winner else {
            continue;
        };
        let held = summary
            .wedges
            .iter()
            .find(|(id, _)| *id == winner)
            .map(|(_, n)| *n);
        assert_eq!(held, Some(Category::ALL.len()), "seed {seed}");
        assert_eq!(summary.rolls, summary.correct_answers + summary.wrong_answers);
    }
}

/// Test a full table plays to completion.
#[test]
fn test_eight_players() {
    let names: Vec<String> = (0..8).map(|i| format!("P{i}")).collect();
    let config = AutoplayConfig::new().with_answer_accuracy(0.9).with_seed(8);
    let summary = play_game(&names, &config).unwrap();
    assert_eq!(summary.wedges.len(), 8);
    assert!(summary.finished());
}

/// Test different seeds give different games.
#[test]
fn test_seeds_differ() {
    let games: Vec<_> = (0..5)
        .map(|seed| play_game(&["A", "B"], &AutoplayConfig::new().with_seed(seed)).unwrap())
        .collect();
    assert!(games.windows(2).any(|w| w[0].rolls != w[1].rolls));
}

/// Test scripted sixes from spoke 0 win in five rolls.
#[test]
fn test_scripted_perfect_game() {
    let mut engine =
        TurnEngine::with_dice(EngineConfig::default(), ScriptedDice::new(vec![6], vec![0])).unwrap();
    engine.add_player(NewPlayer::new("Solo")).unwrap();
    engine.start_game().unwrap();

    let config = AutoplayConfig::new().with_answer_accuracy(1.0);
    let summary = Autoplayer::new(config).play(&mut engine).unwrap();

    assert_eq!(summary.rolls, 5);
    assert_eq!(summary.wedges_awarded, 4);
    assert_eq!(summary.winner_name.as_deref(), Some("Solo"));
    assert_eq!(engine.status(), GameStatus::GameOver);
}

/// Test a NaN accuracy plays as hopeless players instead of panicking.
#[test]
fn test_nan_accuracy_on_started_engine() {
    let mut engine = TurnEngine::new(EngineConfig::new().with_seed(2)).unwrap();
    engine.add_player(NewPlayer::new("A")).unwrap();
    engine.add_player(NewPlayer::new("B")).unwrap();
    engine.start_game().unwrap();

    let config = AutoplayConfig::new()
        .with_answer_accuracy(f64::NAN)
        .with_max_rolls(20);
    let summary = Autoplayer::new(config).play(&mut engine).unwrap();
    assert_eq!(summary.rolls, 20);
    assert_eq!(summary.correct_answers, 0);
}

/// Test the runner plays nothing on an engine still in setup.
#[test]
fn test_setup_engine_plays_nothing() {
    let mut engine = TurnEngine::new(EngineConfig::default()).unwrap();
    engine.add_player(NewPlayer::new("A")).unwrap();

    let summary = Autoplayer::new(AutoplayConfig::new()).play(&mut engine).unwrap();
    assert_eq!(summary.rolls, 0);
    assert!(!summary.finished());
    assert!(matches!(engine.roll_dice(), Err(CommandError::WrongStatus { .. })));
}
