//! Turn engine integration tests.
//!
//! Dice are scripted throughout, so every landing below is exact.

use trivia_board::board::{BoardGraph, SpaceId};
use trivia_board::core::{
    Category, EngineConfig, GameEvent, GameState, GameStatus, NewPlayer, Player, PlayerId,
    PlayerToken, ScriptedDice, WedgeSet,
};
use trivia_board::rules::{AnswerOutcome, CommandError, StepOutcome, StopReason, TurnEngine};

fn started(names: &[&str], dice: ScriptedDice) -> TurnEngine<ScriptedDice> {
    let mut engine = TurnEngine::with_dice(EngineConfig::default(), dice).unwrap();
    for name in names {
        engine.add_player(NewPlayer::new(*name)).unwrap();
    }
    engine.start_game().unwrap();
    engine
}

/// One player mid-game at `position` holding `wedges`.
fn placed(position: SpaceId, wedges: &[Category], dice: ScriptedDice) -> TurnEngine<ScriptedDice> {
    let mut player = Player::new(PlayerId::new(1), "A", PlayerToken::for_seat(0));
    player.position = position;
    player.wedges = wedges.iter().copied().collect::<WedgeSet>();

    let mut state = GameState::new();
    state.players.push_back(player);
    state.players.push_back(Player::new(PlayerId::new(2), "B", PlayerToken::for_seat(1)));
    state.status = GameStatus::Playing;
    state.current_player_index = Some(0);
    TurnEngine::from_state(EngineConfig::default(), dice, state).unwrap()
}

fn moves_since_last_roll(engine: &TurnEngine<ScriptedDice>) -> usize {
    engine
        .state()
        .history
        .iter()
        .rev()
        .take_while(|e| !matches!(e, GameEvent::DiceRolled { .. }))
        .filter(|e| matches!(e, GameEvent::Moved { .. }))
        .count()
}

// =============================================================================
// Reference Scenarios
// =============================================================================

/// Test a fresh roll of 3 from the center ends two steps up a spoke.
#[test]
fn test_fresh_roll_of_three() {
    for spoke in 0..4 {
        let mut engine = started(&["A", "B"], ScriptedDice::new(vec![3], vec![spoke]));
        let question = engine.roll_and_resolve().unwrap();

        let expected = SpaceId::Spoke { spoke, step: 2 };
        assert_eq!(question.landed_on, expected);
        assert!(!question.is_final_center);
        assert_eq!(question.start_position, SpaceId::Center);
        assert_eq!(
            question.category,
            BoardGraph::standard().space(expected).unwrap().category
        );
        assert_eq!(engine.current_player().unwrap().name, "A");
        assert_eq!(engine.current_player().unwrap().position, expected);
        assert_eq!(engine.dice_roll(), Some(3));
        assert!(!engine.is_moving());
    }
}

/// Test a full wedge set on spoke-0-0 reaches the center in one step
/// whatever the roll.
#[test]
fn test_final_approach_stops_at_center() {
    for roll in 1..=6 {
        let mut engine = placed(
            SpaceId::Spoke { spoke: 0, step: 0 },
            &Category::ALL,
            ScriptedDice::constant(roll),
        );
        let question = engine.roll_and_resolve().unwrap();

        assert_eq!(question.landed_on, SpaceId::Center);
        assert!(question.is_final_center);
        assert_eq!(engine.dice_roll(), Some(roll));
        assert_eq!(moves_since_last_roll(&engine), 1);
    }
}

/// Test removing an unknown id leaves the table as it was.
#[test]
fn test_remove_unknown_player() {
    let mut engine = TurnEngine::with_dice(EngineConfig::default(), ScriptedDice::default()).unwrap();
    engine.add_player(NewPlayer::new("A")).unwrap();
    engine.add_player(NewPlayer::new("B")).unwrap();
    let before = engine.state().players.clone();

    assert_eq!(
        engine.remove_player(PlayerId::new(99)).map(|p| p.id),
        Err(CommandError::PlayerNotFound(PlayerId::new(99)))
    );
    assert_eq!(engine.state().players, before);
}

/// Test a reset mid-roll returns to setup and refuses the remaining steps.
#[test]
fn test_reset_mid_roll() {
    let mut engine = started(&["A", "B"], ScriptedDice::new(vec![5], vec![2]));
    let ticket = engine.roll_dice().unwrap();
    engine.advance(&ticket).unwrap();
    assert!(engine.is_moving());

    engine.reset_game();
    assert_eq!(engine.status(), GameStatus::Setup);
    assert_eq!(engine.advance(&ticket), Err(CommandError::StaleRoll));
    assert_eq!(engine.resolve(&ticket), Err(CommandError::StaleRoll));
    assert_eq!(engine.state(), &GameState::new());
}

// =============================================================================
// Stop Conditions
// =============================================================================

/// Test an uncollected wedge halts the roll with pips to spare.
#[test]
fn test_wedge_halts_early() {
    let mut engine = placed(
        SpaceId::Spoke { spoke: 2, step: 3 },
        &[],
        ScriptedDice::constant(5),
    );
    let ticket = engine.roll_dice().unwrap();

    assert!(matches!(engine.advance(&ticket), Ok(StepOutcome::Moved { .. })));
    let StepOutcome::Landed { question, reason } = engine.advance(&ticket).unwrap() else {
        panic!("expected the wedge to stop the roll");
    };
    assert_eq!(reason, StopReason::UncollectedWedge);
    assert_eq!(question.landed_on, SpaceId::Ring(12));
    assert_eq!(question.category, Category::Red);
    assert!(!question.is_final_center);
    assert_eq!(engine.dice_roll(), Some(5));
}

/// Test a wedge already held is walked over.
#[test]
fn test_held_wedge_passed() {
    let mut engine = placed(
        SpaceId::Spoke { spoke: 0, step: 4 },
        &[Category::Blue],
        ScriptedDice::constant(2),
    );
    let question = engine.roll_and_resolve().unwrap();
    assert_eq!(question.landed_on, SpaceId::Ring(1));
    assert_eq!(question.category, Category::Red);
}

/// Test landing exactly on a held wedge asks a question with nothing to win.
#[test]
fn test_exact_landing_on_held_wedge() {
    let mut engine = placed(
        SpaceId::Spoke { spoke: 0, step: 3 },
        &[Category::Blue],
        ScriptedDice::constant(2),
    );
    let question = engine.roll_and_resolve().unwrap();
    assert_eq!(question.landed_on, SpaceId::Ring(0));

    assert_eq!(engine.answer_question(true), Ok(AnswerOutcome::NoWedge));
    assert_eq!(engine.current_player().unwrap().wedges.len(), 1);
}

/// Test a full wedge set turns inward at the next entrance.
#[test]
fn test_heading_center_turns_in() {
    let mut engine = placed(SpaceId::Ring(3), &Category::ALL, ScriptedDice::constant(6));
    let question = engine.roll_and_resolve().unwrap();

    assert_eq!(question.landed_on, SpaceId::Spoke { spoke: 1, step: 2 });
    assert_eq!(question.category, Category::Red);
    assert!(!question.is_final_center);
}

/// Test wedges held do not stop a player heading home.
#[test]
fn test_heading_center_ignores_wedges() {
    let mut engine = placed(SpaceId::Ring(3), &Category::ALL, ScriptedDice::constant(3));
    let question = engine.roll_and_resolve().unwrap();
    assert_eq!(question.landed_on, SpaceId::Ring(6));
    assert!(!question.is_final_center);
}

// =============================================================================
// Answers
// =============================================================================

/// Test a wrong answer keeps the wedges, reverts and wraps the turn.
#[test]
fn test_wrong_answer_wraps_turn() {
    let mut engine = started(&["A", "B", "C"], ScriptedDice::new(vec![2], vec![1]));

    for expected_next in [1, 2, 0] {
        engine.roll_and_resolve().unwrap();
        engine.answer_question(false).unwrap();
        assert_eq!(engine.current_player_index(), Some(expected_next));
    }
    assert!(engine.players().all(|p| p.position == SpaceId::Center));
}

/// Test a wrong answer never costs a wedge.
#[test]
fn test_wrong_answer_keeps_wedges() {
    let mut engine = placed(
        SpaceId::Ring(1),
        &[Category::Blue, Category::Green],
        ScriptedDice::constant(4),
    );
    engine.roll_and_resolve().unwrap();
    let outcome = engine.answer_question(false).unwrap();

    assert_eq!(
        outcome,
        AnswerOutcome::Reverted { to: SpaceId::Ring(1), next_player: PlayerId::new(2) }
    );
    let a = engine.player(PlayerId::new(1)).unwrap();
    assert_eq!(a.position, SpaceId::Ring(1));
    assert!(a.wedges.contains(Category::Blue));
    assert!(a.wedges.contains(Category::Green));
    assert_eq!(engine.current_question(), None);
    assert_eq!(engine.dice_roll(), None);
}

/// Test collecting every wedge and winning without missing a question.
#[test]
fn test_full_game_single_player() {
    let mut engine = started(&["Solo"], ScriptedDice::new(vec![6], vec![0]));

    let expected = [
        (SpaceId::Ring(0), Category::Blue),
        (SpaceId::Ring(6), Category::Green),
        (SpaceId::Ring(12), Category::Red),
        (SpaceId::Ring(18), Category::Yellow),
    ];
    for (space, category) in expected {
        let question = engine.roll_and_resolve().unwrap();
        assert_eq!(question.landed_on, space);
        assert_eq!(engine.answer_question(true), Ok(AnswerOutcome::WedgeAwarded(category)));
    }

    let solo = engine.current_player().unwrap();
    assert!(solo.is_heading_center());
    let id = solo.id;

    // ring-18 -> spoke-3-4 .. spoke-3-0 -> center is six steps
    let question = engine.roll_and_resolve().unwrap();
    assert!(question.is_final_center);
    assert_eq!(engine.answer_question(true), Ok(AnswerOutcome::Won(id)));
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(engine.winner().map(|p| p.id), Some(id));
}

/// Test a wrong final answer sends the player back out to try again.
#[test]
fn test_missed_final_question() {
    let mut engine = placed(
        SpaceId::Spoke { spoke: 2, step: 0 },
        &Category::ALL,
        ScriptedDice::constant(1),
    );
    engine.roll_and_resolve().unwrap();
    engine.answer_question(false).unwrap();

    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.winner().map(|p| p.id), None);
    assert_eq!(
        engine.player(PlayerId::new(1)).unwrap().position,
        SpaceId::Spoke { spoke: 2, step: 0 }
    );
}

/// Test answering with nothing pending changes nothing.
#[test]
fn test_answer_without_question() {
    let mut engine = started(&["A", "B"], ScriptedDice::default());
    let before = engine.snapshot();
    assert_eq!(engine.answer_question(true), Err(CommandError::NoPendingQuestion));
    assert_eq!(engine.state(), &before);
}

// =============================================================================
// Setup and Lifecycle
// =============================================================================

/// Test eight seats with palette tokens, and no ninth.
#[test]
fn test_table_capacity() {
    let mut engine = TurnEngine::with_dice(EngineConfig::default(), ScriptedDice::default()).unwrap();
    for seat in 0..8 {
        engine.add_player(NewPlayer::new(format!("P{seat}"))).unwrap();
    }
    assert_eq!(
        engine.add_player(NewPlayer::new("P8")),
        Err(CommandError::TableFull { max: 8 })
    );

    let tokens: Vec<&str> = engine.players().map(|p| p.token.as_str()).collect();
    assert_eq!(tokens, PlayerToken::PALETTE.to_vec());
}

/// Test gameover only leaves through reset.
#[test]
fn test_reset_after_win() {
    let mut engine = placed(
        SpaceId::Spoke { spoke: 1, step: 0 },
        &Category::ALL,
        ScriptedDice::constant(4),
    );
    engine.roll_and_resolve().unwrap();
    engine.answer_question(true).unwrap();
    assert_eq!(engine.status(), GameStatus::GameOver);

    assert!(matches!(engine.roll_dice(), Err(CommandError::WrongStatus { .. })));
    assert!(matches!(
        engine.add_player(NewPlayer::new("C")),
        Err(CommandError::WrongStatus { .. })
    ));

    engine.reset_game();
    assert_eq!(engine.status(), GameStatus::Setup);
    assert_eq!(engine.winner().map(|p| p.id), None);
    engine.add_player(NewPlayer::new("C")).unwrap();
    engine.start_game().unwrap();
    assert_eq!(engine.status(), GameStatus::Playing);
}

/// Test a snapshot can resume into an equivalent engine.
#[test]
fn test_resume_from_snapshot() {
    let mut engine = started(&["A", "B"], ScriptedDice::new(vec![4, 2], vec![3]));
    engine.roll_and_resolve().unwrap();
    engine.answer_question(false).unwrap();
    let snapshot = engine.snapshot();

    let mut resumed =
        TurnEngine::from_state(EngineConfig::default(), ScriptedDice::new(vec![2], vec![3]), snapshot)
            .unwrap();
    assert_eq!(resumed.current_player().unwrap().name, "B");

    let expected = engine.roll_and_resolve().unwrap();
    assert_eq!(resumed.roll_and_resolve().unwrap(), expected);
}
