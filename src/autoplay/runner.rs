//! Headless game runner.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Dice, EngineConfig, GameRng, GameStatus, NewPlayer, PlayerId};
use crate::rules::{AnswerOutcome, CommandError, TurnEngine};

/// Configuration for simulated games.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Chance that a simulated player answers correctly.
    pub answer_accuracy: f64,

    /// Maximum rolls per game (to cut off unlucky marathons).
    pub max_rolls: usize,

    /// Seed for dice and answers.
    pub seed: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            answer_accuracy: 0.6,
            max_rolls: 5_000,
            seed: 0,
        }
    }
}

impl AutoplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set answer accuracy.
    ///
    /// [`play_game`] rejects values outside `0.0..=1.0`; an [`Autoplayer`]
    /// clamps them when drawing, with NaN playing as `0.0`.
    #[must_use]
    pub fn with_answer_accuracy(mut self, accuracy: f64) -> Self {
        self.answer_accuracy = accuracy;
        self
    }

    #[must_use]
    pub fn with_max_rolls(mut self, max: usize) -> Self {
        self.max_rolls = max;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoplaySummary {
    pub seed: u64,
    pub winner: Option<PlayerId>,
    pub winner_name: Option<String>,
    pub rolls: usize,
    pub correct_answers: usize,
    pub wrong_answers: usize,
    pub wedges_awarded: usize,
    /// Wedges held by each player at the end, in turn order.
    pub wedges: Vec<(PlayerId, usize)>,
}

impl AutoplaySummary {
    /// Whether the game reached a winner before the roll cap.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.winner.is_some()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AutoplayError {
    #[error("answer accuracy must be within 0.0-1.0, found: {0}")]
    InvalidAccuracy(f64),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Plays games by rolling and answering at random.
pub struct Autoplayer {
    config: AutoplayConfig,
    answers: GameRng,
}

impl Autoplayer {
    pub fn new(config: AutoplayConfig) -> Self {
        let answers = GameRng::new(config.seed).for_context("answers");
        Self { config, answers }
    }

    /// Play `engine` until someone wins or the roll cap is reached.
    ///
    /// The engine must already be in the playing state.
    pub fn play<D: Dice>(
        &mut self,
        engine: &mut TurnEngine<D>,
    ) -> Result<AutoplaySummary, CommandError> {
        let mut summary = AutoplaySummary {
            seed: self.config.seed,
            winner: None,
            winner_name: None,
            rolls: 0,
            correct_answers: 0,
            wrong_answers: 0,
            wedges_awarded: 0,
            wedges: Vec::new(),
        };

        while summary.rolls < self.config.max_rolls && engine.status() == GameStatus::Playing {
            engine.roll_and_resolve()?;
            summary.rolls += 1;

            let correct = self.answers.gen_bool(self.config.answer_accuracy);
            match engine.answer_question(correct)? {
                AnswerOutcome::Won(_) => summary.correct_answers += 1,
                AnswerOutcome::WedgeAwarded(_) => {
                    summary.correct_answers += 1;
                    summary.wedges_awarded += 1;
                }
                AnswerOutcome::NoWedge => summary.correct_answers += 1,
                AnswerOutcome::Reverted { .. } => summary.wrong_answers += 1,
            }
        }

        if let Some(winner) = engine.winner() {
            summary.winner = Some(winner.id);
            summary.winner_name = Some(winner.name.clone());
        } else {
            log::warn!(
                "seed {} hit the {}-roll cap without a winner",
                self.config.seed,
                self.config.max_rolls
            );
        }
        summary.wedges = engine.players().map(|p| (p.id, p.wedges.len())).collect();
        Ok(summary)
    }
}

/// Seat `names`, start a game seeded from `config.seed` and play it out.
pub fn play_game<S: AsRef<str>>(
    names: &[S],
    config: &AutoplayConfig,
) -> Result<AutoplaySummary, AutoplayError> {
    if !(0.0..=1.0).contains(&config.answer_accuracy) {
        return Err(AutoplayError::InvalidAccuracy(config.answer_accuracy));
    }
    let mut engine = TurnEngine::new(EngineConfig::new().with_seed(config.seed))?;
    for name in names {
        engine.add_player(NewPlayer::new(name.as_ref()))?;
    }
    engine.start_game()?;
    Ok(Autoplayer::new(config.clone()).play(&mut engine)?)
}
