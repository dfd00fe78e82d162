//! Turn engine: the command surface over a single game.

use crate::board::{BoardGraph, SpaceId};
use crate::core::{
    ConfigError, Dice, EngineConfig, GameEvent, GameRng, GameState, GameStatus, NewPlayer,
    PendingQuestion, Player, PlayerId, PlayerToken,
};
use crate::movement::next_space;

use super::error::{CommandError, SnapshotError};
use super::roll::{ActiveRoll, AnswerOutcome, RollTicket, StepOutcome, StopReason};

/// Owns the game state and applies commands to it.
///
/// All mutation goes through the command methods; each either succeeds or
/// returns a [`CommandError`] and leaves the state untouched. Randomness is
/// drawn from the `D` dice source, so tests can script every roll.
///
/// ```
/// use trivia_board::core::{EngineConfig, GameStatus, NewPlayer};
/// use trivia_board::rules::TurnEngine;
///
/// let mut engine = TurnEngine::new(EngineConfig::new().with_seed(3)).unwrap();
/// engine.add_player(NewPlayer::new("Ana")).unwrap();
/// engine.add_player(NewPlayer::new("Bo")).unwrap();
/// engine.start_game().unwrap();
///
/// let question = engine.roll_and_resolve().unwrap();
/// assert_eq!(engine.current_question(), Some(&question));
/// assert_eq!(engine.status(), GameStatus::Playing);
/// ```
pub struct TurnEngine<D: Dice = GameRng> {
    config: EngineConfig,
    board: &'static BoardGraph,
    dice: D,
    state: GameState,
    active: Option<ActiveRoll>,
    /// Bumped by every roll, game start and reset.
    generation: u64,
    next_player_id: u32,
}

impl TurnEngine<GameRng> {
    /// Engine with ChaCha dice seeded from `config.seed`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let dice = GameRng::new(config.seed);
        Self::with_dice(config, dice)
    }
}

impl<D: Dice> TurnEngine<D> {
    /// Engine drawing randomness from `dice`.
    pub fn with_dice(config: EngineConfig, dice: D) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            board: BoardGraph::standard(),
            dice,
            state: GameState::new(),
            active: None,
            generation: 0,
            next_player_id: 1,
        })
    }

    /// Resume from a prepared or previously captured state.
    ///
    /// The snapshot must not be mid-move. Players keep their ids; new players
    /// get ids above the highest one present.
    pub fn from_state(
        config: EngineConfig,
        dice: D,
        state: GameState,
    ) -> Result<Self, SnapshotError> {
        let mut engine = Self::with_dice(config, dice)?;
        Self::check_snapshot(engine.board, &state)?;
        engine.next_player_id = state
            .players
            .iter()
            .map(|p| p.id.raw() + 1)
            .max()
            .unwrap_or(1);
        engine.state = state;
        Ok(engine)
    }

    fn check_snapshot(board: &BoardGraph, state: &GameState) -> Result<(), SnapshotError> {
        if state.is_moving {
            return Err(SnapshotError::Moving);
        }
        if let Some(index) = state.current_player_index {
            if index >= state.players.len() {
                return Err(SnapshotError::CurrentPlayerOutOfRange {
                    index,
                    players: state.players.len(),
                });
            }
        }
        for (i, player) in state.players.iter().enumerate() {
            if state.players.iter().skip(i + 1).any(|p| p.id == player.id) {
                return Err(SnapshotError::DuplicatePlayer(player.id));
            }
            if board.get(player.position).is_none() {
                return Err(SnapshotError::UnknownPosition {
                    player: player.id,
                    space: player.position,
                });
            }
        }
        if let Some(question) = &state.current_question {
            if state.status != GameStatus::Playing {
                return Err(SnapshotError::QuestionOutsidePlay(state.status));
            }
            for space in [question.start_position, question.landed_on] {
                if board.get(space).is_none() {
                    return Err(SnapshotError::UnknownQuestionSpace(space));
                }
            }
            let position = state.current_player().map(|p| p.position);
            if position != Some(question.landed_on) {
                return Err(SnapshotError::QuestionNotAtCurrentPlayer {
                    landed_on: question.landed_on,
                    position,
                });
            }
        }
        match (state.status, state.winner) {
            (GameStatus::GameOver, None) => Err(SnapshotError::MissingWinner),
            (_, Some(winner)) if state.player(winner).is_none() => {
                Err(SnapshotError::UnknownWinner(winner))
            }
            _ => Ok(()),
        }
    }

    // === Queries ===

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state. O(1) thanks to persistent vectors.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.state.players.iter()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }

    #[must_use]
    pub fn current_player_index(&self) -> Option<usize> {
        self.state.current_player_index
    }

    #[must_use]
    pub fn dice_roll(&self) -> Option<u8> {
        self.state.dice_roll
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&PendingQuestion> {
        self.state.current_question.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.state.winner_player()
    }

    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.state.is_moving
    }

    #[must_use]
    pub fn board(&self) -> &'static BoardGraph {
        self.board
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The dice source, e.g. to queue more scripted rolls.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    // === Setup ===

    /// Seat a player at the end of the turn order.
    pub fn add_player(&mut self, new: NewPlayer) -> Result<PlayerId, CommandError> {
        self.require_status(GameStatus::Setup)?;
        let seated = self.state.players.len();
        if seated >= self.config.max_players {
            return reject(CommandError::TableFull {
                max: self.config.max_players,
            });
        }
        let name = new.name.trim();
        if name.is_empty() {
            return reject(CommandError::EmptyName);
        }

        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        let token = new.token.unwrap_or_else(|| PlayerToken::for_seat(seated));
        self.state.players.push_back(Player::new(id, name, token));
        if self.state.current_player_index.is_none() {
            self.state.current_player_index = Some(0);
        }
        self.state.record(GameEvent::PlayerAdded { player: id });
        log::debug!("{id} seated as {name:?}");
        Ok(id)
    }

    /// Remove a player during setup.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, CommandError> {
        self.require_status(GameStatus::Setup)?;
        let Some(seat) = self.state.seat_of(id) else {
            return reject(CommandError::PlayerNotFound(id));
        };

        let player = self.state.players.remove(seat);
        self.state.current_player_index = if self.state.players.is_empty() {
            None
        } else {
            Some(0)
        };
        self.state.record(GameEvent::PlayerRemoved { player: id });
        log::debug!("{id} left the table");
        Ok(player)
    }

    /// Begin play with the first seated player.
    pub fn start_game(&mut self) -> Result<(), CommandError> {
        self.require_status(GameStatus::Setup)?;
        let seated = self.state.players.len();
        if seated < self.config.min_players {
            return reject(CommandError::NotEnoughPlayers {
                required: self.config.min_players,
                found: seated,
            });
        }

        self.generation += 1;
        self.active = None;
        self.state.status = GameStatus::Playing;
        self.state.current_player_index = Some(0);
        self.state.dice_roll = None;
        self.state.current_question = None;
        self.state.is_moving = false;
        self.state.record(GameEvent::GameStarted { players: seated });
        log::info!("game started with {seated} players");
        Ok(())
    }

    // === Turn ===

    /// Roll for the current player and begin stepping.
    ///
    /// The returned ticket drives [`advance`](Self::advance). Refused while a
    /// token is moving or a question is pending.
    pub fn roll_dice(&mut self) -> Result<RollTicket, CommandError> {
        self.require_status(GameStatus::Playing)?;
        if self.state.is_moving {
            return reject(CommandError::AlreadyMoving);
        }
        if self.state.current_question.is_some() {
            return reject(CommandError::QuestionPending);
        }
        let Some((seat, player)) = self.current_seat() else {
            return reject(CommandError::NotEnoughPlayers {
                required: 1,
                found: 0,
            });
        };
        let (id, start_position, wedges) = (player.id, player.position, player.wedges.clone());
        // A token off the board could never finish its move
        self.board.space(start_position)?;

        let roll = self.dice.roll_die();
        self.generation += 1;
        let ticket = RollTicket::new(self.generation, roll, id);
        self.active = Some(ActiveRoll {
            ticket,
            seat,
            start_position,
            steps_taken: 0,
            wedges,
        });
        self.state.dice_roll = Some(roll);
        self.state.is_moving = true;
        self.state.record(GameEvent::DiceRolled { player: id, roll });
        log::debug!("{id} rolled {roll} from {start_position}");
        Ok(ticket)
    }

    /// Apply one step of the roll identified by `ticket`.
    ///
    /// Refused with [`CommandError::StaleRoll`] once the roll has landed or
    /// the game has been reset or restarted since the ticket was issued.
    pub fn advance(&mut self, ticket: &RollTicket) -> Result<StepOutcome, CommandError> {
        let active = match &self.active {
            Some(active) if active.ticket == *ticket && ticket.generation == self.generation => {
                active
            }
            _ => return reject(CommandError::StaleRoll),
        };
        let seat = active.seat;
        let heading = active.heading();
        let from = self.state.players[seat].position;
        let to = next_space(self.board, from, heading, &mut self.dice)?;
        let space = *self.board.space(to)?;

        let Some(active) = self.active.as_mut() else {
            return reject(CommandError::StaleRoll);
        };
        active.steps_taken += 1;
        let steps_taken = active.steps_taken;
        let reason = active.stop_reason(&space);
        let start_position = active.start_position;

        let player = ticket.player();
        self.state.players[seat].position = to;
        self.state.record(GameEvent::Moved { player, from, to });

        let Some(reason) = reason else {
            return Ok(StepOutcome::Moved { to, steps_taken });
        };

        let question = PendingQuestion {
            category: space.category,
            is_final_center: reason == StopReason::FinalCenter,
            start_position,
            landed_on: to,
        };
        self.active = None;
        self.state.is_moving = false;
        self.state.current_question = Some(question);
        self.state.record(GameEvent::QuestionOpened {
            player,
            category: question.category,
            final_center: question.is_final_center,
        });
        log::debug!("{player} landed on {to} after {steps_taken} steps ({reason:?})");
        Ok(StepOutcome::Landed { question, reason })
    }

    /// Step the roll out to completion.
    pub fn resolve(&mut self, ticket: &RollTicket) -> Result<PendingQuestion, CommandError> {
        loop {
            if let StepOutcome::Landed { question, .. } = self.advance(ticket)? {
                return Ok(question);
            }
        }
    }

    /// Roll and step out the whole move in one call.
    pub fn roll_and_resolve(&mut self) -> Result<PendingQuestion, CommandError> {
        let ticket = self.roll_dice()?;
        self.resolve(&ticket)
    }

    /// Settle the pending question.
    ///
    /// A correct answer keeps the turn; a wrong one sends the token back to
    /// where the roll started and passes the turn on.
    pub fn answer_question(&mut self, correct: bool) -> Result<AnswerOutcome, CommandError> {
        let Some(question) = self.state.current_question else {
            return reject(CommandError::NoPendingQuestion);
        };
        let Some((seat, player)) = self.current_seat() else {
            return reject(CommandError::NoPendingQuestion);
        };
        let id = player.id;
        let landed = *self.board.space(player.position)?;

        self.state.record(GameEvent::Answered {
            player: id,
            correct,
        });

        let outcome = if correct && question.is_final_center {
            self.state.status = GameStatus::GameOver;
            self.state.winner = Some(id);
            self.state.record(GameEvent::GameWon { player: id });
            log::info!("{id} wins");
            AnswerOutcome::Won(id)
        } else if correct {
            let awarded = landed.is_wedge && self.state.players[seat].wedges.insert(landed.category);
            if awarded {
                self.state.record(GameEvent::WedgeAwarded {
                    player: id,
                    category: landed.category,
                });
                log::debug!("{id} earned the {} wedge", landed.category.tag());
                AnswerOutcome::WedgeAwarded(landed.category)
            } else {
                AnswerOutcome::NoWedge
            }
        } else {
            let next_seat = (seat + 1) % self.state.players.len();
            let next_player = self.state.players[next_seat].id;
            self.state.players[seat].position = question.start_position;
            self.state.current_player_index = Some(next_seat);
            self.state.record(GameEvent::TurnPassed {
                from: id,
                to: next_player,
            });
            log::debug!("{id} missed; back to {}, {next_player} to play", question.start_position);
            AnswerOutcome::Reverted {
                to: question.start_position,
                next_player,
            }
        };

        self.state.current_question = None;
        self.state.dice_roll = None;
        Ok(outcome)
    }

    /// Drop everything and return to an empty setup table.
    ///
    /// Any roll still being stepped out is cancelled.
    pub fn reset_game(&mut self) {
        self.generation += 1;
        self.active = None;
        self.state = GameState::new();
        log::info!("game reset");
    }

    // === Helpers ===

    fn require_status(&self, expected: GameStatus) -> Result<(), CommandError> {
        let found = self.state.status;
        if found == expected {
            Ok(())
        } else {
            reject(CommandError::WrongStatus { expected, found })
        }
    }

    fn current_seat(&self) -> Option<(usize, &Player)> {
        let seat = self.state.current_player_index?;
        self.state.players.get(seat).map(|p| (seat, p))
    }

    /// Where the current player stands, if anyone is seated.
    #[must_use]
    pub fn current_position(&self) -> Option<SpaceId> {
        self.current_player().map(|p| p.position)
    }
}

fn reject<T>(error: CommandError) -> Result<T, CommandError> {
    log::debug!("command rejected: {error}");
    Err(error)
}
