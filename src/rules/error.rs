//! Command rejections.
//!
//! A rejected command leaves the game exactly as it was. The error says why,
//! so a front-end can disable the control or a test can assert on it.

use crate::board::{BoardError, SpaceId};
use crate::core::{ConfigError, GameStatus, PlayerId};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("command not allowed now (expected: {expected}, found: {found})")]
    WrongStatus {
        expected: GameStatus,
        found: GameStatus,
    },
    #[error("table is full ({max} players)")]
    TableFull { max: usize },
    #[error("player name is empty")]
    EmptyName,
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),
    #[error("not enough players (expected at least {required}, found: {found})")]
    NotEnoughPlayers { required: usize, found: usize },
    #[error("a token is already moving")]
    AlreadyMoving,
    #[error("a question is waiting for an answer")]
    QuestionPending,
    #[error("no question is waiting for an answer")]
    NoPendingQuestion,
    #[error("roll is no longer in progress")]
    StaleRoll,
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A prepared state that cannot be resumed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot was taken mid-move")]
    Moving,
    #[error("current player index {index} out of range for {players} players")]
    CurrentPlayerOutOfRange { index: usize, players: usize },
    #[error("duplicate player id {0}")]
    DuplicatePlayer(PlayerId),
    #[error("{player} stands on unknown space {space}")]
    UnknownPosition { player: PlayerId, space: SpaceId },
    #[error("winner {0} is not seated")]
    UnknownWinner(PlayerId),
    #[error("game over without a winner")]
    MissingWinner,
    #[error("pending question outside play (found: {0})")]
    QuestionOutsidePlay(GameStatus),
    #[error("pending question refers to unknown space {0}")]
    UnknownQuestionSpace(SpaceId),
    #[error("pending question landed on {landed_on}, current player stands on {position:?}")]
    QuestionNotAtCurrentPlayer {
        landed_on: SpaceId,
        position: Option<SpaceId>,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
