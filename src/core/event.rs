//! Game history records.
//!
//! The engine appends a [`GameEvent`] for every accepted command and every
//! token step. A front-end can replay the history to animate moves or show
//! a log; tests use it to assert on what happened, not just the end state.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::player::PlayerId;
use crate::board::SpaceId;

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerAdded { player: PlayerId },
    PlayerRemoved { player: PlayerId },
    GameStarted { players: usize },
    DiceRolled { player: PlayerId, roll: u8 },
    Moved { player: PlayerId, from: SpaceId, to: SpaceId },
    QuestionOpened { player: PlayerId, category: Category, final_center: bool },
    Answered { player: PlayerId, correct: bool },
    WedgeAwarded { player: PlayerId, category: Category },
    TurnPassed { from: PlayerId, to: PlayerId },
    GameWon { player: PlayerId },
}

impl GameEvent {
    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            GameEvent::GameStarted { .. } => None,
            GameEvent::PlayerAdded { player }
            | GameEvent::PlayerRemoved { player }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::QuestionOpened { player, .. }
            | GameEvent::Answered { player, .. }
            | GameEvent::WedgeAwarded { player, .. }
            | GameEvent::GameWon { player } => Some(player),
            GameEvent::TurnPassed { from, .. } => Some(from),
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::PlayerAdded { player } => write!(f, "{player} joined"),
            GameEvent::PlayerRemoved { player } => write!(f, "{player} left"),
            GameEvent::GameStarted { players } => write!(f, "game started with {players} players"),
            GameEvent::DiceRolled { player, roll } => write!(f, "{player} rolled {roll}"),
            GameEvent::Moved { player, from, to } => write!(f, "{player} moved {from} -> {to}"),
            GameEvent::QuestionOpened {
                player,
                category,
                final_center,
            } => {
                write!(f, "{player} draws a {} question", category.display_name())?;
                if *final_center {
                    write!(f, " to win")?;
                }
                Ok(())
            }
            GameEvent::Answered { player, correct } => {
                let verdict = if *correct { "correctly" } else { "wrongly" };
                write!(f, "{player} answered {verdict}")
            }
            GameEvent::WedgeAwarded { player, category } => {
                write!(f, "{player} earned the {category} wedge")
            }
            GameEvent::TurnPassed { from, to } => write!(f, "turn passes from {from} to {to}"),
            GameEvent::GameWon { player } => write!(f, "{player} wins"),
        }
    }
}
