//! Game state snapshot.
//!
//! ## GameState
//!
//! Everything a front-end needs to render the table:
//! - Status (setup, playing, game over)
//! - Players in turn order, with positions and wedges
//! - Whose turn it is, the last roll, the pending question
//! - Winner and whether a token is mid-move
//! - Event history
//!
//! Uses `im` persistent vectors so [`GameState`] clones in O(1); the engine
//! hands out snapshots freely.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::event::GameEvent;
use super::player::{Player, PlayerId};
use crate::board::SpaceId;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Seating players.
    #[default]
    Setup,
    /// Turns are being taken.
    Playing,
    /// Someone won. Only a reset leaves this state.
    GameOver,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::Setup => "setup",
            GameStatus::Playing => "playing",
            GameStatus::GameOver => "gameover",
        };
        f.write_str(name)
    }
}

/// Question waiting for an answer after a move lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingQuestion {
    /// Category of the landed space.
    pub category: Category,
    /// Asked on the center with all wedges held; a correct answer wins.
    pub is_final_center: bool,
    /// Where the token stood before the roll. Restored on a wrong answer.
    pub start_position: SpaceId,
    /// Where the token landed.
    pub landed_on: SpaceId,
}

/// Authoritative session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,

    /// Seated players; turn order is list order.
    pub players: Vector<Player>,

    /// Index into `players` of whose turn it is. `None` when nobody is seated.
    pub current_player_index: Option<usize>,

    /// Last roll, until the question it led to is answered.
    pub dice_roll: Option<u8>,

    pub current_question: Option<PendingQuestion>,

    /// Set only once the game is over.
    pub winner: Option<PlayerId>,

    /// True while a roll is being stepped out.
    pub is_moving: bool,

    pub history: Vector<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh setup-phase state with nobody seated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: GameStatus::Setup,
            players: Vector::new(),
            current_player_index: None,
            dice_roll: None,
            current_question: None,
            winner: None,
            is_moving: false,
            history: Vector::new(),
        }
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_player_index.and_then(|i| self.players.get(i))
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Position of a player in turn order.
    #[must_use]
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// The winning player, once the game is over.
    #[must_use]
    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        self.history.push_back(event);
    }
}
