//! Turn and game rules.
//!
//! [`TurnEngine`] holds the single authoritative [`GameState`] and exposes
//! the commands that move it forward:
//!
//! - Setup: `add_player`, `remove_player`, `start_game`
//! - Turn: `roll_dice`, `advance` / `resolve`, `answer_question`
//! - `reset_game` from any state
//!
//! Status moves setup → playing → gameover, and back to setup only by reset.
//!
//! [`GameState`]: crate::core::GameState

mod engine;
mod error;
mod roll;

pub use engine::TurnEngine;
pub use error::{CommandError, SnapshotError};
pub use roll::{AnswerOutcome, RollTicket, StepOutcome, StopReason};
