//! # trivia-board
//!
//! Rules engine for a four-category trivia board game.
//!
//! ## Design Principles
//!
//! 1. **One Authoritative State**: `TurnEngine` owns the `GameState`; every
//!    change goes through a command that either applies fully or is rejected
//!    with a typed error.
//!
//! 2. **Presentation-Agnostic**: No question text, colors or layout.
//!    Categories carry opaque tags; a front-end supplies the question text and
//!    reports whether the answer was correct.
//!
//! 3. **Injected Randomness**: Dice and spoke choices come from a `Dice`
//!    source, seeded ChaCha in play and scripted in tests.
//!
//! ## Board
//!
//! A 24-space ring, four 5-space spokes and a center hub. Ring spaces 0, 6, 12
//! and 18 are the wedge spaces and double as spoke entrances.
//!
//! ## Modules
//!
//! - `core`: Categories, players, wedges, state, events, RNG, configuration
//! - `board`: Space ids and the static board graph
//! - `movement`: Single-step movement resolver
//! - `rules`: Turn engine and command errors
//! - `pacing`: Step-by-step roll resolution on a tokio interval
//! - `autoplay`: Headless simulated games

pub mod autoplay;
pub mod board;
pub mod core;
pub mod movement;
pub mod pacing;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Category, Dice, EngineConfig, GameEvent, GameRng, GameState, GameStatus, NewPlayer,
    PendingQuestion, Player, PlayerId, PlayerToken, ScriptedDice, WedgeSet,
};

pub use crate::board::{BoardGraph, Space, SpaceId, SpaceKind};

pub use crate::movement::{next_space, Heading};

pub use crate::rules::{AnswerOutcome, CommandError, RollTicket, StepOutcome, TurnEngine};
