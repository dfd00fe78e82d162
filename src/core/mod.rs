//! Core types: categories, players, dice, configuration, state, history.
//!
//! These are the building blocks shared by the board, the movement resolver
//! and the turn engine.

pub mod category;
pub mod config;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use category::{Category, CATEGORY_COUNT};
pub use config::{ConfigError, EngineConfig, MAX_PLAYERS};
pub use event::GameEvent;
pub use player::{NewPlayer, Player, PlayerId, PlayerToken, WedgeSet};
pub use rng::{Dice, GameRng, ScriptedDice, DIE_FACES};
pub use state::{GameState, GameStatus, PendingQuestion};
