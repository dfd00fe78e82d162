//! Headless self-play.
//!
//! Runs whole games with no front-end: each simulated player rolls, and
//! "answers" correctly with a fixed probability drawn from an RNG stream
//! independent of the dice. Used by the `trivia-sim` binary, the
//! integration tests and the benches.
//!
//! ```
//! use trivia_board::autoplay::{play_game, AutoplayConfig};
//!
//! let config = AutoplayConfig::new().with_answer_accuracy(1.0).with_seed(1);
//! let summary = play_game(&["Ana", "Bo"], &config).unwrap();
//! assert!(summary.finished());
//! ```

mod runner;

pub use runner::{play_game, AutoplayConfig, AutoplayError, AutoplaySummary, Autoplayer};
