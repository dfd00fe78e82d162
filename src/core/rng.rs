//! Seedable randomness for dice rolls and spoke choice.
//!
//! The engine draws every random outcome through the [`Dice`] trait so the
//! source can be swapped:
//!
//! - [`GameRng`]: ChaCha8 seeded from a `u64`, used in production
//! - [`ScriptedDice`]: replays fixed values, used in tests
//!
//! ```
//! use trivia_board::core::{Dice, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use crate::board::SPOKE_COUNT;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Source of the two random outcomes in the game.
pub trait Dice {
    /// Roll one die. Must return a value in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Pick the spoke a player leaves the center by. Must return `0..4`.
    fn pick_spoke(&mut self) -> u8;
}

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality. Supports
/// context-based independent streams so unrelated consumers (dice vs
/// simulated answers) never perturb each other.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Probabilities outside `0.0..=1.0` are clamped; NaN counts as `0.0`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        let p = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.inner.gen_bool(p)
    }
}

impl Dice for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    fn pick_spoke(&mut self) -> u8 {
        self.inner.gen_range(0..SPOKE_COUNT)
    }
}

/// Dice that replay fixed sequences, cycling when exhausted.
///
/// Out-of-range script values are clamped into range so a script can never
/// produce an illegal roll.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    spokes: Vec<u8>,
    next_roll: usize,
    next_spoke: usize,
}

impl ScriptedDice {
    /// Replay `rolls` for dice and `spokes` for spoke choice.
    pub fn new(rolls: impl Into<Vec<u8>>, spokes: impl Into<Vec<u8>>) -> Self {
        Self {
            rolls: rolls.into(),
            spokes: spokes.into(),
            next_roll: 0,
            next_spoke: 0,
        }
    }

    /// Always roll the same value, always pick spoke 0.
    #[must_use]
    pub fn constant(roll: u8) -> Self {
        Self::new(vec![roll], vec![0])
    }

    /// Queue more rolls after the current script.
    pub fn push_rolls(&mut self, rolls: &[u8]) {
        self.rolls.extend_from_slice(rolls);
    }

    fn next(values: &[u8], cursor: &mut usize) -> Option<u8> {
        if values.is_empty() {
            return None;
        }
        let value = values[*cursor % values.len()];
        *cursor += 1;
        Some(value)
    }
}

impl Dice for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        Self::next(&self.rolls, &mut self.next_roll)
            .unwrap_or(1)
            .clamp(1, DIE_FACES)
    }

    fn pick_spoke(&mut self) -> u8 {
        Self::next(&self.spokes, &mut self.next_spoke).unwrap_or(0) % SPOKE_COUNT
    }
}
