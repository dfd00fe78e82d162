//! Single-step movement resolution.
//!
//! [`next_space`] computes where a token goes after one pip. It depends only
//! on the current space and the player's [`Heading`]; the one random choice
//! (which spoke to leave the center by) is drawn from the injected [`Dice`].
//!
//! Rules, first match wins:
//!
//! 1. On the center heading home: stay on the center.
//! 2. On the center heading out: step onto `spoke-r-0` for a random spoke `r`.
//! 3. On a spoke: step toward the center when heading home, otherwise toward
//!    the ring, leaving the last spoke space onto the spoke's ring entrance.
//! 4. On the ring: turn into the spoke at an entrance when heading home,
//!    otherwise advance clockwise.

mod resolver;

pub use resolver::{next_space, Heading};
