//! Board graph: the center, a 24-space ring and four 5-space spokes.
//!
//! The board is immutable. Spaces are addressed by [`SpaceId`]; each carries
//! a question category and whether it is a wedge space. Wedge spaces sit on
//! the ring where the spokes join it (indices 0, 6, 12, 18).

mod graph;
mod space;

pub use graph::{BoardError, BoardGraph};
pub use space::{Space, SpaceId, SpaceIdError, SpaceKind, RING_LEN, SPOKE_COUNT, SPOKE_LEN};
