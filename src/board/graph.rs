//! The immutable board graph.
//!
//! Built once by [`BoardGraph::build`]; [`BoardGraph::standard`] hands out a
//! process-wide shared instance. Categories are derived from the layout
//! rules below rather than stored as tables, so moving a wedge keeps every
//! other assignment consistent.
//!
//! ## Category assignment
//!
//! - Ring space `i` takes `RING_CYCLE[i % 4]`, except the four spoke
//!   entrances, which take `WEDGE_CATEGORIES[spoke]`.
//! - Spoke space `spoke-s-k` takes `SPOKE_CYCLE[(s + k) % 4]`.
//! - The center asks Blue questions and is never a wedge.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use super::space::{Space, SpaceId, SpaceKind, RING_LEN, SPOKE_COUNT, SPOKE_LEN};
use crate::core::Category;

const RING_CYCLE: [Category; 4] = [Category::Blue, Category::Red, Category::Green, Category::Yellow];

/// Wedge category at each spoke's ring entrance. Covers every category once.
const WEDGE_CATEGORIES: [Category; 4] = [
    Category::Blue,
    Category::Green,
    Category::Red,
    Category::Yellow,
];

const SPOKE_CYCLE: [Category; 4] = [
    Category::Yellow,
    Category::Blue,
    Category::Green,
    Category::Red,
];

const CENTER_CATEGORY: Category = Category::Blue;

/// Board lookup failure.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("no space {0} on the board")]
    UnknownSpace(SpaceId),
}

/// All spaces of the board, keyed by id.
#[derive(Clone, Debug)]
pub struct BoardGraph {
    spaces: FxHashMap<SpaceId, Space>,
}

impl BoardGraph {
    /// Construct the standard ring-and-spokes board.
    #[must_use]
    pub fn build() -> Self {
        let capacity = 1 + RING_LEN as usize + (SPOKE_COUNT * SPOKE_LEN) as usize;
        let mut spaces = FxHashMap::with_capacity_and_hasher(capacity, Default::default());

        spaces.insert(
            SpaceId::Center,
            Space {
                id: SpaceId::Center,
                category: CENTER_CATEGORY,
                kind: SpaceKind::Center,
                is_wedge: false,
            },
        );

        for index in 0..RING_LEN {
            let wedge_spoke = SpaceId::spoke_at_entrance(index);
            let category = match wedge_spoke {
                Some(spoke) => WEDGE_CATEGORIES[spoke as usize],
                None => RING_CYCLE[index as usize % RING_CYCLE.len()],
            };
            let id = SpaceId::Ring(index);
            spaces.insert(
                id,
                Space {
                    id,
                    category,
                    kind: SpaceKind::Ring { index },
                    is_wedge: wedge_spoke.is_some(),
                },
            );
        }

        for spoke in 0..SPOKE_COUNT {
            for step in 0..SPOKE_LEN {
                let id = SpaceId::Spoke { spoke, step };
                spaces.insert(
                    id,
                    Space {
                        id,
                        category: SPOKE_CYCLE[(spoke + step) as usize % SPOKE_CYCLE.len()],
                        kind: SpaceKind::Spoke { spoke, step },
                        is_wedge: false,
                    },
                );
            }
        }

        Self { spaces }
    }

    /// Shared board, built on first use.
    pub fn standard() -> &'static BoardGraph {
        static BOARD: OnceLock<BoardGraph> = OnceLock::new();
        BOARD.get_or_init(BoardGraph::build)
    }

    /// Look up a space.
    #[must_use]
    pub fn get(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.get(&id)
    }

    /// Look up a space, reporting unknown ids as an error.
    pub fn space(&self, id: SpaceId) -> Result<&Space, BoardError> {
        self.get(id).ok_or(BoardError::UnknownSpace(id))
    }

    /// Total number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Iterate over every space (unordered).
    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.spaces.values()
    }

    /// The four wedge spaces, ordered by ring index.
    #[must_use]
    pub fn wedge_spaces(&self) -> Vec<&Space> {
        let mut wedges: Vec<_> = self.spaces().filter(|s| s.is_wedge).collect();
        wedges.sort_by_key(|s| s.id);
        wedges
    }

    /// The wedge space that awards `category`.
    #[must_use]
    pub fn wedge_for(&self, category: Category) -> Option<&Space> {
        self.spaces().find(|s| s.is_wedge && s.category == category)
    }
}
