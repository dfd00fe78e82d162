//! Movement resolver implementation.

use serde::{Deserialize, Serialize};

use crate::board::{BoardError, BoardGraph, SpaceId, SpaceKind, RING_LEN, SPOKE_LEN};
use crate::core::{Dice, WedgeSet};

/// Direction a token travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Still collecting wedges: out along the spokes and around the ring.
    Outward,
    /// All four wedges held: back down a spoke to the center.
    Center,
}

impl Heading {
    /// Heading implied by a wedge collection.
    #[must_use]
    pub fn for_wedges(wedges: &WedgeSet) -> Self {
        if wedges.is_complete() {
            Heading::Center
        } else {
            Heading::Outward
        }
    }

    #[must_use]
    pub fn is_center(self) -> bool {
        matches!(self, Heading::Center)
    }
}

/// Space reached from `current` after one step.
///
/// Returns [`BoardError::UnknownSpace`] if `current` is not on `board`.
pub fn next_space<D: Dice + ?Sized>(
    board: &BoardGraph,
    current: SpaceId,
    heading: Heading,
    dice: &mut D,
) -> Result<SpaceId, BoardError> {
    let space = board.space(current)?;

    let next = match (space.kind, heading) {
        (SpaceKind::Center, Heading::Center) => SpaceId::Center,
        (SpaceKind::Center, Heading::Outward) => SpaceId::Spoke {
            spoke: dice.pick_spoke(),
            step: 0,
        },

        (SpaceKind::Spoke { step: 0, .. }, Heading::Center) => SpaceId::Center,
        (SpaceKind::Spoke { spoke, step }, Heading::Center) => SpaceId::Spoke {
            spoke,
            step: step - 1,
        },
        (SpaceKind::Spoke { spoke, step }, Heading::Outward) if step + 1 < SPOKE_LEN => {
            SpaceId::Spoke {
                spoke,
                step: step + 1,
            }
        }
        (SpaceKind::Spoke { spoke, .. }, Heading::Outward) => {
            SpaceId::Ring(SpaceId::entrance_of(spoke))
        }

        (SpaceKind::Ring { index }, heading) => match SpaceId::spoke_at_entrance(index) {
            Some(spoke) if heading.is_center() => SpaceId::Spoke {
                spoke,
                step: SPOKE_LEN - 1,
            },
            _ => SpaceId::Ring((index + 1) % RING_LEN),
        },
    };

    log::trace!("step {current} -> {next} ({heading:?})");
    // The board is closed under these rules; this only trips on a foreign board.
    board.space(next).map(|s| s.id)
}
