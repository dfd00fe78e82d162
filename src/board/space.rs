//! Space identifiers and space records.
//!
//! ## SpaceId
//!
//! Typed address of a board node. Renders and parses the textual forms
//! `center`, `ring-{i}` and `spoke-{s}-{k}`:
//!
//! ```
//! use trivia_board::board::SpaceId;
//!
//! let id: SpaceId = "spoke-2-4".parse().unwrap();
//! assert_eq!(id, SpaceId::spoke(2, 4).unwrap());
//! assert_eq!(id.to_string(), "spoke-2-4");
//! assert!("ring-24".parse::<SpaceId>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::Category;

/// Spaces on the outer ring.
pub const RING_LEN: u8 = 24;
/// Spokes joining the ring to the center.
pub const SPOKE_COUNT: u8 = 4;
/// Spaces on each spoke. Step 0 touches the center, the last step touches the ring.
pub const SPOKE_LEN: u8 = 5;

/// Ring spaces between consecutive spoke entrances.
const ENTRANCE_SPACING: u8 = RING_LEN / SPOKE_COUNT;

/// Address of a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SpaceId {
    Center,
    Ring(u8),
    Spoke { spoke: u8, step: u8 },
}

impl SpaceId {
    /// Ring space `index`, or `None` if off the ring.
    #[must_use]
    pub const fn ring(index: u8) -> Option<Self> {
        if index < RING_LEN {
            Some(SpaceId::Ring(index))
        } else {
            None
        }
    }

    /// Spoke space `step` on `spoke`, or `None` if out of range.
    #[must_use]
    pub const fn spoke(spoke: u8, step: u8) -> Option<Self> {
        if spoke < SPOKE_COUNT && step < SPOKE_LEN {
            Some(SpaceId::Spoke { spoke, step })
        } else {
            None
        }
    }

    /// Ring index where `spoke` meets the ring: 0, 6, 12, 18.
    #[must_use]
    pub const fn entrance_of(spoke: u8) -> u8 {
        spoke * ENTRANCE_SPACING
    }

    /// Spoke that enters the ring at `ring_index`, if any.
    #[must_use]
    pub const fn spoke_at_entrance(ring_index: u8) -> Option<u8> {
        if ring_index < RING_LEN && ring_index % ENTRANCE_SPACING == 0 {
            Some(ring_index / ENTRANCE_SPACING)
        } else {
            None
        }
    }

    /// Whether this id addresses a real space.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            SpaceId::Center => true,
            SpaceId::Ring(index) => index < RING_LEN,
            SpaceId::Spoke { spoke, step } => spoke < SPOKE_COUNT && step < SPOKE_LEN,
        }
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceId::Center => f.write_str("center"),
            SpaceId::Ring(index) => write!(f, "ring-{index}"),
            SpaceId::Spoke { spoke, step } => write!(f, "spoke-{spoke}-{step}"),
        }
    }
}

/// Failure to parse a textual space id.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpaceIdError {
    #[error("malformed space id {0:?}")]
    Malformed(String),
    #[error("ring index out of range (expected: 0-{max}, found: {0})", max = RING_LEN - 1)]
    RingOutOfRange(u32),
    #[error("spoke space out of range (found: spoke {spoke}, step {step})")]
    SpokeOutOfRange { spoke: u32, step: u32 },
}

impl FromStr for SpaceId {
    type Err = SpaceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SpaceIdError::Malformed(s.to_string());
        let parse = |part: &str| part.parse::<u32>().map_err(|_| malformed());

        if s == "center" {
            return Ok(SpaceId::Center);
        }
        if let Some(rest) = s.strip_prefix("ring-") {
            let index = parse(rest)?;
            return u8::try_from(index)
                .ok()
                .and_then(SpaceId::ring)
                .ok_or(SpaceIdError::RingOutOfRange(index));
        }
        if let Some(rest) = s.strip_prefix("spoke-") {
            let (spoke, step) = rest.split_once('-').ok_or_else(malformed)?;
            let (spoke, step) = (parse(spoke)?, parse(step)?);
            return match (u8::try_from(spoke), u8::try_from(step)) {
                (Ok(sp), Ok(st)) => SpaceId::spoke(sp, st),
                _ => None,
            }
            .ok_or(SpaceIdError::SpokeOutOfRange { spoke, step });
        }
        Err(malformed())
    }
}

impl TryFrom<String> for SpaceId {
    type Error = SpaceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpaceId> for String {
    fn from(id: SpaceId) -> Self {
        id.to_string()
    }
}

/// Structural role of a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    Center,
    Ring { index: u8 },
    Spoke { spoke: u8, step: u8 },
}

/// One node of the board graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: SpaceId,
    /// Category of the question asked here.
    pub category: Category,
    pub kind: SpaceKind,
    /// Landing here with the category uncollected can earn a wedge.
    pub is_wedge: bool,
}

impl Space {
    #[must_use]
    pub fn is_center(&self) -> bool {
        matches!(self.kind, SpaceKind::Center)
    }

    #[must_use]
    pub fn is_ring(&self) -> bool {
        matches!(self.kind, SpaceKind::Ring { .. })
    }

    #[must_use]
    pub fn is_spoke(&self) -> bool {
        matches!(self.kind, SpaceKind::Spoke { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_bounds() {
        assert_eq!(SpaceId::ring(23), Some(SpaceId::Ring(23)));
        assert_eq!(SpaceId::ring(24), None);
        assert_eq!(SpaceId::spoke(3, 4), Some(SpaceId::Spoke { spoke: 3, step: 4 }));
        assert_eq!(SpaceId::spoke(4, 0), None);
        assert_eq!(SpaceId::spoke(0, 5), None);
        assert!(!SpaceId::Ring(99).is_valid());
    }

    #[test]
    fn test_entrances() {
        let entrances: Vec<_> = (0..SPOKE_COUNT).map(SpaceId::entrance_of).collect();
        assert_eq!(entrances, vec![0, 6, 12, 18]);

        for spoke in 0..SPOKE_COUNT {
            assert_eq!(SpaceId::spoke_at_entrance(SpaceId::entrance_of(spoke)), Some(spoke));
        }
        assert_eq!(SpaceId::spoke_at_entrance(5), None);
        assert_eq!(SpaceId::spoke_at_entrance(24), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SpaceId::Center.to_string(), "center");
        assert_eq!(SpaceId::Ring(17).to_string(), "ring-17");
        assert_eq!(SpaceId::Spoke { spoke: 1, step: 0 }.to_string(), "spoke-1-0");
    }

    #[test]
    fn test_parse() {
        assert_eq!("center".parse::<SpaceId>(), Ok(SpaceId::Center));
        assert_eq!("ring-0".parse::<SpaceId>(), Ok(SpaceId::Ring(0)));
        assert_eq!(
            "spoke-3-2".parse::<SpaceId>(),
            Ok(SpaceId::Spoke { spoke: 3, step: 2 })
        );
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!("ring-24".parse::<SpaceId>(), Err(SpaceIdError::RingOutOfRange(24)));
        assert_eq!(
            "spoke-4-1".parse::<SpaceId>(),
            Err(SpaceIdError::SpokeOutOfRange { spoke: 4, step: 1 })
        );
        assert!(matches!("ring-".parse::<SpaceId>(), Err(SpaceIdError::Malformed(_))));
        assert!(matches!("spoke-1".parse::<SpaceId>(), Err(SpaceIdError::Malformed(_))));
        assert!(matches!("middle".parse::<SpaceId>(), Err(SpaceIdError::Malformed(_))));
        assert!(matches!("ring-999999".parse::<SpaceId>(), Err(SpaceIdError::RingOutOfRange(999999))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SpaceIdError::RingOutOfRange(24).to_string(),
            "ring index out of range (expected: 0-23, found: 24)"
        );
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&SpaceId::Spoke { spoke: 0, step: 3 }).unwrap();
        assert_eq!(json, "\"spoke-0-3\"");
        let back: SpaceId = serde_json::from_str("\"ring-12\"").unwrap();
        assert_eq!(back, SpaceId::Ring(12));
        assert!(serde_json::from_str::<SpaceId>("\"ring-30\"").is_err());
    }
}
