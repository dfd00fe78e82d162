//! Player identification, tokens and wedge collections.
//!
//! ## PlayerId
//!
//! Stable identifier allocated by the engine when a player joins. Ids are
//! never reused within a session, so removing a player during setup cannot
//! make a later player alias an earlier one.
//!
//! ## WedgeSet
//!
//! The categories a player has collected, in the order they were earned.
//! Backed by a `SmallVec` sized for the full set so it never allocates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::{Category, CATEGORY_COUNT};
use crate::board::SpaceId;

/// Session-unique player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Opaque visual tag for a player's token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerToken(pub String);

impl PlayerToken {
    /// Default token palette, chosen to not clash with category colors.
    pub const PALETTE: [&'static str; 8] = [
        "slate", "orange", "pink", "cyan", "lime", "purple", "teal", "rose",
    ];

    /// Create a token from any tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Palette token for the n-th seat, wrapping around.
    #[must_use]
    pub fn for_seat(seat: usize) -> Self {
        Self::new(Self::PALETTE[seat % Self::PALETTE.len()])
    }

    /// The raw tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Categories collected by a player.
///
/// Each category appears at most once. Iteration order is the order the
/// wedges were won.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Category>", into = "Vec<Category>")]
pub struct WedgeSet {
    wedges: SmallVec<[Category; CATEGORY_COUNT]>,
}

impl WedgeSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. Returns `false` if it was already held.
    pub fn insert(&mut self, category: Category) -> bool {
        if self.contains(category) {
            return false;
        }
        self.wedges.push(category);
        true
    }

    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.wedges.contains(&category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wedges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wedges.is_empty()
    }

    /// True once every category has been collected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.wedges.len() == CATEGORY_COUNT
    }

    /// Categories not yet collected, in canonical order.
    pub fn missing(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| !self.contains(*c))
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.wedges.iter().copied()
    }
}

impl FromIterator<Category> for WedgeSet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = WedgeSet::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl From<Vec<Category>> for WedgeSet {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<WedgeSet> for Vec<Category> {
    fn from(set: WedgeSet) -> Self {
        set.wedges.into_vec()
    }
}

/// Request to seat a new player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    /// Display name; trimmed by the engine and required to be non-empty.
    pub name: String,
    /// Token tag. `None` picks from [`PlayerToken::PALETTE`] by seat.
    pub token: Option<PlayerToken>,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: None,
        }
    }

    /// Use a specific token instead of the palette.
    #[must_use]
    pub fn with_token(mut self, token: PlayerToken) -> Self {
        self.token = Some(token);
        self
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub token: PlayerToken,
    /// Current space. Every player starts on the center.
    pub position: SpaceId,
    pub wedges: WedgeSet,
}

impl Player {
    /// A fresh player on the center with no wedges.
    pub fn new(id: PlayerId, name: impl Into<String>, token: PlayerToken) -> Self {
        Self {
            id,
            name: name.into(),
            token,
            position: SpaceId::Center,
            wedges: WedgeSet::new(),
        }
    }

    /// True once all four wedges are held and the player is racing home.
    #[must_use]
    pub fn is_heading_center(&self) -> bool {
        self.wedges.is_complete()
    }
}
