//! Question categories.
//!
//! The board uses exactly four categories. Each has a display name for the
//! question card and an opaque tag the presentation layer maps to a color.

use serde::{Deserialize, Serialize};

/// Number of categories on the board.
pub const CATEGORY_COUNT: usize = 4;

/// One of the four fixed question categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Sports.
    Blue,
    /// Geography & History.
    Red,
    /// Pop Culture.
    Green,
    /// Everything else.
    Yellow,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Blue,
        Category::Red,
        Category::Green,
        Category::Yellow,
    ];

    /// Human-readable name shown on the question card.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Category::Blue => "Sports",
            Category::Red => "Geography & History",
            Category::Green => "Pop Culture",
            Category::Yellow => "Other",
        }
    }

    /// Opaque visual tag. The engine never interprets it.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Category::Blue => "blue",
            Category::Red => "red",
            Category::Green => "green",
            Category::Yellow => "yellow",
        }
    }

    /// Position in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
