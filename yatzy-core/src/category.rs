//! The fifteen scorable categories of a Norwegian Yatzy score card.
//!
//! The derived rows a printed card also shows (upper-section sum, bonus,
//! grand total) are deliberately not part of this enum: they are computed
//! by the scoring module and can never be recorded on a sheet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of real, selectable categories.
pub const NUM_CATEGORIES: usize = 15;

/// A scorable category, in score-card order (upper section first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    OnePair,
    TwoPairs,
    ThreeOfAKind,
    FourOfAKind,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Chance,
    Yatzy,
}

impl Category {
    /// All categories in score-card order.
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::OnePair,
        Category::TwoPairs,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FullHouse,
        Category::Chance,
        Category::Yatzy,
    ];

    /// The six upper-section categories (Ones through Sixes).
    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// The nine lower-section categories.
    pub const LOWER: [Category; 9] = [
        Category::OnePair,
        Category::TwoPairs,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FullHouse,
        Category::Chance,
        Category::Yatzy,
    ];

    /// Stable index in score-card order (0..15).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Category::index`].
    pub fn from_index(index: usize) -> Option<Category> {
        Category::ALL.get(index).copied()
    }

    /// True for Ones through Sixes.
    pub fn is_upper(self) -> bool {
        (self as usize) < Category::UPPER.len()
    }

    /// The face an upper category counts (Ones => 1, ..., Sixes => 6).
    pub fn face(self) -> Option<u8> {
        if self.is_upper() {
            Some(self as u8 + 1)
        } else {
            None
        }
    }

    /// Norwegian label, as printed on the score card.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ones => "Enere",
            Category::Twos => "Toere",
            Category::Threes => "Treere",
            Category::Fours => "Firere",
            Category::Fives => "Femmere",
            Category::Sixes => "Seksere",
            Category::OnePair => "Ett par",
            Category::TwoPairs => "To par",
            Category::ThreeOfAKind => "Tre like",
            Category::FourOfAKind => "Fire like",
            Category::SmallStraight => "Liten Straight",
            Category::LargeStraight => "Stor Straight",
            Category::FullHouse => "Hus",
            Category::Chance => "Sjanse",
            Category::Yatzy => "Yatzy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
