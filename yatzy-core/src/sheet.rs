//! A player's score card.
//!
//! One optional slot per category, keyed by score-card index. A recorded
//! score never changes for the rest of the game.

use crate::category::{Category, NUM_CATEGORIES};
use serde::{Deserialize, Serialize};

/// Per-player mapping from category to recorded score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    scores: [Option<u32>; NUM_CATEGORIES],
}

impl ScoreSheet {
    /// An empty sheet: nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded score for `category`, if any.
    pub fn score(&self, category: Category) -> Option<u32> {
        self.scores[category.index()]
    }

    /// True once `category` holds a score.
    pub fn contains(&self, category: Category) -> bool {
        self.scores[category.index()].is_some()
    }

    /// Record a score. Returns false (leaving the sheet unchanged) if the
    /// category is already filled.
    pub fn record(&mut self, category: Category, score: u32) -> bool {
        let slot = &mut self.scores[category.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(score);
        true
    }

    /// Number of recorded categories.
    pub fn filled(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    /// True when all fifteen categories are recorded.
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(|s| s.is_some())
    }

    /// Categories still open for this player, in score-card order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |c| !self.contains(*c))
    }
}
