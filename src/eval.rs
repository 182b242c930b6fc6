use crate::types::pile::{Pile, PileKind, Rank};

/// Heuristic value of a position. Higher is closer to a win.
pub type Score = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    /// Collapsed pile.
    pub complete: Score,
    /// Unlocked, empty holding cell.
    pub open_free_cell: Score,
    pub empty_stack: Score,
    /// Stack with cards, before subtracting trapped cards.
    pub stack_base: Score,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Index of the highest card that differs from the top card, 0 if there is none.
///
/// This is a cheap measure of how deep the first card that blocks the top run sits.
#[inline]
pub fn trapped_count(cards: &[Rank]) -> usize {
    let Some(&top) = cards.last() else {
        return 0;
    };
    cards.iter().rposition(|&c| c != top).unwrap_or(0)
}

impl ScoreWeights {
    pub const DEFAULT: Self = Self {
        complete: 20,
        open_free_cell: 10,
        empty_stack: 10,
        stack_base: 5,
    };

    #[inline]
    pub fn pile_score(&self, pile: &Pile) -> Score {
        if pile.is_complete() {
            return self.complete;
        }
        match pile.kind {
            PileKind::FreeCell if !pile.locked && pile.is_empty() => self.open_free_cell,
            PileKind::FreeCell => 0,
            PileKind::Stack if pile.is_empty() => self.empty_stack,
            PileKind::Stack => self.stack_base - trapped_count(pile.cards()) as Score,
        }
    }

    pub fn score(&self, piles: &[Pile]) -> Score {
        piles.iter().map(|p| self.pile_score(p)).sum()
    }
}
