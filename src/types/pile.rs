use std::fmt::{self, Display, Write};

use crate::data_structures::CardVec;

/// Card rank in `0..card_types`.
pub type Rank = u8;

/// Number of cards of one rank. Four of them on a single pile collapse it.
pub const COPIES_PER_RANK: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PileKind {
    /// Regular pile of the tableau.
    Stack,
    /// Holding cell: one card, or a full group of four.
    FreeCell,
}

impl PileKind {
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            PileKind::Stack => 'S',
            PileKind::FreeCell => 'F',
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            PileKind::Stack => "stack",
            PileKind::FreeCell => "freecell",
        }
    }
}

impl Display for PileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PileCards {
    Cards(CardVec),
    /// Four cards of this rank collapsed here. The pile is finished.
    Collapsed(Rank),
}

impl Default for PileCards {
    fn default() -> Self {
        Self::Cards(Default::default())
    }
}

/// Indicates a pile operation that the rules do not allow was forced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("cannot take cards from pile {pile}")]
    IllegalMoveFrom { pile: u8 },
    #[error("pile {pile} does not accept the offered cards")]
    IllegalMoveTo { pile: u8 },
    #[error("pile index {pile} out of range (position has {len} piles)")]
    PileOutOfRange { pile: u8, len: usize },
    #[error("source and destination are both pile {pile}")]
    SamePile { pile: u8 },
    #[error("pile {pile} already holds cards")]
    InitOccupied { pile: u8 },
    #[error("pile {pile} is a holding cell and cannot be dealt to")]
    InitFreeCell { pile: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pile {
    pub kind: PileKind,
    pub locked: bool,
    pub cards: PileCards,
}

impl Pile {
    pub fn new(kind: PileKind, locked: bool) -> Self {
        Self {
            kind,
            locked,
            cards: Default::default(),
        }
    }

    #[inline]
    pub fn stack() -> Self {
        Self::new(PileKind::Stack, false)
    }

    #[inline]
    pub fn free_cell(locked: bool) -> Self {
        Self::new(PileKind::FreeCell, locked)
    }

    pub fn with_cards(self, cards: &[Rank]) -> Self {
        Self {
            cards: PileCards::Cards(cards.into()),
            ..self
        }
    }

    pub fn collapsed(kind: PileKind, rank: Rank) -> Self {
        Self {
            kind,
            locked: true,
            cards: PileCards::Collapsed(rank),
        }
    }

    #[inline]
    pub fn is_free_cell(&self) -> bool {
        self.kind == PileKind::FreeCell
    }

    /// Live cards, bottom first. Empty for a collapsed pile.
    #[inline]
    pub fn cards(&self) -> &[Rank] {
        match &self.cards {
            PileCards::Cards(cards) => cards,
            PileCards::Collapsed(..) => &[],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards().len()
    }

    /// True when no live cards are on the pile and it has not collapsed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(&self.cards, PileCards::Cards(cards) if cards.is_empty())
    }

    #[inline]
    pub fn top(&self) -> Option<Rank> {
        self.cards().last().copied()
    }

    #[inline]
    pub fn collapsed_rank(&self) -> Option<Rank> {
        match self.cards {
            PileCards::Collapsed(rank) => Some(rank),
            PileCards::Cards(..) => None,
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self.cards, PileCards::Collapsed(..))
    }

    pub fn is_move_to_legal(&self, offered: &[Rank]) -> bool {
        if self.locked || offered.is_empty() {
            return false;
        }

        match self.kind {
            PileKind::FreeCell => self.is_empty() && !(2..=3).contains(&offered.len()),
            PileKind::Stack => match self.top() {
                Some(top) => top == offered[0],
                None => self.is_empty(),
            },
        }
    }

    #[inline]
    pub fn is_move_from_legal(&self) -> bool {
        !self.locked && !self.cards().is_empty()
    }

    /// Length of the run of equal cards at the top of the pile.
    pub fn top_run_len(&self) -> usize {
        let cards = self.cards();
        let Some(&top) = cards.last() else {
            return 0;
        };
        cards.iter().rev().take_while(|&&c| c == top).count()
    }

    /// The run of equal cards that a move from this pile takes.
    pub fn which_cards_moving(&self) -> CardVec {
        let cards = self.cards();
        cards[cards.len() - self.top_run_len()..].into()
    }

    /// Removes the top run (`max_count == 0`) or exactly the top `max_count` cards.
    /// The cards are returned in the order they sat on the pile.
    pub fn resolve_move_from(&mut self, index: u8, max_count: usize) -> Result<CardVec, MoveError> {
        if !self.is_move_from_legal() {
            return Err(MoveError::IllegalMoveFrom { pile: index });
        }
        let PileCards::Cards(cards) = &mut self.cards else {
            return Err(MoveError::IllegalMoveFrom { pile: index });
        };

        let count = if max_count == 0 {
            let top = cards[cards.len() - 1];
            cards.iter().rev().take_while(|&&c| c == top).count()
        } else {
            max_count.min(cards.len())
        };
        let keep = cards.len() - count;
        let removed: CardVec = cards[keep..].into();
        cards.truncate(keep);
        Ok(removed)
    }

    /// Places `offered` on the pile and collapses it if it now holds four equal cards.
    ///
    /// Returns true when a stack collapsed, which unlocks a holding cell.
    pub fn resolve_move_to(&mut self, index: u8, offered: &[Rank]) -> Result<bool, MoveError> {
        if !self.is_move_to_legal(offered) {
            return Err(MoveError::IllegalMoveTo { pile: index });
        }
        let PileCards::Cards(cards) = &mut self.cards else {
            return Err(MoveError::IllegalMoveTo { pile: index });
        };
        cards.extend_from_slice(offered);

        let rank = cards[0];
        if cards.len() == COPIES_PER_RANK && cards.iter().all(|&c| c == rank) {
            self.locked = true;
            self.cards = PileCards::Collapsed(rank);
            return Ok(self.kind == PileKind::Stack);
        }
        Ok(false)
    }

    /// Deals the initial cards onto an empty stack.
    pub fn init_cards(&mut self, index: u8, cards: &[Rank]) -> Result<(), MoveError> {
        if self.is_free_cell() {
            return Err(MoveError::InitFreeCell { pile: index });
        }
        if !self.is_empty() {
            return Err(MoveError::InitOccupied { pile: index });
        }
        self.cards = PileCards::Cards(cards.into());
        Ok(())
    }

    /// Kind letter, lock letter, then the ranks bottom first or `X[r]` when collapsed.
    pub fn write_fragment<W: Write>(&self, w: &mut W) -> fmt::Result {
        w.write_char(self.kind.to_char())?;
        w.write_char(if self.locked { 'L' } else { 'U' })?;
        match &self.cards {
            PileCards::Collapsed(rank) => write!(w, "X[{rank}]"),
            PileCards::Cards(cards) => cards.iter().try_for_each(|c| write!(w, "{c}")),
        }
    }

    pub fn hash_fragment(&self) -> String {
        let mut s = String::with_capacity(12);
        // Writing into a String cannot fail.
        let _ = self.write_fragment(&mut s);
        s
    }
}

impl Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}{}: ", self.kind, if self.locked { " [Locked]" } else { "" })?;
        match &self.cards {
            PileCards::Collapsed(rank) => write!(f, "X[{rank}]"),
            PileCards::Cards(cards) => write!(f, "{:?}", cards.as_slice()),
        }
    }
}
