use std::fmt::{self, Display};

use crate::data_structures::{CardVec, LinkedList};

/// Move the movable cards of pile `source` onto pile `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub source: u8,
    pub dest: u8,
}

impl Move {
    #[inline]
    pub const fn new(source: u8, dest: u8) -> Self {
        Self { source, dest }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            source: self.dest,
            dest: self.source,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.dest)
    }
}

impl From<(u8, u8)> for Move {
    fn from((source, dest): (u8, u8)) -> Self {
        Self { source, dest }
    }
}

/// Moves applied since the root, newest first.
pub type MoveHistory = LinkedList<Move>;

/// What applying one move did to the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cards taken from the source, in pile order.
    pub cards: CardVec,
    /// Cards left on the source after the move, i.e. the height of the first moved card.
    pub source_offset: usize,
    /// Index of the destination's top card before the move, 0 if it was empty.
    pub dest_offset: usize,
    pub collapsed: bool,
    /// Holding cell that the collapse unlocked.
    pub unlocked: Option<u8>,
}

/// A solved move as handed to the pointer automation: pile index plus vertical offset
/// for both ends of the drag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub source: u8,
    pub source_offset: usize,
    pub dest: u8,
    pub dest_offset: usize,
    pub cards: CardVec,
    pub collapsed: bool,
    pub unlocked: bool,
}

impl MoveRecord {
    pub fn new(mv: Move, outcome: &MoveOutcome) -> Self {
        Self {
            source: mv.source,
            source_offset: outcome.source_offset,
            dest: mv.dest,
            dest_offset: outcome.dest_offset,
            cards: outcome.cards.clone(),
            collapsed: outcome.collapsed,
            unlocked: outcome.unlocked.is_some(),
        }
    }

    #[inline]
    pub fn as_tuple(&self) -> (u8, usize, u8, usize) {
        (self.source, self.source_offset, self.dest, self.dest_offset)
    }
}

impl Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.source, self.source_offset, self.dest, self.dest_offset
        )?;
        if self.collapsed {
            f.write_str(" collapse")?;
        }
        if self.unlocked {
            f.write_str(" unlock")?;
        }
        Ok(())
    }
}
