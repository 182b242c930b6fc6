use crate::prelude::*;



pub mod scenarios;

#[cfg(feature = "serde")]
pub mod serialization;

pub mod prop_tests;

pub(crate) fn position(hash: &str) -> Position {
    Position::from_canonical_hash(hash, PositionConfig::default()).unwrap()
}

pub(crate) fn position_with(hash: &str, card_types: u8) -> Position {
    Position::from_canonical_hash(hash, PositionConfig::default().with_card_types(card_types)).unwrap()
}

impl Position {
    /// Panics: If any move cannot be applied.
    fn advance_multiple<T: IntoIterator<Item = (u8, u8)>>(&mut self, moves: T) {
        for mv in moves.into_iter() {
            self.advance(mv.into()).unwrap();
        }
    }
}
