pub mod linked_list;

pub use linked_list::*;

use crate::types::pile::Rank;

/// Cards on a pile, bottom first. A pile never grows past its dealt height plus three.
pub type CardVec = smallvec::SmallVec<[Rank; 8]>;

pub type PileList<T> = smallvec::SmallVec<[T; 12]>;

pub type MoveList<T> = smallvec::SmallVec<[T; 32]>;

#[macro_export]
macro_rules! cards {
    () => {
        $crate::smallvec::SmallVec::<[$crate::types::pile::Rank; 8]>::new()
    };
    ($($e : expr),+ $(,)?) => {
        $crate::smallvec::SmallVec::<[$crate::types::pile::Rank; 8]>::from_slice(&[$($e),+])
    }
}
