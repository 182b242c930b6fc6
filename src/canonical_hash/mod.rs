//! The canonical hash is the string key that identifies the strategic state of a position.
//! It is used both as the visited-set key of the solver and as the exchange format with
//! whatever produced the position (a screen reader, a test, a file).
//!
//! # Fragments
//! Every pile renders to one fragment:
//!
//! ```text
//! <kind><lock><cards>
//! kind  := 'S' (stack) | 'F' (holding cell)
//! lock  := 'U' (unlocked) | 'L' (locked)
//! cards := digit*            ranks bottom to top
//!        | 'X[' rank ']'     pile collapsed on `rank`
//! ```
//!
//! # Order independence
//! Two positions that differ only by which physical pile holds which sequence of cards are
//! the same game: `888 / empty` plays exactly like `empty / 888`. The key therefore sorts the
//! fragments before joining them. Because the fragment starts with the kind letter, stacks only
//! ever trade places with stacks and cells with cells.
//!
//! ```text
//! key(position) := concat({ fragment(p) + '/' | p in piles } sorted)
//! ```
//!
//! The wire form ([crate::types::position::Position::to_hash_string]) keeps pile order instead,
//! since pile indices are what a move list refers to. The decoder accepts fragments in any order
//! and ignores empty segments, so a key is itself a valid wire string.
use std::fmt::{self, Display};

use crate::types::pile::Pile;

mod parser;
pub use parser::*;

pub const FRAGMENT_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalHash(String);

impl CanonicalHash {
    pub fn of_piles<'a, I: IntoIterator<Item = &'a Pile>>(piles: I) -> Self {
        let mut fragments: Vec<String> = piles.into_iter().map(Pile::hash_fragment).collect();
        fragments.sort_unstable();
        let mut s = String::with_capacity(fragments.iter().map(|f| f.len() + 1).sum());
        for fragment in fragments {
            s.push_str(&fragment);
            s.push(FRAGMENT_SEPARATOR);
        }
        Self(s)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CanonicalHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait CanonicallyHashable {
    fn canonical_hash(&self) -> CanonicalHash;
}

impl CanonicallyHashable for [Pile] {
    fn canonical_hash(&self) -> CanonicalHash {
        CanonicalHash::of_piles(self)
    }
}
