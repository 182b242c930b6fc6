use crate::data_structures::{CardVec, PileList};
use crate::types::config::MAX_PILES;
use crate::types::pile::{Pile, PileCards, PileKind, Rank};

use super::FRAGMENT_SEPARATOR;

/// Indicates a position hash could not be decoded. Fragment errors carry the offending fragment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashParseError {
    #[error("hash contains no pile fragments")]
    Empty,
    #[error("fragment {fragment:?} is too short, expected a kind and a lock letter")]
    FragmentTooShort { fragment: String },
    #[error("fragment {fragment:?}: unknown pile kind {found:?}, expected 'S' or 'F'")]
    UnknownKind { fragment: String, found: char },
    #[error("fragment {fragment:?}: unknown lock state {found:?}, expected 'U' or 'L'")]
    UnknownLock { fragment: String, found: char },
    #[error("fragment {fragment:?}: {found:?} is not a card rank")]
    InvalidCard { fragment: String, found: char },
    #[error("fragment {fragment:?}: rank {rank} is out of range for {card_types} card types")]
    RankOutOfRange { fragment: String, rank: u32, card_types: u8 },
    #[error("fragment {fragment:?}: collapsed pile must be written as X[rank]")]
    MalformedCollapse { fragment: String },
    #[error("fragment {fragment:?}: a holding cell holds at most one card")]
    OverfilledFreeCell { fragment: String },
    #[error("fragment {fragment:?}: a collapsed pile is always locked")]
    UnlockedCollapse { fragment: String },
    #[error("hash has {count} pile fragments, at most 255 are supported")]
    TooManyPiles { count: usize },
}

/// Decodes a hash into piles, in the order the fragments appear.
///
/// Surrounding whitespace and empty segments (e.g. from a trailing `/`) are ignored.
pub fn parse_piles(hash: &str, card_types: u8) -> Result<PileList<Pile>, HashParseError> {
    let piles: PileList<Pile> = hash
        .trim()
        .split(FRAGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|fragment| parse_fragment(fragment, card_types))
        .collect::<Result<_, _>>()?;
    if piles.is_empty() {
        return Err(HashParseError::Empty);
    }
    if piles.len() > MAX_PILES {
        return Err(HashParseError::TooManyPiles { count: piles.len() });
    }
    Ok(piles)
}

pub fn parse_fragment(fragment: &str, card_types: u8) -> Result<Pile, HashParseError> {
    let err_fragment = || fragment.to_string();
    let mut chars = fragment.chars();
    let (Some(kind), Some(lock)) = (chars.next(), chars.next()) else {
        return Err(HashParseError::FragmentTooShort {
            fragment: err_fragment(),
        });
    };

    let kind = match kind {
        'S' => PileKind::Stack,
        'F' => PileKind::FreeCell,
        found => {
            return Err(HashParseError::UnknownKind {
                fragment: err_fragment(),
                found,
            })
        }
    };
    let locked = match lock {
        'U' => false,
        'L' => true,
        found => {
            return Err(HashParseError::UnknownLock {
                fragment: err_fragment(),
                found,
            })
        }
    };

    let body = chars.as_str();
    let check_rank = |rank: u32| {
        if rank < card_types as u32 {
            Ok(rank as Rank)
        } else {
            Err(HashParseError::RankOutOfRange {
                fragment: err_fragment(),
                rank,
                card_types,
            })
        }
    };

    if let Some(rest) = body.strip_prefix('X') {
        let rank = rest
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .filter(|r| !r.is_empty() && r.chars().all(|c| c.is_ascii_digit()))
            .and_then(|r| r.parse::<u32>().ok())
            .ok_or_else(|| HashParseError::MalformedCollapse {
                fragment: err_fragment(),
            })?;
        if !locked {
            return Err(HashParseError::UnlockedCollapse {
                fragment: err_fragment(),
            });
        }
        return Ok(Pile {
            kind,
            locked,
            cards: PileCards::Collapsed(check_rank(rank)?),
        });
    }

    let cards = body
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => check_rank(d),
            None => Err(HashParseError::InvalidCard {
                fragment: err_fragment(),
                found: c,
            }),
        })
        .collect::<Result<CardVec, _>>()?;
    if kind == PileKind::FreeCell && cards.len() > 1 {
        return Err(HashParseError::OverfilledFreeCell {
            fragment: err_fragment(),
        });
    }

    Ok(Pile {
        kind,
        locked,
        cards: PileCards::Cards(cards),
    })
}
