use std::fmt::{self, Display};

use crate::canonical_hash::{parse_piles, CanonicalHash, HashParseError, FRAGMENT_SEPARATOR};
use crate::data_structures::{CardVec, MoveList, PileList};
use crate::eval::{Score, ScoreWeights};

use super::config::{ConfigError, PositionConfig, MAX_PILES};
use super::moves::{Move, MoveHistory, MoveOutcome};
use super::pile::{MoveError, Pile, PileKind, Rank, COPIES_PER_RANK};

/// Indicates the solver was driven in a way the rules engine does not allow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("position is already complete")]
    AlreadyComplete,
    #[error("search must start from a root position, got depth {depth}")]
    NotRoot { depth: u16 },
    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rank {rank} appears {count} times, expected 4")]
pub struct CardCountError {
    pub rank: Rank,
    pub count: usize,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub config: PositionConfig,
    pub(crate) piles: PileList<Pile>,
    /// Moves applied since the root of the search.
    pub depth: u16,
    pub(crate) history: MoveHistory,
    pub(crate) score: Option<Score>,
}

impl Position {
    /// Empty stacks followed by holding cells, the first `unlocked_free_cells` of them unlocked.
    pub fn new(config: PositionConfig) -> Self {
        let stacks = (0..config.stacks).map(|_| Pile::stack());
        let cells = (0..config.free_cells).map(|i| Pile::free_cell(i >= config.unlocked_free_cells));
        Self {
            config,
            piles: stacks.chain(cells).collect(),
            depth: 0,
            history: Default::default(),
            score: None,
        }
    }

    /// Builds a root position from piles given in any order.
    /// Stacks are placed before holding cells, keeping their relative order.
    pub fn from_piles<I: IntoIterator<Item = Pile>>(config: PositionConfig, piles: I) -> Result<Self, ConfigError> {
        let (mut piles, cells): (PileList<Pile>, PileList<Pile>) =
            piles.into_iter().partition(|p| p.kind == PileKind::Stack);
        let total = piles.len() + cells.len();
        let too_many = |_: std::num::TryFromIntError| ConfigError::TooManyPiles { piles: total };
        if total > MAX_PILES {
            return Err(ConfigError::TooManyPiles { piles: total });
        }
        let config = PositionConfig {
            stacks: u8::try_from(piles.len()).map_err(too_many)?,
            free_cells: u8::try_from(cells.len()).map_err(too_many)?,
            unlocked_free_cells: u8::try_from(cells.iter().filter(|p| !p.locked).count()).map_err(too_many)?,
            ..config
        };
        piles.extend(cells);
        Ok(Self {
            config,
            piles,
            depth: 0,
            history: Default::default(),
            score: None,
        })
    }

    /// Decodes a position hash. Pile counts are taken from the hash, the other rules
    /// parameters from `config`.
    pub fn from_canonical_hash(hash: &str, config: PositionConfig) -> Result<Self, HashParseError> {
        let piles = parse_piles(hash, config.card_types)?;
        let count = piles.len();
        Self::from_piles(config, piles).map_err(|_| HashParseError::TooManyPiles { count })
    }

    #[inline]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    #[inline]
    pub fn pile(&self, index: u8) -> Option<&Pile> {
        self.piles.get(index as usize)
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Moves from the root, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        self.history.to_vec_oldest_first()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.head()
    }

    /// Sorted, order-independent key used to detect repeated positions.
    pub fn canonical_hash(&self) -> CanonicalHash {
        CanonicalHash::of_piles(self.piles.iter())
    }

    /// Fragments in pile order, each followed by a separator.
    pub fn to_hash_string(&self) -> String {
        let mut s = String::with_capacity(self.piles.len() * 8);
        for pile in self.piles.iter() {
            s.push_str(&pile.hash_fragment());
            s.push(FRAGMENT_SEPARATOR);
        }
        s
    }

    #[inline]
    fn pile_index(&self, index: u8) -> Result<usize, MoveError> {
        if (index as usize) < self.piles.len() {
            Ok(index as usize)
        } else {
            Err(MoveError::PileOutOfRange {
                pile: index,
                len: self.piles.len(),
            })
        }
    }

    /// First unlocked, empty holding cell. Moving a card to any empty cell is the same move,
    /// so only this one is offered.
    pub fn first_free_cell(&self) -> Option<u8> {
        self.piles
            .iter()
            .position(|p| p.is_free_cell() && !p.locked && p.is_empty())
            .map(|i| i as u8)
    }

    /// First locked, empty holding cell: the one a stack collapse unlocks.
    pub fn first_locked_empty_cell(&self) -> Option<u8> {
        self.piles
            .iter()
            .position(|p| p.is_free_cell() && p.locked && p.is_empty())
            .map(|i| i as u8)
    }

    pub fn enumerate_moves(&self) -> MoveList<Move> {
        let mut moves = MoveList::new();
        let first_free_cell = self.first_free_cell();
        let last_move = self.last_move();
        for (dest, dest_pile) in self.piles.iter().enumerate() {
            let dest = dest as u8;
            if dest_pile.locked {
                continue;
            }
            if dest_pile.is_free_cell() && (!self.config.allow_free_cells || first_free_cell != Some(dest)) {
                continue;
            }
            for (source, source_pile) in self.piles.iter().enumerate() {
                let source = source as u8;
                if source == dest {
                    continue;
                }
                let mv = Move::new(source, dest);
                if last_move == Some(mv.reversed()) {
                    continue;
                }
                let Some(top) = source_pile.top() else {
                    continue;
                };
                if source_pile.is_move_from_legal() && dest_pile.is_move_to_legal(&[top]) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.enumerate_moves().is_empty()
    }

    /// Applies `mv` without touching depth or history. Returns true when a holding cell was unlocked.
    #[inline]
    pub fn apply_move(&mut self, mv: Move) -> Result<bool, MoveError> {
        Ok(self.apply_move_detailed(mv)?.unlocked.is_some())
    }

    /// Applies `mv` and reports what it moved and where.
    ///
    /// A run of two or three moving into a holding cell only moves its top card. The move is
    /// validated before either pile is modified, so an error leaves the position unchanged.
    pub fn apply_move_detailed(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let (si, di) = (self.pile_index(mv.source)?, self.pile_index(mv.dest)?);
        if si == di {
            return Err(MoveError::SamePile { pile: mv.source });
        }

        let (source_len, dest_len) = (self.piles[si].len(), self.piles[di].len());
        let run = self.piles[si].top_run_len();
        let max_count = if self.piles[di].is_free_cell() && (2..=3).contains(&run) {
            1
        } else {
            0
        };

        if !self.piles[si].is_move_from_legal() {
            return Err(MoveError::IllegalMoveFrom { pile: mv.source });
        }
        let offered: CardVec = {
            let cards = self.piles[si].cards();
            let n = if max_count == 0 { run } else { max_count };
            cards[cards.len() - n..].into()
        };
        if !self.piles[di].is_move_to_legal(&offered) {
            return Err(MoveError::IllegalMoveTo { pile: mv.dest });
        }

        let cards = self.piles[si].resolve_move_from(mv.source, max_count)?;
        let unlock = self.piles[di].resolve_move_to(mv.dest, &cards)?;
        let collapsed = self.piles[di].is_complete();
        let unlocked = if unlock {
            self.first_locked_empty_cell().map(|i| {
                self.piles[i as usize].locked = false;
                i
            })
        } else {
            None
        };
        self.score = None;

        Ok(MoveOutcome {
            source_offset: source_len - cards.len(),
            dest_offset: dest_len.saturating_sub(1),
            cards,
            collapsed,
            unlocked,
        })
    }

    /// Applies `mv` as the next move of this branch.
    pub fn advance(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let outcome = self.apply_move_detailed(mv)?;
        self.depth = self.depth.saturating_add(1);
        self.history = self.history.push(mv);
        Ok(outcome)
    }

    /// Memoized heuristic score. Applying a move clears the memo.
    pub fn score(&mut self, force_recompute: bool) -> Score {
        match self.score {
            Some(score) if !force_recompute => score,
            _ => {
                let score = self.compute_score();
                self.score = Some(score);
                score
            }
        }
    }

    #[inline]
    pub fn cached_score(&self) -> Option<Score> {
        self.score
    }

    #[inline]
    pub fn compute_score(&self) -> Score {
        ScoreWeights::DEFAULT.score(&self.piles)
    }

    #[inline]
    pub fn collapsed_count(&self) -> usize {
        self.piles.iter().filter(|p| p.is_complete()).count()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.collapsed_count() == self.config.card_types as usize
    }

    /// Moves to expand this position with, or `None` for a pruned or dead branch.
    pub fn expansion_moves(&self) -> Result<Option<MoveList<Move>>, SolveError> {
        if self.depth > self.config.max_depth {
            return Ok(None);
        }
        if self.is_complete() {
            return Err(SolveError::AlreadyComplete);
        }
        let moves = self.enumerate_moves();
        if moves.is_empty() {
            return Ok(None);
        }
        Ok(Some(moves))
    }

    /// Copy of this position after `mv`, with its score computed.
    pub fn child(&self, mv: Move) -> Result<Position, MoveError> {
        let mut child = self.clone();
        child.advance(mv)?;
        child.score(true);
        Ok(child)
    }

    /// One child per legal move, or `None` when this branch is past the depth cutoff or dead.
    /// Never returns an empty list.
    pub fn solve_children(&self) -> Result<Option<Vec<Position>>, SolveError> {
        let Some(moves) = self.expansion_moves()? else {
            return Ok(None);
        };
        let children = moves
            .into_iter()
            .map(|mv| self.child(mv))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(children))
    }

    /// Cards per rank, counting a collapsed pile as four cards of its rank.
    pub fn card_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.config.card_types as usize];
        for pile in self.piles.iter() {
            if let Some(rank) = pile.collapsed_rank() {
                if let Some(c) = counts.get_mut(rank as usize) {
                    *c += COPIES_PER_RANK;
                }
            }
            for &rank in pile.cards() {
                if let Some(c) = counts.get_mut(rank as usize) {
                    *c += 1;
                }
            }
        }
        counts
    }

    pub fn validate_card_counts(&self) -> Result<(), CardCountError> {
        match self
            .card_counts()
            .into_iter()
            .enumerate()
            .find(|&(_, count)| count != COPIES_PER_RANK)
        {
            Some((rank, count)) => Err(CardCountError {
                rank: rank as Rank,
                count,
            }),
            None => Ok(()),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current position...")?;
        writeln!(f, "=======")?;
        for (i, pile) in self.piles.iter().enumerate() {
            writeln!(f, "#{i} {pile}")?;
        }
        writeln!(f, "{}", self.canonical_hash())?;
        write!(f, "=====")
    }
}
