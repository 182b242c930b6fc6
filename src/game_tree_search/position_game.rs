use super::*;
use crate::{
    canonical_hash::CanonicalHash,
    data_structures::MoveList,
    eval::Score,
    types::{Move, Position, SolveError},
};

impl Game for Position {
    type Action = Move;

    type Actions = MoveList<Move>;

    type Error = SolveError;

    type Key = CanonicalHash;

    type Eval = Score;

    #[inline]
    fn check_root(&self) -> Result<(), SolveError> {
        if self.depth > 0 {
            return Err(SolveError::NotRoot { depth: self.depth });
        }
        Ok(())
    }

    #[inline]
    fn is_complete(&self) -> bool {
        Position::is_complete(self)
    }

    #[inline]
    fn depth(&self) -> u32 {
        self.depth as u32
    }

    #[inline]
    fn canonical_key(&self) -> CanonicalHash {
        self.canonical_hash()
    }

    #[inline]
    fn eval(&self) -> Score {
        self.cached_score().unwrap_or_else(|| self.compute_score())
    }

    #[inline]
    fn expansion(&self) -> Result<Option<MoveList<Move>>, SolveError> {
        self.expansion_moves()
    }

    #[inline]
    fn child(&self, action: Move) -> Result<Self, SolveError> {
        Ok(Position::child(self, action)?)
    }

    fn actions_from_root(&self) -> Vec<Move> {
        self.moves()
    }
}
