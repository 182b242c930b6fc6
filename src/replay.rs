use crate::data_structures::CardVec;
use crate::types::logging::{Event, EventLog};
use crate::types::{Move, MoveError, MoveRecord, Position};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("a solution must contain at least one move")]
    EmptySolution,
    #[error("move {step} could not be replayed: {source}")]
    Move { step: usize, source: MoveError },
}

/// Replays a solution from `root` and returns one record per move.
/// `root` is not modified.
pub fn replay(root: &Position, moves: &[Move]) -> Result<Vec<MoveRecord>, ReplayError> {
    replay_with_log(root, moves, &mut EventLog::default())
}

/// Like [`replay`], also narrating every move, collapse and unlock into `log`.
pub fn replay_with_log(root: &Position, moves: &[Move], log: &mut EventLog) -> Result<Vec<MoveRecord>, ReplayError> {
    if moves.is_empty() {
        return Err(ReplayError::EmptySolution);
    }

    let mut position = root.clone();
    let mut records = Vec::with_capacity(moves.len());
    for (i, &mv) in moves.iter().enumerate() {
        let step = i + 1;
        let (before, kinds): (CardVec, _) = match (position.pile(mv.source), position.pile(mv.dest)) {
            (Some(source), Some(dest)) => (dest.cards().into(), Some((source.kind, dest.kind))),
            _ => Default::default(),
        };
        let outcome = position
            .apply_move_detailed(mv)
            .map_err(|source| ReplayError::Move { step, source })?;

        if let (Some((source_kind, dest_kind)), Some(dest_pile)) = (kinds, position.pile(mv.dest)) {
            log.log_with(|| Event::Move {
                step,
                source: mv.source,
                dest: mv.dest,
                source_kind,
                dest_kind,
                cards: outcome.cards.clone(),
                before,
                after: dest_pile.cards.clone(),
                unlocked: outcome.unlocked.is_some(),
            });
            if let Some(rank) = dest_pile.collapsed_rank().filter(|_| outcome.collapsed) {
                log.log(Event::Collapse { pile: mv.dest, rank });
            }
            if let Some(pile) = outcome.unlocked {
                log.log(Event::Unlock { pile });
            }
        }

        records.push(MoveRecord::new(mv, &outcome));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PositionConfig;

    fn position(hash: &str) -> Position {
        Position::from_canonical_hash(hash, PositionConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_solution() {
        let root = position("SU1/FU/");
        assert_eq!(Err(ReplayError::EmptySolution), replay(&root, &[]));
    }

    #[test]
    fn test_replay_offsets() {
        // 0: 1 2 2, 1: 2, 2: empty cell
        let root = position("SU122/SU2/FU/");
        let records = replay(&root, &[Move::new(1, 0)]).unwrap();
        assert_eq!(vec![(1, 0, 0, 2)], records.iter().map(|r| r.as_tuple()).collect::<Vec<_>>());

        // A run of two only sends its top card to a holding cell.
        let records = replay(&root, &[Move::new(0, 2)]).unwrap();
        assert_eq!((0, 2, 2, 0), records[0].as_tuple());
        assert_eq!(1, records[0].cards.len());
    }

    #[test]
    fn test_replay_reports_bad_step() {
        let root = position("SU1/SU2/FU/");
        let err = replay(&root, &[Move::new(0, 2), Move::new(1, 2)]).unwrap_err();
        assert_eq!(
            ReplayError::Move {
                step: 2,
                source: MoveError::IllegalMoveTo { pile: 2 }
            },
            err
        );
    }

    #[test]
    fn test_replay_log() {
        let root = position("SU333/SU3/FU/FL/");
        let mut log = EventLog::new(true);
        let records = replay_with_log(&root, &[Move::new(1, 0)], &mut log).unwrap();
        assert!(records[0].collapsed);
        assert!(records[0].unlocked);
        assert_eq!(
            vec![
                Event::Move {
                    step: 1,
                    source: 1,
                    dest: 0,
                    source_kind: crate::types::PileKind::Stack,
                    dest_kind: crate::types::PileKind::Stack,
                    cards: crate::cards![3],
                    before: crate::cards![3, 3, 3],
                    after: crate::types::PileCards::Collapsed(3),
                    unlocked: true,
                },
                Event::Collapse { pile: 0, rank: 3 },
                Event::Unlock { pile: 3 },
            ],
            log.events
        );
    }
}
