use std::ops::Range;

use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::types::{Position, PositionConfig, MAX_CARD_TYPES};

prop_compose! {
    pub fn arb_free_cells()(free_cells in 0u8..=4)(free_cells in Just(free_cells), unlocked in 0..=free_cells) -> (u8, u8) {
        (free_cells, unlocked)
    }
}

prop_compose! {
    pub fn arb_config()(
        card_types in 1u8..=MAX_CARD_TYPES,
        stacks in 1u8..=8,
        (free_cells, unlocked_free_cells) in arb_free_cells(),
        allow_free_cells in prop::bool::weighted(0.9),
    ) -> PositionConfig {
        PositionConfig {
            card_types,
            stacks,
            free_cells,
            unlocked_free_cells,
            allow_free_cells,
            ..PositionConfig::default()
        }
    }
}

prop_compose! {
    pub fn arb_dealt_position()(config in arb_config(), seed in any::<u64>()) -> Position {
        Position::deal_seeded(config, seed).unwrap()
    }
}

prop_compose! {
    pub fn arb_default_deal()(seed in any::<u64>()) -> Position {
        Position::deal_seeded(PositionConfig::default(), seed).unwrap()
    }
}

/// Random walks of legal moves from a dealt position.
pub struct ArbReachablePosition<T: Strategy<Value = Position>> {
    pub steps: Range<usize>,
    pub arb_root: T,
    pub arb_seed: <u64 as Arbitrary>::Strategy,
}

impl<T: Strategy<Value = Position>> ArbReachablePosition<T> {
    const MAX_STEPS: usize = 60usize;

    pub fn new(arb_root: T) -> Self {
        Self {
            steps: 0..Self::MAX_STEPS,
            arb_root,
            arb_seed: u64::arbitrary(),
        }
    }

    pub fn arb(self) -> impl Strategy<Value = Position> {
        (self.steps, self.arb_seed, self.arb_root).prop_map(|(steps, seed, mut position)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            for _ in 0usize..steps {
                if position.is_complete() {
                    break;
                }
                let moves = position.enumerate_moves();
                if moves.is_empty() {
                    break;
                }
                let mv = moves[rng.gen_range(0..moves.len())];
                if let Err(e) = position.advance(mv) {
                    dbg!(&position);
                    dbg!(&mv);
                    panic!("{e:?}");
                }
            }
            position
        })
    }
}

pub fn arb_reachable_position() -> impl Strategy<Value = Position> {
    ArbReachablePosition::new(arb_dealt_position()).arb()
}

pub fn arb_reachable_default_position() -> impl Strategy<Value = Position> {
    ArbReachablePosition::new(arb_default_deal()).arb()
}
