use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::types::{MoveError, Position, PositionConfig, Rank, COPIES_PER_RANK};

/// Four cards of every rank in `0..card_types`, shuffled.
pub fn shuffled_deck<R: Rng>(card_types: u8, rng: &mut R) -> Vec<Rank> {
    let mut cards: Vec<Rank> = (0..COPIES_PER_RANK).flat_map(|_| 0..card_types).collect();
    cards.shuffle(rng);
    cards
}

impl Position {
    /// Shuffles a full deck and deals it in consecutive chunks onto the stacks.
    /// Every stack must be empty.
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Result<(), MoveError> {
        let cards = shuffled_deck(self.config.card_types, rng);
        let stacks = (self.config.stacks as usize).max(1);
        let chunk_size = self.config.total_cards().div_ceil(stacks);
        let mut chunks = cards.chunks(chunk_size.max(1));
        for i in 0..self.config.stacks {
            let chunk = chunks.next().unwrap_or(&[]);
            let pile = self.piles.get_mut(i as usize).ok_or(MoveError::PileOutOfRange {
                pile: i,
                len: self.config.stacks as usize,
            })?;
            pile.init_cards(i, chunk)?;
        }
        self.score = None;
        Ok(())
    }

    pub fn new_dealt<R: Rng>(config: PositionConfig, rng: &mut R) -> Result<Self, MoveError> {
        let mut position = Position::new(config);
        position.deal(rng)?;
        Ok(position)
    }

    /// Reproducible deal: the same seed and config always give the same position.
    pub fn deal_seeded(config: PositionConfig, seed: u64) -> Result<Self, MoveError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::new_dealt(config, &mut rng)
    }
}
