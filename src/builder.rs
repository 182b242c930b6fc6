use crate::canonical_hash::HashParseError;
use crate::data_structures::CardVec;
use crate::types::{CardCountError, ConfigError, MoveError, Position, PositionConfig};

/// Where the cards of a built position come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PositionSource {
    /// No cards dealt.
    #[default]
    Empty,
    /// Explicit stack contents, bottom first, dealt onto the first stacks in order.
    Stacks(Vec<CardVec>),
    /// Decoded from a position hash.
    Hash(String),
    /// Shuffled from a seed.
    Seed(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid position hash: {0}")]
    Hash(#[from] HashParseError),
    #[error("cannot deal: {0}")]
    Deal(#[from] MoveError),
    #[error("card counts do not match a full deck: {0}")]
    CardCount(#[from] CardCountError),
    #[error("{count} stacks given but the configuration has {stacks}")]
    TooManyStacks { count: usize, stacks: u8 },
}

#[derive(Debug, Clone)]
pub struct PositionBuilder {
    pub config: PositionConfig,
    pub source: PositionSource,
    /// Require four cards of every rank.
    pub check_card_counts: bool,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new(PositionConfig::default())
    }
}

impl PositionBuilder {
    pub fn new(config: PositionConfig) -> Self {
        Self {
            config,
            source: PositionSource::Empty,
            check_card_counts: false,
        }
    }

    pub fn with_hash<S: Into<String>>(self, hash: S) -> Self {
        Self {
            source: PositionSource::Hash(hash.into()),
            ..self
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            source: PositionSource::Seed(seed),
            ..self
        }
    }

    pub fn with_stacks<T: AsRef<[u8]>>(self, stacks: &[T]) -> Self {
        Self {
            source: PositionSource::Stacks(stacks.iter().map(|s| s.as_ref().into()).collect()),
            ..self
        }
    }

    pub fn with_check_card_counts(self, check_card_counts: bool) -> Self {
        Self {
            check_card_counts,
            ..self
        }
    }

    pub fn build(self) -> Position {
        self.try_build().expect("Failed to build Position.")
    }

    pub fn try_build(self) -> Result<Position, BuildError> {
        self.config.validate()?;
        let position = match self.source {
            PositionSource::Empty => Position::new(self.config),
            PositionSource::Seed(seed) => Position::deal_seeded(self.config, seed)?,
            PositionSource::Hash(hash) => {
                let position = Position::from_canonical_hash(&hash, self.config)?;
                position.config.validate()?;
                position
            }
            PositionSource::Stacks(stacks) => {
                if stacks.len() > self.config.stacks as usize {
                    return Err(BuildError::TooManyStacks {
                        count: stacks.len(),
                        stacks: self.config.stacks,
                    });
                }
                let mut position = Position::new(self.config);
                for (i, cards) in stacks.iter().enumerate() {
                    if let Some(pile) = position.piles.get_mut(i) {
                        pile.init_cards(i as u8, cards)?;
                    }
                }
                position
            }
        };
        if self.check_card_counts {
            position.validate_card_counts()?;
        }
        Ok(position)
    }
}
