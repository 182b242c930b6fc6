/// Largest number of card types the single-digit hash encoding can carry.
pub const MAX_CARD_TYPES: u8 = 10;

/// Pile indices are `u8`, so a position holds at most this many piles.
pub const MAX_PILES: usize = u8::MAX as usize;

/// Rules parameters of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionConfig {
    /// Number of distinct ranks. The deck holds four cards of each.
    pub card_types: u8,
    /// Number of regular piles.
    pub stacks: u8,
    /// Number of holding cells.
    pub free_cells: u8,
    /// Holding cells that start unlocked. The rest start locked.
    pub unlocked_free_cells: u8,
    /// Branches deeper than this are pruned by the solver.
    pub max_depth: u16,
    /// Allow holding cells as move destinations.
    pub allow_free_cells: bool,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("card types must be within 1..=10, got {0}")]
    CardTypes(u8),
    #[error("at least one stack is required")]
    NoStacks,
    #[error("{unlocked} unlocked holding cells requested but only {free_cells} exist")]
    TooManyUnlocked { unlocked: u8, free_cells: u8 },
    #[error("{piles} piles exceed the pile index range")]
    TooManyPiles { piles: usize },
    #[error("max depth must be below 65535")]
    MaxDepth,
}

impl PositionConfig {
    pub const DEFAULT: Self = Self {
        card_types: 10,
        stacks: 8,
        free_cells: 4,
        unlocked_free_cells: 1,
        max_depth: 75,
        allow_free_cells: true,
    };

    #[inline]
    pub fn total_cards(&self) -> usize {
        self.card_types as usize * crate::types::pile::COPIES_PER_RANK
    }

    #[inline]
    pub fn pile_count(&self) -> usize {
        self.stacks as usize + self.free_cells as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CARD_TYPES).contains(&self.card_types) {
            return Err(ConfigError::CardTypes(self.card_types));
        }
        if self.stacks == 0 {
            return Err(ConfigError::NoStacks);
        }
        if self.unlocked_free_cells > self.free_cells {
            return Err(ConfigError::TooManyUnlocked {
                unlocked: self.unlocked_free_cells,
                free_cells: self.free_cells,
            });
        }
        if self.pile_count() > MAX_PILES {
            return Err(ConfigError::TooManyPiles {
                piles: self.pile_count(),
            });
        }
        // Depth is a u16 and must be able to pass the cutoff.
        if self.max_depth == u16::MAX {
            return Err(ConfigError::MaxDepth);
        }
        Ok(())
    }

    pub fn with_unlocked_free_cells(self, unlocked_free_cells: u8) -> Self {
        Self {
            unlocked_free_cells,
            ..self
        }
    }

    pub fn with_max_depth(self, max_depth: u16) -> Self {
        Self { max_depth, ..self }
    }

    pub fn with_card_types(self, card_types: u8) -> Self {
        Self { card_types, ..self }
    }
}
