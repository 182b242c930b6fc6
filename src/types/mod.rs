pub mod config;
pub mod logging;
pub mod moves;
pub mod pile;
pub mod position;

pub use config::{ConfigError, PositionConfig, MAX_CARD_TYPES, MAX_PILES};
pub use moves::{Move, MoveHistory, MoveOutcome, MoveRecord};
pub use pile::{MoveError, Pile, PileCards, PileKind, Rank, COPIES_PER_RANK};
pub use position::{CardCountError, Position, SolveError};
