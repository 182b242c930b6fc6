#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

/// Builder for `Position`s
pub mod builder;

/// Encoding and decoding of the position hash.
pub mod canonical_hash;

/// Module containing collection datatypes used by this crate.
pub mod data_structures;

/// Shuffling and dealing
pub mod deck;

/// Heuristic position score
pub mod eval;

/// Search trait and counters shared by the search drivers.
pub mod game_tree_search;

/// Replaying a found solution into move records.
pub mod replay;

pub mod types;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` create
pub use rand;

/// Re-exports the `thiserror` crate
pub use thiserror;

pub mod prelude {
    pub use crate::builder::{BuildError, PositionBuilder, PositionSource};
    pub use crate::canonical_hash::{CanonicalHash, CanonicallyHashable, HashParseError};
    pub use crate::eval::{Score, ScoreWeights};
    pub use crate::game_tree_search::{
        Game, GameTreeSearch, SearchCounter, SearchLimits, SearchOutcome, SearchResult,
    };
    pub use crate::replay::{replay, replay_with_log, ReplayError};
    pub use crate::types::logging::{Event, EventLog};
    pub use crate::types::{
        CardCountError, ConfigError, Move, MoveError, MoveHistory, MoveRecord, Pile, PileCards, PileKind, Position,
        PositionConfig, Rank, SolveError,
    };

    // Modules
    pub use crate::types::logging;
}

#[cfg(test)]
mod tests;
