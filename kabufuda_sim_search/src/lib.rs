pub use kabufuda_sim::game_tree_search::*;

/// Greedy best-first search with duplicate suppression
pub mod greedy;
