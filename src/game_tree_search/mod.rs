use std::ops::Add;

mod game_trait;
pub use game_trait::*;

mod position_game;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of states taken off the frontier and expanded.
    pub expansions: u64,
    /// Number of child states built.
    pub children_generated: u64,
    /// Number of frontier entries discarded because an equivalent state was already expanded.
    pub duplicates_skipped: u64,
    /// Deepest state expanded.
    pub max_depth: u32,
    pub max_score: i64,
}

impl SearchCounter {
    pub const ZERO: SearchCounter = SearchCounter {
        expansions: 0,
        children_generated: 0,
        duplicates_skipped: 0,
        max_depth: 0,
        max_score: 0,
    };

    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.expansions += c.expansions;
        self.children_generated += c.children_generated;
        self.duplicates_skipped += c.duplicates_skipped;
        self.max_depth = self.max_depth.max(c.max_depth);
        self.max_score = self.max_score.max(c.max_score);
    }

    pub fn summary(&self, dt_ns: u128) -> String {
        let dt_ms: f64 = 1e-6 * (dt_ns as f64);
        let rate: f64 = if dt_ns == 0 {
            0.0
        } else {
            (1e-3_f64 * 1e9_f64) * (self.expansions as f64) / (dt_ns as f64)
        };
        format!(
            "dt={dt_ms:.2}ms expansions={} children={} duplicates={} rate={rate:.2} Kstates/s",
            self.expansions, self.children_generated, self.duplicates_skipped
        )
    }
}

impl Add for SearchCounter {
    type Output = SearchCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome<A> {
    /// A complete state was reached by these actions, oldest first.
    Solved { moves: Vec<A> },
    /// The frontier emptied without reaching a complete state.
    Exhausted,
    /// A time or position limit fired first.
    LimitReached,
}

impl<A> SearchOutcome<A> {
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved { .. })
    }

    pub fn solution(&self) -> Option<&[A]> {
        match self {
            SearchOutcome::Solved { moves } => Some(moves),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult<G: Game> {
    pub outcome: SearchOutcome<G::Action>,
    pub counter: SearchCounter,
}

impl<G: Game> SearchResult<G> {
    #[inline]
    pub fn new(outcome: SearchOutcome<G::Action>, counter: SearchCounter) -> Self {
        SearchResult { outcome, counter }
    }
}

pub trait GameTreeSearch<G: Game> {
    /// Searches from `root` for a complete state.
    /// Errors are contract violations and abort the search.
    fn solve(&mut self, root: &G) -> Result<SearchResult<G>, G::Error>;
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    pub max_time_ms: Option<u128>,
    pub max_positions: Option<u64>,
}

impl SearchLimits {
    pub fn should_terminate(&self, start_time: std::time::Instant, positions_searched: u64) -> bool {
        if let Some(max_positions) = self.max_positions {
            if positions_searched >= max_positions {
                return true;
            }
        }
        if let Some(max_time_ms) = self.max_time_ms {
            return start_time.elapsed().as_millis() >= max_time_ms;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_limits_check_both() {
        let t0 = Instant::now();
        assert!(!SearchLimits::default().should_terminate(t0, u64::MAX));
        let limits = SearchLimits {
            max_time_ms: Some(600_000),
            max_positions: Some(10),
        };
        assert!(!limits.should_terminate(t0, 9));
        assert!(limits.should_terminate(t0, 10));
        let limits = SearchLimits {
            max_time_ms: Some(0),
            max_positions: None,
        };
        assert!(limits.should_terminate(t0, 0));
    }

    #[test]
    fn test_counter_add() {
        let a = SearchCounter {
            expansions: 2,
            max_depth: 5,
            max_score: 30,
            ..SearchCounter::ZERO
        };
        let b = SearchCounter {
            expansions: 3,
            children_generated: 7,
            max_depth: 4,
            max_score: 40,
            ..SearchCounter::ZERO
        };
        let c = a + b;
        assert_eq!(5, c.expansions);
        assert_eq!(7, c.children_generated);
        assert_eq!(5, c.max_depth);
        assert_eq!(40, c.max_score);
    }
}
