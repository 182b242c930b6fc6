use instant::Instant;
use rustc_hash::FxHashSet;

#[cfg(not(feature = "no_parallel"))]
use rayon::prelude::*;

use crate::{Game, GameTreeSearch, SearchCounter, SearchLimits, SearchOutcome, SearchResult};

mod frontier;
pub use frontier::*;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Checked once per expansion. `None` runs until solved or exhausted.
    pub limits: Option<SearchLimits>,
    /// Build the children of an expanded state in parallel.
    pub parallel: bool,
    /// Print a progress line whenever the best score or deepest depth improves.
    pub debug: bool,
}

impl GreedyConfig {
    pub const DEFAULT: Self = Self {
        limits: None,
        parallel: false,
        debug: false,
    };
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Greedy best-first search: always expands the best-scoring pending state, never reopens
/// a state whose canonical key was already expanded, and stops at the first complete state.
///
/// The result is not guaranteed to be the shortest solution.
#[derive(Debug, Clone)]
pub struct GreedySearch<G: Game> {
    pub config: GreedyConfig,
    _phantom: std::marker::PhantomData<G>,
}

impl<G: Game> Default for GreedySearch<G> {
    fn default() -> Self {
        Self::new(GreedyConfig::DEFAULT)
    }
}

/// Best score and depth printed so far, for the progress output.
#[derive(Debug, Default)]
struct Progress {
    max_score: Option<i64>,
    max_depth: u32,
}

impl<G: Game> GreedySearch<G> {
    pub fn new(config: GreedyConfig) -> Self {
        Self {
            config,
            _phantom: Default::default(),
        }
    }

    #[inline]
    fn parallel(&self) -> bool {
        !cfg!(feature = "no_parallel") && self.config.parallel
    }

    /// Children of `node` in enumeration order, `None` for a pruned or dead branch.
    pub fn expand(&self, node: &G) -> Result<Option<Vec<G>>, G::Error> {
        let Some(actions) = node.expansion()? else {
            return Ok(None);
        };
        let children = if self.parallel() {
            Self::children_par(node, actions)?
        } else {
            actions
                .into_iter()
                .map(|action| node.child(action))
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(Some(children))
    }

    #[cfg(not(feature = "no_parallel"))]
    fn children_par(node: &G, actions: G::Actions) -> Result<Vec<G>, G::Error> {
        let actions: Vec<G::Action> = actions.into_iter().collect();
        actions.into_par_iter().map(|action| node.child(action)).collect()
    }

    #[cfg(feature = "no_parallel")]
    fn children_par(node: &G, actions: G::Actions) -> Result<Vec<G>, G::Error> {
        actions.into_iter().map(|action| node.child(action)).collect()
    }

    fn print_progress(&self, progress: &mut Progress, counter: &SearchCounter, frontier_len: usize, node: &G) {
        let eval: i64 = node.eval().into();
        let depth = node.depth();
        if progress.max_score.map_or(true, |s| eval > s) || depth > progress.max_depth {
            println!(
                "{} [D{depth} L{frontier_len}]: {}. Score: {}",
                counter.expansions,
                node.canonical_key(),
                node.eval()
            );
            progress.max_depth = progress.max_depth.max(depth);
            progress.max_score = Some(progress.max_score.map_or(eval, |s| s.max(eval)));
        }
    }
}

impl<G: Game> GameTreeSearch<G> for GreedySearch<G> {
    fn solve(&mut self, root: &G) -> Result<SearchResult<G>, G::Error> {
        root.check_root()?;

        let t0 = Instant::now();
        let mut counter = SearchCounter::ZERO;
        let mut progress = Progress::default();
        let mut visited: FxHashSet<G::Key> = Default::default();
        let mut frontier = Frontier::new();
        frontier.push(root.clone());

        if self.config.debug {
            println!("Solving game...");
        }
        let outcome = loop {
            if let Some(limits) = self.config.limits {
                if limits.should_terminate(t0, counter.expansions) {
                    break SearchOutcome::LimitReached;
                }
            }
            let Some(current) = frontier.pop() else {
                break SearchOutcome::Exhausted;
            };

            // An equivalent state may have been queued before the first copy was expanded.
            if !visited.insert(current.canonical_key()) {
                counter.duplicates_skipped += 1;
                continue;
            }

            if self.config.debug {
                self.print_progress(&mut progress, &counter, frontier.len(), &current);
            }

            if current.is_complete() {
                break SearchOutcome::Solved {
                    moves: current.actions_from_root(),
                };
            }

            counter.expansions += 1;
            counter.max_depth = counter.max_depth.max(current.depth());
            counter.max_score = counter.max_score.max(current.eval().into());
            if let Some(children) = self.expand(&current)? {
                counter.children_generated += children.len() as u64;
                frontier.extend(children);
            }
        };

        if self.config.debug {
            let dt_ns = t0.elapsed().as_nanos();
            match &outcome {
                SearchOutcome::Solved { moves } => println!(
                    "Game complete in {} moves. Time elapsed {:.2} seconds",
                    moves.len(),
                    1e-9 * dt_ns as f64
                ),
                SearchOutcome::Exhausted => println!("Game cannot be solved."),
                SearchOutcome::LimitReached => println!("Search limit reached."),
            }
            println!("{}", counter.summary(dt_ns));
        }
        Ok(SearchResult::new(outcome, counter))
    }
}
