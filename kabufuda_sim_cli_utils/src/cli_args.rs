use structopt::StructOpt;

use kabufuda_sim::{
    builder::{BuildError, PositionBuilder},
    game_tree_search::SearchLimits,
    types::{Position, PositionConfig},
};
use kabufuda_sim_search::greedy::{GreedyConfig, GreedySearch};

/// Seed used when neither a hash nor a seed is given.
pub const DEFAULT_SEED: u64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Build(#[from] BuildError),
}

#[derive(Debug, StructOpt, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionOpts {
    #[structopt(
        short = "H",
        long = "--hash",
        conflicts_with = "seed",
        help = "Position hash to solve, e.g. SU01234/SU56789/SLX[3]/FU/FL/. Fragments may come in any order."
    )]
    pub hash: Option<String>,

    #[structopt(short = "S", long = "--seed", help = "Random seed for the dealt position")]
    pub seed: Option<u64>,

    #[structopt(long = "--card-types", help = "Number of card ranks, 1 to 10. Four cards of each are dealt.")]
    pub card_types: Option<u8>,

    #[structopt(long = "--stacks", help = "Number of stacks to deal onto")]
    pub stacks: Option<u8>,

    #[structopt(long = "--free-cells", help = "Number of holding cells")]
    pub free_cells: Option<u8>,

    #[structopt(long = "--unlocked-free-cells", help = "Holding cells that start unlocked")]
    pub unlocked_free_cells: Option<u8>,

    #[structopt(long = "--max-depth", help = "Prune branches deeper than this many moves")]
    pub max_depth: Option<u16>,

    #[structopt(long = "--no-free-cells", help = "Never move cards to holding cells")]
    pub no_free_cells: bool,
}

#[derive(Debug, StructOpt, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    #[structopt(short = "T", long = "--time-limit-ms", help = "Give up after this many milliseconds")]
    pub time_limit_ms: Option<u128>,

    #[structopt(short = "P", long = "--max-positions", help = "Give up after expanding this many positions")]
    pub max_positions: Option<u64>,

    #[structopt(long = "--parallel", help = "Build the children of each position in parallel")]
    pub parallel: bool,

    #[structopt(short = "D", long = "--debug", help = "Print search progress")]
    pub debug: bool,
}

#[derive(Debug, StructOpt, Clone, Default)]
pub struct SolveOpts {
    #[structopt(flatten)]
    pub position: PositionOpts,

    #[structopt(flatten)]
    pub search: SearchConfig,
}

impl PositionOpts {
    pub fn get_config(&self) -> PositionConfig {
        let d = PositionConfig::DEFAULT;
        PositionConfig {
            card_types: self.card_types.unwrap_or(d.card_types),
            stacks: self.stacks.unwrap_or(d.stacks),
            free_cells: self.free_cells.unwrap_or(d.free_cells),
            unlocked_free_cells: self.unlocked_free_cells.unwrap_or(d.unlocked_free_cells),
            max_depth: self.max_depth.unwrap_or(d.max_depth),
            allow_free_cells: !self.no_free_cells,
        }
    }

    pub fn get_builder(&self) -> PositionBuilder {
        let builder = PositionBuilder::new(self.get_config()).with_check_card_counts(true);
        match &self.hash {
            Some(hash) => builder.with_hash(hash.as_str()),
            None => builder.with_seed(self.seed.unwrap_or(DEFAULT_SEED)),
        }
    }

    /// The position given by `--hash`, or a deal from `--seed`.
    pub fn get_position(&self) -> Result<Position, CliError> {
        Ok(self.get_builder().try_build()?)
    }

    /// A deal with these options' rules, ignoring `--hash` and `--seed`.
    pub fn get_position_with_seed(&self, seed: u64) -> Result<Position, CliError> {
        let builder = PositionBuilder::new(self.get_config())
            .with_check_card_counts(true)
            .with_seed(seed);
        Ok(builder.try_build()?)
    }
}

impl SearchConfig {
    pub fn get_limits(&self) -> Option<SearchLimits> {
        if self.time_limit_ms.is_none() && self.max_positions.is_none() {
            return None;
        }
        Some(SearchLimits {
            max_time_ms: self.time_limit_ms,
            max_positions: self.max_positions,
        })
    }

    pub fn get_greedy_config(&self) -> GreedyConfig {
        GreedyConfig {
            limits: self.get_limits(),
            parallel: self.parallel,
            debug: self.debug,
        }
    }

    pub fn make_search(&self) -> GreedySearch<Position> {
        GreedySearch::new(self.get_greedy_config())
    }
}

impl SolveOpts {
    pub fn get_position(&self) -> Result<Position, CliError> {
        self.position.get_position()
    }

    pub fn make_search(&self) -> GreedySearch<Position> {
        self.search.make_search()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kabufuda_sim::prelude::GameTreeSearch;

    fn parse(args: &[&str]) -> SolveOpts {
        SolveOpts::from_iter(std::iter::once("solve").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let opts = parse(&[]);
        assert_eq!(PositionConfig::DEFAULT, opts.position.get_config());
        assert_eq!(None, opts.search.get_limits());
        let position = opts.get_position().unwrap();
        let expected = Position::deal_seeded(PositionConfig::DEFAULT, DEFAULT_SEED).unwrap();
        assert_eq!(expected.to_hash_string(), position.to_hash_string());
    }

    #[test]
    fn test_rules_flags() {
        let opts = parse(&[
            "--card-types",
            "4",
            "--stacks",
            "4",
            "--free-cells",
            "2",
            "--unlocked-free-cells",
            "2",
            "--max-depth",
            "30",
            "--no-free-cells",
            "--seed",
            "9",
        ]);
        let config = opts.position.get_config();
        assert_eq!(4, config.card_types);
        assert_eq!(4, config.stacks);
        assert_eq!(2, config.free_cells);
        assert_eq!(2, config.unlocked_free_cells);
        assert_eq!(30, config.max_depth);
        assert!(!config.allow_free_cells);
        let position = opts.get_position().unwrap();
        assert!(position.to_hash_string().ends_with("/FU/FU/"));
    }

    #[test]
    fn test_hash_position_is_checked() {
        let opts = parse(&["--hash", "SU0101/SU1010/SU/FL/", "--card-types", "2"]);
        let position = opts.get_position().unwrap();
        assert_eq!("SU0101/SU1010/SU/FL/", position.to_hash_string());

        let opts = parse(&["--hash", "SU0101/SU/FL/", "--card-types", "2"]);
        assert!(matches!(
            opts.get_position(),
            Err(CliError::Build(BuildError::CardCount(..)))
        ));
    }

    #[test]
    fn test_hash_conflicts_with_seed() {
        let res = SolveOpts::from_iter_safe(["solve", "--hash", "SU/", "--seed", "1"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_search_flags() {
        let opts = parse(&["-P", "1000", "-T", "50", "--parallel", "-D"]);
        let config = opts.search.get_greedy_config();
        assert_eq!(
            Some(SearchLimits {
                max_time_ms: Some(50),
                max_positions: Some(1000),
            }),
            config.limits
        );
        assert!(config.parallel);
        assert!(config.debug);
    }

    #[test]
    fn test_make_search_solves() {
        let opts = parse(&["--hash", "SU0101/SU1010/SU/FL/", "--card-types", "2", "-P", "10000"]);
        let root = opts.get_position().unwrap();
        let result = opts.make_search().solve(&root).unwrap();
        assert!(result.outcome.is_solved());
    }
}
