use instant::Instant;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;
use structopt::StructOpt;

use kabufuda_sim::prelude::*;
use kabufuda_sim_cli_utils::cli_args::{SolveOpts, DEFAULT_SEED};

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Kabufuda solitaire solver")]
pub enum BenchmarkOpts {
    #[structopt(help = "Solve one position given by hash or seed and print the moves.")]
    Solve {
        #[structopt(flatten)]
        opts: SolveOpts,

        #[structopt(long = "--json", help = "Print the move records as JSON")]
        json: bool,
    },
    #[structopt(help = "Solve a run of seeded deals and report the solve rate.")]
    Benchmark {
        #[structopt(flatten)]
        opts: SolveOpts,

        #[structopt(long = "--rounds", help = "Number of deals, seeded from --seed upward")]
        rounds: Option<u64>,

        #[structopt(long = "--parallel-rounds", help = "Solve deals concurrently")]
        parallel_rounds: bool,
    },
}

#[derive(Debug, Serialize)]
struct SolveReport {
    hash: String,
    outcome: &'static str,
    records: Vec<MoveRecord>,
    counter: SearchCounter,
}

fn outcome_name<A>(outcome: &SearchOutcome<A>) -> &'static str {
    match outcome {
        SearchOutcome::Solved { .. } => "solved",
        SearchOutcome::Exhausted => "exhausted",
        SearchOutcome::LimitReached => "limit_reached",
    }
}

fn solve(opts: &SolveOpts, json: bool) -> Result<(), String> {
    let root = opts.get_position().map_err(|e| e.to_string())?;
    if !json {
        println!("{root}");
    }

    let t0 = Instant::now();
    let SearchResult { outcome, counter } = opts.make_search().solve(&root).map_err(|e| format!("{e:?}"))?;
    let dt_ns = t0.elapsed().as_nanos();

    let mut log = EventLog::new(!json);
    let records = match outcome.solution() {
        Some([]) | None => vec![],
        Some(moves) => replay_with_log(&root, moves, &mut log).map_err(|e| e.to_string())?,
    };

    if json {
        let report = SolveReport {
            hash: root.to_hash_string(),
            outcome: outcome_name(&outcome),
            records,
            counter,
        };
        let s = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{s}");
        return Ok(());
    }

    log.print();
    match &outcome {
        SearchOutcome::Solved { moves } => println!("Solved in {} moves.", moves.len()),
        SearchOutcome::Exhausted => println!("No solution."),
        SearchOutcome::LimitReached => println!("Search limit reached."),
    }
    println!("{}", counter.summary(dt_ns));
    Ok(())
}

fn benchmark(opts: &SolveOpts, rounds: u64, parallel_rounds: bool) -> Result<(), String> {
    let first_seed = opts.position.seed.unwrap_or(DEFAULT_SEED);
    let t0 = Instant::now();
    let run_round = |i: u64| -> Result<(bool, SearchCounter), String> {
        let seed = first_seed.wrapping_add(i);
        let root = opts.position.get_position_with_seed(seed).map_err(|e| e.to_string())?;
        let t1 = Instant::now();
        let SearchResult { outcome, counter } = opts.make_search().solve(&root).map_err(|e| format!("{e:?}"))?;
        let dt_ns = t1.elapsed().as_nanos();
        println!(
            "- Round {:3} seed={seed} ... {:13} moves={:3} {}",
            i + 1,
            outcome_name(&outcome),
            outcome.solution().map_or(0, |m| m.len()),
            counter.summary(dt_ns)
        );
        Ok((outcome.is_solved(), counter))
    };

    let results: Vec<Result<(bool, SearchCounter), String>> = if parallel_rounds {
        (0..rounds).into_par_iter().map(run_round).collect()
    } else {
        (0..rounds).map(run_round).collect()
    };

    let mut solved = 0u64;
    let mut total = SearchCounter::ZERO;
    for result in results {
        let (is_solved, counter) = result?;
        solved += is_solved as u64;
        total.add_in_place(&counter);
    }
    let dt_ns = t0.elapsed().as_nanos();
    println!();
    println!("Solved {solved}/{rounds}");
    println!("Total: {}", total.summary(dt_ns));
    Ok(())
}

fn main() -> Result<(), String> {
    match BenchmarkOpts::from_args() {
        BenchmarkOpts::Solve { opts, json } => solve(&opts, json),
        BenchmarkOpts::Benchmark {
            opts,
            rounds,
            parallel_rounds,
        } => benchmark(&opts, rounds.unwrap_or(20), parallel_rounds),
    }
}
