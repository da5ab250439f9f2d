mod cli;
mod heuristics;
mod logging;
mod puzzle;
mod search;
mod ui;

use std::time::{Duration, Instant};

use clap::Parser;
use eyre::Result;
use log::{debug, info, warn};

use cli::{Args, Command, SearchStrategy};
use heuristics::{ManhattanDistance, MisplacedTiles, Zero};
use logging::Logger;
use puzzle::Board;
use search::{BestFirstSearch, SearchOutcome};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let board = match &args.puzzle {
        Some(tiles) => parse_puzzle(tiles)?,
        None => ui::choose_board()?,
    };

    if !board.is_solvable() {
        warn!("this puzzle has odd parity; the goal is unreachable and the search will exhaust the state space");
    }

    match args.command {
        Some(Command::Benchmark) => run_benchmark(board),
        Some(Command::Solve {
            strategy: Some(strategy),
        }) => run_solve(board, strategy),
        Some(Command::Solve { strategy: None }) | None => {
            let strategy = ui::choose_strategy()?;
            run_solve(board, strategy)
        }
    }
}

fn parse_puzzle(tiles: &str) -> Result<Board> {
    let tiles = tiles
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u8>()
                .map_err(|_| eyre::eyre!("'{}' is not a tile number", token))
        })
        .collect::<Result<Vec<_>>>()?;

    Board::from_flat(&tiles)
}

// ========== Solving ==========

fn solve_with(board: Board, strategy: SearchStrategy) -> SearchOutcome {
    match strategy {
        SearchStrategy::UniformCost => BestFirstSearch::new(Zero).run(board),
        SearchStrategy::MisplacedTiles => BestFirstSearch::new(MisplacedTiles).run(board),
        SearchStrategy::Manhattan => BestFirstSearch::new(ManhattanDistance).run(board),
    }
}

fn run_solve(board: Board, strategy: SearchStrategy) -> Result<()> {
    info!("solving with {}", strategy.name());
    debug!("initial board:\n{}", board);

    let planning_start = Instant::now();
    let outcome = solve_with(board, strategy);
    let planning_time = planning_start.elapsed();

    match &outcome {
        SearchOutcome::Solved { path, stats } => {
            ui::print_solution(path);
            ui::print_stats(outcome.depth(), stats);
            info!("solved in {:?}", planning_time);
        }
        SearchOutcome::Exhausted { stats } => {
            ui::print_failure(stats);
            info!("exhausted in {:?}", planning_time);
        }
    }

    Ok(())
}

// ========== Benchmark ==========

fn run_benchmark(board: Board) -> Result<()> {
    info!("benchmarking all strategies");

    let mut completed = Vec::new();

    for strategy in SearchStrategy::all() {
        info!("testing {}", strategy.name());

        let planning_start = Instant::now();
        let outcome = solve_with(board, strategy);
        let planning_time = planning_start.elapsed();

        match outcome {
            SearchOutcome::Solved { .. } => {
                completed.push((strategy.name(), outcome, planning_time));
            }
            SearchOutcome::Exhausted { .. } => {
                log::error!(
                    "{} exhausted the search space without reaching the goal",
                    strategy.name()
                );
            }
        }
    }

    print_benchmark_summary(&completed);
    Ok(())
}

fn print_benchmark_summary(results: &[(&str, SearchOutcome, Duration)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<26} {:>6} {:>10} {:>10} {:>12}",
        "strategy", "depth", "expanded", "frontier", "time"
    );
    info!("{:-<70}", "");

    for (name, outcome, time) in results {
        let stats = outcome.stats();
        info!(
            "{:<26} {:>6} {:>10} {:>10} {:>12?}",
            name,
            outcome.depth().unwrap_or(0),
            stats.expanded,
            stats.max_frontier,
            time,
        );
    }

    if let Some((name, outcome, _)) = results
        .iter()
        .min_by_key(|(_, outcome, _)| outcome.stats().expanded)
    {
        info!(
            "\nbest: {} ({} nodes expanded)",
            name,
            outcome.stats().expanded
        );
    }

    if let Some((name, _, time)) = results.iter().min_by_key(|(_, _, time)| *time) {
        info!("fastest: {} ({:?})", name, time);
    }
}
