use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "eight-solver")]
#[command(about = "8-puzzle solver with multiple best-first strategies")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Initial board as nine row-major tiles with 0 for the blank,
    /// e.g. "7 1 2 4 8 5 6 3 0"; prompts interactively when absent
    #[arg(short, long, value_name = "TILES")]
    pub puzzle: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve the board with a single strategy
    Solve {
        /// Search strategy to use; prompts interactively when absent
        #[arg(value_enum)]
        strategy: Option<SearchStrategy>,
    },

    /// Run every strategy on the same board and compare
    Benchmark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchStrategy {
    /// Uniform-cost search (zero heuristic)
    #[value(name = "uniform", alias = "ucs")]
    UniformCost,

    /// A* with the misplaced-tile heuristic
    #[value(name = "misplaced")]
    MisplacedTiles,

    /// A* with the Manhattan-distance heuristic
    #[value(name = "manhattan")]
    Manhattan,
}

impl SearchStrategy {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::UniformCost, Self::MisplacedTiles, Self::Manhattan].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UniformCost => "Uniform Cost",
            Self::MisplacedTiles => "A* (Misplaced Tile)",
            Self::Manhattan => "A* (Manhattan Distance)",
        }
    }
}
