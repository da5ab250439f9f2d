use std::io::{self, Write};

use eyre::Result;

use crate::cli::SearchStrategy;
use crate::puzzle::Board;

/// the built-in demo board
const DEFAULT_PUZZLE: Board = Board::new([[7, 1, 2], [4, 8, 5], [6, 3, 0]]);

/// Offers the default board or a user-entered one. Input is validated here,
/// at the boundary, so the search core only ever sees real permutations.
pub fn choose_board() -> Result<Board> {
    println!("Welcome to the 8-puzzle solver.");
    println!("Type \"1\" to use the default puzzle, or \"2\" to enter your own.");

    match read_line("> ")?.trim() {
        "2" => read_board(),
        _ => Ok(DEFAULT_PUZZLE),
    }
}

fn read_board() -> Result<Board> {
    println!("Enter your puzzle row by row, three space-separated numbers per row, with 0 for the blank.");

    let mut tiles = Vec::with_capacity(9);
    for row in ["first", "second", "third"] {
        let line = read_line(&format!("Enter the {} row: ", row))?;
        for token in line.split_whitespace() {
            let tile = token
                .parse::<u8>()
                .map_err(|_| eyre::eyre!("'{}' is not a tile number", token))?;
            tiles.push(tile);
        }
    }

    Board::from_flat(&tiles)
}

/// Strategy menu with the 1/2/3 numbering of the original prompt.
pub fn choose_strategy() -> Result<SearchStrategy> {
    println!("Enter your choice of algorithm:");
    println!("1. Uniform Cost Search");
    println!("2. A* with Misplaced Tile heuristic");
    println!("3. A* with Manhattan distance heuristic");

    match read_line("> ")?.trim() {
        "1" => Ok(SearchStrategy::UniformCost),
        "2" => Ok(SearchStrategy::MisplacedTiles),
        "3" => Ok(SearchStrategy::Manhattan),
        other => eyre::bail!("unknown algorithm choice '{}'", other),
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
