use colored::Colorize;

use crate::puzzle::{Board, Position};
use crate::search::{SearchStats, Step};

/// Prints the root-first solution path: each step's g(n), h(n) and the move
/// that produced it, followed by the resulting board.
pub fn print_solution(path: &[Step]) {
    for step in path {
        match step.moved {
            None => println!("{}", "Expanding initial state".bold()),
            Some(direction) => println!(
                "Best state to expand with g(n) = {} and h(n) = {}, moving the blank {}",
                step.g,
                step.h,
                direction.as_str().cyan()
            ),
        }
        print_board(&step.board);
    }

    println!("{}", "Goal state reached".green().bold());
}

pub fn print_stats(depth: Option<u32>, stats: &SearchStats) {
    if let Some(depth) = depth {
        println!("Solution depth was {}", depth);
    }
    println!("Number of nodes expanded: {}", stats.expanded);
    println!("Max queue size: {}", stats.max_frontier);
}

pub fn print_failure(stats: &SearchStats) {
    println!(
        "{}",
        "No nodes left to traverse, search failed".red().bold()
    );
    println!("At the point of exhaustion:");
    print_stats(None, stats);
}

fn print_board(board: &Board) {
    for row in 0..3 {
        for col in 0..3 {
            let tile = board.get(Position::new(row, col));
            if tile == 0 {
                print!("{} ", "0".dimmed());
            } else {
                print!("{} ", tile);
            }
        }
        println!();
    }
    println!();
}
