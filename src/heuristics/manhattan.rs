use crate::puzzle::{Board, Position};

use super::traits::Heuristic;

/// Sums, over every non-blank tile, the row and column offsets between the
/// tile's current cell and its goal cell. Admissible and consistent: one
/// slide moves one tile one cell, so the estimate changes by at most 1.
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn estimate(&self, board: &Board) -> u32 {
        let mut distance = 0;
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::new(row, col);
                let tile = board.get(pos);
                if tile != 0 {
                    distance += pos.manhattan_distance(Board::goal_position(tile)) as u32;
                }
            }
        }
        distance
    }

    fn name(&self) -> &'static str {
        "manhattan distance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_scores_zero() {
        assert_eq!(ManhattanDistance.estimate(&Board::GOAL), 0);
    }

    #[test]
    fn sums_tile_offsets() {
        let board = Board::new([[7, 1, 2], [4, 8, 5], [6, 3, 0]]);
        assert_eq!(ManhattanDistance.estimate(&board), 12);
    }

    #[test]
    fn one_slide_changes_the_estimate_by_at_most_one() {
        let boards = [
            Board::GOAL,
            Board::new([[7, 1, 2], [4, 8, 5], [6, 3, 0]]),
            Board::new([[1, 2, 3], [4, 5, 6], [7, 0, 8]]),
            Board::new([[0, 8, 7], [6, 5, 4], [3, 2, 1]]),
        ];

        for board in boards {
            let here = ManhattanDistance.estimate(&board) as i64;
            for (direction, successor) in board.successors() {
                let there = ManhattanDistance.estimate(&successor) as i64;
                assert!(
                    (there - here).abs() <= 1,
                    "sliding {} changed the estimate from {} to {}",
                    direction,
                    here,
                    there
                );
            }
        }
    }
}
