use crate::puzzle::{Board, Position};

use super::traits::Heuristic;

/// Counts the non-blank tiles sitting on the wrong cell. The blank never
/// counts, so the goal scores 0.
pub struct MisplacedTiles;

impl Heuristic for MisplacedTiles {
    fn estimate(&self, board: &Board) -> u32 {
        let mut count = 0;
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::new(row, col);
                let tile = board.get(pos);
                if tile != 0 && tile != Board::GOAL.get(pos) {
                    count += 1;
                }
            }
        }
        count
    }

    fn name(&self) -> &'static str {
        "misplaced tiles"
    }
}
