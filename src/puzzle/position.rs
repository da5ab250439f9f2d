use super::board::SIZE;
use super::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// One step in `direction`, or None at the grid border.
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            Direction::Down if self.row < SIZE - 1 => Some(Self::new(self.row + 1, self.col)),
            Direction::Left if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            Direction::Right if self.col < SIZE - 1 => Some(Self::new(self.row, self.col + 1)),
            _ => None,
        }
    }
}
