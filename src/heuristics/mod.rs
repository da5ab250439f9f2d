mod manhattan;
mod misplaced;
pub mod traits;
mod zero;

pub use manhattan::ManhattanDistance;
pub use misplaced::MisplacedTiles;
pub use traits::Heuristic;
pub use zero::Zero;
