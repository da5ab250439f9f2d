use crate::puzzle::Board;

/// Scores how far a board looks from the goal. Implementations are pure
/// functions of the board; the search engine never caches estimates.
pub trait Heuristic {
    fn estimate(&self, board: &Board) -> u32;

    #[allow(dead_code)]
    fn name(&self) -> &'static str;
}
