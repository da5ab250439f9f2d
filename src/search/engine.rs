use crate::heuristics::Heuristic;
use crate::puzzle::Board;

use super::arena::{Arena, Node};
use super::frontier::Frontier;
use super::outcome::{SearchOutcome, SearchStats, Step};
use super::visited::VisitedSet;

/// Best-first search over 8-puzzle boards, parameterized by the heuristic
/// that scores pending nodes: `Zero` yields uniform-cost search, an
/// admissible heuristic yields A*.
pub struct BestFirstSearch<H: Heuristic> {
    heuristic: H,
}

impl<H: Heuristic> BestFirstSearch<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// Runs the search to one of its two terminal states. `initial` must be
    /// a permutation of 0..=8 (external input goes through
    /// `Board::from_flat` first).
    ///
    /// Every node created during the run is kept in an arena until the run
    /// returns, so the winning node's parent chain can always be walked.
    pub fn run(&self, initial: Board) -> SearchOutcome {
        let mut arena = Arena::new();
        let mut frontier = Frontier::new();
        let mut visited = VisitedSet::new();
        let mut stats = SearchStats::default();

        let root = arena.push(Node {
            board: initial,
            g: 0,
            h: self.heuristic.estimate(&initial),
            moved: None,
            parent: None,
        });
        frontier.push(arena.get(root).f(), root);
        visited.mark_queued(initial.key());
        stats.observe_frontier(frontier.len());

        while let Some(id) = frontier.pop() {
            let node = *arena.get(id);
            visited.mark_expanded(node.board.key());

            if node.board.is_goal() {
                let path = arena
                    .trace(id)
                    .into_iter()
                    .map(|node| Step {
                        board: node.board,
                        g: node.g,
                        h: node.h,
                        moved: node.moved,
                    })
                    .collect();
                return SearchOutcome::Solved { path, stats };
            }

            let successors = node.board.successors();
            if !successors.is_empty() {
                stats.expanded += 1;
            }

            for (direction, board) in successors {
                let key = board.key();
                if visited.seen(&key) {
                    continue;
                }

                let h = self.heuristic.estimate(&board);
                let child = arena.push(Node {
                    board,
                    g: node.g + 1,
                    h,
                    moved: Some(direction),
                    parent: Some(id),
                });
                frontier.push(node.g + 1 + h, child);
                visited.mark_queued(key);
            }

            stats.observe_frontier(frontier.len());
        }

        SearchOutcome::Exhausted { stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::{ManhattanDistance, MisplacedTiles, Zero};
    use crate::puzzle::Direction;

    fn depth(outcome: &SearchOutcome) -> u32 {
        outcome.depth().expect("expected a solved outcome")
    }

    #[test]
    fn initial_goal_solves_at_depth_zero() {
        let outcome = BestFirstSearch::new(Zero).run(Board::GOAL);

        let SearchOutcome::Solved { path, stats } = outcome else {
            panic!("goal board should solve immediately");
        };
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].g, 0);
        assert!(path[0].moved.is_none());
        assert!(path[0].board.is_goal());
        assert_eq!(stats.expanded, 0);
    }

    #[test]
    fn one_slide_from_goal_solves_at_depth_one() {
        let board = Board::new([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);

        let outcome = BestFirstSearch::new(ManhattanDistance).run(board);
        let SearchOutcome::Solved { path, .. } = outcome else {
            panic!("expected a solution");
        };

        assert_eq!(path.len(), 2);
        assert_eq!(path[1].moved, Some(Direction::Right));
        assert!(path[1].board.is_goal());
        assert_eq!(path[1].h, 0);
    }

    #[test]
    fn path_starts_at_the_root_and_ends_on_the_goal() {
        let board = Board::new([[7, 1, 2], [4, 8, 5], [6, 3, 0]]);

        let outcome = BestFirstSearch::new(ManhattanDistance).run(board);
        let SearchOutcome::Solved { path, stats } = outcome else {
            panic!("default puzzle is solvable");
        };

        assert_eq!(path[0].board, board);
        assert!(path[0].moved.is_none());
        assert!(path.last().unwrap().board.is_goal());
        assert!(stats.expanded > 0);
        assert!(stats.max_frontier > 0);

        // each consecutive pair must be one legal slide apart
        for pair in path.windows(2) {
            let moved = pair[1].moved.expect("non-root steps carry a move");
            assert_eq!(pair[0].board.slide(moved), Some(pair[1].board));
            assert_eq!(pair[1].g, pair[0].g + 1);
        }
    }

    #[test]
    fn all_strategies_agree_on_the_minimum_depth() {
        let board = Board::new([[7, 1, 2], [4, 8, 5], [6, 3, 0]]);

        let uniform = BestFirstSearch::new(Zero).run(board);
        let misplaced = BestFirstSearch::new(MisplacedTiles).run(board);
        let manhattan = BestFirstSearch::new(ManhattanDistance).run(board);

        assert_eq!(depth(&uniform), depth(&misplaced));
        assert_eq!(depth(&uniform), depth(&manhattan));
    }

    #[test]
    fn informed_search_expands_no_more_than_uniform_cost() {
        let board = Board::new([[7, 1, 2], [4, 8, 5], [6, 3, 0]]);

        let uniform = BestFirstSearch::new(Zero).run(board);
        let manhattan = BestFirstSearch::new(ManhattanDistance).run(board);

        assert!(manhattan.stats().expanded <= uniform.stats().expanded);
    }

    #[test]
    fn odd_parity_board_exhausts_the_search_space() {
        // goal with two non-blank tiles swapped is unreachable
        let board = Board::new([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert!(!board.is_solvable());

        let outcome = BestFirstSearch::new(ManhattanDistance).run(board);
        let SearchOutcome::Exhausted { stats } = outcome else {
            panic!("odd-parity board must exhaust the frontier");
        };

        // exactly half of the 9! permutations are reachable, and with the
        // either-set dedup policy each is expanded exactly once
        assert_eq!(stats.expanded, 181_440);
        assert!(stats.max_frontier > 0);
    }
}
