use lib_tic_tac_toe::{Board, Mark, MovePolicy};

/// Plays perfectly: every move comes from an exhaustive search of the
/// remaining game tree, with this policy's mark as the maximizer.  The
/// worst it can do from an empty board is draw.
pub struct OptimalPolicy {
    mark: Mark,
}

impl OptimalPolicy {
    /// A policy playing for `mark`.
    pub fn new(mark: Mark) -> Self {
        OptimalPolicy { mark }
    }
}

impl MovePolicy for OptimalPolicy {
    fn select_move(&self, board: &Board, _legal_moves: &[usize]) -> usize {
        minimax_search::best_move(board, self.mark)
    }
}
