//! Exhaustive game-tree search for the 3x3 board.
//!
//! The search enumerates the full remaining game tree depth-first, with no
//! pruning and no transposition cache; the tree is small enough that a
//! complete search finishes well within interactive time.

use lib_tic_tac_toe::{Board, Mark, RoundOutcome};

/// Score of a position the maximizer has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position the maximizer has lost.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Returns the game-theoretically optimal cell for `to_move`, assuming both
/// sides play perfectly from here on.  `to_move` is the maximizer.
///
/// Candidates are scanned in ascending cell order and the incumbent is only
/// replaced on strict improvement, so equal-scoring moves resolve to the
/// lowest index.  Same board and same mover always yield the same cell.
///
/// # Panics
///
/// Panics if the board has no vacant cell.  Callers only invoke the search
/// on ongoing positions.
pub fn best_move(board: &Board, to_move: Mark) -> usize {
    debug_assert_eq!(
        RoundOutcome::Ongoing,
        board.outcome(),
        "searched a terminal position"
    );

    let mut best: Option<(usize, i32)> = None;

    for index in board.vacant_indices() {
        let mut child = *board;
        child
            .place(index, to_move)
            .expect("a vacant index was occupied");

        let score = score_position(&child, to_move.opponent(), to_move);

        let improved = match best {
            None => true,
            Some((_, incumbent)) => score > incumbent,
        };

        if improved {
            best = Some((index, score));
        }
    }

    best.expect("no vacant cell to search").0
}

/// Scores a position relative to the fixed `maximizer`, with `to_move` the
/// side placing at this ply.
///
/// There is no depth discount: a win two plies away scores the same as a
/// win six plies away.
fn score_position(board: &Board, to_move: Mark, maximizer: Mark) -> i32 {
    match board.outcome() {
        RoundOutcome::Win(winner) => {
            if winner == maximizer {
                WIN_SCORE
            } else {
                LOSS_SCORE
            }
        }
        RoundOutcome::Draw => DRAW_SCORE,
        RoundOutcome::Ongoing => {
            let maximizing = to_move == maximizer;
            let mut best: Option<i32> = None;

            for index in board.vacant_indices() {
                let mut child = *board;
                child
                    .place(index, to_move)
                    .expect("a vacant index was occupied");

                let score = score_position(&child, to_move.opponent(), maximizer);

                best = Some(match best {
                    None => score,
                    Some(incumbent) if maximizing && score > incumbent => score,
                    Some(incumbent) if !maximizing && score < incumbent => score,
                    Some(incumbent) => incumbent,
                });
            }

            best.expect("an ongoing position had no vacant cell")
        }
    }
}
