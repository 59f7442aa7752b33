use crate::{Mark, RoundOutcome, CELL_COUNT, WIN_LINES};
use thiserror::Error;

/// Ways a board operation can be misused.  A correctly wired caller
/// validates input first, so neither variant is reachable from user input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell index {0} is outside the board")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    Occupied(usize),
}

/// The 3x3 grid, cells indexed 0-8 in row-major order.
///
/// `Board` is `Copy`: the search engine explores hypothetical moves on
/// value copies rather than mutating and undoing a shared board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// An empty board, ready for a fresh round.
    pub fn new() -> Self {
        Board {
            cells: [None; CELL_COUNT],
        }
    }

    /// The mark occupying the cell, if any.
    pub fn mark_at(&self, index: usize) -> Result<Option<Mark>, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::OutOfRange(index))
    }

    /// True if the cell holds no mark.
    pub fn is_vacant(&self, index: usize) -> Result<bool, BoardError> {
        Ok(self.mark_at(index)?.is_none())
    }

    /// Writes `mark` into a vacant cell.  This is the board's only
    /// mutation: a cell goes from vacant to occupied exactly once per
    /// round and never reverts until the board is replaced.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        match self.mark_at(index)? {
            Some(_) => Err(BoardError::Occupied(index)),
            None => {
                self.cells[index] = Some(mark);
                Ok(())
            }
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Indices of vacant cells, in ascending order.  Both the search
    /// engine's move enumeration and the random policy draw from this.
    pub fn vacant_indices(&self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(CELL_COUNT);

        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                indices.push(index);
            }
        }

        indices
    }

    /// Classifies the position: the first complete line in `WIN_LINES`
    /// order wins; a full board with no winner is a draw.
    pub fn outcome(&self) -> RoundOutcome {
        for line in &WIN_LINES {
            if let Some(mark) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(mark) && self.cells[line[2]] == Some(mark) {
                    return RoundOutcome::Win(mark);
                }
            }
        }

        if self.is_full() {
            RoundOutcome::Draw
        } else {
            RoundOutcome::Ongoing
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a board from 9 characters: 'X', 'O', or anything else for vacant.
    fn board(pattern: &str) -> Board {
        assert_eq!(CELL_COUNT, pattern.chars().count());

        let mut board = Board::new();

        for (index, c) in pattern.chars().enumerate() {
            let mark = match c {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => continue,
            };
            board.place(index, mark).unwrap();
        }

        board
    }

    #[test]
    fn board_can_place_and_get_mark() {
        let mut board = Board::new();

        let before = board.mark_at(4).unwrap();
        board.place(4, Mark::X).unwrap();
        let after = board.mark_at(4).unwrap();

        assert_eq!(None, before);
        assert_eq!(Some(Mark::X), after);
    }

    #[test]
    fn place_rejects_out_of_range_index() {
        let mut board = Board::new();

        assert_eq!(Err(BoardError::OutOfRange(9)), board.place(9, Mark::X));
        assert_eq!(Err(BoardError::OutOfRange(100)), board.place(100, Mark::O));
    }

    #[test]
    fn place_rejects_occupied_cell() {
        let mut board = Board::new();

        board.place(0, Mark::X).unwrap();

        assert_eq!(Err(BoardError::Occupied(0)), board.place(0, Mark::O));
        assert_eq!(Some(Mark::X), board.mark_at(0).unwrap());
    }

    #[test]
    fn is_vacant_checks_range() {
        let mut board = Board::new();
        board.place(3, Mark::O).unwrap();

        assert_eq!(Ok(true), board.is_vacant(0));
        assert_eq!(Ok(false), board.is_vacant(3));
        assert_eq!(Err(BoardError::OutOfRange(9)), board.is_vacant(9));
    }

    #[test]
    fn vacant_indices_are_ascending_and_shrink() {
        let mut board = Board::new();

        assert_eq!(vec![0, 1, 2, 3, 4, 5, 6, 7, 8], board.vacant_indices());

        board.place(4, Mark::X).unwrap();
        board.place(0, Mark::O).unwrap();

        assert_eq!(vec![1, 2, 3, 5, 6, 7, 8], board.vacant_indices());
    }

    #[test]
    fn empty_board_is_ongoing() {
        assert_eq!(RoundOutcome::Ongoing, Board::new().outcome());
        assert!(!Board::new().is_full());
    }

    #[test]
    fn each_line_wins_for_each_mark() {
        for line in &WIN_LINES {
            for &mark in &[Mark::X, Mark::O] {
                let mut board = Board::new();
                for &index in line {
                    board.place(index, mark).unwrap();
                }

                assert_eq!(RoundOutcome::Win(mark), board.outcome());
            }
        }
    }

    #[test]
    fn row_win_with_noise_is_detected() {
        // X X X
        // O O .
        // . . .
        let board = board("XXXOO....");

        assert_eq!(RoundOutcome::Win(Mark::X), board.outcome());
    }

    #[test]
    fn full_board_without_winner_is_draw_never_ongoing() {
        // X O X
        // X O O
        // O X X
        let board = board("XOXXOOOXX");

        assert!(board.is_full());
        assert_eq!(RoundOutcome::Draw, board.outcome());
    }

    #[test]
    fn partial_board_without_winner_is_ongoing() {
        let board = board("XO..X..O.");

        assert_eq!(RoundOutcome::Ongoing, board.outcome());
    }
}
