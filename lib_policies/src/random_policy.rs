use crate::util::random_choice;
use lib_tic_tac_toe::{Board, MovePolicy};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::cell::RefCell;

/// Picks uniformly at random among the vacant cells.
pub struct RandomPolicy<R: Rng> {
    rng: RefCell<R>,
}

impl<R: Rng> RandomPolicy<R> {
    /// The RNG is supplied by the caller; seed it for reproducible play.
    pub fn new(rng: R) -> Self {
        RandomPolicy {
            rng: RefCell::new(rng),
        }
    }
}

impl RandomPolicy<ThreadRng> {
    /// A policy backed by the thread-local RNG.
    pub fn from_entropy() -> Self {
        RandomPolicy::new(rand::thread_rng())
    }
}

impl<R: Rng> MovePolicy for RandomPolicy<R> {
    fn select_move(&self, _board: &Board, legal_moves: &[usize]) -> usize {
        random_choice(legal_moves, &mut *self.rng.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_tic_tac_toe::Mark;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn seeded_rng() -> XorShiftRng {
        XorShiftRng::from_seed(*b"tic-tac-toe-seed")
    }

    #[test]
    fn random_policy_only_picks_legal_cells() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        board.place(8, Mark::X).unwrap();

        let legal_moves = board.vacant_indices();
        let policy = RandomPolicy::new(seeded_rng());

        for _ in 0..100 {
            let index = policy.select_move(&board, &legal_moves);
            assert!(legal_moves.contains(&index));
        }
    }

    #[test]
    fn random_policy_is_roughly_uniform() {
        // Four vacant cells, 4000 draws: each should land near 1000.
        let mut board = Board::new();
        for &index in &[0, 2, 6, 8] {
            board.place(index, Mark::X).unwrap();
        }
        board.place(4, Mark::O).unwrap();

        let legal_moves = board.vacant_indices();
        assert_eq!(vec![1, 3, 5, 7], legal_moves);

        let policy = RandomPolicy::new(seeded_rng());
        let mut counts = [0u32; 9];

        for _ in 0..4_000 {
            counts[policy.select_move(&board, &legal_moves)] += 1;
        }

        for &index in &legal_moves {
            assert!(
                counts[index] > 800 && counts[index] < 1_200,
                "cell {} drawn {} times out of 4000",
                index,
                counts[index]
            );
        }
    }
}
