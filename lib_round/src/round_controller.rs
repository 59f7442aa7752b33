use crate::ScoreLedger;
use lib_tic_tac_toe::{Board, Mark, MovePolicy, RoundOutcome};

/// Where the state machine currently stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round in progress.
    Idle,
    /// Round active; the given side must move next.
    AwaitingMove(Mark),
    /// The round reached a terminal position and awaits `finish_round`.
    RoundOver(RoundOutcome),
}

/// Presentation callbacks emitted as the round advances.  All methods
/// default to doing nothing, so an observer implements only what it
/// renders.
pub trait RoundObserver {
    fn move_applied(&mut self, _index: usize, _mark: Mark) {}

    /// The outcome here is always a win or a draw, never ongoing.
    fn round_over(&mut self, _outcome: RoundOutcome) {}

    fn board_reset(&mut self) {}
}

struct NullObserver;

impl RoundObserver for NullObserver {}

/// Per-round wiring: who opens, and which sides are computer-driven.
/// A side with no policy is human-driven and moves only via
/// `RoundController::submit_move`.
pub struct RoundConfig {
    pub first_mover: Mark,
    pub x_policy: Option<Box<dyn MovePolicy>>,
    pub o_policy: Option<Box<dyn MovePolicy>>,
}

impl RoundConfig {
    /// Two human players, X opening.
    pub fn two_human() -> Self {
        RoundConfig {
            first_mover: Mark::X,
            x_policy: None,
            o_policy: None,
        }
    }

    fn policy_for(&self, mark: Mark) -> Option<&dyn MovePolicy> {
        match mark {
            Mark::X => self.x_policy.as_deref(),
            Mark::O => self.o_policy.as_deref(),
        }
    }
}

/// The state machine that owns a round: it validates and applies moves,
/// flips the turn, invokes computer policies, and reports terminal
/// outcomes to the score ledger.  All board mutation is serialized
/// through this one struct; one submitted move is processed to
/// completion (including any synchronous computer replies) before the
/// next is accepted.
pub struct RoundController {
    board: Board,
    phase: RoundPhase,
    config: RoundConfig,
    scores: ScoreLedger,
    observer: Box<dyn RoundObserver>,
}

impl RoundController {
    pub fn new() -> Self {
        RoundController::with_observer(Box::new(NullObserver))
    }

    pub fn with_observer(observer: Box<dyn RoundObserver>) -> Self {
        RoundController {
            board: Board::new(),
            phase: RoundPhase::Idle,
            config: RoundConfig::two_human(),
            scores: ScoreLedger::new(),
            observer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn scores(&self) -> &ScoreLedger {
        &self.scores
    }

    /// Begins a fresh round under `config`.  Starting while a round is
    /// in progress abandons it without scoring it.  If the opening side
    /// is computer-driven it moves immediately; any pacing delay before
    /// showing that move is the presentation layer's business.
    pub fn start(&mut self, config: RoundConfig) {
        self.config = config;
        self.board = Board::new();
        self.observer.board_reset();
        self.phase = RoundPhase::AwaitingMove(self.config.first_mover);
        self.run_policy_turns();
    }

    /// A cell chosen by external (human) input.  Submissions that are
    /// out of range, aimed at an occupied cell, or made while no human
    /// move is awaited are ignored without any state change.
    pub fn submit_move(&mut self, index: usize) {
        let mover = match self.phase {
            RoundPhase::AwaitingMove(mark) => mark,
            _ => return,
        };

        // A policy-driven side never takes external input.
        if self.config.policy_for(mover).is_some() {
            return;
        }

        match self.board.is_vacant(index) {
            Ok(true) => {}
            _ => return,
        }

        self.apply_move(index, mover);
        self.run_policy_turns();
    }

    /// Closes out a finished round: tallies the outcome, clears the
    /// board, and opens the next round with the configured first mover.
    /// In any other phase this does nothing, so each round end is
    /// scored and reset exactly once.
    pub fn finish_round(&mut self) {
        let outcome = match self.phase {
            RoundPhase::RoundOver(outcome) => outcome,
            _ => return,
        };

        self.scores.record(outcome);
        self.board = Board::new();
        self.observer.board_reset();
        self.phase = RoundPhase::AwaitingMove(self.config.first_mover);
        self.run_policy_turns();
    }

    /// Lets computer-controlled sides move until a human must act or
    /// the round ends.
    fn run_policy_turns(&mut self) {
        loop {
            let mover = match self.phase {
                RoundPhase::AwaitingMove(mark) => mark,
                _ => return,
            };

            let legal_moves = self.board.vacant_indices();

            let index = match self.config.policy_for(mover) {
                Some(policy) => policy.select_move(&self.board, &legal_moves),
                None => return,
            };

            if !legal_moves.contains(&index) {
                panic!("policy for {:?} selected an illegal move: {}", mover, index);
            }

            self.apply_move(index, mover);
        }
    }

    fn apply_move(&mut self, index: usize, mover: Mark) {
        // Callers validate first; a failure here is a state machine bug.
        self.board
            .place(index, mover)
            .expect("applied a move to an unvalidated cell");

        self.observer.move_applied(index, mover);

        match self.board.outcome() {
            RoundOutcome::Ongoing => self.phase = RoundPhase::AwaitingMove(mover.opponent()),
            outcome => {
                self.phase = RoundPhase::RoundOver(outcome);
                self.observer.round_over(outcome);
            }
        }
    }
}

impl Default for RoundController {
    fn default() -> Self {
        RoundController::new()
    }
}
