use lib_tic_tac_toe::{Mark, RoundOutcome};

/// Win and draw tallies across the rounds of one session.  Counters only
/// ever grow; they reset with the process, not with the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreLedger {
    pub fn new() -> Self {
        ScoreLedger::default()
    }

    /// Tallies a finished round.  An ongoing position is not scoreable
    /// and leaves the ledger untouched.
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Win(Mark::X) => self.x_wins += 1,
            RoundOutcome::Win(Mark::O) => self.o_wins += 1,
            RoundOutcome::Draw => self.draws += 1,
            RoundOutcome::Ongoing => {}
        }
    }

    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn rounds_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
