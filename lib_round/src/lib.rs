mod round_controller;
mod score_ledger;

pub use round_controller::{RoundConfig, RoundController, RoundObserver, RoundPhase};
pub use score_ledger::ScoreLedger;
