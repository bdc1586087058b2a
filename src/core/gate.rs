use crate::core::ledger::ScoreLedger;
use crate::domain::model::{PlayerScoreRow, SCORE_PER_PLAYER};

/// Submission readiness: every seat locked in and the total exactly on the
/// budget for the current player count. Pure; recomputed on every event and
/// never cached past a state change.
pub fn is_complete(ledger: &ScoreLedger) -> bool {
    ledger.rows().iter().all(PlayerScoreRow::is_locked_in)
        && ledger.total() == SCORE_PER_PLAYER * ledger.len() as i32
}
