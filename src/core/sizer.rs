use crate::core::ledger::ScoreLedger;
use crate::domain::model::SCORE_PER_PLAYER;

/// Total score budget of a four-player game. Crossing it is what tells the
/// form a fifth player must be in the game.
pub const FOUR_PLAYER_BUDGET: i32 = SCORE_PER_PLAYER * 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSize {
    Four,
    Five,
}

impl SessionSize {
    pub fn from_rows(rows: usize) -> Self {
        if rows == 4 {
            SessionSize::Four
        } else {
            SessionSize::Five
        }
    }
}

/// Which size-dependent help text the page should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreHint {
    FourPlayer,
    FivePlayer,
}

impl ScoreHint {
    pub fn from_rows(rows: usize) -> Self {
        if rows == 4 {
            ScoreHint::FourPlayer
        } else {
            ScoreHint::FivePlayer
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeStep {
    Grow,
    Shrink,
    Hold,
}

/// Transition rule, evaluated after every points edit.
///
/// Growing happens as soon as the total exceeds the four-player budget with
/// four rows; shrinking only on an exact return to that budget with five
/// rows. A five-row total *below* the budget holds — shrinking would throw
/// away a row the user may still be editing.
pub fn step(total: i32, rows: usize) -> SizeStep {
    if total > FOUR_PLAYER_BUDGET && rows == 4 {
        SizeStep::Grow
    } else if total == FOUR_PLAYER_BUDGET && rows == 5 {
        SizeStep::Shrink
    } else {
        SizeStep::Hold
    }
}

/// Runs one transition against the ledger and reports what happened.
pub fn apply(ledger: &mut ScoreLedger) -> SizeStep {
    let step = step(ledger.total(), ledger.len());
    match step {
        SizeStep::Grow => ledger.add_rows(1),
        SizeStep::Shrink => {
            ledger.remove_last_row();
        }
        SizeStep::Hold => {}
    }
    step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_when_total_exceeds_four_player_budget() {
        let mut ledger = ScoreLedger::new();
        ledger.edit_points(0, "100001");
        assert_eq!(apply(&mut ledger), SizeStep::Grow);
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn test_no_grow_at_exact_budget() {
        let mut ledger = ScoreLedger::new();
        ledger.edit_points(0, "100000");
        assert_eq!(apply(&mut ledger), SizeStep::Hold);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_shrink_on_exact_return_to_budget() {
        let mut ledger = ScoreLedger::new();
        ledger.edit_points(0, "110000");
        apply(&mut ledger);
        assert_eq!(ledger.len(), 5);

        ledger.edit_points(0, "100000");
        assert_eq!(apply(&mut ledger), SizeStep::Shrink);
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.total(), 100000);
    }

    #[test]
    fn test_no_shrink_below_budget_at_five_rows() {
        // Regression guard for the intentional asymmetry: dropping under the
        // four-player budget must not delete the fifth row.
        let mut ledger = ScoreLedger::new();
        ledger.edit_points(0, "110000");
        apply(&mut ledger);
        assert_eq!(ledger.len(), 5);

        ledger.edit_points(0, "50000");
        assert_eq!(apply(&mut ledger), SizeStep::Hold);
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn test_shrink_drops_fifth_row_points_from_total() {
        let mut ledger = ScoreLedger::new();
        ledger.edit_points(0, "110000");
        apply(&mut ledger);
        ledger.edit_points(4, "15000");

        ledger.edit_points(0, "85000");
        assert_eq!(ledger.total(), 100000);
        assert_eq!(apply(&mut ledger), SizeStep::Shrink);
        // The removed row's points leave the total with it.
        assert_eq!(ledger.total(), 85000);
    }

    #[test]
    fn test_hint_follows_row_count() {
        assert_eq!(ScoreHint::from_rows(4), ScoreHint::FourPlayer);
        assert_eq!(ScoreHint::from_rows(5), ScoreHint::FivePlayer);
        assert_eq!(SessionSize::from_rows(4), SessionSize::Four);
        assert_eq!(SessionSize::from_rows(5), SessionSize::Five);
    }
}
