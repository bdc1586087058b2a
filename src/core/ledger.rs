use crate::domain::model::{PlayerScoreRow, ScoreEntry, ScoreSubmission};

pub const MIN_SEATS: usize = 4;
pub const MAX_SEATS: usize = 5;

/// The score entry rows for one game, in seat order. Always holds 4 or 5
/// rows; resizing goes through `add_rows`/`remove_last_row` so the bounds
/// hold at every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLedger {
    rows: Vec<PlayerScoreRow>,
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreLedger {
    /// A fresh form starts at four players.
    pub fn new() -> Self {
        Self {
            rows: vec![PlayerScoreRow::default(); MIN_SEATS],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PlayerScoreRow] {
        &self.rows
    }

    pub fn add_rows(&mut self, n: usize) {
        for _ in 0..n {
            self.rows.push(PlayerScoreRow::default());
        }
    }

    /// Removes the final row. Refuses silently at the four-seat floor and
    /// returns whether a row was actually removed.
    pub fn remove_last_row(&mut self) -> bool {
        if self.rows.len() <= MIN_SEATS {
            return false;
        }
        self.rows.pop();
        true
    }

    /// Stores a raw points edit and returns the recomputed total.
    /// Unparseable input counts as zero; out-of-range seats are ignored.
    pub fn edit_points(&mut self, seat: usize, raw: &str) -> i32 {
        if let Some(row) = self.rows.get_mut(seat) {
            row.points = parse_or_zero(raw);
        }
        self.total()
    }

    pub fn edit_chombos(&mut self, seat: usize, raw: &str) {
        if let Some(row) = self.rows.get_mut(seat) {
            row.chombos = parse_or_zero(raw).max(0) as u32;
        }
    }

    pub fn set_player(&mut self, seat: usize, name: &str) {
        if let Some(row) = self.rows.get_mut(seat) {
            row.player = name.to_string();
        }
    }

    /// Sum of all rows' points. Authoritative input for the session sizer
    /// and the completion gate.
    pub fn total(&self) -> i32 {
        self.rows.iter().map(|row| row.points).sum()
    }

    /// Snapshot of the rows in seat order, as sent to the backend.
    pub fn submission(&self) -> ScoreSubmission {
        ScoreSubmission {
            scores: self
                .rows
                .iter()
                .map(|row| ScoreEntry {
                    player: row.player.clone(),
                    score: row.points,
                    chombos: row.chombos,
                })
                .collect(),
        }
    }
}

fn parse_or_zero(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}
