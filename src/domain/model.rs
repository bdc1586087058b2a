use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting points per player in a hanchan. A finished game's scores must
/// sum to `SCORE_PER_PLAYER * players`.
pub const SCORE_PER_PLAYER: i32 = 25_000;

/// One seat of the score entry form. The player selection doubles as the
/// completion mark: an empty `player` means the seat is not locked in yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerScoreRow {
    pub player: String,
    pub points: i32,
    pub chombos: u32,
}

impl PlayerScoreRow {
    pub fn is_locked_in(&self) -> bool {
        !self.player.is_empty()
    }
}

/// A member of the seating pool, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentPlayer {
    pub name: String,
    pub priority: bool,
}

impl PresentPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: false,
        }
    }
}

/// Presentational seat marker. The first four seats of every table carry the
/// wind glyphs, a fifth seat gets the club's numeral marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatLabel {
    East,
    South,
    West,
    North,
    Extra,
}

impl SeatLabel {
    pub fn glyph(&self) -> &'static str {
        match self {
            SeatLabel::East => "東",
            SeatLabel::South => "南",
            SeatLabel::West => "西",
            SeatLabel::North => "北",
            SeatLabel::Extra => "５",
        }
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub player: String,
    pub label: SeatLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub seats: Vec<Seat>,
}

impl Table {
    pub fn size(&self) -> usize {
        self.seats.len()
    }
}

/// A full seating chart. Rebuilt from scratch on every partition request,
/// never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub tables: Vec<Table>,
}

impl TableLayout {
    pub fn player_count(&self) -> usize {
        self.tables.iter().map(Table::size).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player: String,
    pub score: i32,
    pub chombos: u32,
}

/// Built once at submit time from the ledger and handed to the transport.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub scores: Vec<ScoreEntry>,
}

/// Generic backend reply for mutating endpoints: status 0 is success,
/// anything else carries a user-facing message.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: i64,
    #[serde(default)]
    pub error: Option<String>,
}
