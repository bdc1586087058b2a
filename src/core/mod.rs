pub mod editor;
pub mod gate;
pub mod ledger;
pub mod seating;
pub mod sizer;

pub use crate::domain::model::{
    PlayerScoreRow, PresentPlayer, ScoreSubmission, SeatLabel, Table, TableLayout,
    SCORE_PER_PLAYER,
};
pub use crate::utils::error::Result;
