use crate::core::gate;
use crate::core::ledger::ScoreLedger;
use crate::core::sizer::{self, ScoreHint, SessionSize};
use crate::domain::model::ScoreSubmission;

/// A user-visible event on the score form. `submit_key` marks the Enter
/// accelerator on score and player fields; it only turns into a submit
/// effect when the form is complete at that instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Loaded,
    PointsEdited {
        seat: usize,
        raw: String,
        submit_key: bool,
    },
    ChombosEdited {
        seat: usize,
        raw: String,
    },
    PlayerChosen {
        seat: usize,
        name: String,
        submit_key: bool,
    },
    /// A seating table was clicked: its players replace the form's seats.
    TableChosen {
        players: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEffect {
    None,
    Submit,
}

/// The full derived state projected to the page after an event. The page
/// renders from this alone; the DOM is never the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormState {
    pub total: i32,
    pub rows: usize,
    pub size: SessionSize,
    pub hint: ScoreHint,
    pub submit_enabled: bool,
}

/// Single reducer for the score entry page. One event runs ledger mutation,
/// then the session-size transition, then the completion gate, to completion
/// before the next event is accepted, so no torn intermediate state is ever
/// observable.
#[derive(Debug, Clone, Default)]
pub struct GameEditor {
    ledger: ScoreLedger,
}

impl GameEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// The submission payload for the current rows, in seat order.
    pub fn submission(&self) -> ScoreSubmission {
        self.ledger.submission()
    }

    pub fn state(&self) -> FormState {
        let rows = self.ledger.len();
        FormState {
            total: self.ledger.total(),
            rows,
            size: SessionSize::from_rows(rows),
            hint: ScoreHint::from_rows(rows),
            submit_enabled: gate::is_complete(&self.ledger),
        }
    }

    pub fn apply(&mut self, event: FormEvent) -> (FormState, FormEffect) {
        let mut submit_key = false;
        match event {
            FormEvent::Loaded => {}
            FormEvent::PointsEdited { seat, raw, submit_key: key } => {
                self.ledger.edit_points(seat, &raw);
                let step = sizer::apply(&mut self.ledger);
                tracing::debug!(
                    total = self.ledger.total(),
                    rows = self.ledger.len(),
                    ?step,
                    "points edited"
                );
                submit_key = key;
            }
            FormEvent::ChombosEdited { seat, raw } => {
                self.ledger.edit_chombos(seat, &raw);
            }
            FormEvent::PlayerChosen { seat, name, submit_key: key } => {
                self.ledger.set_player(seat, &name);
                submit_key = key;
            }
            FormEvent::TableChosen { players } => {
                self.load_table(&players);
            }
        }

        let state = self.state();
        let effect = if submit_key && state.submit_enabled {
            FormEffect::Submit
        } else {
            FormEffect::None
        };
        (state, effect)
    }

    /// Resizes the ledger to the chosen table through the normal add/remove
    /// operations, then writes its players into the seats in order.
    fn load_table(&mut self, players: &[String]) {
        while self.ledger.len() < players.len() {
            self.ledger.add_rows(1);
        }
        while self.ledger.len() > players.len() {
            if !self.ledger.remove_last_row() {
                break;
            }
        }
        for (seat, name) in players.iter().enumerate() {
            self.ledger.set_player(seat, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(seat: usize, raw: &str) -> FormEvent {
        FormEvent::PointsEdited {
            seat,
            raw: raw.to_string(),
            submit_key: false,
        }
    }

    fn player(seat: usize, name: &str) -> FormEvent {
        FormEvent::PlayerChosen {
            seat,
            name: name.to_string(),
            submit_key: false,
        }
    }

    #[test]
    fn test_loaded_state_starts_disabled_at_four_rows() {
        let mut editor = GameEditor::new();
        let (state, effect) = editor.apply(FormEvent::Loaded);
        assert_eq!(state.rows, 4);
        assert_eq!(state.total, 0);
        assert_eq!(state.hint, ScoreHint::FourPlayer);
        assert!(!state.submit_enabled);
        assert_eq!(effect, FormEffect::None);
    }

    #[test]
    fn test_edit_cascade_grows_form_and_flips_hint() {
        let mut editor = GameEditor::new();
        let (state, _) = editor.apply(points(0, "120000"));
        assert_eq!(state.rows, 5);
        assert_eq!(state.size, SessionSize::Five);
        assert_eq!(state.hint, ScoreHint::FivePlayer);
        assert!(!state.submit_enabled);
    }

    #[test]
    fn test_complete_game_enables_submit() {
        let mut editor = GameEditor::new();
        for (seat, name) in ["East", "South", "West", "North"].iter().enumerate() {
            editor.apply(player(seat, name));
        }
        editor.apply(points(0, "32000"));
        editor.apply(points(1, "28000"));
        editor.apply(points(2, "22000"));
        let (state, _) = editor.apply(points(3, "18000"));
        assert!(state.submit_enabled);
        assert_eq!(state.total, 100000);
    }

    #[test]
    fn test_submit_key_fires_only_when_complete() {
        let mut editor = GameEditor::new();
        for (seat, name) in ["A", "B", "C", "D"].iter().enumerate() {
            editor.apply(player(seat, name));
        }
        editor.apply(points(0, "32000"));
        editor.apply(points(1, "28000"));
        editor.apply(points(2, "22000"));

        let (_, effect) = editor.apply(FormEvent::PointsEdited {
            seat: 3,
            raw: "17000".to_string(),
            submit_key: true,
        });
        assert_eq!(effect, FormEffect::None);

        let (_, effect) = editor.apply(FormEvent::PointsEdited {
            seat: 3,
            raw: "18000".to_string(),
            submit_key: true,
        });
        assert_eq!(effect, FormEffect::Submit);
    }

    #[test]
    fn test_submit_key_on_player_field() {
        let mut editor = GameEditor::new();
        editor.apply(points(0, "32000"));
        editor.apply(points(1, "28000"));
        editor.apply(points(2, "22000"));
        editor.apply(points(3, "18000"));
        editor.apply(player(0, "A"));
        editor.apply(player(1, "B"));
        editor.apply(player(2, "C"));

        let (_, effect) = editor.apply(FormEvent::PlayerChosen {
            seat: 3,
            name: "D".to_string(),
            submit_key: true,
        });
        assert_eq!(effect, FormEffect::Submit);
    }

    #[test]
    fn test_chombos_do_not_touch_the_total() {
        let mut editor = GameEditor::new();
        editor.apply(points(0, "100000"));
        let (state, _) = editor.apply(FormEvent::ChombosEdited {
            seat: 0,
            raw: "3".to_string(),
        });
        assert_eq!(state.total, 100000);
        assert_eq!(editor.ledger().rows()[0].chombos, 3);
    }

    #[test]
    fn test_five_seat_table_grows_the_form() {
        let mut editor = GameEditor::new();
        let names: Vec<String> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (state, _) = editor.apply(FormEvent::TableChosen {
            players: names.clone(),
        });
        assert_eq!(state.rows, 5);
        let seated: Vec<&str> = editor
            .ledger()
            .rows()
            .iter()
            .map(|row| row.player.as_str())
            .collect();
        assert_eq!(seated, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_four_seat_table_shrinks_a_five_row_form() {
        let mut editor = GameEditor::new();
        editor.apply(FormEvent::TableChosen {
            players: ["A", "B", "C", "D", "E"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        });
        let (state, _) = editor.apply(FormEvent::TableChosen {
            players: ["W", "X", "Y", "Z"].iter().map(|s| s.to_string()).collect(),
        });
        assert_eq!(state.rows, 4);
        let seated: Vec<&str> = editor
            .ledger()
            .rows()
            .iter()
            .map(|row| row.player.as_str())
            .collect();
        assert_eq!(seated, vec!["W", "X", "Y", "Z"]);
    }
}
