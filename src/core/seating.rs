use crate::domain::model::{PresentPlayer, Seat, SeatLabel, Table, TableLayout};
use crate::utils::error::{LeagueError, Result};

/// How many 4-seat and 5-seat tables a session needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePlan {
    pub tables4: usize,
    pub tables5: usize,
}

impl TablePlan {
    pub fn total_tables(&self) -> usize {
        self.tables4 + self.tables5
    }

    pub fn player_count(&self) -> usize {
        self.tables4 * 4 + self.tables5 * 5
    }

    /// Table sizes in build order: all 4-seat tables first, then 5-seat.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        std::iter::repeat(4)
            .take(self.tables4)
            .chain(std::iter::repeat(5).take(self.tables5))
    }
}

/// Decides the table mix for `n` present players.
///
/// Counts that cannot be split into only 4- and 5-seat tables (0, 1–3, 6, 7
/// and 11) are rejected. For n >= 8, `n mod 4` is already the minimal number
/// of 5-seat tables needed to absorb the remainder, since each 5-seat table
/// takes one extra player versus a 4-seat one.
pub fn plan_tables(n: usize) -> Result<TablePlan> {
    if n < 4 || n == 6 || n == 7 || n == 11 {
        return Err(LeagueError::InvalidPlayerCount { count: n });
    }
    if n >= 8 {
        let tables5 = n % 4;
        let total_tables = n / 4;
        Ok(TablePlan {
            tables4: total_tables - tables5,
            tables5,
        })
    } else if n == 5 {
        Ok(TablePlan {
            tables4: 0,
            tables5: 1,
        })
    } else {
        Ok(TablePlan {
            tables4: 1,
            tables5: 0,
        })
    }
}

/// Label for the `seat_index`-th seat of a table. Purely presentational and
/// kept apart from the size/order arithmetic.
pub fn seat_label(seat_index: usize) -> SeatLabel {
    match seat_index {
        0 => SeatLabel::East,
        1 => SeatLabel::South,
        2 => SeatLabel::West,
        3 => SeatLabel::North,
        _ => SeatLabel::Extra,
    }
}

/// Splits the present players into a seating chart, preserving input order:
/// the first players fill the first table, and so on. Deterministic, so the
/// same pool always produces the same chart.
pub fn partition(players: &[PresentPlayer]) -> Result<TableLayout> {
    let plan = plan_tables(players.len())?;

    let mut tables = Vec::with_capacity(plan.total_tables());
    let mut taken = 0;
    for size in plan.sizes() {
        let seats = players[taken..taken + size]
            .iter()
            .enumerate()
            .map(|(seat_index, player)| Seat {
                player: player.name.clone(),
                label: seat_label(seat_index),
            })
            .collect();
        tables.push(Table { seats });
        taken += size;
    }
    // The plan arithmetic guarantees every player is seated exactly once.
    debug_assert_eq!(taken, players.len());

    Ok(TableLayout { tables })
}
