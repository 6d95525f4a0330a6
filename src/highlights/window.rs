use crate::db::models::RoundWindowRow;
use crate::db::MatchStore;
use crate::error::Result;
use crate::types::{DayWindow, RoundRange, RoundWindow};

/// Resolve the rounds created inside `day` to an inclusive round-id range.
/// A day with no rounds yields `rounds_played == 0` and no range.
pub async fn resolve_round_window<S: MatchStore + ?Sized>(
    store: &S,
    day: &DayWindow,
) -> Result<RoundWindow> {
    let row = store.round_window(day).await?;
    Ok(round_window_from_row(row))
}

fn round_window_from_row(row: RoundWindowRow) -> RoundWindow {
    let range = match (row.round_count, row.first_round, row.last_round) {
        (count, Some(first), Some(last)) if count > 0 => Some(RoundRange { first, last }),
        _ => None,
    };
    RoundWindow {
        rounds_played: if range.is_some() { row.round_count } else { 0 },
        range,
    }
}
