use crate::db::models::SkillBracketRow;
use crate::db::MatchStore;
use crate::error::Result;
use crate::skill::PlayerSnapshot;
use crate::types::{RoundRange, SkillChange};

/// Players whose skill group differs between their last snapshot at or
/// before `range.first` and their first snapshot at or after `range.last`.
/// Players without a snapshot on both sides are left out.
pub async fn skill_group_changes<S: MatchStore + ?Sized>(
    store: &S,
    range: RoundRange,
) -> Result<Vec<SkillChange>> {
    let rows = store.skill_brackets(range).await?;
    Ok(detect_changes(rows))
}

/// Keeps group changes only, highest resulting mmr first.
pub fn detect_changes(rows: Vec<SkillBracketRow>) -> Vec<SkillChange> {
    let mut changes: Vec<SkillChange> = rows
        .into_iter()
        .map(|row| SkillChange {
            previous: PlayerSnapshot::new(
                row.player_id,
                row.steam_name.clone(),
                row.earlier_skill_mean,
                row.earlier_skill_stdev,
            ),
            next: PlayerSnapshot::new(
                row.player_id,
                row.steam_name,
                row.later_skill_mean,
                row.later_skill_stdev,
            ),
        })
        .filter(|change| change.previous.skill_group != change.next.skill_group)
        .collect();

    changes.sort_by(|a, b| b.next.mmr.cmp(&a.next.mmr));
    changes
}
