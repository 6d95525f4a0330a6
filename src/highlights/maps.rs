use crate::db::MatchStore;
use crate::error::Result;
use crate::types::{MapCount, MostPlayedMaps, RoundRange};

/// Rounds per map in `range`, most played first.
pub async fn most_played_maps<S: MatchStore + ?Sized>(store: &S, range: RoundRange) -> Result<MostPlayedMaps> {
    let counts = store
        .map_round_counts(range)
        .await?
        .into_iter()
        .map(|row| MapCount {
            map_name: row.map_name,
            round_count: row.round_count,
        })
        .collect();
    Ok(rank_maps(counts))
}

/// Count descending, then map name, so equal counts render the same every time.
pub fn rank_maps(mut counts: Vec<MapCount>) -> MostPlayedMaps {
    counts.sort_by(|a, b| {
        b.round_count
            .cmp(&a.round_count)
            .then_with(|| a.map_name.cmp(&b.map_name))
    });
    MostPlayedMaps(counts)
}
