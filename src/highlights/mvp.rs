use crate::db::models::MvpCountRow;
use crate::db::MatchStore;
use crate::error::Result;
use crate::types::{MvpEntry, RoundRange};

/// Player named MVP most often in `range`. None when no round recorded an MVP.
pub async fn most_mvps<S: MatchStore + ?Sized>(store: &S, range: RoundRange) -> Result<Option<MvpEntry>> {
    let rows = store.mvp_counts(range).await?;
    Ok(mvp_leader(rows))
}

/// Ties on count go to the lowest player id.
pub fn mvp_leader(rows: Vec<MvpCountRow>) -> Option<MvpEntry> {
    rows.into_iter()
        .min_by(|a, b| b.mvps.cmp(&a.mvps).then(a.player_id.cmp(&b.player_id)))
        .map(|row| MvpEntry {
            player_id: row.player_id,
            steam_name: row.steam_name,
            mvps: row.mvps,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures;

    fn row(player_id: i64, mvps: i64) -> MvpCountRow {
        MvpCountRow {
            player_id,
            steam_name: format!("player{player_id}"),
            mvps,
        }
    }

    #[test]
    fn leader_has_the_highest_count() {
        let leader = mvp_leader(vec![row(1, 2), row(2, 5), row(3, 4)]).unwrap();
        assert_eq!(leader.player_id, 2);
        assert_eq!(leader.mvps, 5);
    }

    #[test]
    fn tie_returns_the_true_maximum() {
        let leader = mvp_leader(vec![row(4, 3), row(2, 3), row(1, 1)]).unwrap();
        assert_eq!(leader.mvps, 3);
        assert_eq!(leader.player_id, 2);
    }

    #[test]
    fn no_mvps_is_none() {
        assert!(mvp_leader(Vec::new()).is_none());
    }

    #[tokio::test]
    async fn counts_only_rounds_in_range() {
        let pool = fixtures::memory_pool().await;
        fixtures::insert_map(&pool, 1, "de_overpass").await;
        fixtures::insert_player(&pool, 1, "alpha").await;
        fixtures::insert_player(&pool, 2, "bravo").await;
        fixtures::insert_round(&pool, 1, "2024-03-01 18:00:00", 1, Some(1)).await;
        fixtures::insert_round(&pool, 2, "2024-03-01 18:02:00", 1, Some(2)).await;
        fixtures::insert_round(&pool, 3, "2024-03-01 18:04:00", 1, Some(2)).await;
        fixtures::insert_round(&pool, 4, "2024-03-01 18:06:00", 1, None).await;
        fixtures::insert_round(&pool, 5, "2024-03-02 18:00:00", 1, Some(1)).await;
        fixtures::insert_round(&pool, 6, "2024-03-02 18:02:00", 1, Some(1)).await;

        let leader = most_mvps(&fixtures::store(&pool), RoundRange { first: 1, last: 4 })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(leader.steam_name, "bravo");
        assert_eq!(leader.mvps, 2);
    }

    #[tokio::test]
    async fn rounds_without_mvp_yield_none() {
        let pool = fixtures::memory_pool().await;
        fixtures::insert_map(&pool, 1, "de_overpass").await;
        fixtures::insert_round(&pool, 1, "2024-03-01 18:00:00", 1, None).await;
        fixtures::insert_round(&pool, 2, "2024-03-01 18:02:00", 1, None).await;

        let leader = most_mvps(&fixtures::store(&pool), RoundRange { first: 1, last: 2 })
            .await
            .unwrap();
        assert!(leader.is_none());
    }
}
