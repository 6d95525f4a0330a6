use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::READ_POOL_SIZE;
use crate::db::models::{
    ComponentAveragesRow, MapCountRow, MvpCountRow, RoundWindowRow, SkillBracketRow,
};
use crate::error::Result;
use crate::types::{DayWindow, RoundRange};

/// Read-only queries over the match store. One method per aggregate the
/// digest needs; none of them write.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// MIN/MAX round id and round count for rounds created in `[start, end)`.
    async fn round_window(&self, day: &DayWindow) -> Result<RoundWindowRow>;

    /// Per-player averages of the four rating components, ordered by player id.
    async fn component_averages(&self, range: RoundRange) -> Result<Vec<ComponentAveragesRow>>;

    /// Per-player MVP counts, most MVPs first.
    async fn mvp_counts(&self, range: RoundRange) -> Result<Vec<MvpCountRow>>;

    /// For each player, the latest skill snapshot at or before `range.first`
    /// joined to the earliest snapshot at or after `range.last`.
    async fn skill_brackets(&self, range: RoundRange) -> Result<Vec<SkillBracketRow>>;

    /// Rounds per map, most played first.
    async fn map_round_counts(&self, range: RoundRange) -> Result<Vec<MapCountRow>>;
}

pub struct SqliteMatchStore {
    pool: SqlitePool,
}

impl SqliteMatchStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the store with read-only connections; any write attempt fails at SQLite.
    pub async fn open_read_only(db_path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .read_only(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(READ_POOL_SIZE)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl MatchStore for SqliteMatchStore {
    async fn round_window(&self, day: &DayWindow) -> Result<RoundWindowRow> {
        let (start, end) = day.store_bounds();
        let row = sqlx::query_as::<_, RoundWindowRow>(
            r#"
            SELECT MIN(round_id) AS first_round
                 , MAX(round_id) AS last_round
                 , COUNT(*)      AS round_count
            FROM rounds
            WHERE created_at >= ? AND created_at < ?
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn component_averages(&self, range: RoundRange) -> Result<Vec<ComponentAveragesRow>> {
        let rows = sqlx::query_as::<_, ComponentAveragesRow>(
            r#"
            SELECT players.player_id
                 , players.steam_name
                 , AVG(rc.kill_rating)   AS average_kills
                 , AVG(rc.death_rating)  AS average_deaths
                 , AVG(rc.damage_rating) AS average_damage
                 , AVG(rc.kas_rating)    AS average_kas
                 , COUNT(*)              AS rounds_played
            FROM rating_components rc
            JOIN players ON players.player_id = rc.player_id
            WHERE rc.round_id BETWEEN ? AND ?
            GROUP BY players.player_id, players.steam_name
            ORDER BY players.player_id
            "#,
        )
        .bind(range.first)
        .bind(range.last)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn mvp_counts(&self, range: RoundRange) -> Result<Vec<MvpCountRow>> {
        let rows = sqlx::query_as::<_, MvpCountRow>(
            r#"
            SELECT players.player_id
                 , players.steam_name
                 , COUNT(*) AS mvps
            FROM rounds
            JOIN players ON players.player_id = rounds.mvp
            WHERE rounds.round_id BETWEEN ? AND ?
            GROUP BY players.player_id, players.steam_name
            ORDER BY mvps DESC, players.player_id ASC
            "#,
        )
        .bind(range.first)
        .bind(range.last)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn skill_brackets(&self, range: RoundRange) -> Result<Vec<SkillBracketRow>> {
        let rows = sqlx::query_as::<_, SkillBracketRow>(
            r#"
            SELECT players.player_id
                 , players.steam_name
                 , earlier.skill_mean  AS earlier_skill_mean
                 , earlier.skill_stdev AS earlier_skill_stdev
                 , later.skill_mean    AS later_skill_mean
                 , later.skill_stdev   AS later_skill_stdev
            FROM players
            JOIN season_skill_history earlier
              ON earlier.player_id = players.player_id
             AND earlier.round_id = (
                    SELECT MAX(ssh_before.round_id)
                    FROM season_skill_history ssh_before
                    WHERE ssh_before.player_id = players.player_id
                      AND ssh_before.round_id <= ?
                 )
            JOIN season_skill_history later
              ON later.player_id = players.player_id
             AND later.round_id = (
                    SELECT MIN(ssh_after.round_id)
                    FROM season_skill_history ssh_after
                    WHERE ssh_after.player_id = players.player_id
                      AND ssh_after.round_id >= ?
                 )
            ORDER BY players.player_id
            "#,
        )
        .bind(range.first)
        .bind(range.last)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn map_round_counts(&self, range: RoundRange) -> Result<Vec<MapCountRow>> {
        let rows = sqlx::query_as::<_, MapCountRow>(
            r#"
            SELECT maps.map_name
                 , COUNT(*) AS round_count
            FROM rounds
            JOIN maps ON maps.map_id = rounds.map_id
            WHERE rounds.round_id BETWEEN ? AND ?
            GROUP BY maps.map_name
            ORDER BY round_count DESC, maps.map_name ASC
            "#,
        )
        .bind(range.first)
        .bind(range.last)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
