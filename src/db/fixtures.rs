//! In-memory match stores for tests. The service itself never writes; these
//! helpers seed the schema from `migrations/` and insert hand-built rows.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::db::SqliteMatchStore;

/// Single-connection pool so every query sees the same in-memory database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("match store schema");
    pool
}

pub fn store(pool: &SqlitePool) -> SqliteMatchStore {
    SqliteMatchStore::new(pool.clone())
}

pub async fn insert_player(pool: &SqlitePool, player_id: i64, steam_name: &str) {
    sqlx::query("INSERT INTO players (player_id, steam_name) VALUES (?, ?)")
        .bind(player_id)
        .bind(steam_name)
        .execute(pool)
        .await
        .expect("insert player");
}

pub async fn insert_map(pool: &SqlitePool, map_id: i64, map_name: &str) {
    sqlx::query("INSERT INTO maps (map_id, map_name) VALUES (?, ?)")
        .bind(map_id)
        .bind(map_name)
        .execute(pool)
        .await
        .expect("insert map");
}

/// `created_at` uses the store's text form, e.g. `2024-03-01 13:05:00`.
pub async fn insert_round(
    pool: &SqlitePool,
    round_id: i64,
    created_at: &str,
    map_id: i64,
    mvp: Option<i64>,
) {
    sqlx::query("INSERT INTO rounds (round_id, created_at, map_id, mvp) VALUES (?, ?, ?, ?)")
        .bind(round_id)
        .bind(created_at)
        .bind(map_id)
        .bind(mvp)
        .execute(pool)
        .await
        .expect("insert round");
}

/// Components in order: kill, death, damage, kas.
pub async fn insert_components(pool: &SqlitePool, round_id: i64, player_id: i64, components: [f64; 4]) {
    sqlx::query(
        r#"
        INSERT INTO rating_components
            (round_id, player_id, kill_rating, death_rating, damage_rating, kas_rating)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(round_id)
    .bind(player_id)
    .bind(components[0])
    .bind(components[1])
    .bind(components[2])
    .bind(components[3])
    .execute(pool)
    .await
    .expect("insert rating components");
}

pub async fn insert_skill(
    pool: &SqlitePool,
    player_id: i64,
    round_id: i64,
    skill_mean: f64,
    skill_stdev: f64,
) {
    sqlx::query(
        r#"
        INSERT INTO season_skill_history (player_id, round_id, skill_mean, skill_stdev)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(player_id)
    .bind(round_id)
    .bind(skill_mean)
    .bind(skill_stdev)
    .execute(pool)
    .await
    .expect("insert skill snapshot");
}
