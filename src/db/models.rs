/// Row types returned by the match-store queries the digest consumes.
/// Used by sqlx for typed queries.

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RoundWindowRow {
    /// NULL when no round falls in the interval.
    pub first_round: Option<i64>,
    pub last_round: Option<i64>,
    pub round_count: i64,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ComponentAveragesRow {
    pub player_id: i64,
    pub steam_name: String,
    pub average_kills: f64,
    pub average_deaths: f64,
    pub average_damage: f64,
    pub average_kas: f64,
    pub rounds_played: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MvpCountRow {
    pub player_id: i64,
    pub steam_name: String,
    pub mvps: i64,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SkillBracketRow {
    pub player_id: i64,
    pub steam_name: String,
    pub earlier_skill_mean: f64,
    pub earlier_skill_stdev: f64,
    pub later_skill_mean: f64,
    pub later_skill_stdev: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MapCountRow {
    pub map_name: String,
    pub round_count: i64,
}
