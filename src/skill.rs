use serde::Serialize;

pub const SKILL_MEAN: f64 = 1000.0;
pub const SKILL_STDEV: f64 = SKILL_MEAN / 4.0;
pub const SKILL_GROUP_SPACING: f64 = SKILL_STDEV * 0.3;

/// Ordered from lowest to highest. Group 0 has no lower bound; group `i`
/// starts at `SKILL_GROUP_SPACING * i`.
pub const SKILL_GROUP_NAMES: [&str; 21] = [
    "Scrub",
    "Staff Scrub",
    "Scrub First Class",
    "Cardboard I",
    "Cardboard II",
    "Cardboard III",
    "Cardboard IV",
    "Cardboard Elite",
    "Plastic I",
    "Plastic II",
    "Plastic III",
    "Plastic Elite",
    "Plastic Elite Master",
    "Legendary Wood",
    "Legendary Wood Master",
    "Supreme Legendary Wood",
    "Garb Salad",
    "Master Garbian I",
    "Master Garbian II",
    "Master Garbian Elite",
    "Low-Key Dirty",
];

/// Conservative skill estimate, truncated toward zero.
pub fn mmr(skill_mean: f64, skill_stdev: f64) -> i64 {
    (skill_mean - 2.0 * skill_stdev) as i64
}

/// Highest group whose lower bound is at or below `mmr`.
pub fn skill_group_name(mmr: i64) -> &'static str {
    let index = (1..SKILL_GROUP_NAMES.len())
        .take_while(|&i| SKILL_GROUP_SPACING * i as f64 <= mmr as f64)
        .last()
        .unwrap_or(0);
    SKILL_GROUP_NAMES[index]
}

/// A player's skill state as of one round. Immutable; two snapshots of the
/// same player are compared to detect a group change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub player_id: i64,
    pub steam_name: String,
    pub skill_mean: f64,
    pub skill_stdev: f64,
    pub mmr: i64,
    pub skill_group: &'static str,
}

impl PlayerSnapshot {
    pub fn new(player_id: i64, steam_name: String, skill_mean: f64, skill_stdev: f64) -> Self {
        let mmr = mmr(skill_mean, skill_stdev);
        Self {
            player_id,
            steam_name,
            skill_mean,
            skill_stdev,
            mmr,
            skill_group: skill_group_name(mmr),
        }
    }
}
