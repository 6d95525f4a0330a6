use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::skill::PlayerSnapshot;

/// Text form of SQLite `DATETIME` values in the match store.
pub const STORE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

/// Half-open 24-hour interval `[start, end)` for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayWindow {
    pub fn for_day(day: NaiveDate) -> Self {
        let start = day.and_time(NaiveTime::MIN);
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// `(start, end)` in the store's timestamp text form, for binding.
    pub fn store_bounds(&self) -> (String, String) {
        (
            self.start.format(STORE_TIMESTAMP_FORMAT).to_string(),
            self.end.format(STORE_TIMESTAMP_FORMAT).to_string(),
        )
    }
}

/// Inclusive round-identifier interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRange {
    pub first: i64,
    pub last: i64,
}

/// Rounds created inside a day. `range` is None exactly when no round was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundWindow {
    pub range: Option<RoundRange>,
    pub rounds_played: i64,
}

// ---------------------------------------------------------------------------
// Digest records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingExtreme {
    pub player_id: i64,
    pub steam_name: String,
    pub impact_rating: f64,
    pub average_kills: f64,
    /// Negated death component, shown as a deaths-per-round magnitude.
    pub average_deaths: f64,
    pub average_damage: f64,
    pub average_kas: f64,
    pub rounds_played: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MvpEntry {
    pub player_id: i64,
    pub steam_name: String,
    pub mvps: i64,
}

/// Two snapshots of one player bracketing a window, with different skill groups.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillChange {
    pub previous: PlayerSnapshot,
    pub next: PlayerSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillSummary {
    pub mmr: i64,
    pub skill_group: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillChangeEntry {
    pub player_id: i64,
    pub steam_name: String,
    pub previous_skill: SkillSummary,
    pub next_skill: SkillSummary,
}

impl From<SkillChange> for SkillChangeEntry {
    fn from(change: SkillChange) -> Self {
        Self {
            player_id: change.previous.player_id,
            previous_skill: SkillSummary {
                mmr: change.previous.mmr,
                skill_group: change.previous.skill_group,
            },
            next_skill: SkillSummary {
                mmr: change.next.mmr,
                skill_group: change.next.skill_group,
            },
            steam_name: change.previous.steam_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapCount {
    pub map_name: String,
    pub round_count: i64,
}

/// Map name → round count, most played first. Serializes as a JSON object
/// whose key order is the popularity order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MostPlayedMaps(pub Vec<MapCount>);

impl Serialize for MostPlayedMaps {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.map_name, &entry.round_count)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Digest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Digest {
    /// Day start and day start + 24h.
    pub time_window: [NaiveDateTime; 2],
    pub rounds_played: i64,
    pub lowest_rating: Option<RatingExtreme>,
    pub highest_rating: Option<RatingExtreme>,
    pub season_skill_group_changes: Vec<SkillChangeEntry>,
    pub most_played_maps: MostPlayedMaps,
    pub most_mvps: Option<MvpEntry>,
}
