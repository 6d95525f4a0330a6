use chrono::NaiveDate;
use tracing::{debug, info};

use crate::db::MatchStore;
use crate::error::Result;
use crate::highlights::extremes::{rating_extremes, ImpactCoefficients};
use crate::highlights::maps::most_played_maps;
use crate::highlights::mvp::most_mvps;
use crate::highlights::skill_changes::skill_group_changes;
use crate::highlights::window::resolve_round_window;
use crate::types::{DayWindow, Digest, SkillChangeEntry};

/// Builds the daily highlights digest from a read-only match store.
pub struct Highlights<S> {
    store: S,
    coefficients: ImpactCoefficients,
}

impl<S: MatchStore> Highlights<S> {
    pub fn new(store: S, coefficients: ImpactCoefficients) -> Self {
        Self { store, coefficients }
    }

    /// Digest for the UTC day `day`, or None when no rounds were played.
    ///
    /// The window is resolved first; the four aggregates then run
    /// concurrently and any store failure fails the whole digest. Each
    /// aggregate may read through a different pooled connection, so they
    /// are not guaranteed to observe a single snapshot.
    pub async fn for_day(&self, day: NaiveDate) -> Result<Option<Digest>> {
        let window = DayWindow::for_day(day);
        let round_window = resolve_round_window(&self.store, &window).await?;

        let Some(range) = round_window.range else {
            info!(%day, "No rounds played, no highlights");
            return Ok(None);
        };
        debug!(%day, first_round = range.first, last_round = range.last, "Round window resolved");

        let (extremes, mvp, changes, maps) = tokio::try_join!(
            rating_extremes(&self.store, range, &self.coefficients),
            most_mvps(&self.store, range),
            skill_group_changes(&self.store, range),
            most_played_maps(&self.store, range),
        )?;

        let (lowest_rating, highest_rating) = match extremes {
            Some((lowest, highest)) => (Some(lowest), Some(highest)),
            None => (None, None),
        };

        info!(
            %day,
            rounds_played = round_window.rounds_played,
            maps = maps.0.len(),
            skill_group_changes = changes.len(),
            has_mvp = mvp.is_some(),
            "Highlights computed"
        );

        Ok(Some(Digest {
            time_window: [window.start, window.end],
            rounds_played: round_window.rounds_played,
            lowest_rating,
            highest_rating,
            season_skill_group_changes: changes.into_iter().map(SkillChangeEntry::from).collect(),
            most_played_maps: maps,
            most_mvps: mvp,
        }))
    }
}
