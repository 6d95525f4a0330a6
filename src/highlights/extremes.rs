use std::str::FromStr;

use crate::db::models::ComponentAveragesRow;
use crate::db::MatchStore;
use crate::error::{AppError, Result};
use crate::types::{RatingExtreme, RoundRange};

/// Linear impact-rating formula over averaged per-round components.
/// `deaths` is expected to be negative so more deaths lower the rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactCoefficients {
    pub kills: f64,
    pub deaths: f64,
    pub damage: f64,
    pub kas: f64,
    pub intercept: f64,
}

impl ImpactCoefficients {
    pub fn impact_rating(&self, row: &ComponentAveragesRow) -> f64 {
        self.kills * row.average_kills
            + self.deaths * row.average_deaths
            + self.damage * row.average_damage
            + self.kas * row.average_kas
            + self.intercept
    }
}

/// Parses `kills,deaths,damage,kas,intercept`.
impl FromStr for ImpactCoefficients {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim().parse::<f64>().map_err(|_| {
                    AppError::Config(format!("IMPACT_COEFFICIENTS: '{}' is not a number", part.trim()))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        match values.as_slice() {
            &[kills, deaths, damage, kas, intercept] => Ok(Self {
                kills,
                deaths,
                damage,
                kas,
                intercept,
            }),
            other => Err(AppError::Config(format!(
                "IMPACT_COEFFICIENTS must have 5 values (kills,deaths,damage,kas,intercept), got {}",
                other.len()
            ))),
        }
    }
}

/// Lowest and highest impact-rated players over `range`.
/// None when nobody has rating components in the range.
pub async fn rating_extremes<S: MatchStore + ?Sized>(
    store: &S,
    range: RoundRange,
    coefficients: &ImpactCoefficients,
) -> Result<Option<(RatingExtreme, RatingExtreme)>> {
    let rows = store.component_averages(range).await?;
    Ok(select_extremes(rows, coefficients))
}

pub fn select_extremes(
    rows: Vec<ComponentAveragesRow>,
    coefficients: &ImpactCoefficients,
) -> Option<(RatingExtreme, RatingExtreme)> {
    let mut rated: Vec<RatingExtreme> = rows
        .into_iter()
        .map(|row| RatingExtreme {
            impact_rating: coefficients.impact_rating(&row),
            average_kills: row.average_kills,
            average_deaths: -row.average_deaths,
            average_damage: row.average_damage,
            average_kas: row.average_kas,
            rounds_played: row.rounds_played,
            player_id: row.player_id,
            steam_name: row.steam_name,
        })
        .collect();

    // Stable: ties keep player-id order, so lowest/highest are reproducible.
    rated.sort_by(|a, b| a.impact_rating.total_cmp(&b.impact_rating));

    let lowest = rated.first()?.clone();
    let highest = rated.pop()?;
    Some((lowest, highest))
}
