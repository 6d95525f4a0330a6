use crate::error::{AppError, Result};
use crate::highlights::ImpactCoefficients;

pub const DB_PATH: &str = "skill.db";

pub const API_PORT: &str = "9000";

/// Read connections kept open against the match store. The digest issues at
/// most four sub-queries at once after the round window is resolved.
pub const READ_POOL_SIZE: u32 = 4;

/// Impact-rating coefficients used when IMPACT_COEFFICIENTS is unset.
/// Order: kills, deaths, damage, kas, intercept.
pub const DEFAULT_IMPACT_COEFFICIENTS: &str = "0.3591,-0.5329,0.2372,0.0032,0.1587";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// SQLite match store, opened read-only (DB_PATH)
    pub db_path: String,
    pub api_port: u16,
    /// Linear impact-rating formula (IMPACT_COEFFICIENTS, comma-separated).
    /// Example: "0.3591,-0.5329,0.2372,0.0032,0.1587"
    pub impact_coefficients: ImpactCoefficients,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| DB_PATH.to_string()),
            api_port: std::env::var("API_PORT")
                .unwrap_or_else(|_| API_PORT.to_string())
                .parse::<u16>()
                .map_err(|_| AppError::Config("API_PORT must be a valid port number".to_string()))?,
            impact_coefficients: std::env::var("IMPACT_COEFFICIENTS")
                .unwrap_or_else(|_| DEFAULT_IMPACT_COEFFICIENTS.to_string())
                .parse::<ImpactCoefficients>()?,
        })
    }
}
