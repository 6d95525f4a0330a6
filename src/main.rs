mod api;
mod config;
mod db;
mod error;
mod highlights;
mod skill;
mod types;

use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api::routes::{router, ApiState};
use crate::config::Config;
use crate::db::SqliteMatchStore;
use crate::error::Result;
use crate::highlights::Highlights;

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cfg: Config) -> Result<()> {
    // --- Match store (read-only) ---
    let store = SqliteMatchStore::open_read_only(&cfg.db_path).await?;
    info!("Match store opened read-only at {}", cfg.db_path);

    let coefficients = cfg.impact_coefficients;
    info!(
        kills = coefficients.kills,
        deaths = coefficients.deaths,
        damage = coefficients.damage,
        kas = coefficients.kas,
        intercept = coefficients.intercept,
        "Impact rating coefficients loaded"
    );

    // --- HTTP API server ---
    let api_state = ApiState {
        highlights: Arc::new(Highlights::new(store, coefficients)),
    };
    let app = router(api_state);
    let bind_addr = format!("0.0.0.0:{}", cfg.api_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("HTTP API listening on {bind_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
