use std::sync::Arc;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;

use crate::{
    config::AppConfig, repositories::PostgresSnapshotRepository, services::MarketService,
    state::AppState,
};

pub async fn build_state(config: &AppConfig) -> Result<AppState> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("../migrations").run(&pool).await?;

    let snapshot_repo = Arc::new(PostgresSnapshotRepository::new(pool.clone()));
    let market = Arc::new(MarketService::new(
        snapshot_repo.clone(),
        config.reference_symbol.clone(),
    ));

    Ok(AppState {
        config: config.clone(),
        db: pool,
        snapshot_repo,
        market,
    })
}
