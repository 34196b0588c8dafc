use sqlx::PgPool;
use std::sync::Arc;

use crate::{config::AppConfig, repositories::SnapshotRepository, services::MarketService};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: PgPool,
    pub snapshot_repo: Arc<dyn SnapshotRepository>,
    pub market: Arc<MarketService>,
}

// Ensure critical dependencies uphold Send/Sync for Axum state usage.
#[allow(dead_code)]
fn _assert_state_types_are_send_sync()
where
    AppConfig: Send + Sync + 'static,
    PgPool: Send + Sync + 'static,
    dyn SnapshotRepository: Send + Sync,
    MarketService: Send + Sync,
{
}

#[allow(dead_code)]
fn _assert_state_bounds() {
    fn assert_bounds<T: Clone + Send + Sync + 'static>() {}
    assert_bounds::<AppState>();
}
