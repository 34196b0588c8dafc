use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{AssetRecord, MarketAggregates};
use market_engine::{aggregates, MarketError, MarketResult};
use tracing::debug;

use crate::repositories::SnapshotRepository;

/// Selects the most recent complete snapshot from the store. Read-only;
/// retry policy belongs to whatever feeds the store, not here.
pub struct MarketService {
    repo: Arc<dyn SnapshotRepository>,
    reference_symbol: String,
}

impl MarketService {
    pub fn new(repo: Arc<dyn SnapshotRepository>, reference_symbol: String) -> Self {
        Self {
            repo,
            reference_symbol,
        }
    }

    /// The latest snapshot: all rows sharing the maximum recorded
    /// timestamp, sorted by rank ascending (symbol breaks the tie that
    /// the store's uniqueness rule says should not happen).
    pub async fn select_latest_snapshot(&self) -> MarketResult<Vec<AssetRecord>> {
        let (_, rows) = self.latest_with_timestamp().await?;
        Ok(rows)
    }

    /// Same selection, keeping the snapshot instant for "last updated"
    /// display.
    pub async fn latest_with_timestamp(
        &self,
    ) -> MarketResult<(DateTime<Utc>, Vec<AssetRecord>)> {
        let ts = self
            .repo
            .query_max_timestamp()
            .await
            .map_err(MarketError::RepositoryUnavailable)?
            .ok_or(MarketError::EmptyRepository)?;

        let mut rows = self
            .repo
            .query_by_timestamp(ts)
            .await
            .map_err(MarketError::RepositoryUnavailable)?;
        rows.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.symbol.cmp(&b.symbol)));

        debug!(snapshot_ts = %ts, rows = rows.len(), "selected latest snapshot");
        Ok((ts, rows))
    }

    pub fn aggregates(&self, rows: &[AssetRecord]) -> MarketAggregates {
        aggregates::compute(rows, &self.reference_symbol)
    }
}
