use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::AssetRecord;
use sqlx::{PgPool, Row};

/// Read side of the snapshot store. One row per asset per snapshot
/// instant; all rows sharing a timestamp form one snapshot.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// The most recent snapshot instant, `None` when the store is empty.
    async fn query_max_timestamp(&self) -> Result<Option<DateTime<Utc>>>;

    /// Every row recorded at exactly `ts`, ordered by rank. An unknown
    /// timestamp yields an empty vec, not an error.
    async fn query_by_timestamp(&self, ts: DateTime<Utc>) -> Result<Vec<AssetRecord>>;
}

#[derive(Clone)]
pub struct PostgresSnapshotRepository {
    pool: PgPool,
}

impl PostgresSnapshotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnapshotRepository for PostgresSnapshotRepository {
    async fn query_max_timestamp(&self) -> Result<Option<DateTime<Utc>>> {
        let row = sqlx::query(
            "SELECT snapshot_ts FROM market_snapshots ORDER BY snapshot_ts DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| r.try_get("snapshot_ts").map_err(Into::into))
            .transpose()
    }

    async fn query_by_timestamp(&self, ts: DateTime<Utc>) -> Result<Vec<AssetRecord>> {
        let rows = sqlx::query(
            "SELECT id, snapshot_ts, asset_symbol, asset_name, price, market_cap, rank,
                    pct_change_1h, pct_change_24h, pct_change_7d, reference_price_usd, source
             FROM market_snapshots
             WHERE snapshot_ts = $1
             ORDER BY rank ASC",
        )
        .bind(ts)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(AssetRecord {
                    id: row.try_get("id")?,
                    snapshot_ts: row.try_get("snapshot_ts")?,
                    symbol: row.try_get("asset_symbol")?,
                    name: row.try_get("asset_name")?,
                    price: row.try_get("price")?,
                    market_cap: row.try_get("market_cap")?,
                    rank: row.try_get("rank")?,
                    pct_change_1h: row.try_get("pct_change_1h")?,
                    pct_change_24h: row.try_get("pct_change_24h")?,
                    pct_change_7d: row.try_get("pct_change_7d")?,
                    reference_price_usd: row.try_get("reference_price_usd")?,
                    source: row
                        .try_get("source")
                        .unwrap_or_else(|_| "unknown".to_string()),
                })
            })
            .collect()
    }
}
