use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One asset's state at one snapshot instant. All rows sharing a
/// `snapshot_ts` form one snapshot; `rank` is unique within it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssetRecord {
    pub id: Uuid,
    pub snapshot_ts: DateTime<Utc>,
    pub symbol: String,
    pub name: String,
    /// Price denominated in the reference asset.
    pub price: f64,
    /// Market capitalization denominated in the reference asset.
    pub market_cap: f64,
    pub rank: i64,
    pub pct_change_1h: Option<f64>,
    pub pct_change_24h: Option<f64>,
    pub pct_change_7d: Option<f64>,
    /// USD price of the reference asset at this instant, carried on every
    /// row so the summary can show a USD equivalent.
    pub reference_price_usd: f64,
    pub source: String,
}

/// Summary statistics over one snapshot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MarketAggregates {
    pub total_market_cap: f64,
    /// `None` when the snapshot is empty; absent per-row changes count as
    /// zero and the divisor is the total row count.
    pub average_pct_change_24h: Option<f64>,
    pub reference_price_usd: f64,
    pub tracked_count: usize,
}

/// One market-table row with its numeric fields already formatted for
/// display.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssetRow {
    pub rank: i64,
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub market_cap: String,
    pub change_24h: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub as_of: DateTime<Utc>,
    pub rows: Vec<AssetRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableResponse {
    pub as_of: DateTime<Utc>,
    pub rows: Vec<AssetRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub as_of: DateTime<Utc>,
    pub aggregates: MarketAggregates,
    pub total_market_cap_display: String,
    pub total_market_cap_usd_display: String,
    pub average_change_display: String,
}
