use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use domain::{AssetRecord, SnapshotResponse, SummaryResponse, TableResponse};
use market_engine::{format, ranking, MarketError, MarketResult, SortDirection, SortField};
use tracing::warn;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/market/latest", get(get_latest))
        .route("/market/table", get(get_table))
        .route("/market/summary", get(get_summary))
}

#[derive(Debug, serde::Deserialize)]
struct SortQuery {
    sort: Option<String>,
    dir: Option<String>,
}

/// The latest snapshot's raw rows, re-sorted on request. Defaults to the
/// canonical rank order.
async fn get_latest(
    State(state): State<AppState>,
    Query(params): Query<SortQuery>,
) -> Result<Json<SnapshotResponse>, StatusCode> {
    let (as_of, rows) = state
        .market
        .latest_with_timestamp()
        .await
        .map_err(reject)?;
    let rows = apply_sort(&rows, &params).map_err(reject)?;
    Ok(Json(SnapshotResponse { as_of, rows }))
}

/// The same rows projected into their display form, one formatted string
/// per cell, honoring the same sort parameters.
async fn get_table(
    State(state): State<AppState>,
    Query(params): Query<SortQuery>,
) -> Result<Json<TableResponse>, StatusCode> {
    let (as_of, rows) = state
        .market
        .latest_with_timestamp()
        .await
        .map_err(reject)?;
    let rows = apply_sort(&rows, &params).map_err(reject)?;
    let rows = format::table_rows(&rows, &state.config.reference_unit);
    Ok(Json(TableResponse { as_of, rows }))
}

/// Snapshot-level aggregates, raw and formatted.
async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, StatusCode> {
    let (as_of, rows) = state
        .market
        .latest_with_timestamp()
        .await
        .map_err(reject)?;
    let aggregates = state.market.aggregates(&rows);

    let unit = &state.config.reference_unit;
    let total_market_cap_display = format::market_cap(aggregates.total_market_cap, unit);
    let total_market_cap_usd_display = format::market_cap(
        aggregates.total_market_cap * aggregates.reference_price_usd,
        "USD",
    );
    let average_change_display = format::signed_percent(aggregates.average_pct_change_24h);

    Ok(Json(SummaryResponse {
        as_of,
        aggregates,
        total_market_cap_display,
        total_market_cap_usd_display,
        average_change_display,
    }))
}

fn apply_sort(rows: &[AssetRecord], params: &SortQuery) -> MarketResult<Vec<AssetRecord>> {
    let field = match params.sort.as_deref() {
        Some(raw) => SortField::parse(raw)?,
        None => SortField::Rank,
    };
    let direction = match params.dir.as_deref() {
        Some(raw) => SortDirection::parse(raw)?,
        None => SortDirection::Ascending,
    };
    Ok(ranking::sort_by(rows, field, direction))
}

fn reject(err: MarketError) -> StatusCode {
    match err {
        MarketError::EmptyRepository => StatusCode::NOT_FOUND,
        MarketError::RepositoryUnavailable(ref source) => {
            warn!(error = %source, "snapshot store query failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
        MarketError::InvalidSortField(_) => StatusCode::BAD_REQUEST,
    }
}
