use domain::{AssetRecord, MarketAggregates};

/// Compute summary statistics over one snapshot.
///
/// An absent 24h change counts as zero toward the average and the divisor
/// is the total row count, matching the dashboard this feeds. That is the
/// one place "no data" is coerced to a number; display code still renders
/// the no-data marker for such rows.
pub fn compute(rows: &[AssetRecord], reference_symbol: &str) -> MarketAggregates {
    let total_market_cap = rows.iter().map(|r| r.market_cap).sum();

    let average_pct_change_24h = if rows.is_empty() {
        None
    } else {
        let sum: f64 = rows.iter().filter_map(|r| r.pct_change_24h).sum();
        Some(sum / rows.len() as f64)
    };

    let reference_price_usd = rows
        .iter()
        .find(|r| r.symbol == reference_symbol)
        .map(|r| r.reference_price_usd)
        .unwrap_or(0.0);

    MarketAggregates {
        total_market_cap,
        average_pct_change_24h,
        reference_price_usd,
        tracked_count: rows.len(),
    }
}
