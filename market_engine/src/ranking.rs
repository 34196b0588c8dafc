use std::cmp::Ordering;

use domain::AssetRecord;
use serde::{Deserialize, Serialize};

use crate::error::{MarketError, MarketResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Rank,
    Name,
    Price,
    MarketCap,
    PctChange24h,
}

impl SortField {
    /// Parse a caller-supplied field name. Unknown names fail fast
    /// instead of silently falling back to the default order.
    pub fn parse(raw: &str) -> MarketResult<Self> {
        match raw {
            "rank" => Ok(SortField::Rank),
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "market_cap" => Ok(SortField::MarketCap),
            "pct_change_24h" => Ok(SortField::PctChange24h),
            other => Err(MarketError::InvalidSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn parse(raw: &str) -> MarketResult<Self> {
        match raw {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(MarketError::InvalidSortField(other.to_string())),
        }
    }

    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The column-header toggle state machine, owned by the presentation
/// layer: selecting the current field flips direction, selecting a new
/// field resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn on_select(self, field: SortField) -> Self {
        if field == self.field {
            SortState {
                field,
                direction: self.direction.flip(),
            }
        } else {
            SortState {
                field,
                direction: SortDirection::Ascending,
            }
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            field: SortField::Rank,
            direction: SortDirection::Ascending,
        }
    }
}

/// Stable, non-mutating sort of snapshot rows. Rows comparing equal keep
/// their relative order from the input.
pub fn sort_by(rows: &[AssetRecord], field: SortField, direction: SortDirection) -> Vec<AssetRecord> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &AssetRecord, b: &AssetRecord, field: SortField) -> Ordering {
    match field {
        SortField::Rank => a.rank.cmp(&b.rank),
        SortField::Name => compare_names(&a.name, &b.name),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::MarketCap => a.market_cap.total_cmp(&b.market_cap),
        // Ordering-only convenience: a row with no 24h figure sorts as
        // zero. Its display still shows the no-data marker.
        SortField::PctChange24h => a
            .pct_change_24h
            .unwrap_or(0.0)
            .total_cmp(&b.pct_change_24h.unwrap_or(0.0)),
    }
}

// Case-folded comparison with a case-sensitive tiebreak, standing in for
// the locale-aware collation the dashboard gets from its runtime.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
