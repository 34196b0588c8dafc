use domain::{AssetRecord, AssetRow};

/// Marker rendered wherever a percentage change is unknown.
pub const NO_DATA: &str = "N/A";

/// Fixed-point rendering with exactly `places` fractional digits.
/// Rounding follows `format!`, i.e. round-half-to-even; tests pin the
/// exact outputs.
pub fn decimal(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

/// Scale a reference-denominated market cap to the largest applicable
/// unit (B, M, K) and append the reference unit glyph.
pub fn market_cap(value: f64, unit: &str) -> String {
    if value >= 1e9 {
        format!("{}B {unit}", decimal(value / 1e9, 2))
    } else if value >= 1e6 {
        format!("{}M {unit}", decimal(value / 1e6, 2))
    } else if value >= 1e3 {
        format!("{}K {unit}", decimal(value / 1e3, 2))
    } else {
        format!("{} {unit}", decimal(value, 2))
    }
}

/// Render a percentage change with an explicit sign; zero counts as
/// non-negative. Absent values get the fixed no-data marker.
pub fn signed_percent(value: Option<f64>) -> String {
    match value {
        None => NO_DATA.to_string(),
        Some(v) => {
            // Normalize -0.0 so the sign prefix stays coherent.
            let v = if v == 0.0 { 0.0 } else { v };
            if v >= 0.0 {
                format!("+{}%", decimal(v, 2))
            } else {
                format!("{}%", decimal(v, 2))
            }
        }
    }
}

/// Reference-denominated price at the table's six-digit precision.
pub fn price(value: f64, unit: &str) -> String {
    format!("{} {unit}", decimal(value, 6))
}

/// Project snapshot rows into their display form, preserving order.
pub fn table_rows(rows: &[AssetRecord], unit: &str) -> Vec<AssetRow> {
    rows.iter()
        .map(|r| AssetRow {
            rank: r.rank,
            symbol: r.symbol.clone(),
            name: r.name.clone(),
            price: price(r.price, unit),
            market_cap: market_cap(r.market_cap, unit),
            change_24h: signed_percent(r.pct_change_24h),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_pads_and_rounds() {
        assert_eq!(decimal(999.0, 2), "999.00");
        assert_eq!(decimal(1.234567, 6), "1.234567");
        assert_eq!(decimal(-3.456, 2), "-3.46");
    }

    // Exact binary halves, so these hit the tie-breaking rule itself.
    #[test]
    fn decimal_breaks_ties_toward_even() {
        assert_eq!(decimal(0.125, 2), "0.12");
        assert_eq!(decimal(0.375, 2), "0.38");
        assert_eq!(decimal(-0.125, 2), "-0.12");
        assert_eq!(decimal(2.5, 0), "2");
        assert_eq!(decimal(3.5, 0), "4");
    }

    #[test]
    fn market_cap_scales_to_unit_suffixes() {
        assert_eq!(market_cap(1_234_567.0, "ⓩ"), "1.23M ⓩ");
        assert_eq!(market_cap(999.0, "ⓩ"), "999.00 ⓩ");
        assert_eq!(market_cap(2_500_000_000.0, "ⓩ"), "2.50B ⓩ");
        assert_eq!(market_cap(1_000.0, "ⓩ"), "1.00K ⓩ");
        assert_eq!(market_cap(0.0, "ⓩ"), "0.00 ⓩ");
    }

    #[test]
    fn signed_percent_keeps_explicit_sign() {
        assert_eq!(signed_percent(Some(-3.456)), "-3.46%");
        assert_eq!(signed_percent(Some(0.0)), "+0.00%");
        assert_eq!(signed_percent(Some(-0.0)), "+0.00%");
        assert_eq!(signed_percent(Some(12.3)), "+12.30%");
        assert_eq!(signed_percent(None), NO_DATA);
    }

    #[test]
    fn price_uses_six_fractional_digits() {
        assert_eq!(price(0.012345, "ⓩ"), "0.012345 ⓩ");
        assert_eq!(price(2.0, "ⓩ"), "2.000000 ⓩ");
    }
}
