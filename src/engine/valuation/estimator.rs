use super::PriceRange;

/// Baseline weight in the blend; comparables carry the remainder.
const BASELINE_WEIGHT: f64 = 0.4;
const COMPARABLE_WEIGHT: f64 = 0.6;

/// Widest relative margin, taken in full at zero confidence.
const MAX_MARGIN: f64 = 0.30;

/// Standard median over the price list, truncated to integer kobo on an
/// even count. `None` for an empty list.
pub(crate) fn median_kobo(prices: &[i64]) -> Option<i64> {
    if prices.is_empty() {
        return None;
    }
    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0) as i64)
    } else {
        Some(sorted[mid])
    }
}

/// Blend the area baseline with the comparable median. With both signals the
/// estimate is a 40/60 weighted mean; with one signal it passes through
/// unchanged; with neither there is no estimate.
pub(crate) fn blend(baseline_kobo: Option<i64>, comparable_prices: &[i64]) -> Option<i64> {
    match (baseline_kobo, median_kobo(comparable_prices)) {
        (Some(baseline), Some(median)) => {
            Some((BASELINE_WEIGHT * baseline as f64 + COMPARABLE_WEIGHT * median as f64).round()
                as i64)
        }
        (None, Some(median)) => Some(median),
        (Some(baseline), None) => Some(baseline),
        (None, None) => None,
    }
}

/// Monotone step function of comparable count. The baseline only matters on
/// the zero-comparable branch.
pub(crate) fn confidence(comparable_count: usize, baseline_available: bool) -> f64 {
    match comparable_count {
        0 if baseline_available => 0.3,
        0 => 0.1,
        1..=3 => 0.6,
        4..=9 => 0.8,
        _ => 0.9,
    }
}

/// Confidence-scaled bracket around the estimate: sparse evidence widens the
/// margin so consumers can render a proportional margin of error.
pub(crate) fn price_range(estimate_kobo: i64, confidence: f64) -> PriceRange {
    let margin = (1.0 - confidence) * MAX_MARGIN;
    PriceRange {
        low_kobo: (estimate_kobo as f64 * (1.0 - margin)) as i64,
        high_kobo: (estimate_kobo as f64 * (1.0 + margin)) as i64,
    }
}
