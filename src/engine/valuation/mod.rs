mod baseline;
mod comparables;
mod config;
mod estimator;

pub use baseline::{baseline_kobo, unadjusted_baseline_kobo};
pub use comparables::select_comparables;
pub use config::ValuationConfig;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Area, Property};

/// Stateless estimator blending the area baseline with comparable evidence.
/// Pure over its inputs, so concurrent calls on different properties need no
/// coordination.
pub struct ValuationEngine {
    config: ValuationConfig,
}

impl ValuationEngine {
    pub fn new(config: ValuationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// Value a property against its area aggregates and a candidate pool.
    /// `None` means "cannot value this property yet": both the baseline and
    /// every comparable signal were unavailable. That is a normal state for
    /// sparse catalogs, not an error.
    pub fn estimate(
        &self,
        property: &Property,
        area: Option<&Area>,
        candidates: &[Property],
    ) -> Option<ValuationResult> {
        let baseline = area.and_then(|area| baseline_kobo(property, area));
        let comparable_prices = select_comparables(property, candidates, &self.config);
        self.estimate_from_signals(baseline, &comparable_prices)
    }

    /// Same blend, for callers that already hold the baseline and the
    /// selected comparable prices.
    pub fn estimate_from_signals(
        &self,
        baseline_kobo: Option<i64>,
        comparable_prices: &[i64],
    ) -> Option<ValuationResult> {
        let estimate_kobo = estimator::blend(baseline_kobo, comparable_prices)?;
        let confidence = estimator::confidence(comparable_prices.len(), baseline_kobo.is_some());
        let price_range = estimator::price_range(estimate_kobo, confidence);

        debug!(
            estimate_kobo,
            confidence,
            comparables = comparable_prices.len(),
            baseline = baseline_kobo.is_some(),
            "valuation produced"
        );

        Some(ValuationResult {
            estimate_kobo,
            confidence,
            comparable_count: comparable_prices.len(),
            price_range,
        })
    }
}

/// Valuation output attached to a property record by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub estimate_kobo: i64,
    pub confidence: f64,
    pub comparable_count: usize,
    pub price_range: PriceRange,
}

/// Bracket around the point estimate; always `low <= estimate <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low_kobo: i64,
    pub high_kobo: i64,
}
