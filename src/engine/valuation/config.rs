/// Knobs for comparable selection. Weights and confidence tiers are part of
/// the blend contract and stay fixed in [`super::estimator`].
#[derive(Debug, Clone)]
pub struct ValuationConfig {
    /// Maximum number of comparables fed into the estimate.
    pub comparable_cap: usize,
    /// Bedroom-count window around the subject when matching comparables.
    pub bedroom_window: u32,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            comparable_cap: 10,
            bedroom_window: 1,
        }
    }
}
