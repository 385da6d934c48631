mod signals;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use super::domain::{FraudFlag, ImageFingerprint, Property};
use super::repository::{ListingCatalog, StoreError};

const PRICE_ANOMALY_WEIGHT: u32 = 40;
const DUPLICATE_IMAGES_WEIGHT: u32 = 35;
const PHONE_REPUTATION_WEIGHT: u32 = 25;

/// Thresholds for the anomaly signals; the per-signal weights are part of
/// the scoring contract and stay fixed.
#[derive(Debug, Clone)]
pub struct FraudConfig {
    /// A listing flags as underpriced when its price falls below this
    /// fraction of the area-expected price.
    pub price_anomaly_ratio: f64,
    /// Reports against an agent profile at or above this count flag the
    /// reputation signal.
    pub reputation_report_threshold: u64,
}

impl Default for FraudConfig {
    fn default() -> Self {
        Self {
            price_anomaly_ratio: 0.5,
            reputation_report_threshold: 2,
        }
    }
}

/// Independent risk assessment: each triggered signal contributes its fixed
/// weight once, summed and capped at 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudAssessment {
    pub score: u8,
    pub flags: BTreeSet<FraudFlag>,
}

/// Stateless scorer over a property snapshot plus caller-supplied image
/// fingerprints. Catalog lookups are the only I/O; a lookup failure aborts
/// the assessment rather than producing a partial score.
pub struct FraudScorer {
    config: FraudConfig,
}

impl Default for FraudScorer {
    fn default() -> Self {
        Self::new(FraudConfig::default())
    }
}

impl FraudScorer {
    pub fn new(config: FraudConfig) -> Self {
        Self { config }
    }

    pub fn analyze<C>(
        &self,
        property: &Property,
        fingerprints: &[ImageFingerprint],
        catalog: &C,
    ) -> Result<FraudAssessment, StoreError>
    where
        C: ListingCatalog + ?Sized,
    {
        let area = catalog.area(&property.area_id)?;
        let mut flags = BTreeSet::new();
        let mut score: u32 = 0;

        if signals::price_anomaly(property, area.as_ref(), self.config.price_anomaly_ratio) {
            flags.insert(FraudFlag::PriceAnomaly);
            score += PRICE_ANOMALY_WEIGHT;
        }
        if signals::duplicate_images(property, fingerprints, catalog)? {
            flags.insert(FraudFlag::DuplicateImages);
            score += DUPLICATE_IMAGES_WEIGHT;
        }
        if signals::phone_reputation(property, catalog, self.config.reputation_report_threshold)? {
            flags.insert(FraudFlag::PhoneReputation);
            score += PHONE_REPUTATION_WEIGHT;
        }

        if !flags.is_empty() {
            debug!(property = %property.id, score, ?flags, "fraud signals triggered");
        }

        Ok(FraudAssessment {
            score: score.min(100) as u8,
            flags,
        })
    }
}
