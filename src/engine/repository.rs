use chrono::{DateTime, Utc};

use super::domain::{Area, AreaId, ImageFingerprint, Property, PropertyId, ReportTarget};
use super::valuation::ValuationResult;

/// Read-only catalog access so the scoring modules can be exercised in
/// isolation. Implementations are expected to apply request-scoped timeouts;
/// a failed lookup surfaces as [`StoreError::Unavailable`] and the caller
/// treats the valuation as unavailable rather than partial.
pub trait ListingCatalog: Send + Sync {
    fn area(&self, id: &AreaId) -> Result<Option<Area>, StoreError>;

    /// Candidate listings for comparable selection. Upstream may pre-filter
    /// by status and location; the selector re-applies every rule.
    fn comparable_candidates(&self, subject: &Property) -> Result<Vec<Property>, StoreError>;

    /// Approved properties currently carrying this image fingerprint.
    fn fingerprint_owners(
        &self,
        fingerprint: &ImageFingerprint,
    ) -> Result<Vec<PropertyId>, StoreError>;

    /// Count of reports filed against a target, across all report statuses.
    fn report_count(&self, target: &ReportTarget) -> Result<u64, StoreError>;
}

/// Write side of the engine: paging over the active population and the
/// explicit valuation write-back step. The scoring core itself never
/// mutates a property record.
pub trait PropertyStore: Send + Sync {
    /// A fixed-size page of active properties. Ordering must be stable for
    /// the duration of a refresh pass.
    fn active_page(&self, offset: usize, limit: usize) -> Result<Vec<Property>, StoreError>;

    fn apply_valuation(
        &self,
        id: &PropertyId,
        valuation: &ValuationResult,
        valued_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
