use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::Property;
use super::repository::{ListingCatalog, PropertyStore, StoreError};
use super::valuation::ValuationEngine;

/// Periodic revaluation over the active property population, pulled in
/// fixed-size pages so peak memory stays bounded regardless of catalog
/// size. A single scheduler instance is expected to run at a time; the
/// write path is last-writer-wins against the synchronous trigger, which is
/// safe because both paths are deterministic over the same input snapshot.
pub struct BatchRefreshScheduler<C, S> {
    engine: Arc<ValuationEngine>,
    catalog: Arc<C>,
    store: Arc<S>,
    chunk_size: usize,
}

impl<C, S> BatchRefreshScheduler<C, S>
where
    C: ListingCatalog,
    S: PropertyStore,
{
    pub fn new(
        engine: Arc<ValuationEngine>,
        catalog: Arc<C>,
        store: Arc<S>,
        chunk_size: usize,
    ) -> Self {
        Self {
            engine,
            catalog,
            store,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Recompute and persist valuations for every active property, returning
    /// the number of properties updated. Properties that cannot be valued
    /// are skipped so their last-known-good estimate survives; a failure on
    /// any single property is logged and skipped rather than aborting the
    /// pass. Only a page fetch failure propagates.
    pub fn refresh_all(&self) -> Result<usize, StoreError> {
        let valued_at = Utc::now();
        let mut offset = 0;
        let mut updated = 0;

        loop {
            let page = self.store.active_page(offset, self.chunk_size)?;
            let page_len = page.len();

            for property in &page {
                match self.refresh_one(property, valued_at) {
                    Ok(true) => updated += 1,
                    Ok(false) => {}
                    Err(err) => {
                        warn!(property = %property.id, error = %err, "skipping property in refresh pass");
                    }
                }
            }

            if page_len < self.chunk_size {
                break;
            }
            offset += page_len;
        }

        info!(updated, "valuation refresh pass complete");
        Ok(updated)
    }

    fn refresh_one(
        &self,
        property: &Property,
        valued_at: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        let area = self.catalog.area(&property.area_id)?;
        let candidates = self.catalog.comparable_candidates(property)?;

        let Some(valuation) = self.engine.estimate(property, area.as_ref(), &candidates) else {
            return Ok(false);
        };

        self.store.apply_valuation(&property.id, &valuation, valued_at)?;
        Ok(true)
    }
}
