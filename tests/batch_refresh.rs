mod common;

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use common::{area, rent_listing, MemoryCatalog};
use valuation_engine::engine::domain::{AreaId, Property, PropertyId};
use valuation_engine::engine::repository::{PropertyStore, StoreError};
use valuation_engine::{BatchRefreshScheduler, ValuationConfig, ValuationEngine, ValuationResult};

/// Store fixture recording page requests and applied write-backs, with an
/// optional per-property write failure.
#[derive(Default)]
struct MemoryStore {
    properties: Vec<Property>,
    page_requests: Mutex<Vec<(usize, usize)>>,
    applied: Mutex<Vec<(PropertyId, ValuationResult, DateTime<Utc>)>>,
    fail_write_for: Option<PropertyId>,
}

impl MemoryStore {
    fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }

    fn applied(&self) -> Vec<(PropertyId, ValuationResult, DateTime<Utc>)> {
        self.applied.lock().expect("store mutex poisoned").clone()
    }

    fn page_requests(&self) -> Vec<(usize, usize)> {
        self.page_requests
            .lock()
            .expect("store mutex poisoned")
            .clone()
    }
}

impl PropertyStore for MemoryStore {
    fn active_page(&self, offset: usize, limit: usize) -> Result<Vec<Property>, StoreError> {
        self.page_requests
            .lock()
            .expect("store mutex poisoned")
            .push((offset, limit));
        Ok(self
            .properties
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn apply_valuation(
        &self,
        id: &PropertyId,
        valuation: &ValuationResult,
        valued_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        if self.fail_write_for.as_ref() == Some(id) {
            return Err(StoreError::Unavailable("row lock timeout".to_string()));
        }
        self.applied
            .lock()
            .expect("store mutex poisoned")
            .push((id.clone(), valuation.clone(), valued_at));
        Ok(())
    }
}

fn scheduler(
    catalog: MemoryCatalog,
    store: MemoryStore,
    chunk_size: usize,
) -> (
    BatchRefreshScheduler<MemoryCatalog, MemoryStore>,
    Arc<MemoryStore>,
) {
    let engine = Arc::new(ValuationEngine::new(ValuationConfig::default()));
    let store = Arc::new(store);
    let scheduler = BatchRefreshScheduler::new(engine, Arc::new(catalog), store.clone(), chunk_size);
    (scheduler, store)
}

#[test]
fn refresh_pages_through_the_population_in_fixed_chunks() {
    let properties: Vec<Property> = (0..5)
        .map(|i| rent_listing(&format!("p-{i}"), 420_000_000))
        .collect();
    let catalog = MemoryCatalog::default().with_area(area("yaba"));
    let (scheduler, store) = scheduler(catalog, MemoryStore::with_properties(properties), 2);

    let updated = scheduler.refresh_all().expect("refresh pass");

    assert_eq!(updated, 5);
    assert_eq!(store.page_requests(), vec![(0, 2), (2, 2), (4, 2)]);
    assert_eq!(store.applied().len(), 5);
}

#[test]
fn unvaluable_properties_are_skipped_and_keep_their_last_value() {
    // One listing in an area with no aggregates and no comparables in the
    // pool: no valuation, no write.
    let mut orphan = rent_listing("orphan", 420_000_000);
    orphan.area_id = AreaId("unknown".to_string());
    orphan.city_id = valuation_engine::engine::domain::CityId("abuja".to_string());
    let valued = rent_listing("valued", 420_000_000);

    let catalog = MemoryCatalog::default().with_area(area("yaba"));
    let (scheduler, store) = scheduler(
        catalog,
        MemoryStore::with_properties(vec![orphan, valued]),
        100,
    );

    let updated = scheduler.refresh_all().expect("refresh pass");

    assert_eq!(updated, 1);
    let applied = store.applied();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].0, PropertyId("valued".to_string()));
}

#[test]
fn a_single_write_failure_does_not_abort_the_pass() {
    let properties: Vec<Property> = (0..3)
        .map(|i| rent_listing(&format!("p-{i}"), 420_000_000))
        .collect();
    let catalog = MemoryCatalog::default().with_area(area("yaba"));
    let mut store = MemoryStore::with_properties(properties);
    store.fail_write_for = Some(PropertyId("p-1".to_string()));

    let (scheduler, store) = scheduler(catalog, store, 100);

    let updated = scheduler.refresh_all().expect("refresh pass");

    assert_eq!(updated, 2);
    assert!(store
        .applied()
        .iter()
        .all(|(id, _, _)| id != &PropertyId("p-1".to_string())));
}

#[test]
fn rerunning_with_unchanged_inputs_reproduces_the_same_valuations() {
    let properties: Vec<Property> = (0..4)
        .map(|i| rent_listing(&format!("p-{i}"), 400_000_000 + i64::from(i) * 5_000_000))
        .collect();
    let catalog = MemoryCatalog::default()
        .with_area(area("yaba"))
        .with_candidates(properties.clone());
    let (scheduler, store) = scheduler(catalog, MemoryStore::with_properties(properties), 100);

    let first = scheduler.refresh_all().expect("first pass");
    let after_first = store.applied();
    let second = scheduler.refresh_all().expect("second pass");
    let after_second = store.applied();

    assert_eq!(first, second);
    let (first_run, second_run) = after_second.split_at(after_first.len());
    for (a, b) in first_run.iter().zip(second_run) {
        assert_eq!(a.0, b.0);
        assert_eq!(a.1, b.1);
    }
}

#[test]
fn a_zero_chunk_size_is_clamped_to_one() {
    let properties = vec![rent_listing("p-0", 420_000_000)];
    let catalog = MemoryCatalog::default().with_area(area("yaba"));
    let (scheduler, store) = scheduler(catalog, MemoryStore::with_properties(properties), 0);

    let updated = scheduler.refresh_all().expect("refresh pass");

    assert_eq!(updated, 1);
    assert_eq!(store.page_requests(), vec![(0, 1), (1, 1)]);
}
