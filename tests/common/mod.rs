use std::collections::HashMap;

use valuation_engine::engine::domain::{
    Area, AreaId, CityId, FurnishingState, ImageFingerprint, ListingStatus, ListingType,
    Property, PropertyId, ReportTarget,
};
use valuation_engine::engine::repository::{ListingCatalog, StoreError};

pub fn area(id: &str) -> Area {
    Area {
        id: AreaId(id.to_string()),
        city_id: CityId("lagos".to_string()),
        avg_rent_1br: Some(250_000_000),
        avg_rent_2br: Some(400_000_000),
        avg_rent_3br: Some(550_000_000),
        avg_buy_price_sqm: Some(1_200_000),
        safety_score: Some(7.2),
        infrastructure_score: Some(6.5),
    }
}

pub fn rent_listing(id: &str, price_kobo: i64) -> Property {
    Property {
        id: PropertyId(id.to_string()),
        listing_type: ListingType::Rent,
        status: ListingStatus::Approved,
        price_kobo,
        bedrooms: Some(2),
        floor_area_sqm: None,
        is_serviced: false,
        has_generator: false,
        has_water_supply: false,
        furnishing: FurnishingState::Unfurnished,
        year_built: None,
        area_id: AreaId("yaba".to_string()),
        city_id: CityId("lagos".to_string()),
        agent_id: None,
        contact_phone: None,
        coordinates: None,
        estimated_value_kobo: None,
        last_valued_at: None,
        fraud_score: None,
        fraud_flags: Default::default(),
    }
}

/// In-memory catalog so the scoring paths can be exercised without a
/// database.
#[derive(Default)]
pub struct MemoryCatalog {
    pub areas: HashMap<AreaId, Area>,
    pub candidates: Vec<Property>,
    pub fingerprints: HashMap<ImageFingerprint, Vec<PropertyId>>,
    pub reports: HashMap<ReportTarget, u64>,
}

impl MemoryCatalog {
    pub fn with_area(mut self, record: Area) -> Self {
        self.areas.insert(record.id.clone(), record);
        self
    }

    pub fn with_candidates(mut self, candidates: Vec<Property>) -> Self {
        self.candidates = candidates;
        self
    }
}

impl ListingCatalog for MemoryCatalog {
    fn area(&self, id: &AreaId) -> Result<Option<Area>, StoreError> {
        Ok(self.areas.get(id).cloned())
    }

    fn comparable_candidates(&self, _subject: &Property) -> Result<Vec<Property>, StoreError> {
        Ok(self.candidates.clone())
    }

    fn fingerprint_owners(
        &self,
        fingerprint: &ImageFingerprint,
    ) -> Result<Vec<PropertyId>, StoreError> {
        Ok(self.fingerprints.get(fingerprint).cloned().unwrap_or_default())
    }

    fn report_count(&self, target: &ReportTarget) -> Result<u64, StoreError> {
        Ok(self.reports.get(target).copied().unwrap_or(0))
    }
}
