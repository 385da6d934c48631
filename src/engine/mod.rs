pub mod domain;
pub mod fraud;
pub mod geo;
pub mod refresh;
pub mod repository;
pub mod valuation;

pub use fraud::{FraudAssessment, FraudConfig, FraudScorer};
pub use geo::{haversine_km, GeoIndex, GeoPoint, Proximity};
pub use refresh::BatchRefreshScheduler;
pub use repository::{ListingCatalog, PropertyStore, StoreError};
pub use valuation::{PriceRange, ValuationConfig, ValuationEngine, ValuationResult};
