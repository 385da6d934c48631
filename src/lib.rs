//! Valuation and fraud-risk scoring engine for a property marketplace.
//!
//! Given an approved property listing, the engine produces a fair-value
//! estimate with a confidence-scaled price range, and an independent 0-100
//! fraud-risk score built from weighted anomaly signals. The surrounding
//! service layer owns persistence, routing, and auth; this crate consumes
//! read-only catalog data through the traits in [`engine::repository`] and
//! hands results back through an explicit write-back step.

pub mod config;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use engine::domain::{Area, FraudFlag, Landmark, Property, Report, ReportTarget};
pub use engine::fraud::{FraudAssessment, FraudConfig, FraudScorer};
pub use engine::geo::{GeoIndex, GeoPoint};
pub use engine::refresh::BatchRefreshScheduler;
pub use engine::repository::{ListingCatalog, PropertyStore, StoreError};
pub use engine::valuation::{ValuationConfig, ValuationEngine, ValuationResult};
