use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::geo::GeoPoint;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AreaId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CityId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LandmarkId(pub String);

/// Opaque content hash of a listing photo, computed upstream at upload time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ImageFingerprint(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Sale,
    Rent,
    ShortLet,
}

impl ListingType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sale => "For Sale",
            Self::Rent => "For Rent",
            Self::ShortLet => "Short Let",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnishingState {
    Unfurnished,
    SemiFurnished,
    Furnished,
}

impl FurnishingState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unfurnished => "Unfurnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::Furnished => "Furnished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Pending,
    Approved,
    Rejected,
    Delisted,
}

impl ListingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Delisted => "Delisted",
        }
    }
}

/// Symbolic tag naming the anomaly signal that contributed to a fraud score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudFlag {
    PriceAnomaly,
    DuplicateImages,
    PhoneReputation,
}

impl FraudFlag {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAnomaly => "Price Anomaly",
            Self::DuplicateImages => "Duplicate Images",
            Self::PhoneReputation => "Phone Reputation",
        }
    }
}

/// A marketplace listing as the engine sees it: listing attributes are
/// read-only inputs, the derived valuation and fraud fields are the only
/// outputs this subsystem produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub listing_type: ListingType,
    pub status: ListingStatus,
    pub price_kobo: i64,
    pub bedrooms: Option<u32>,
    pub floor_area_sqm: Option<f64>,
    pub is_serviced: bool,
    pub has_generator: bool,
    pub has_water_supply: bool,
    pub furnishing: FurnishingState,
    pub year_built: Option<i32>,
    pub area_id: AreaId,
    pub city_id: CityId,
    pub agent_id: Option<AgentId>,
    pub contact_phone: Option<String>,
    pub coordinates: Option<GeoPoint>,
    pub estimated_value_kobo: Option<i64>,
    pub last_valued_at: Option<DateTime<Utc>>,
    pub fraud_score: Option<u8>,
    pub fraud_flags: BTreeSet<FraudFlag>,
}

/// Area-level aggregates maintained by an external reporting process.
/// Any subset of the averages may be absent; the engine must degrade to
/// "no baseline" rather than fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub city_id: CityId,
    pub avg_rent_1br: Option<i64>,
    pub avg_rent_2br: Option<i64>,
    pub avg_rent_3br: Option<i64>,
    pub avg_buy_price_sqm: Option<i64>,
    pub safety_score: Option<f64>,
    pub infrastructure_score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkKind {
    School,
    Hospital,
    Market,
    Transit,
    Other,
}

impl LandmarkKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::School => "School",
            Self::Hospital => "Hospital",
            Self::Market => "Market",
            Self::Transit => "Transit",
            Self::Other => "Other",
        }
    }
}

/// Reference point used only for proximity enrichment, never for
/// valuation math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: LandmarkId,
    pub kind: LandmarkKind,
    pub name: String,
    pub location: Option<GeoPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Open,
    UnderInvestigation,
    Resolved,
    Dismissed,
}

/// Entity a report was filed against. A tagged variant keeps the fraud
/// scorer's report-count query exhaustively typed instead of matching on a
/// type-string/id pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportTarget {
    Property(PropertyId),
    Agent(AgentId),
    Review(ReviewId),
}

/// User-filed report, consumed by the engine only in aggregate counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub target: ReportTarget,
    pub status: ReportStatus,
    pub filed_at: DateTime<Utc>,
}
