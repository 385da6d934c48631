use serde::{Deserialize, Serialize};

use super::domain::{Landmark, LandmarkId};

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Great-circle distance between two points on a spherical earth.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Radius query hit: the matched key plus its distance from the query
/// center, reported at 1 decimal km.
#[derive(Debug, Clone, PartialEq)]
pub struct Proximity<K> {
    pub key: K,
    pub distance_km: f64,
}

/// Pure read-only index over entities with known coordinates. Entities
/// without coordinates never enter the index, so they can never match a
/// radius or bounding-box query.
#[derive(Debug, Clone)]
pub struct GeoIndex<K> {
    entries: Vec<(K, GeoPoint)>,
}

impl<K> Default for GeoIndex<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Clone> GeoIndex<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, point: GeoPoint) {
        self.entries.push((key, point));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries within `radius_km` of `center` (boundary inclusive),
    /// ascending by distance.
    pub fn within_radius(&self, center: GeoPoint, radius_km: f64) -> Vec<Proximity<K>> {
        let mut hits: Vec<(f64, &K)> = self
            .entries
            .iter()
            .map(|(key, point)| (haversine_km(center, *point), key))
            .filter(|(distance, _)| *distance <= radius_km)
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.into_iter()
            .map(|(distance, key)| Proximity {
                key: key.clone(),
                distance_km: (distance * 10.0).round() / 10.0,
            })
            .collect()
    }

    /// Entries inside the latitude/longitude box (bounds inclusive).
    pub fn within_bounding_box(&self, north: f64, south: f64, east: f64, west: f64) -> Vec<K> {
        self.entries
            .iter()
            .filter(|(_, point)| {
                point.lat <= north && point.lat >= south && point.lng <= east && point.lng >= west
            })
            .map(|(key, _)| key.clone())
            .collect()
    }
}

impl GeoIndex<LandmarkId> {
    /// Index landmark reference data, skipping records without a location.
    pub fn from_landmarks(landmarks: &[Landmark]) -> Self {
        let entries = landmarks
            .iter()
            .filter_map(|landmark| {
                landmark
                    .location
                    .map(|point| (landmark.id.clone(), point))
            })
            .collect();
        Self { entries }
    }

    /// Nearby-landmark enrichment: closest landmarks within `radius_km`,
    /// capped at `limit`.
    pub fn nearest_landmarks(
        &self,
        center: GeoPoint,
        radius_km: f64,
        limit: usize,
    ) -> Vec<Proximity<LandmarkId>> {
        let mut hits = self.within_radius(center, radius_km);
        hits.truncate(limit);
        hits
    }
}
