use super::super::domain::{ListingStatus, Property};
use super::config::ValuationConfig;

/// Select comparable prices for a subject listing from a candidate pool.
///
/// A candidate qualifies when it is approved, is not the subject itself,
/// matches the listing type exactly, shares the subject's area or city, and
/// its bedroom count sits within the configured window of the subject's
/// (a null bedroom count is treated as zero on both sides). Qualifying
/// prices are ranked by proximity to the subject's asking price and capped;
/// an empty result is a legal outcome, not an error.
pub fn select_comparables(
    subject: &Property,
    candidates: &[Property],
    config: &ValuationConfig,
) -> Vec<i64> {
    let subject_bedrooms = i64::from(subject.bedrooms.unwrap_or(0));
    let window = i64::from(config.bedroom_window);

    let mut matched: Vec<&Property> = candidates
        .iter()
        .filter(|candidate| candidate.status == ListingStatus::Approved)
        .filter(|candidate| candidate.id != subject.id)
        .filter(|candidate| candidate.listing_type == subject.listing_type)
        .filter(|candidate| {
            candidate.area_id == subject.area_id || candidate.city_id == subject.city_id
        })
        .filter(|candidate| {
            let bedrooms = i64::from(candidate.bedrooms.unwrap_or(0));
            (bedrooms - subject_bedrooms).abs() <= window
        })
        .collect();

    // Stable sort: equal price distances keep catalog order.
    matched.sort_by_key(|candidate| (candidate.price_kobo - subject.price_kobo).abs());

    matched
        .into_iter()
        .take(config.comparable_cap)
        .map(|candidate| candidate.price_kobo)
        .collect()
}
