use super::super::domain::{Area, FurnishingState, ListingType, Property};

/// Year-built cutoff below which listings take the age discount.
const MODERN_BUILD_YEAR: i32 = 2010;

/// Expected price from area aggregates alone, before structural
/// adjustments: price-per-sqm times floor area for sales, the bedroom-tier
/// rent average for rentals and short lets. `None` when the area lacks the
/// relevant figure or the property lacks the relevant size field.
pub fn unadjusted_baseline_kobo(property: &Property, area: &Area) -> Option<i64> {
    match property.listing_type {
        ListingType::Sale => {
            let price_sqm = area.avg_buy_price_sqm?;
            let floor_area = property.floor_area_sqm?;
            if price_sqm <= 0 || floor_area <= 0.0 {
                return None;
            }
            Some((price_sqm as f64 * floor_area) as i64)
        }
        ListingType::Rent | ListingType::ShortLet => {
            let tier = match property.bedrooms.unwrap_or(0) {
                0 | 1 => area.avg_rent_1br,
                2 => area.avg_rent_2br,
                _ => area.avg_rent_3br,
            }?;
            if tier <= 0 {
                return None;
            }
            Some(tier)
        }
    }
}

/// Area baseline with multiplicative structural adjustments applied.
/// The multipliers commute, so application order is irrelevant; the final
/// product is truncated to integer kobo.
pub fn baseline_kobo(property: &Property, area: &Area) -> Option<i64> {
    let base = unadjusted_baseline_kobo(property, area)?;
    let mut adjusted = base as f64;

    if property.is_serviced {
        adjusted *= 1.10;
    }
    if property.has_generator {
        adjusted *= 1.05;
    }
    if property.has_water_supply {
        adjusted *= 1.05;
    }
    adjusted *= match property.furnishing {
        FurnishingState::Furnished => 1.15,
        FurnishingState::SemiFurnished => 1.08,
        FurnishingState::Unfurnished => 1.00,
    };
    if matches!(property.year_built, Some(year) if year < MODERN_BUILD_YEAR) {
        adjusted *= 0.95;
    }

    Some(adjusted as i64)
}
