use super::super::domain::{Area, ImageFingerprint, Property, ReportTarget};
use super::super::repository::{ListingCatalog, StoreError};
use super::super::valuation::baseline_kobo;

/// Underpricing check against the area baseline. Never triggers when the
/// area lacks the relevant figure or the property lacks the relevant size
/// field; insufficient data is "no signal", not suspicion.
pub(crate) fn price_anomaly(property: &Property, area: Option<&Area>, ratio: f64) -> bool {
    let Some(area) = area else {
        return false;
    };
    let Some(expected) = baseline_kobo(property, area) else {
        return false;
    };
    (property.price_kobo as f64) < ratio * expected as f64
}

/// True when any supplied fingerprint already appears on an approved
/// property other than the subject. An empty fingerprint set never flags.
pub(crate) fn duplicate_images<C>(
    property: &Property,
    fingerprints: &[ImageFingerprint],
    catalog: &C,
) -> Result<bool, StoreError>
where
    C: ListingCatalog + ?Sized,
{
    for fingerprint in fingerprints {
        let owners = catalog.fingerprint_owners(fingerprint)?;
        if owners.iter().any(|owner| owner != &property.id) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// True when the listing's agent profile has accumulated at least
/// `threshold` reports. Counted across all report statuses, dismissed
/// included; see DESIGN.md for the policy-review note. A listing with no
/// agent or no contact phone never flags.
pub(crate) fn phone_reputation<C>(
    property: &Property,
    catalog: &C,
    threshold: u64,
) -> Result<bool, StoreError>
where
    C: ListingCatalog + ?Sized,
{
    let (Some(agent_id), Some(_phone)) = (&property.agent_id, &property.contact_phone) else {
        return Ok(false);
    };
    let reports = catalog.report_count(&ReportTarget::Agent(agent_id.clone()))?;
    Ok(reports >= threshold)
}
