use crate::models::{FurnitureItem, LayoutPattern, SpaceProfile, ZoneArrangement};

/// Check whether a layout pattern is eligible for a profile
///
/// Every constraint the pattern declares must hold; absent constraints
/// always pass. Zone matching is by intersection: one shared zone is
/// enough.
#[inline]
pub fn layout_is_eligible(pattern: &LayoutPattern, profile: &SpaceProfile) -> bool {
    // Area lower bound, inclusive
    if let Some(min_area) = pattern.min_area {
        if profile.area() < min_area {
            return false;
        }
    }

    let targets = &pattern.recommended_for;

    // Ceiling height lower bound
    if let Some(min_height) = targets.min_height {
        if profile.height < min_height {
            return false;
        }
    }

    // Loft requirement
    if pattern.requires_loft && !profile.loft {
        return false;
    }

    if !targets.space_types.permits(&profile.space_type) {
        return false;
    }

    if !targets.occupants.permits(&profile.occupants) {
        return false;
    }

    if !targets.mobility.permits(&profile.mobility) {
        return false;
    }

    // At least one zone in common
    targets.zones.permits_any(&profile.zones)
}

/// Check whether a furniture item fits a profile
///
/// Items without placement zones fit anywhere.
#[inline]
pub fn furniture_is_eligible(item: &FurnitureItem, profile: &SpaceProfile) -> bool {
    item.zones.is_empty() || item.zones.iter().any(|zone| profile.zones.contains(zone))
}

/// Check whether a zone arrangement idea applies to a profile
///
/// Same shape as layout eligibility restricted to the height, loft,
/// mobility and zone axes.
#[inline]
pub fn arrangement_is_eligible(arrangement: &ZoneArrangement, profile: &SpaceProfile) -> bool {
    let criteria = &arrangement.criteria;

    if let Some(min_height) = criteria.min_height {
        if profile.height < min_height {
            return false;
        }
    }

    if criteria.requires_loft && !profile.loft {
        return false;
    }

    if !criteria.mobility.permits(&profile.mobility) {
        return false;
    }

    criteria.zones.permits_any(&profile.zones)
}
