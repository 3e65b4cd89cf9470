use crate::models::{LayoutPattern, SpaceProfile};

/// Maximum points for zone coverage
const ZONE_COVERAGE_MAX: f64 = 40.0;
/// Flat points for a layout that declares no target zones
const ZONE_COVERAGE_FLAT: u8 = 10;
/// Maximum points for area closeness, also the falloff distance in m²
const AREA_CLOSENESS_MAX: f64 = 20.0;
/// Flat points for a layout that declares no minimum area
const AREA_CLOSENESS_FLAT: u8 = 10;
/// Points per satisfied categorical axis (type, occupants, mobility)
const CATEGORICAL_AXIS_POINTS: u8 = 10;
/// Points per satisfied fit check (height, loft)
const FIT_CHECK_POINTS: u8 = 5;

/// Score an eligible layout against a profile (0-100)
///
/// Four independently capped factors:
/// zone coverage (40) + area closeness (20) + categorical fit (30) +
/// height/loft fit (10). Callers must filter for eligibility first;
/// scoring never re-checks it. This is a heuristic ranking, not a
/// guarantee of optimality.
pub fn score_layout(pattern: &LayoutPattern, profile: &SpaceProfile) -> u8 {
    zone_coverage_points(pattern, profile)
        + area_closeness_points(pattern, profile)
        + categorical_fit_points(pattern, profile)
        + fit_points(pattern, profile)
}

/// Zone coverage (0-40): the share of the layout's declared zones the
/// profile asks for, rounded. Layouts declaring no zones get a flat 10.
#[inline]
fn zone_coverage_points(pattern: &LayoutPattern, profile: &SpaceProfile) -> u8 {
    match pattern.recommended_for.zones.declared() {
        Some(declared) if !declared.is_empty() => {
            let matched = declared
                .iter()
                .filter(|zone| profile.zones.contains(zone))
                .count();
            ((ZONE_COVERAGE_MAX * matched as f64) / declared.len() as f64).round() as u8
        }
        _ => ZONE_COVERAGE_FLAT,
    }
}

/// Area closeness (0-20): linear falloff from the declared minimum area,
/// zero beyond 20 m² of distance. Layouts without a minimum get a flat 10.
#[inline]
fn area_closeness_points(pattern: &LayoutPattern, profile: &SpaceProfile) -> u8 {
    match pattern.min_area {
        Some(min_area) => {
            let distance = (profile.area() - min_area).abs().min(AREA_CLOSENESS_MAX);
            (AREA_CLOSENESS_MAX - distance).round() as u8
        }
        None => AREA_CLOSENESS_FLAT,
    }
}

/// Categorical fit (0-30): 10 points each for a declared type list naming
/// the profile type, a declared occupants list naming the profile
/// occupancy, and a satisfied mobility constraint
///
/// An absent type or occupants list passes eligibility but earns nothing
/// here; specificity is rewarded. An absent mobility constraint counts as
/// satisfied.
#[inline]
fn categorical_fit_points(pattern: &LayoutPattern, profile: &SpaceProfile) -> u8 {
    let targets = &pattern.recommended_for;
    let mut points = 0;

    if targets
        .space_types
        .declared()
        .is_some_and(|types| types.contains(&profile.space_type))
    {
        points += CATEGORICAL_AXIS_POINTS;
    }

    if targets
        .occupants
        .declared()
        .is_some_and(|occupants| occupants.contains(&profile.occupants))
    {
        points += CATEGORICAL_AXIS_POINTS;
    }

    if targets.mobility.permits(&profile.mobility) {
        points += CATEGORICAL_AXIS_POINTS;
    }

    points
}

/// Height/loft fit (0-10): 5 points per satisfied check; absent
/// constraints count as satisfied
#[inline]
fn fit_points(pattern: &LayoutPattern, profile: &SpaceProfile) -> u8 {
    let mut points = 0;

    let height_ok = pattern
        .recommended_for
        .min_height
        .map_or(true, |min| profile.height >= min);
    if height_ok {
        points += FIT_CHECK_POINTS;
    }

    if !pattern.requires_loft || profile.loft {
        points += FIT_CHECK_POINTS;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchAny, Mobility, Occupancy, RecommendedFor, SpaceType, Zone};

    fn create_test_profile() -> SpaceProfile {
        SpaceProfile {
            length: 4.0,
            width: 3.0,
            height: 3.0,
            space_type: SpaceType::TinyHouse,
            occupants: Occupancy::Solo,
            zones: vec![Zone::Sleep, Zone::Work],
            mobility: Mobility::Mobile,
            loft: true,
        }
    }

    fn create_test_pattern() -> LayoutPattern {
        LayoutPattern {
            id: "loft-bed".to_string(),
            title: "Loft bed".to_string(),
            description: "Raise the bed".to_string(),
            required_features: vec![],
            pros: vec![],
            cons: vec![],
            recommended_for: RecommendedFor {
                space_types: MatchAny::any_of(vec![SpaceType::TinyHouse]),
                occupants: MatchAny::any_of(vec![Occupancy::Solo, Occupancy::Couple]),
                zones: MatchAny::any_of(vec![Zone::Sleep, Zone::Work, Zone::Storage]),
                mobility: MatchAny::unconstrained(),
                min_height: Some(2.9),
            },
            min_area: Some(12.0),
            requires_loft: true,
        }
    }

    #[test]
    fn test_full_match_score() {
        let profile = create_test_profile();
        let pattern = create_test_pattern();

        // zones 2/3 -> 27, area exact -> 20, categorical 30, fit 10
        assert_eq!(score_layout(&pattern, &profile), 87);
    }

    #[test]
    fn test_score_within_bounds() {
        let profile = create_test_profile();
        let pattern = create_test_pattern();

        let score = score_layout(&pattern, &profile);
        assert!(score <= 100);
    }

    #[test]
    fn test_zone_coverage_rounding() {
        let profile = create_test_profile();
        let mut pattern = create_test_pattern();

        pattern.recommended_for.zones = MatchAny::any_of(vec![Zone::Sleep, Zone::Work]);
        assert_eq!(zone_coverage_points(&pattern, &profile), 40);

        pattern.recommended_for.zones = MatchAny::any_of(vec![Zone::Sleep, Zone::Storage]);
        assert_eq!(zone_coverage_points(&pattern, &profile), 20);
    }

    #[test]
    fn test_no_declared_zones_scores_flat() {
        let profile = create_test_profile();
        let mut pattern = create_test_pattern();
        pattern.recommended_for.zones = MatchAny::unconstrained();

        assert_eq!(zone_coverage_points(&pattern, &profile), ZONE_COVERAGE_FLAT);
    }

    #[test]
    fn test_area_falloff() {
        let mut profile = create_test_profile();
        let pattern = create_test_pattern(); // min_area 12

        assert_eq!(area_closeness_points(&pattern, &profile), 20);

        profile.length = 5.0; // area 15, distance 3
        assert_eq!(area_closeness_points(&pattern, &profile), 17);

        profile.length = 20.0; // area 60, far beyond the falloff
        assert_eq!(area_closeness_points(&pattern, &profile), 0);
    }

    #[test]
    fn test_no_min_area_scores_flat() {
        let profile = create_test_profile();
        let mut pattern = create_test_pattern();
        pattern.min_area = None;

        assert_eq!(area_closeness_points(&pattern, &profile), AREA_CLOSENESS_FLAT);
    }

    #[test]
    fn test_unconstrained_categorical_axes_earn_nothing() {
        let profile = create_test_profile();
        let mut pattern = create_test_pattern();
        pattern.recommended_for.space_types = MatchAny::unconstrained();
        pattern.recommended_for.occupants = MatchAny::unconstrained();

        // Only the satisfied (absent) mobility constraint scores
        assert_eq!(categorical_fit_points(&pattern, &profile), 10);
    }

    #[test]
    fn test_mobility_mismatch_earns_nothing_on_that_axis() {
        let profile = create_test_profile(); // mobile
        let mut pattern = create_test_pattern();
        pattern.recommended_for.mobility = MatchAny::any_of(vec![Mobility::Fixed]);

        assert_eq!(categorical_fit_points(&pattern, &profile), 20);
    }

    #[test]
    fn test_fit_points() {
        let mut profile = create_test_profile();
        let pattern = create_test_pattern();

        assert_eq!(fit_points(&pattern, &profile), 10);

        profile.loft = false;
        assert_eq!(fit_points(&pattern, &profile), 5);

        profile.height = 2.5;
        assert_eq!(fit_points(&pattern, &profile), 0);
    }
}
