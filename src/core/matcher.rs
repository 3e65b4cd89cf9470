use std::sync::Arc;

use crate::core::{
    filters::{arrangement_is_eligible, furniture_is_eligible, layout_is_eligible},
    scoring::score_layout,
};
use crate::models::{
    FurnitureItem, RecommendationResponse, RecommendationStats, ScoredLayout, SpaceProfile,
    ZoneArrangement,
};
use crate::services::CatalogStore;

/// Recommendation assembler - runs the filter-then-score pipeline over
/// one catalog snapshot
///
/// # Pipeline stages
/// 1. Layout eligibility filtering
/// 2. Layout scoring and ranking
/// 3. Furniture and zone-arrangement filtering
/// 4. Assembly with pass-through reference data
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<CatalogStore>,
}

impl Recommender {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Build recommendations for a canonical profile
    ///
    /// A pure function of the profile and the catalog snapshot: no side
    /// effects, total for any canonical profile. Empty result
    /// collections are valid outcomes, not errors.
    pub fn recommend(&self, profile: &SpaceProfile) -> RecommendationResponse {
        let mut layouts: Vec<ScoredLayout> = self
            .catalog
            .layouts
            .iter()
            .filter(|pattern| layout_is_eligible(pattern, profile))
            .map(|pattern| ScoredLayout {
                match_score: score_layout(pattern, profile),
                pattern: pattern.clone(),
            })
            .collect();

        // Stable sort: ties keep their catalog order
        layouts.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        let furniture: Vec<FurnitureItem> = self
            .catalog
            .furniture
            .iter()
            .filter(|item| furniture_is_eligible(item, profile))
            .cloned()
            .collect();

        let arrangement_ideas: Vec<ZoneArrangement> = self
            .catalog
            .arrangements
            .iter()
            .filter(|arrangement| arrangement_is_eligible(arrangement, profile))
            .cloned()
            .collect();

        let stats = RecommendationStats {
            layout_count: layouts.len(),
            furniture_count: furniture.len(),
            design_tips_count: self.catalog.design_tips.len(),
            arrangement_ideas_count: arrangement_ideas.len(),
            minimalism_count: self.catalog.minimalism.len(),
            planner_sections: self.catalog.planner.section_count(),
        };

        RecommendationResponse {
            profile: profile.clone(),
            area: profile.area(),
            stats,
            layouts,
            furniture,
            design_tips: self.catalog.design_tips.clone(),
            arrangement_ideas,
            minimalism: self.catalog.minimalism.clone(),
            project_planner: self.catalog.planner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        LayoutPattern, MatchAny, Mobility, Occupancy, RecommendedFor, SpaceType, Zone,
    };

    fn create_pattern(id: &str, zones: Vec<Zone>, min_area: Option<f64>) -> LayoutPattern {
        LayoutPattern {
            id: id.to_string(),
            title: format!("Pattern {}", id),
            description: "Test pattern".to_string(),
            required_features: vec![],
            pros: vec![],
            cons: vec![],
            recommended_for: RecommendedFor {
                space_types: MatchAny::unconstrained(),
                occupants: MatchAny::unconstrained(),
                zones: if zones.is_empty() {
                    MatchAny::unconstrained()
                } else {
                    MatchAny::any_of(zones)
                },
                mobility: MatchAny::unconstrained(),
                min_height: None,
            },
            min_area,
            requires_loft: false,
        }
    }

    fn create_profile() -> SpaceProfile {
        SpaceProfile {
            length: 4.0,
            width: 3.0,
            height: 2.7,
            space_type: SpaceType::Studio,
            occupants: Occupancy::Couple,
            zones: vec![Zone::Sleep, Zone::Kitchen],
            mobility: Mobility::Fixed,
            loft: false,
        }
    }

    fn create_recommender(layouts: Vec<LayoutPattern>) -> Recommender {
        let catalog = CatalogStore::fixture(layouts);
        Recommender::new(Arc::new(catalog))
    }

    #[test]
    fn test_ineligible_layouts_never_scored() {
        let recommender = create_recommender(vec![
            create_pattern("fits", vec![Zone::Sleep], Some(10.0)),
            create_pattern("too-big", vec![Zone::Sleep], Some(30.0)),
        ]);

        let result = recommender.recommend(&create_profile());

        assert_eq!(result.stats.layout_count, 1);
        assert_eq!(result.layouts[0].pattern.id, "fits");
    }

    #[test]
    fn test_layouts_sorted_by_score_descending() {
        let recommender = create_recommender(vec![
            create_pattern("partial", vec![Zone::Sleep, Zone::Work, Zone::Pet], None),
            create_pattern("full", vec![Zone::Sleep, Zone::Kitchen], Some(12.0)),
        ]);

        let result = recommender.recommend(&create_profile());

        assert_eq!(result.layouts.len(), 2);
        assert_eq!(result.layouts[0].pattern.id, "full");
        assert!(result.layouts[0].match_score >= result.layouts[1].match_score);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let recommender = create_recommender(vec![
            create_pattern("first", vec![Zone::Sleep], None),
            create_pattern("second", vec![Zone::Sleep], None),
        ]);

        let result = recommender.recommend(&create_profile());

        assert_eq!(result.layouts[0].match_score, result.layouts[1].match_score);
        assert_eq!(result.layouts[0].pattern.id, "first");
        assert_eq!(result.layouts[1].pattern.id, "second");
    }

    #[test]
    fn test_area_and_pass_throughs() {
        let recommender = create_recommender(vec![]);

        let result = recommender.recommend(&create_profile());

        assert_eq!(result.area, 12.0);
        assert_eq!(result.stats.layout_count, 0);
        assert!(result.layouts.is_empty());
        // Reference data is never filtered
        assert_eq!(result.stats.design_tips_count, result.design_tips.len());
        assert_eq!(result.stats.minimalism_count, result.minimalism.len());
        assert_eq!(
            result.stats.planner_sections,
            result.project_planner.section_count()
        );
    }
}
