// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ArrangementCriteria, BudgetCategory, DesignTip, Footprint, FurnitureItem, LayoutPattern,
    MatchAny, MinimalismGuide, Mobility, Occupancy, PlannerBudget, PlannerChecklist,
    ProjectPlanner, RecommendedFor, ScoredLayout, SpaceProfile, SpaceType, TimelinePhase, Zone,
    ZoneArrangement,
};
pub use requests::SpaceProfileInput;
pub use responses::{ErrorResponse, HealthResponse, RecommendationResponse, RecommendationStats};
