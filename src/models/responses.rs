use serde::{Deserialize, Serialize};
use crate::models::domain::{
    DesignTip, FurnitureItem, MinimalismGuide, ProjectPlanner, ScoredLayout, SpaceProfile,
    ZoneArrangement,
};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub profile: SpaceProfile,
    pub area: f64,
    pub stats: RecommendationStats,
    pub layouts: Vec<ScoredLayout>,
    pub furniture: Vec<FurnitureItem>,
    pub design_tips: Vec<DesignTip>,
    pub arrangement_ideas: Vec<ZoneArrangement>,
    pub minimalism: Vec<MinimalismGuide>,
    pub project_planner: ProjectPlanner,
}

/// Result collection counts, for display and telemetry only
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationStats {
    pub layout_count: usize,
    pub furniture_count: usize,
    pub design_tips_count: usize,
    pub arrangement_ideas_count: usize,
    pub minimalism_count: usize,
    pub planner_sections: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_entries: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
