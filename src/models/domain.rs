use serde::{Deserialize, Serialize};

/// Kind of dwelling a profile describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceType {
    TinyHouse,
    Cabin,
    Van,
    Studio,
}

/// Who lives in the space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    Solo,
    Couple,
    Family,
}

/// Activity zones a space can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Sleep,
    Work,
    Dining,
    Kitchen,
    Entry,
    Pet,
    Storage,
}

/// Whether the home moves (trailer/van) or stays put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mobility {
    Mobile,
    Fixed,
}

/// Canonical space profile produced by the normalizer
///
/// All defaults are applied and `zones` is never empty. Every matching
/// and scoring function operates on this form only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceProfile {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "type")]
    pub space_type: SpaceType,
    pub occupants: Occupancy,
    pub zones: Vec<Zone>,
    pub mobility: Mobility,
    pub loft: bool,
}

impl SpaceProfile {
    /// Usable floor area in square meters
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

/// Catalog-side constraint on one profile axis
///
/// `None` means the axis is unconstrained and always passes; a list
/// means the profile value must be one of the listed options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchAny<T>(Option<Vec<T>>);

impl<T> MatchAny<T> {
    pub fn unconstrained() -> Self {
        Self(None)
    }

    pub fn any_of(values: Vec<T>) -> Self {
        Self(Some(values))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.0.is_none()
    }

    /// The declared list, if the axis is constrained
    pub fn declared(&self) -> Option<&[T]> {
        self.0.as_deref()
    }
}

impl<T: PartialEq> MatchAny<T> {
    /// True when the axis is unconstrained or `value` is listed
    #[inline]
    pub fn permits(&self, value: &T) -> bool {
        match &self.0 {
            None => true,
            Some(allowed) => allowed.contains(value),
        }
    }

    /// True when the axis is unconstrained or shares at least one
    /// element with `values` (intersection, not full coverage)
    #[inline]
    pub fn permits_any(&self, values: &[T]) -> bool {
        match &self.0 {
            None => true,
            Some(allowed) => allowed.iter().any(|v| values.contains(v)),
        }
    }
}

impl<T> Default for MatchAny<T> {
    fn default() -> Self {
        Self(None)
    }
}

/// Targeting hints a layout pattern declares
///
/// Absent axes are unconstrained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedFor {
    #[serde(rename = "type", default, skip_serializing_if = "MatchAny::is_unconstrained")]
    pub space_types: MatchAny<SpaceType>,
    #[serde(default, skip_serializing_if = "MatchAny::is_unconstrained")]
    pub occupants: MatchAny<Occupancy>,
    #[serde(default, skip_serializing_if = "MatchAny::is_unconstrained")]
    pub zones: MatchAny<Zone>,
    #[serde(default, skip_serializing_if = "MatchAny::is_unconstrained")]
    pub mobility: MatchAny<Mobility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
}

/// A layout pattern from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPattern {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pros: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cons: Vec<String>,
    #[serde(default)]
    pub recommended_for: RecommendedFor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_area: Option<f64>,
    #[serde(default)]
    pub requires_loft: bool,
}

/// A layout pattern annotated with its match score for one profile
///
/// Derived per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLayout {
    #[serde(flatten)]
    pub pattern: LayoutPattern,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Approximate furniture footprint in centimeters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footprint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folded_depth: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_depth: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
}

/// Multifunctional furniture from the static catalog
///
/// `zones` is placement data with its own convention: an empty list
/// means the item fits any zone. Location and footprint are descriptive
/// pass-throughs, never used for filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub style: String,
    pub best_location: String,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint: Option<Footprint>,
}

/// Criteria a zone arrangement declares
///
/// Mirrors the layout `recommendedFor` shape, minus the area, type and
/// occupant axes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangementCriteria {
    #[serde(default, skip_serializing_if = "MatchAny::is_unconstrained")]
    pub zones: MatchAny<Zone>,
    #[serde(default)]
    pub requires_loft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(default, skip_serializing_if = "MatchAny::is_unconstrained")]
    pub mobility: MatchAny<Mobility>,
}

/// A zone arrangement idea with its own match criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneArrangement {
    pub id: String,
    pub title: String,
    pub detail: String,
    #[serde(default)]
    pub criteria: ArrangementCriteria,
}

/// A design tip, served as-is (category and kind stay free-form strings
/// since no logic branches on them)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignTip {
    pub id: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub bullets: Vec<String>,
}

/// A minimalism guide entry: a flow, rule, challenge or checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimalismGuide {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

/// One budget category of the project planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: String,
    pub label: String,
    pub checklist: Vec<String>,
}

/// Planner budget section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerBudget {
    pub intro: String,
    pub categories: Vec<BudgetCategory>,
}

/// One phase of the build timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub phase: String,
    pub tasks: Vec<String>,
    pub duration: String,
}

/// A standalone planner checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerChecklist {
    pub id: String,
    pub title: String,
    pub items: Vec<String>,
}

/// Project planner template, served as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPlanner {
    pub budget: PlannerBudget,
    pub timeline: Vec<TimelinePhase>,
    pub checklists: Vec<PlannerChecklist>,
}

impl ProjectPlanner {
    /// Number of concrete planner sections (budget categories, timeline
    /// phases and checklists), reported in the stats summary
    pub fn section_count(&self) -> usize {
        self.budget.categories.len() + self.timeline.len() + self.checklists.len()
    }
}
