use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Mobility, Occupancy, SpaceProfile, SpaceType, Zone};

/// Raw space profile as posted by clients
///
/// Mirrors the onboarding form: geometry in meters plus closed sets of
/// dwelling types, occupancies and zones. Unknown enum values fail at
/// the JSON boundary; defaults are applied by `core::profile::normalize`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SpaceProfileInput {
    #[validate(range(min = 0.1, max = 100.0))]
    pub length: f64,
    #[validate(range(min = 0.1, max = 100.0))]
    pub width: f64,
    #[validate(range(min = 0.1, max = 10.0))]
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(rename = "type")]
    pub space_type: SpaceType,
    pub occupants: Occupancy,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub mobility: Option<Mobility>,
    #[serde(default)]
    pub loft: Option<bool>,
}

impl From<&SpaceProfile> for SpaceProfileInput {
    fn from(profile: &SpaceProfile) -> Self {
        Self {
            length: profile.length,
            width: profile.width,
            height: Some(profile.height),
            space_type: profile.space_type,
            occupants: profile.occupants,
            zones: profile.zones.clone(),
            mobility: Some(profile.mobility),
            loft: Some(profile.loft),
        }
    }
}
