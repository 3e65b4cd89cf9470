use serde::Serialize;
use thiserror::Error;

use crate::models::{Mobility, SpaceProfile, SpaceProfileInput, Zone};

/// Default ceiling height in meters when the profile omits one
pub const DEFAULT_HEIGHT_M: f64 = 2.7;

/// Zones assumed when a profile declares none
pub const DEFAULT_ZONES: [Zone; 3] = [Zone::Sleep, Zone::Work, Zone::Kitchen];

/// A single field-level problem with a raw profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// Raised when a raw profile cannot be coerced into a canonical one
#[derive(Debug, Clone, Error)]
#[error("invalid space profile: {}", summarize(.issues))]
pub struct ProfileError {
    pub issues: Vec<FieldIssue>,
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a raw profile and fill defaults, producing the canonical
/// profile all matching logic runs on
///
/// Defaulting rules:
/// * `height` absent, non-finite or non-positive -> 2.7
/// * `mobility` absent -> mobile
/// * `zones` empty -> sleep + work + kitchen
/// * `loft` absent -> false
///
/// Geometry must be finite and positive; anything else is a hard
/// `ProfileError` with field-level issues and no partial result.
/// Normalization is idempotent: a canonical profile round-trips
/// unchanged.
pub fn normalize(input: &SpaceProfileInput) -> Result<SpaceProfile, ProfileError> {
    let mut issues = Vec::new();

    if !is_positive_dimension(input.length) {
        issues.push(FieldIssue {
            field: "length",
            message: "must be a positive number of meters".to_string(),
        });
    }
    if !is_positive_dimension(input.width) {
        issues.push(FieldIssue {
            field: "width",
            message: "must be a positive number of meters".to_string(),
        });
    }

    if !issues.is_empty() {
        return Err(ProfileError { issues });
    }

    // A bad height never disqualifies a profile, it falls back
    let height = input
        .height
        .filter(|h| is_positive_dimension(*h))
        .unwrap_or(DEFAULT_HEIGHT_M);

    // Dedup while keeping the order zones were asked for in
    let mut zones: Vec<Zone> = Vec::with_capacity(input.zones.len());
    for zone in &input.zones {
        if !zones.contains(zone) {
            zones.push(*zone);
        }
    }
    if zones.is_empty() {
        zones = DEFAULT_ZONES.to_vec();
    }

    Ok(SpaceProfile {
        length: input.length,
        width: input.width,
        height,
        space_type: input.space_type,
        occupants: input.occupants,
        zones,
        mobility: input.mobility.unwrap_or(Mobility::Mobile),
        loft: input.loft.unwrap_or(false),
    })
}

#[inline]
fn is_positive_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
