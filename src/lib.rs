//! THG Algo - Recommendation matching service for the Tiny Home Guide app
//!
//! This library provides the recommendation core used by the Tiny Home Guide
//! app: a deterministic filter-then-score pass over static catalogs of layout
//! patterns, furniture and design reference content.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{normalize, profile::ProfileError, Recommender};
pub use crate::models::{
    LayoutPattern, RecommendationResponse, ScoredLayout, SpaceProfile, SpaceProfileInput,
};
pub use crate::services::{CatalogError, CatalogStore};
