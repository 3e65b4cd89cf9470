use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    DesignTip, FurnitureItem, LayoutPattern, MinimalismGuide, ProjectPlanner, ZoneArrangement,
};

/// Seed catalog compiled into the binary
const DEFAULT_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no {0}")]
    EmptyCollection(&'static str),
}

/// Immutable in-memory catalog of reference content
///
/// Loaded once at startup and shared read-only for the process
/// lifetime; requests never mutate it. A constructed store is
/// guaranteed non-empty in every collection, so an empty
/// recommendation set always means "nothing matched", never "nothing
/// loaded".
#[derive(Debug, Deserialize)]
pub struct CatalogStore {
    pub layouts: Vec<LayoutPattern>,
    pub furniture: Vec<FurnitureItem>,
    pub arrangements: Vec<ZoneArrangement>,
    #[serde(rename = "designTips")]
    pub design_tips: Vec<DesignTip>,
    pub minimalism: Vec<MinimalismGuide>,
    #[serde(rename = "projectPlanner")]
    pub planner: ProjectPlanner,
}

impl CatalogStore {
    /// Load the seed catalog embedded in the binary
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG_JSON)
    }

    /// Load a catalog from an operator-supplied JSON file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let store: CatalogStore = serde_json::from_str(json)?;
        store.validate()?;
        Ok(store)
    }

    /// Total number of catalog entries across all collections
    pub fn entry_count(&self) -> usize {
        self.layouts.len()
            + self.furniture.len()
            + self.arrangements.len()
            + self.design_tips.len()
            + self.minimalism.len()
            + self.planner.section_count()
    }

    // Refuse to serve from a hollow catalog rather than silently
    // returning empty recommendation sets
    fn validate(&self) -> Result<(), CatalogError> {
        if self.layouts.is_empty() {
            return Err(CatalogError::EmptyCollection("layout patterns"));
        }
        if self.furniture.is_empty() {
            return Err(CatalogError::EmptyCollection("furniture items"));
        }
        if self.arrangements.is_empty() {
            return Err(CatalogError::EmptyCollection("zone arrangements"));
        }
        if self.design_tips.is_empty() {
            return Err(CatalogError::EmptyCollection("design tips"));
        }
        if self.minimalism.is_empty() {
            return Err(CatalogError::EmptyCollection("minimalism guides"));
        }
        if self.planner.section_count() == 0 {
            return Err(CatalogError::EmptyCollection("planner sections"));
        }
        Ok(())
    }

    /// Minimal store for exercising the pipeline against hand-built
    /// layout patterns
    #[cfg(test)]
    pub(crate) fn fixture(layouts: Vec<LayoutPattern>) -> Self {
        let mut store = Self::load_default().expect("embedded catalog parses");
        store.layouts = layouts;
        store
    }
}
