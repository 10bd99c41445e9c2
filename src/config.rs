//! Configuration types
//!
//! Defaults for page size, page-window proximity and sort, loadable from
//! YAML or JSON.

use crate::error::{Error, Result};
use crate::paginator::{DEFAULT_PER_PAGE, DEFAULT_SORT};
use crate::types::{LogLevel, SortOrder};
use crate::view::DEFAULT_PROXIMITY;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Pagination Config
// ============================================================================

/// Pagination settings loaded from YAML or JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Records per page
    pub per_page: usize,

    /// Half-width of the rendered page window
    pub proximity: usize,

    /// Sort spec (`+field` or `-field`)
    pub sort: String,

    /// Log level for the command-line front end
    pub log_level: LogLevel,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            proximity: DEFAULT_PROXIMITY,
            sort: DEFAULT_SORT.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl PaginationConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; `.json` files are read as JSON, anything else as YAML
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::invalid_value("per_page", "must be at least 1"));
        }

        if self.proximity == 0 {
            return Err(Error::invalid_value("proximity", "must be at least 1"));
        }

        SortOrder::parse(&self.sort)
            .map_err(|e| Error::invalid_value("sort", e.to_string()))?;

        Ok(())
    }
}
