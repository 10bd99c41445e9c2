//! Common types used throughout pagewise
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Sort Order
// ============================================================================

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Keyword used in an ORDER BY clause
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A parsed sort: one field plus a direction.
///
/// Displays as the clause handed to adapters, e.g. `name desc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Field to order by
    pub field: String,
    /// Direction
    pub direction: SortDirection,
}

impl SortOrder {
    /// Parse a sort spec of the form `+field` (ascending) or `-field` (descending)
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.len() < 2 {
            return Err(Error::invalid_sort(spec, "too short sort parameter"));
        }

        let (direction, field) = if let Some(field) = spec.strip_prefix('+') {
            (SortDirection::Asc, field)
        } else if let Some(field) = spec.strip_prefix('-') {
            (SortDirection::Desc, field)
        } else {
            return Err(Error::invalid_sort(
                spec,
                "sort parameter should start with `-` as desc or `+` as asc",
            ));
        };

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }

    /// Parse the `<field> asc|desc` clause produced by [`SortOrder`]'s `Display`
    pub fn from_clause(clause: &str) -> Result<Self> {
        let clause = clause.trim();
        let (field, direction) = clause
            .rsplit_once(' ')
            .ok_or_else(|| Error::invalid_sort(clause, "expected `<field> asc|desc`"))?;

        let direction = match direction.to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => {
                return Err(Error::invalid_sort(
                    clause,
                    format!("unknown sort direction '{other}'"),
                ))
            }
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(Error::invalid_sort(clause, "missing sort field"));
        }

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction.as_str())
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("+name", "name asc" ; "ascending")]
    #[test_case("-name", "name desc" ; "descending")]
    #[test_case("+created_at", "created_at asc" ; "underscore field")]
    #[test_case("-é", "é desc" ; "multibyte field")]
    fn test_sort_order_parse(spec: &str, expected: &str) {
        assert_eq!(SortOrder::parse(spec).unwrap().to_string(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("x" ; "single char")]
    #[test_case("+" ; "prefix only")]
    #[test_case("name" ; "missing prefix")]
    #[test_case("*name" ; "unknown prefix")]
    fn test_sort_order_parse_invalid(spec: &str) {
        let err = SortOrder::parse(spec).unwrap_err();
        assert!(matches!(err, Error::InvalidSortSpec { .. }));
    }

    #[test]
    fn test_sort_order_from_clause() {
        let order = SortOrder::from_clause("name desc").unwrap();
        assert_eq!(order.field, "name");
        assert_eq!(order.direction, SortDirection::Desc);

        let order = SortOrder::from_clause("id ASC").unwrap();
        assert_eq!(order.direction, SortDirection::Asc);

        assert!(SortOrder::from_clause("name").is_err());
        assert!(SortOrder::from_clause("name sideways").is_err());
        assert!(SortOrder::from_clause(" asc").is_err());
    }

    #[test]
    fn test_sort_order_round_trips_through_clause() {
        let order = SortOrder::parse("-score").unwrap();
        assert_eq!(SortOrder::from_clause(&order.to_string()).unwrap(), order);
    }

    #[test]
    fn test_log_level_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::default()), tracing::Level::INFO);
    }
}
