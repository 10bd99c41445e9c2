//! JSON array adapter
//!
//! Holds a list of JSON records and orders them by a (possibly nested)
//! field before slicing out a page.

use super::{window_bounds, Adapter};
use crate::error::{Error, Result};
use crate::types::{JsonValue, SortDirection, SortOrder};
use std::cmp::Ordering;
use std::path::Path;

/// Paginates an owned list of JSON records, honoring the sort clause
#[derive(Debug, Clone, Default)]
pub struct JsonAdapter {
    records: Vec<JsonValue>,
}

impl JsonAdapter {
    /// Create a new adapter over already-parsed records
    pub fn new(records: Vec<JsonValue>) -> Self {
        Self { records }
    }

    /// Parse a JSON array document
    pub fn parse(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Read and parse a JSON array file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Take the records out of a JSON array value
    pub fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Array(records) => Ok(Self::new(records)),
            other => Err(Error::adapter(format!(
                "expected a JSON array of records, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// All records, in their original order
    pub fn records(&self) -> &[JsonValue] {
        &self.records
    }
}

impl Adapter for JsonAdapter {
    type Item = JsonValue;

    fn count(&self) -> Result<u64> {
        Ok(self.records.len() as u64)
    }

    fn fetch(
        &self,
        offset: usize,
        length: usize,
        sort: &str,
        out: &mut Vec<JsonValue>,
    ) -> Result<()> {
        let order = SortOrder::from_clause(sort)?;

        let mut sorted: Vec<&JsonValue> = self.records.iter().collect();
        sorted.sort_by(|a, b| {
            let ordering = compare_json(
                extract_field(a, &order.field),
                extract_field(b, &order.field),
            );
            match order.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let (start, end) = window_bounds(sorted.len(), offset, length);
        tracing::trace!(%order, start, end, "slicing JSON records");

        out.clear();
        out.extend(sorted[start..end].iter().map(|v| (*v).clone()));
        Ok(())
    }
}

/// Look up a dotted field path (`user.name`, optionally prefixed with `$.`)
fn extract_field<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            JsonValue::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Total order over JSON values: missing < null < bool < number < string < other
fn compare_json(a: Option<&JsonValue>, b: Option<&JsonValue>) -> Ordering {
    fn rank(value: Option<&JsonValue>) -> u8 {
        match value {
            None => 0,
            Some(JsonValue::Null) => 1,
            Some(JsonValue::Bool(_)) => 2,
            Some(JsonValue::Number(_)) => 3,
            Some(JsonValue::String(_)) => 4,
            Some(_) => 5,
        }
    }

    match (a, b) {
        (Some(JsonValue::Bool(x)), Some(JsonValue::Bool(y))) => x.cmp(y),
        // All numbers compare as f64 under total_cmp
        (Some(JsonValue::Number(x)), Some(JsonValue::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Some(JsonValue::String(x)), Some(JsonValue::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
