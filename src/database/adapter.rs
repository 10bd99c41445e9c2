//! DuckDB-backed adapter
//!
//! Counts and pages through the rows of a base query by wrapping it in a
//! subquery: `SELECT COUNT(*) FROM (<query>) AS q` and
//! `SELECT * FROM (<query>) AS q ORDER BY .. LIMIT .. OFFSET ..`.

use crate::adapter::Adapter;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, SortOrder};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, NaiveTime, SecondsFormat};
use duckdb::types::Value;
use duckdb::Connection;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Regex for plain or dotted SQL identifiers: `name`, `q.created_at`
static IDENTIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

/// Check whether a string is safe to splice into SQL as an identifier
pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER_REGEX.is_match(identifier)
}

/// Adapter paginating the rows of a DuckDB query.
///
/// Each row is returned as a JSON object keyed by column name.
pub struct DatabaseAdapter {
    /// DuckDB connection
    conn: Connection,
    /// Base query being paginated
    query: String,
}

impl DatabaseAdapter {
    /// Paginate `query` over an existing connection
    pub fn new(conn: Connection, query: impl Into<String>) -> Result<Self> {
        let query = query.into();
        let query = query.trim().trim_end_matches(';').trim().to_string();
        if query.is_empty() {
            return Err(Error::config("database query must not be empty"));
        }

        Ok(Self { conn, query })
    }

    /// Paginate every row of a table
    pub fn table(conn: Connection, table: &str) -> Result<Self> {
        if !is_valid_identifier(table) {
            return Err(Error::InvalidIdentifier {
                identifier: table.to_string(),
            });
        }

        Self::new(conn, format!("SELECT * FROM {table}"))
    }

    /// Open a DuckDB database file (or `:memory:`) and paginate `query` over it
    pub fn open(path: impl AsRef<Path>, query: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let conn = if path.as_os_str() == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };

        Self::new(conn, query)
    }

    /// Underlying connection, e.g. for setup statements
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Base query being paginated
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Build the page query for one window
    fn build_page_query(&self, offset: usize, length: usize, sort: &str) -> Result<String> {
        let order = SortOrder::from_clause(sort)?;
        if !is_valid_identifier(&order.field) {
            return Err(Error::InvalidIdentifier {
                identifier: order.field,
            });
        }

        Ok(format!(
            "SELECT * FROM ({}) AS q ORDER BY {} {} LIMIT {length} OFFSET {offset}",
            self.query,
            order.field,
            order.direction.as_str().to_uppercase()
        ))
    }
}

impl Adapter for DatabaseAdapter {
    type Item = JsonValue;

    fn count(&self) -> Result<u64> {
        let count_sql = format!("SELECT COUNT(*) FROM ({}) AS q", self.query);
        tracing::debug!("Executing count query: {}", count_sql);

        let count: i64 = self.conn.query_row(&count_sql, [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    fn fetch(
        &self,
        offset: usize,
        length: usize,
        sort: &str,
        out: &mut Vec<JsonValue>,
    ) -> Result<()> {
        let query = self.build_page_query(offset, length, sort)?;
        tracing::debug!("Executing page query: {}", query);

        let mut stmt = self.conn.prepare(&query)?;
        let mut rows = stmt.query([])?;
        let columns: Vec<String> = rows
            .as_ref()
            .map(|stmt| stmt.column_names())
            .unwrap_or_default();

        out.clear();
        while let Some(row) = rows.next()? {
            let mut record = JsonObject::new();
            for (idx, name) in columns.iter().enumerate() {
                let value: Value = row.get(idx)?;
                record.insert(name.clone(), cell_to_json(value));
            }
            out.push(JsonValue::Object(record));
        }

        Ok(())
    }
}

impl std::fmt::Debug for DatabaseAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseAdapter")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

/// Render one DuckDB cell as JSON.
///
/// Integers stay numbers (128-bit ones become strings), decimals keep their
/// exact text, temporal values become ISO-8601 strings and blobs are base64.
fn cell_to_json(value: Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(b),
        Value::TinyInt(i) => i64::from(i).into(),
        Value::SmallInt(i) => i64::from(i).into(),
        Value::Int(i) => i64::from(i).into(),
        Value::BigInt(i) => i.into(),
        Value::UTinyInt(i) => u64::from(i).into(),
        Value::USmallInt(i) => u64::from(i).into(),
        Value::UInt(i) => u64::from(i).into(),
        Value::UBigInt(i) => i.into(),
        Value::HugeInt(i) => JsonValue::String(i.to_string()),
        // Non-finite floats become null
        Value::Float(f) => f64::from(f).into(),
        Value::Double(f) => f.into(),
        Value::Decimal(d) => JsonValue::String(d.to_string()),
        Value::Text(s) | Value::Enum(s) => JsonValue::String(s),
        Value::Blob(b) => JsonValue::String(STANDARD.encode(b)),
        Value::Date32(days) => DateTime::from_timestamp(i64::from(days) * 86_400, 0)
            .map_or(JsonValue::from(days), |dt| {
                JsonValue::String(dt.date_naive().format("%Y-%m-%d").to_string())
            }),
        Value::Timestamp(unit, t) => {
            let micros = unit.to_micros(t);
            DateTime::from_timestamp_micros(micros).map_or(JsonValue::from(micros), |dt| {
                JsonValue::String(dt.to_rfc3339_opts(SecondsFormat::Micros, true))
            })
        }
        Value::Time64(unit, t) => {
            let micros = unit.to_micros(t);
            u32::try_from(micros.div_euclid(1_000_000))
                .ok()
                .and_then(|secs| {
                    let nanos = (micros.rem_euclid(1_000_000) * 1000) as u32;
                    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
                })
                .map_or(JsonValue::from(micros), |time| {
                    JsonValue::String(time.format("%H:%M:%S%.6f").to_string())
                })
        }
        other => JsonValue::String(format!("{other:?}")),
    }
}
