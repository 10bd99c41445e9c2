//! Database adapter support via DuckDB
//!
//! This module paginates the rows of an arbitrary `SELECT` using DuckDB as
//! the query engine. DuckDB can read its own files as well as attached
//! PostgreSQL, MySQL and SQLite databases.

mod adapter;

pub use adapter::{is_valid_identifier, DatabaseAdapter};
