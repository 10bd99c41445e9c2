//! CLI module
//!
//! Command-line interface for paginating data sources.
//!
//! # Commands
//!
//! - `json` - Paginate a JSON array file
//! - `query` - Paginate a DuckDB query
//! - `window` - Show page metadata for a record count

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{render_window, Runner};
