//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginate JSON files and DuckDB queries from the command line
#[derive(Parser, Debug)]
#[command(name = "pagewise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Page to show (values below 1 show the first page)
    #[arg(
        short,
        long,
        global = true,
        default_value = "1",
        allow_hyphen_values = true
    )]
    pub page: i64,

    /// Records per page (overrides config)
    #[arg(long, global = true)]
    pub per_page: Option<usize>,

    /// Sort spec, `+field` or `-field` (overrides config)
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Half-width of the page window (overrides config)
    #[arg(long, global = true)]
    pub proximity: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Paginate the records of a JSON array file
    Json {
        /// JSON file holding an array of records
        #[arg(long)]
        file: PathBuf,
    },

    /// Paginate the rows of a DuckDB query
    Query {
        /// DuckDB database file (or :memory:)
        #[arg(long, default_value = ":memory:")]
        database: PathBuf,

        /// Base SELECT statement
        #[arg(long)]
        sql: String,
    },

    /// Show page metadata for a record count, without fetching records
    Window {
        /// Total number of records
        #[arg(long)]
        total: u64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON document with page info and items
    Json,
    /// Human-readable output
    Pretty,
}
