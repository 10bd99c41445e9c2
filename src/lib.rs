// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # pagewise
//!
//! Page-number pagination over pluggable data sources.
//!
//! ## Features
//!
//! - **Paginator**: page clamping, lazily cached record count, next/prev navigation
//! - **Page Window**: Google-style list of page numbers around the current page
//! - **Adapters**: in-memory slices, JSON arrays, DuckDB queries
//! - **Serializable Metadata**: `PageInfo` for JSON responses
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewise::{DefaultView, Paginator, SliceAdapter, Viewer};
//!
//! let records: Vec<u32> = (1..=150).collect();
//! let adapter = SliceAdapter::new(&records);
//!
//! let mut paginator = Paginator::new(&adapter, 10);
//! paginator.set_page(7);
//!
//! assert_eq!(paginator.page_nums()?, 15);
//! assert_eq!(paginator.results()?, (61..=70).collect::<Vec<_>>());
//!
//! let view = DefaultView::new(&paginator);
//! assert_eq!(view.pages()?, (2..=11).collect::<Vec<_>>());
//! # Ok::<(), pagewise::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 DefaultView / PageInfo                   │
//! │  pages()  next()  prev()  current()  last()  info()      │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Paginator                         │
//! │  set_page  page  set_sort  sort  nums  page_nums         │
//! │  has_pages  has_next  has_prev  next_page  prev_page     │
//! │  results                                                 │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────────┬────────────┴──────────┬──────────────────┐
//! │ SliceAdapter  │     JsonAdapter       │ DatabaseAdapter  │
//! │ &[T]          │ Vec<serde_json::Value>│ DuckDB query     │
//! └───────────────┴───────────────────────┴──────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document error variants and enum members before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Adapter trait and in-memory adapters
pub mod adapter;

/// DuckDB-backed adapter
pub mod database;

/// Page-number paginator
pub mod paginator;

/// Page window view
pub mod view;

/// Serializable page metadata
pub mod page_info;

/// Configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use adapter::{Adapter, JsonAdapter, SliceAdapter};
pub use config::PaginationConfig;
pub use database::DatabaseAdapter;
pub use page_info::PageInfo;
pub use paginator::{Paginator, DEFAULT_PER_PAGE, DEFAULT_SORT};
pub use view::{DefaultView, Viewer, DEFAULT_PROXIMITY};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
