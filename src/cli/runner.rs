//! CLI runner - executes commands

use crate::adapter::{Adapter, JsonAdapter};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PaginationConfig;
use crate::database::DatabaseAdapter;
use crate::error::{Result, ResultExt};
use crate::page_info::PageInfo;
use crate::paginator::Paginator;
use crate::types::{JsonValue, LogLevel};
use crate::view::DefaultView;
use serde_json::json;
use std::fmt::Write as _;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return what would be printed
    pub fn execute(&self) -> Result<String> {
        let config = self.config()?;

        match &self.cli.command {
            Commands::Json { file } => {
                let adapter = JsonAdapter::from_path(file)
                    .with_context(|| format!("Failed to load {}", file.display()))?;
                self.paginate(&adapter, &config, true)
            }
            Commands::Query { database, sql } => {
                let adapter = DatabaseAdapter::open(database, sql.as_str())?;
                self.paginate(&adapter, &config, true)
            }
            Commands::Window { total } => {
                let adapter = CountOnly(*total);
                self.paginate(&adapter, &config, false)
            }
        }
    }

    /// Resolve the effective config: file (or defaults) with flag overrides
    pub fn config(&self) -> Result<PaginationConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PaginationConfig::from_path(path)?,
            None => PaginationConfig::default(),
        };

        if let Some(per_page) = self.cli.per_page {
            config.per_page = per_page;
        }
        if let Some(sort) = &self.cli.sort {
            config.sort.clone_from(sort);
        }
        if let Some(proximity) = self.cli.proximity {
            config.proximity = proximity;
        }
        if self.cli.verbose {
            config.log_level = LogLevel::Debug;
        }

        config.validate()?;
        Ok(config)
    }

    /// Log level to install before running; falls back to INFO if the config is unreadable
    pub fn log_level(&self) -> tracing::Level {
        self.config()
            .map(|config| config.log_level)
            .unwrap_or_default()
            .into()
    }

    fn paginate<A>(&self, adapter: &A, config: &PaginationConfig, with_items: bool) -> Result<String>
    where
        A: Adapter<Item = JsonValue>,
    {
        let mut paginator = Paginator::with_config(adapter, config);
        paginator.set_page(self.cli.page);

        let info = DefaultView::with_proximity(&paginator, config.proximity).info()?;
        let items = if with_items {
            paginator.results()?
        } else {
            Vec::new()
        };

        tracing::info!(
            page = info.page,
            page_nums = info.page_nums,
            items = items.len(),
            "paginated"
        );

        match self.cli.format {
            OutputFormat::Json => {
                let document = if with_items {
                    json!({ "page_info": info, "items": items })
                } else {
                    json!({ "page_info": info })
                };
                Ok(serde_json::to_string_pretty(&document)?)
            }
            OutputFormat::Pretty => Ok(render_pretty(&info, &items)),
        }
    }
}

/// Adapter that only knows a record count
struct CountOnly(u64);

impl Adapter for CountOnly {
    type Item = JsonValue;

    fn count(&self) -> Result<u64> {
        Ok(self.0)
    }

    fn fetch(
        &self,
        _offset: usize,
        _length: usize,
        _sort: &str,
        out: &mut Vec<JsonValue>,
    ) -> Result<()> {
        out.clear();
        Ok(())
    }
}

/// Human-readable page: header, one record per line, then the page window
fn render_pretty(info: &PageInfo, items: &[JsonValue]) -> String {
    let mut output = format!(
        "Page {} of {} ({} records, {} per page)",
        info.page, info.page_nums, info.total, info.per_page
    );

    for item in items {
        let _ = write!(output, "\n  {item}");
    }

    let window = render_window(info);
    if !window.is_empty() {
        let _ = write!(output, "\n{window}");
    }

    output
}

/// Render the page window, e.g. `« 1 2 [3] 4 5 »`
pub fn render_window(info: &PageInfo) -> String {
    if info.pages.is_empty() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(info.pages.len() + 2);
    if info.has_prev {
        parts.push("«".to_string());
    }
    for page in &info.pages {
        if *page == info.page {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if info.has_next {
        parts.push("»".to_string());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["pagewise"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_render_window() {
        let info = PageInfo {
            page: 3,
            page_nums: 5,
            has_pages: true,
            has_prev: true,
            has_next: true,
            pages: vec![1, 2, 3, 4, 5],
            ..Default::default()
        };
        assert_eq!(render_window(&info), "« 1 2 [3] 4 5 »");

        let info = PageInfo {
            page: 1,
            has_next: true,
            pages: vec![1, 2],
            ..Default::default()
        };
        assert_eq!(render_window(&info), "[1] 2 »");

        assert_eq!(render_window(&PageInfo::default()), "");
    }

    #[test]
    fn test_config_overrides() {
        let runner = runner(&["--per-page", "3", "--sort", "-name", "window", "--total", "10"]);
        let config = runner.config().unwrap();
        assert_eq!(config.per_page, 3);
        assert_eq!(config.sort, "-name");
        assert_eq!(config.proximity, 5);
        assert_eq!(runner.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_verbose_sets_debug() {
        let runner = runner(&["--verbose", "window", "--total", "10"]);
        assert_eq!(runner.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let runner = runner(&["--per-page", "0", "window", "--total", "10"]);
        assert!(runner.execute().is_err());
    }

    #[test]
    fn test_window_command() {
        let output = runner(&["--page", "15", "window", "--total", "150"])
            .execute()
            .unwrap();
        let document: JsonValue = serde_json::from_str(&output).unwrap();

        assert_eq!(document["page_info"]["page"], 15);
        assert_eq!(document["page_info"]["next"], JsonValue::Null);
        assert_eq!(
            document["page_info"]["pages"],
            json!([6, 7, 8, 9, 10, 11, 12, 13, 14, 15])
        );
        assert!(document.get("items").is_none());
    }

    #[test]
    fn test_huge_proximity_flag() {
        let output = runner(&[
            "--proximity",
            "18446744073709551615",
            "--page",
            "7",
            "window",
            "--total",
            "150",
        ])
        .execute()
        .unwrap();
        let document: JsonValue = serde_json::from_str(&output).unwrap();

        let expected: Vec<usize> = (1..=15).collect();
        assert_eq!(document["page_info"]["pages"], json!(expected));
    }

    #[test]
    fn test_negative_page_flag() {
        let output = runner(&["--page", "-4", "window", "--total", "100"])
            .execute()
            .unwrap();
        let document: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(document["page_info"]["page"], 1);
    }

    #[test]
    fn test_json_command_pretty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, r#"[{"id": 3}, {"id": 1}, {"id": 2}]"#).unwrap();

        let output = runner(&[
            "--per-page",
            "2",
            "--page",
            "2",
            "--format",
            "pretty",
            "json",
            "--file",
            path.to_str().unwrap(),
        ])
        .execute()
        .unwrap();

        assert_eq!(
            output,
            "Page 2 of 2 (3 records, 2 per page)\n  {\"id\":3}\n« 1 [2]"
        );
    }

    #[test]
    fn test_json_command_missing_file() {
        let err = runner(&["json", "--file", "/definitely/not/here.json"])
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }

    #[test]
    fn test_query_command() {
        let output = runner(&[
            "--per-page",
            "4",
            "--page",
            "2",
            "--sort",
            "-n",
            "query",
            "--sql",
            "SELECT CAST(i AS INTEGER) AS n FROM range(1, 11) t(i)",
        ])
        .execute()
        .unwrap();
        let document: JsonValue = serde_json::from_str(&output).unwrap();

        assert_eq!(document["page_info"]["total"], 10);
        assert_eq!(document["page_info"]["page_nums"], 3);
        assert_eq!(
            document["items"],
            json!([{"n": 6}, {"n": 5}, {"n": 4}, {"n": 3}])
        );
    }
}
