use std::path::PathBuf;

use clap::Parser;
use locs_graph::category::Category;
use locs_graph::cli::Cli;
use locs_graph::config::Config;
use locs_graph::output::OutputFormat;
use locs_graph::output::svg::SvgElement;
use locs_graph::report::CategoryTotal;
use locs_graph::{EXIT_CONFIG_ERROR, EXIT_NO_DATA, EXIT_SUCCESS, LocsGraphError};
use tempfile::TempDir;

use crate::{
    build_chart, default_log_level, exit_code_for, format_summary, load_config, read_report,
    write_graph,
};

fn sample_totals() -> Vec<CategoryTotal> {
    vec![
        CategoryTotal::new(Category::Glibc, 1000),
        CategoryTotal::new(Category::Smalloc, 500),
    ]
}

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_NO_DATA, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn missing_categories_exit_with_no_data() {
    let err = LocsGraphError::no_categories("nothing here");
    assert_eq!(exit_code_for(&err), EXIT_NO_DATA);
}

#[test]
fn other_errors_exit_with_config_error() {
    let err = LocsGraphError::Config("bad".to_string());
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
}

#[test]
fn log_level_follows_verbosity() {
    assert_eq!(default_log_level(0), "warn");
    assert_eq!(default_log_level(1), "info");
    assert_eq!(default_log_level(2), "debug");
    assert_eq!(default_log_level(9), "debug");
}

#[test]
fn load_config_no_config_returns_default() {
    let config = load_config(None, true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let result = load_config(Some(&PathBuf::from("/nonexistent/locs-graph.toml")), false);
    assert!(matches!(result, Err(LocsGraphError::FileRead { .. })));
}

#[test]
fn load_config_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[chart]\ntitle = \"Custom\"\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();
    assert_eq!(config.chart.title, "Custom");
}

#[test]
fn read_report_missing_file_names_path() {
    let err = read_report(&PathBuf::from("/nonexistent/locs.txt")).unwrap_err();
    assert!(err.message().contains("/nonexistent/locs.txt"));
}

#[test]
fn format_summary_text_lists_names() {
    let output = format_summary(OutputFormat::Text, &sample_totals()).unwrap();
    assert!(output.contains("glibc"));
    assert!(output.contains("1,000"));
}

#[test]
fn format_summary_json_is_valid() {
    let output = format_summary(OutputFormat::Json, &sample_totals()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["allocators"][1]["allocator"], "smalloc");
}

#[test]
fn build_chart_carries_config_and_metadata() {
    let cli = Cli::parse_from(["locs-graph", "locs.txt", "--commit", "abcdef0123456789"]);
    let mut config = Config::default();
    config.chart.title = "Allocator footprint".to_string();

    let svg = build_chart(sample_totals(), &config, &cli).render();
    assert!(svg.contains("Allocator footprint"));
    assert!(svg.contains("Commit: abcdef012345"));
    assert!(!svg.contains("abcdef0123456789"));
}

#[test]
fn write_graph_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("locs.svg");
    write_graph(&path, "<svg/>").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
}

#[test]
fn write_graph_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("locs.svg");
    let err = write_graph(&path, "<svg/>").unwrap_err();
    assert!(matches!(err, LocsGraphError::FileWrite { .. }));
}
