use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use locs_graph::cli::Cli;
use locs_graph::config::{Config, ConfigLoader, FileConfigLoader};
use locs_graph::output::svg::{ChartMetadata, LocBarChart, SvgElement};
use locs_graph::output::{
    ColorMode, JsonFormatter, OutputFormat, SummaryFormatter, TextFormatter, print_error_full,
};
use locs_graph::report::{CategoryTotal, parse_report};
use locs_graph::{EXIT_CONFIG_ERROR, EXIT_NO_DATA, EXIT_SUCCESS, LocsGraphError};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            print_error_full(&err, ColorMode::from(cli.color));
            exit_code_for(&err)
        }
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins over the `-v` count when set.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

const fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

const fn exit_code_for(err: &LocsGraphError) -> i32 {
    match err {
        LocsGraphError::NoCategories { .. } => EXIT_NO_DATA,
        _ => EXIT_CONFIG_ERROR,
    }
}

fn run(cli: &Cli) -> locs_graph::Result<()> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;

    let content = read_report(&cli.input)?;
    let totals = parse_report(&content);
    if totals.is_empty() {
        return Err(LocsGraphError::no_categories(&content));
    }
    info!(categories = totals.len(), "parsed report");

    let ordered = totals.ordered();
    print!("{}", format_summary(cli.format, &ordered)?);

    if let Some(graph_path) = &cli.graph {
        let chart = build_chart(ordered, &config, cli);
        write_graph(graph_path, &chart.render())?;
        if !cli.quiet {
            println!("\n📊 Graph saved to: {}", graph_path.display());
        }
    }

    Ok(())
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> locs_graph::Result<Config> {
    if no_config {
        debug!("configuration loading disabled");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn read_report(path: &Path) -> locs_graph::Result<String> {
    fs::read_to_string(path).map_err(|source| LocsGraphError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn format_summary(format: OutputFormat, totals: &[CategoryTotal]) -> locs_graph::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter.format(totals),
        OutputFormat::Json => JsonFormatter.format(totals),
    }
}

fn build_chart(data: Vec<CategoryTotal>, config: &Config, cli: &Cli) -> LocBarChart {
    let metadata = ChartMetadata::new(config.chart.source.clone())
        .with_commit(cli.commit.clone())
        .with_git_status(cli.git_status.clone())
        .with_cpu(cli.cpu.clone())
        .with_os(cli.os.clone());

    LocBarChart::new(data)
        .with_title(config.chart.title.clone())
        .with_layout(config.chart.layout())
        .with_metadata(metadata)
}

fn write_graph(path: &Path, svg: &str) -> locs_graph::Result<()> {
    fs::write(path, svg).map_err(|source| LocsGraphError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
