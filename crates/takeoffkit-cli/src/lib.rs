//! Headless command-line interface.
//!
//! Commands write their output to the supplied writer so the binary and
//! the tests share one code path.

mod args;

pub use args::{Cli, Command};

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use takeoffkit::designer::format_result;
use takeoffkit::{
    evaluate, format_fixed, slope_from_rise, truncate_3, Aggregator, CategoryTotals, Config,
    ExportDocument, Exporter, PageStats, ProjectFile, SvgOverlayExporter,
};
use takeoffkit_core::constants::FORMULA_PLACES;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    pdf_path: Option<&'a Path>,
    pages: &'a [PageStats],
    totals: &'a CategoryTotals,
}

/// Runs one command.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Report {
            project,
            json,
            config,
        } => report(project, *json, config.as_deref(), out),
        Command::Slope { height, base } => {
            let slope = slope_from_rise(*height, *base)
                .with_context(|| format!("Base must be a positive number, got {}", base))?;
            writeln!(out, "{}", format_fixed(slope, FORMULA_PLACES))?;
            Ok(())
        }
        Command::Eval { expr } => {
            let value = evaluate(expr).with_context(|| format!("Cannot evaluate '{}'", expr))?;
            writeln!(out, "{} = {}", expr.trim(), format_result(value))?;
            writeln!(out, "truncated: {}", format_result(truncate_3(value)))?;
            Ok(())
        }
        Command::Export { project, output } => export(project, output, out),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match Config::default_path() {
        Ok(path) => Ok(Config::load_or_default(&path).unwrap_or_else(|e| {
            warn!("Ignoring config {}: {}", path.display(), e);
            Config::default()
        })),
        Err(e) => {
            debug!("No config directory: {}", e);
            Ok(Config::default())
        }
    }
}

fn report(project: &Path, json: bool, config: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let config = load_config(config)?;
    let file = ProjectFile::load_from_file(project)
        .with_context(|| format!("Cannot open project {}", project.display()))?;
    let store = file.to_store()?;

    let stats = Aggregator::new(&config.categories).document_stats(&store);

    if json {
        let report = JsonReport {
            name: &file.metadata.name,
            pdf_path: file.pdf_path.as_deref(),
            pages: &stats.pages,
            totals: &stats.totals,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "Project: {}", file.metadata.name)?;
    for line in stats.lines() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "Total:")?;
    for line in stats.totals.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn export(project: &Path, output: &Path, out: &mut dyn Write) -> Result<()> {
    let file = ProjectFile::load_from_file(project)
        .with_context(|| format!("Cannot open project {}", project.display()))?;
    let store = file.to_store()?;

    let document = ExportDocument::from_store(&store, file.pdf_path.as_deref());
    for path in SvgOverlayExporter::new().export(&document, output)? {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}
