//! Report rendering and output destinations for the coatcalc CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use coatcalc_lib::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
            Format::Csv => Self::Csv,
        }
    }
}

/// A report ready to be rendered.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Report<'a> {
    Area(&'a AreaEstimate),
    Volume(&'a VolumeEstimate),
    Catalog(&'a Catalog),
}

fn render<F: Formatter, W: Write>(formatter: &F, report: Report<'_>, writer: W) -> Result<()> {
    match report {
        Report::Area(estimate) => formatter.write_area(estimate, writer)?,
        Report::Volume(estimate) => formatter.write_volume(estimate, writer)?,
        Report::Catalog(catalog) => formatter.write_catalog(catalog, writer)?,
    }
    Ok(())
}

/// Render `report` in `format` to `writer`.
pub(crate) fn write_report<W: Write>(
    report: Report<'_>,
    format: OutputFormat,
    show_note: bool,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Text => render(&TextFormatter::new().with_note(show_note), report, writer),
        OutputFormat::Json => render(&JsonFormatter::new().with_pretty(true), report, writer),
        OutputFormat::Csv => render(&CsvFormatter::new(), report, writer),
    }
}

/// Render `report` to `output`, or to stdout when no path is given.
pub(crate) fn emit(
    report: Report<'_>,
    format: OutputFormat,
    show_note: bool,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(report, format, show_note, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), %format, "report written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_report(report, format, show_note, &mut stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
