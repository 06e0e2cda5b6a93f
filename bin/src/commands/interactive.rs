//! Interactive mode.
//!
//! Prompts for a mode and its inputs, prints the text report and starts
//! over until the user cancels a prompt.

use super::config::load_settings;
use crate::display::{Report, write_report};
use anyhow::{Context, Result};
use coatcalc_lib::{
    Area, AreaEstimator, BufferPercent, Catalog, Coats, OutputFormat, Settings, Units,
    VolumeEstimator,
};
use inquire::{CustomType, InquireError, Select, Text};
use std::fmt;

/// Calculator mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    ByArea,
    ByVolume,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByArea => write!(f, "By Area"),
            Self::ByVolume => write!(f, "By Volume"),
        }
    }
}

/// Converts a cancelled prompt into `None`.
fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Prompt failed"),
    }
}

fn prompt_coats(default: Coats) -> Result<Option<Coats>> {
    let options = Coats::all().to_vec();
    let cursor = options.iter().position(|c| *c == default).unwrap_or(0);
    answered(
        Select::new("Number of coats:", options)
            .with_starting_cursor(cursor)
            .prompt(),
    )
}

fn prompt_buffer(message: &str, default: BufferPercent) -> Result<Option<BufferPercent>> {
    answered(
        CustomType::<BufferPercent>::new(message)
            .with_default(default)
            .with_error_message("Enter a percentage from 0 to 20")
            .with_help_message("Safety margin, 0 to 20 percent")
            .prompt(),
    )
}

fn run_area(settings: &Settings) -> Result<Option<String>> {
    let Some(area) = answered(
        Text::new("Surface area (m²):")
            .with_default("1")
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let Some(coats) = prompt_coats(settings.coats)? else {
        return Ok(None);
    };
    let Some(buffer) = prompt_buffer("Safety buffer (%):", settings.buffer_percent)? else {
        return Ok(None);
    };

    let estimator = AreaEstimator::new(Catalog::global(), settings.policy);
    let estimate = estimator.estimate(Area::parse_lenient(&area), coats, buffer);

    let mut output = Vec::new();
    write_report(
        Report::Area(&estimate),
        OutputFormat::Text,
        settings.show_note,
        &mut output,
    )?;
    Ok(Some(String::from_utf8_lossy(&output).into_owned()))
}

fn run_volume(settings: &Settings) -> Result<Option<String>> {
    let estimator = VolumeEstimator::global();
    let catalog = estimator.catalog();

    let Some(sku) = answered(
        Select::new("Container size:", catalog.as_slice().to_vec()).prompt(),
    )?
    else {
        return Ok(None);
    };
    let Some(units) = answered(
        Text::new("Number of containers:")
            .with_default("1")
            .prompt(),
    )?
    else {
        return Ok(None);
    };
    let Some(coats) = prompt_coats(settings.coats)? else {
        return Ok(None);
    };
    let Some(buffer) = prompt_buffer("Coverage buffer (%):", settings.buffer_percent)? else {
        return Ok(None);
    };

    let estimate = estimator.estimate(&sku, Units::parse_lenient(&units), coats, buffer);

    let mut output = Vec::new();
    write_report(
        Report::Volume(&estimate),
        OutputFormat::Text,
        settings.show_note,
        &mut output,
    )?;
    Ok(Some(String::from_utf8_lossy(&output).into_owned()))
}

/// Run the prompt loop.
pub(crate) fn interactive(quiet: bool) -> Result<()> {
    let mut settings = load_settings()?;
    settings.show_note &= !quiet;

    loop {
        let Some(mode) = answered(
            Select::new("Calculate coverage:", vec![Mode::ByArea, Mode::ByVolume]).prompt(),
        )?
        else {
            return Ok(());
        };

        let report = match mode {
            Mode::ByArea => run_area(&settings)?,
            Mode::ByVolume => run_volume(&settings)?,
        };

        match report {
            Some(report) => println!("\n{report}"),
            None => return Ok(()),
        }
    }
}
