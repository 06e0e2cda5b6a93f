//! Area command implementation.
//!
//! Estimates how much product an area needs and which containers to buy.

use super::{Overrides, config::load_settings};
use crate::display::{Report, emit};
use anyhow::Result;
use coatcalc_lib::{Area, AreaEstimator, Catalog};
use std::path::Path;

/// Estimate product for `area` and print the report.
pub(crate) fn area(
    area: Area,
    overrides: Overrides,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let settings = load_settings()?;
    let params = overrides.resolve(&settings, quiet);

    let estimator = AreaEstimator::new(Catalog::global(), params.policy);
    let estimate = estimator.estimate(area, params.coats, params.buffer);

    emit(
        Report::Area(&estimate),
        params.format,
        params.show_note,
        output,
    )?;

    if let Some(path) = output
        && !quiet
    {
        println!("Report written to: {}", path.display());
    }
    Ok(())
}
