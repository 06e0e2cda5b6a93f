//! Volume command implementation.
//!
//! Estimates how much area a purchase of containers will cover.

use super::{Overrides, config::load_settings};
use crate::display::{Report, emit};
use anyhow::{Result, bail};
use coatcalc_lib::{Catalog, ContainerSku, Units, VolumeEstimator};
use std::path::Path;

/// Resolve a container by label, capacity or catalog position.
///
/// Labels and capacities win over positions, so `1` is the 1 L container.
fn resolve_sku<'a>(catalog: &'a Catalog, query: Option<&str>) -> Result<&'a ContainerSku> {
    let Some(query) = query else {
        return Ok(catalog.first());
    };

    if let Some(sku) = catalog.find(query) {
        return Ok(sku);
    }

    if let Ok(index) = query.trim().parse::<usize>()
        && let Some(sku) = catalog.get(index)
    {
        return Ok(sku);
    }

    bail!(
        "Unknown container: {query}. Valid options: {}",
        catalog.labels().join(", ")
    )
}

/// Estimate coverage for `units` containers and print the report.
pub(crate) fn volume(
    sku: Option<&str>,
    units: Units,
    overrides: Overrides,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let settings = load_settings()?;
    let params = overrides.resolve(&settings, quiet);

    let estimator = VolumeEstimator::global();
    let sku = resolve_sku(estimator.catalog(), sku)?;
    let estimate = estimator.estimate(sku, units, params.coats, params.buffer);

    emit(
        Report::Volume(&estimate),
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
