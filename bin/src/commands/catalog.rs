//! Catalog command implementation.

use super::config::load_settings;
use crate::display::{Format, Report, emit};
use anyhow::Result;
use coatcalc_lib::{Catalog, OutputFormat};

/// List the container sizes.
pub(crate) fn list_catalog(format: Option<Format>) -> Result<()> {
    let format = match format {
        Some(format) => OutputFormat::from(format),
        None => load_settings()?.format,
    };
    emit(Report::Catalog(Catalog::global()), format, false, None)
}
