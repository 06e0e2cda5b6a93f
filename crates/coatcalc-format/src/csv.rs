//! CSV output format.

use coatcalc_catalog::Catalog;
use coatcalc_estimate::{AreaEstimate, VolumeEstimate};
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_area<W: Write>(
        &self,
        estimate: &AreaEstimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "label{d}liters{d}units{d}total_liters{d}leftover{d}liters_needed{d}recommended"
            )?;
        }

        for option in &estimate.options {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                option.sku.label(),
                option.sku.liters(),
                option.units,
                option.total_liters,
                option.leftover,
                estimate.liters_needed,
                estimate.is_recommended(option)
            )?;
        }

        Ok(())
    }

    fn write_volume<W: Write>(
        &self,
        estimate: &VolumeEstimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "label{d}units{d}coats{d}buffer_percent{d}total_liters{d}gallons_total{d}coverage_m2"
            )?;
        }

        writeln!(
            writer,
            "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
            estimate.sku.label(),
            estimate.units,
            estimate.coats,
            estimate.buffer,
            estimate.total_liters,
            estimate.gallons_total,
            estimate.coverage_final
        )?;

        Ok(())
    }

    fn write_catalog<W: Write>(&self, catalog: &Catalog, mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "label{d}liters{d}impractical_at")?;
        }

        for sku in catalog {
            let cap = sku.impractical_at().map(|u| u.to_string()).unwrap_or_default();
            writeln!(writer, "{}{d}{}{d}{cap}", sku.label(), sku.liters())?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
