//! JSON output format.

use coatcalc_catalog::Catalog;
use coatcalc_estimate::{AreaEstimate, VolumeEstimate};
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with compact output.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn write_value<T: Serialize + ?Sized, W: Write>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_area<W: Write>(&self, estimate: &AreaEstimate, writer: W) -> Result<(), FormatError> {
        self.write_value(estimate, writer)
    }

    fn write_volume<W: Write>(
        &self,
        estimate: &VolumeEstimate,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(estimate, writer)
    }

    fn write_catalog<W: Write>(&self, catalog: &Catalog, writer: W) -> Result<(), FormatError> {
        self.write_value(catalog.as_slice(), writer)
    }

    fn extension(&self) -> &str {
        "json"
    }
}
