//! Human-readable report format.

use coatcalc_catalog::Catalog;
use coatcalc_estimate::{AreaEstimate, VolumeEstimate};
use coatcalc_types::{COVERAGE_RATE, liters_to_gallons};
use std::io::Write;

use crate::{FormatError, Formatter};

/// Disclaimer printed under every report.
pub const COVERAGE_NOTE: &str = "Coverage rates per coat are approximate and based on smooth, \
horizontal surfaces. Actual coverage will vary depending on the condition and absorbency of \
the concrete. These figures are intended for estimation purposes only. For optimal \
performance, up to three (3) coats may be applied.";

/// Plain-text report formatter.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Whether to print the coverage disclaimer.
    include_note: bool,
}

impl TextFormatter {
    /// Creates a new text formatter that prints the coverage note.
    #[must_use]
    pub const fn new() -> Self {
        Self { include_note: true }
    }

    /// Sets whether to print the coverage note.
    #[must_use]
    pub const fn with_note(mut self, include: bool) -> Self {
        self.include_note = include;
        self
    }

    fn write_note<W: Write>(&self, writer: &mut W) -> Result<(), FormatError> {
        if self.include_note {
            writeln!(writer)?;
            writeln!(writer, "{COVERAGE_NOTE}")?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn plural(count: u32, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

impl Formatter for TextFormatter {
    fn write_area<W: Write>(
        &self,
        estimate: &AreaEstimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(
            writer,
            "You'll need approximately {:.1} L ({:.2} gal)",
            estimate.liters_needed_rounded(),
            estimate.gallons_needed_rounded()
        )?;
        writeln!(
            writer,
            "for {} m², {} coat(s), {}% buffer",
            estimate.area, estimate.coats, estimate.buffer
        )?;

        let recommended = &estimate.recommended;
        writeln!(writer)?;
        writeln!(
            writer,
            "Recommended: {} x {}",
            recommended.sku.label(),
            recommended.units
        )?;
        writeln!(
            writer,
            "  Total product volume:    {:.1} L",
            recommended.total_liters
        )?;
        writeln!(
            writer,
            "  Estimated excess volume: {:.1} L",
            recommended.leftover
        )?;

        writeln!(writer)?;
        writeln!(writer, "All container options:")?;
        writeln!(
            writer,
            "{:<8} {:>10} {:>10} {:>10}",
            "SIZE", "UNITS", "TOTAL", "LEFTOVER"
        )?;
        writeln!(writer, "{}", "-".repeat(41))?;
        for option in &estimate.options {
            let marker = if estimate.is_recommended(option) {
                "  <- recommended"
            } else {
                ""
            };
            writeln!(
                writer,
                "{:<8} {:>10} {:>10} {:>10}{marker}",
                option.sku.label(),
                plural(option.units, "unit", "units"),
                format!("{:.1} L", option.total_liters),
                format!("{:.1} L", option.leftover),
            )?;
        }

        self.write_note(&mut writer)
    }

    fn write_volume<W: Write>(
        &self,
        estimate: &VolumeEstimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        writeln!(
            writer,
            "{} x {}",
            plural(estimate.units.get(), "container", "containers"),
            estimate.sku.label()
        )?;
        writeln!(
            writer,
            "Total volume:    {} L ({:.2} gal)",
            estimate.total_liters,
            estimate.gallons_total_rounded()
        )?;
        writeln!(
            writer,
            "Approx coverage: {:.1} m²",
            estimate.coverage_final_rounded()
        )?;

        let coats = estimate.coats.get();
        let suffix = if coats > 1 { "s" } else { "" };
        if estimate.buffer.is_zero() {
            writeln!(
                writer,
                "Based on {coats} coat{suffix} at {COVERAGE_RATE} m² per liter per coat."
            )?;
        } else {
            writeln!(
                writer,
                "Based on {coats} coat{suffix} at {COVERAGE_RATE} m² per liter per coat, \
                 less a {}% buffer.",
                estimate.buffer
            )?;
        }

        self.write_note(&mut writer)
    }

    fn write_catalog<W: Write>(&self, catalog: &Catalog, mut writer: W) -> Result<(), FormatError> {
        writeln!(
            writer,
            "{:<8} {:>8} {:>8} {:>14}",
            "SIZE", "LITERS", "GALLONS", "M² PER COAT"
        )?;
        writeln!(writer, "{}", "-".repeat(41))?;

        for sku in catalog {
            writeln!(
                writer,
                "{:<8} {:>8} {:>8.2} {:>14}",
                sku.label(),
                sku.liters(),
                liters_to_gallons(sku.liters()),
                sku.liters() * COVERAGE_RATE
            )?;
        }

        writeln!(writer, "\nTotal: {} container sizes", catalog.len())?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coatcalc_estimate::{estimate_area, estimate_volume};
    use coatcalc_types::{Area, BufferPercent, Coats, Units};
    use std::io::Cursor;

    #[test]
    fn test_area_report() {
        let buffer = BufferPercent::new(10.0).unwrap();
        let estimate = estimate_area(Area::new(100.0), Coats::TWO, buffer);
        let mut output = Cursor::new(Vec::new());

        TextFormatter::new()
            .write_area(&estimate, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("You'll need approximately 36.7 L (9.69 gal)"));
        assert!(result.contains("Recommended: 22L x 2"));
        assert!(result.contains("Total product volume:    44.0 L"));
        assert!(result.contains("Estimated excess volume: 7.3 L"));
        assert!(result.contains("37 units"));
        assert!(result.contains("<- recommended"));
        assert!(result.contains("up to three (3) coats"));
    }

    #[test]
    fn test_small_area_report() {
        let estimate = estimate_area(Area::new(10.0), Coats::ONE, BufferPercent::ZERO);
        let mut output = Cursor::new(Vec::new());

        TextFormatter::new()
            .with_note(false)
            .write_area(&estimate, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("approximately 1.7 L (0.44 gal)"));
        assert!(result.contains("Recommended: 1L x 2"));
        assert!(result.contains("1 unit "));
        assert!(!result.contains("absorbency"));
    }

    #[test]
    fn test_volume_report() {
        let estimate = estimate_volume(0, Units::new(1), Coats::ONE, BufferPercent::ZERO).unwrap();
        let mut output = Cursor::new(Vec::new());

        TextFormatter::new()
            .write_volume(&estimate, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("1 container x 22L"));
        assert!(result.contains("Total volume:    22 L (5.81 gal)"));
        assert!(result.contains("Approx coverage: 132.0 m²"));
        assert!(result.contains("Based on 1 coat at 6 m² per liter per coat."));
    }

    #[test]
    fn test_volume_report_with_buffer() {
        let buffer = BufferPercent::new(10.0).unwrap();
        let estimate = estimate_volume(1, Units::new(2), Coats::TWO, buffer).unwrap();
        let mut output = Cursor::new(Vec::new());

        TextFormatter::new()
            .write_volume(&estimate, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("2 containers x 4.5L"));
        assert!(result.contains("Approx coverage: 24.3 m²"));
        assert!(result.contains("Based on 2 coats"));
        assert!(result.contains("less a 10% buffer"));
    }

    #[test]
    fn test_catalog_table() {
        let mut output = Cursor::new(Vec::new());

        TextFormatter::new()
            .write_catalog(Catalog::global(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("22L"));
        assert!(result.contains("5.81"));
        assert!(result.contains("132"));
        assert!(result.contains("Total: 3 container sizes"));
    }
}
