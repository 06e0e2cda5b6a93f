//! Volume-based estimation: how much area a purchase covers.

use coatcalc_catalog::Catalog;
use coatcalc_types::{
    BufferPercent, COVERAGE_RATE, Coats, ContainerSku, Units, liters_to_gallons, round_to,
};
use serde::Serialize;

use crate::EstimateError;

/// Coverage provided by a number of containers of one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeEstimate {
    /// Container size.
    pub sku: ContainerSku,
    /// Number of containers.
    pub units: Units,
    /// Number of coats.
    pub coats: Coats,
    /// Safety buffer taken off the coverage.
    pub buffer: BufferPercent,
    /// Combined volume in liters.
    pub total_liters: f64,
    /// Combined volume in gallons.
    pub gallons_total: f64,
    /// Area covered by a single coat, in square meters.
    pub coverage_raw: f64,
    /// Area covered after coats and buffer, in square meters.
    pub coverage_final: f64,
}

impl VolumeEstimate {
    /// Gallons, rounded to two decimals for display.
    #[must_use]
    pub fn gallons_total_rounded(&self) -> f64 {
        round_to(self.gallons_total, 2)
    }

    /// Final coverage, rounded to one decimal for display.
    #[must_use]
    pub fn coverage_final_rounded(&self) -> f64 {
        round_to(self.coverage_final, 1)
    }
}

/// Estimates coverage area from a purchase.
#[derive(Debug, Clone, Copy)]
pub struct VolumeEstimator<'a> {
    catalog: &'a Catalog,
}

impl<'a> VolumeEstimator<'a> {
    /// Creates an estimator resolving containers from `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this estimator resolves containers from.
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Estimates the area `units` containers of `sku` will cover.
    ///
    /// The buffer is taken off the coverage. A zero buffer leaves it
    /// unchanged.
    #[must_use]
    pub fn estimate(
        &self,
        sku: &ContainerSku,
        units: Units,
        coats: Coats,
        buffer: BufferPercent,
    ) -> VolumeEstimate {
        let total_liters = sku.liters() * units.as_f64();
        let gallons_total = liters_to_gallons(total_liters);
        let coverage_raw = total_liters * COVERAGE_RATE;
        let coverage_after_coats = coverage_raw / coats.as_f64();
        let coverage_final = coverage_after_coats * (1.0 - buffer.fraction());

        tracing::debug!(
            sku = %sku,
            units = units.get(),
            coats = coats.get(),
            buffer = buffer.percent(),
            total_liters,
            coverage_final,
            "volume estimate"
        );

        VolumeEstimate {
            sku: sku.clone(),
            units,
            coats,
            buffer,
            total_liters,
            gallons_total,
            coverage_raw,
            coverage_final,
        }
    }

    /// Estimates coverage for the container at a catalog position.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the catalog.
    pub fn estimate_by_index(
        &self,
        index: usize,
        units: Units,
        coats: Coats,
        buffer: BufferPercent,
    ) -> Result<VolumeEstimate, EstimateError> {
        let sku = self
            .catalog
            .get(index)
            .ok_or(EstimateError::SkuIndexOutOfRange {
                index,
                len: self.catalog.len(),
            })?;
        Ok(self.estimate(sku, units, coats, buffer))
    }

    /// Estimates coverage for the container matching a label or capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if no container matches `label`.
    pub fn estimate_by_label(
        &self,
        label: &str,
        units: Units,
        coats: Coats,
        buffer: BufferPercent,
    ) -> Result<VolumeEstimate, EstimateError> {
        let sku = self
            .catalog
            .find(label)
            .ok_or_else(|| EstimateError::UnknownSku {
                query: label.to_string(),
                valid: self.catalog.labels().join(", "),
            })?;
        Ok(self.estimate(sku, units, coats, buffer))
    }
}

impl VolumeEstimator<'static> {
    /// Creates an estimator over the built-in catalog.
    #[must_use]
    pub fn global() -> Self {
        Self::new(Catalog::global())
    }
}

impl Default for VolumeEstimator<'static> {
    fn default() -> Self {
        Self::global()
    }
}
