//! Paint quantity and coverage estimation for the coatcalc coverage calculator.
//!
//! This crate provides the two calculators behind coatcalc:
//!
//! - [`AreaEstimator`] - Liters needed for an area, plus a recommended purchase
//! - [`VolumeEstimator`] - Area covered by a number of containers
//! - [`RecommendationPolicy`] - How the recommended container is chosen
//! - [`AreaEstimate`], [`SkuEstimate`], [`VolumeEstimate`] - Estimate records
//!
//! Both calculators are pure: the same inputs always produce the same record.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/coatcalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod area;
mod error;
mod policy;
mod volume;

pub use area::{AreaEstimate, AreaEstimator, SkuEstimate};
pub use error::EstimateError;
pub use policy::RecommendationPolicy;
pub use volume::{VolumeEstimate, VolumeEstimator};

use coatcalc_types::{Area, BufferPercent, Coats, Units};

/// Estimates product needed for an area using the built-in catalog and the
/// default recommendation policy.
#[must_use]
pub fn estimate_area(area: Area, coats: Coats, buffer: BufferPercent) -> AreaEstimate {
    AreaEstimator::global().estimate(area, coats, buffer)
}

/// Estimates coverage for containers at a built-in catalog position.
///
/// # Errors
///
/// Returns an error if `sku_index` is outside the catalog.
pub fn estimate_volume(
    sku_index: usize,
    units: Units,
    coats: Coats,
    buffer: BufferPercent,
) -> Result<VolumeEstimate, EstimateError> {
    VolumeEstimator::global().estimate_by_index(sku_index, units, coats, buffer)
}
