//! Coating coverage and container estimates.
//!
//! This is a facade crate that re-exports functionality from the coatcalc
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use coatcalc_lib::prelude::*;
//!
//! let buffer = BufferPercent::new(10.0).unwrap();
//! let estimate = AreaEstimator::global().estimate(Area::new(100.0), Coats::TWO, buffer);
//!
//! println!(
//!     "Buy {} x {} ({:.1} L needed)",
//!     estimate.recommended.units,
//!     estimate.recommended.sku,
//!     estimate.liters_needed_rounded()
//! );
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/coatcalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use coatcalc_types::*;

// Re-export the container catalog
pub use coatcalc_catalog::{Catalog, CatalogError};

// Re-export estimators
pub use coatcalc_estimate::{
    AreaEstimate, AreaEstimator, EstimateError, RecommendationPolicy, SkuEstimate, VolumeEstimate,
    VolumeEstimator, estimate_area, estimate_volume,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use coatcalc_format::{
    COVERAGE_NOTE, CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat,
    TextFormatter,
};

// Re-export settings
#[cfg(feature = "config")]
pub use coatcalc_config::{ConfigError, ConfigStore, Settings};

/// Prelude module for convenient imports.
///
/// ```
/// use coatcalc_lib::prelude::*;
/// ```
pub mod prelude {
    pub use coatcalc_types::{
        Area, BufferPercent, Coats, ContainerSku, Units, liters_to_gallons,
    };

    pub use coatcalc_catalog::Catalog;

    pub use coatcalc_estimate::{
        AreaEstimate, AreaEstimator, RecommendationPolicy, VolumeEstimate, VolumeEstimator,
        estimate_area, estimate_volume,
    };

    #[cfg(feature = "format")]
    pub use coatcalc_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat, TextFormatter};

    #[cfg(feature = "config")]
    pub use coatcalc_config::{ConfigStore, Settings};
}
