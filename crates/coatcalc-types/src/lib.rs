//! Core types for the coatcalc coverage calculator.
//!
//! This crate provides the fundamental data structures used throughout coatcalc:
//!
//! - [`ContainerSku`] - A stock container size with its liter capacity
//! - [`Area`] - Surface area input, clamped to a positive value
//! - [`Coats`] - Number of coats (1 to 3)
//! - [`BufferPercent`] - Safety margin percentage (0 to 20)
//! - [`Units`] - Container count input, clamped to at least one
//! - [`units`] - Coverage rate and liter/gallon conversions

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/coatcalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod input;
mod sku;
pub mod units;

pub use error::{BufferError, CoatsError};
pub use input::{Area, BufferPercent, Coats, Units};
pub use sku::ContainerSku;
pub use units::{COVERAGE_RATE, LITERS_PER_GALLON, gallons_to_liters, liters_to_gallons, round_to};
