//! Output formatters for the coatcalc coverage calculator.
//!
//! This crate provides formatters for writing estimates and the container
//! catalog to various output formats:
//!
//! - [`TextFormatter`] - Human-readable report
//! - [`JsonFormatter`] - JSON document
//! - [`CsvFormatter`] - CSV rows

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/coatcalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod text;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::JsonFormatter;
pub use text::{COVERAGE_NOTE, TextFormatter};
