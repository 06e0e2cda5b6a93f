//! Default settings file for the coatcalc coverage calculator.
//!
//! This crate provides the optional, read-mostly settings file the CLI
//! consults for parameters the user did not pass on the command line:
//!
//! - [`Settings`] - Default coats, buffer, policy and output format
//! - [`ConfigStore`] - Locates, reads and creates the settings file

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/coatcalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod settings;
mod store;

pub use settings::Settings;
pub use store::{ConfigError, ConfigStore, Result};
