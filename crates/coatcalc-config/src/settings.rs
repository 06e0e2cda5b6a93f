//! Default calculator parameters.

use coatcalc_estimate::RecommendationPolicy;
use coatcalc_format::OutputFormat;
use coatcalc_types::{BufferPercent, Coats};
use serde::{Deserialize, Serialize};

/// Defaults applied when a CLI flag is not given.
///
/// Missing fields take their default values, so a file may set only the
/// fields it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Number of coats.
    pub coats: Coats,
    /// Safety buffer percentage.
    pub buffer_percent: BufferPercent,
    /// Recommendation policy for area estimates.
    pub policy: RecommendationPolicy,
    /// Output format.
    pub format: OutputFormat,
    /// Whether text reports end with the coverage disclaimer.
    pub show_note: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            coats: Coats::ONE,
            buffer_percent: BufferPercent::ZERO,
            policy: RecommendationPolicy::default(),
            format: OutputFormat::default(),
            show_note: true,
        }
    }
}
