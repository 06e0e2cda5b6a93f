//! CLI command implementations.

pub(crate) mod area;
pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod interactive;
pub(crate) mod volume;

use crate::display::Format;
use coatcalc_lib::{BufferPercent, Coats, OutputFormat, RecommendationPolicy, Settings};

/// Parameters given on the command line. Unset fields fall back to the
/// defaults file.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Overrides {
    pub(crate) coats: Option<Coats>,
    pub(crate) buffer: Option<BufferPercent>,
    pub(crate) policy: Option<RecommendationPolicy>,
    pub(crate) format: Option<Format>,
}

/// Parameters after merging command-line flags over the defaults file.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved {
    pub(crate) coats: Coats,
    pub(crate) buffer: BufferPercent,
    pub(crate) policy: RecommendationPolicy,
    pub(crate) format: OutputFormat,
    pub(crate) show_note: bool,
}

impl Overrides {
    /// Fills unset fields from `settings`.
    pub(crate) fn resolve(self, settings: &Settings, quiet: bool) -> Resolved {
        Resolved {
            coats: self.coats.unwrap_or(settings.coats),
            buffer: self.buffer.unwrap_or(settings.buffer_percent),
            policy: self.policy.unwrap_or(settings.policy),
            format: self.format.map_or(settings.format, OutputFormat::from),
            show_note: settings.show_note && !quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            coats: Coats::THREE,
            policy: RecommendationPolicy::AreaThreshold,
            ..Settings::default()
        };
        let overrides = Overrides {
            coats: Some(Coats::ONE),
            format: Some(Format::Csv),
            ..Overrides::default()
        };

        let resolved = overrides.resolve(&settings, false);
        assert_eq!(resolved.coats, Coats::ONE);
        assert_eq!(resolved.policy, RecommendationPolicy::AreaThreshold);
        assert_eq!(resolved.format, OutputFormat::Csv);
        assert!(resolved.buffer.is_zero());
        assert!(resolved.show_note);
    }

    #[test]
    fn test_quiet_hides_note() {
        let resolved = Overrides::default().resolve(&Settings::default(), true);
        assert!(!resolved.show_note);
        assert_eq!(resolved.format, OutputFormat::Text);
    }
}
