//! Container recommendation policies.

use std::str::FromStr;

use coatcalc_types::Area;
use serde::{Deserialize, Serialize};

use crate::{EstimateError, SkuEstimate};

/// Area at or below which the smallest container is preferred.
const SMALL_AREA_MAX: f64 = 6.0;

/// Area from which the largest container is preferred.
const LARGE_AREA_MIN: f64 = 100.0;

/// How a single container option is picked from the per-size estimates.
///
/// Every policy always picks exactly one option and is deterministic. When
/// no option passes a policy's eligibility filter, the first catalog entry
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationPolicy {
    /// Least leftover product, skipping sizes past their impracticality cap.
    ///
    /// Ties go to fewer units, then to the larger container.
    #[default]
    LeftoverMinimizing,
    /// Fewest containers.
    ///
    /// Ties go to less leftover, then to the smaller container.
    UnitMinimizing,
    /// Size picked by area bracket, replaced by the fewest-containers option
    /// when the bracket choice needs more than one extra container.
    AreaThreshold,
}

impl RecommendationPolicy {
    /// Returns the policy as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftoverMinimizing => "leftover-minimizing",
            Self::UnitMinimizing => "unit-minimizing",
            Self::AreaThreshold => "area-threshold",
        }
    }

    /// Returns all available policies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::LeftoverMinimizing,
            Self::UnitMinimizing,
            Self::AreaThreshold,
        ]
    }

    /// Picks one of `options`, returning its position.
    ///
    /// `options` holds one estimate per catalog entry, in catalog order.
    #[must_use]
    pub fn select(&self, area: Area, liters_needed: f64, options: &[SkuEstimate]) -> usize {
        match self {
            Self::LeftoverMinimizing => least_leftover(liters_needed, options),
            Self::UnitMinimizing => fewest_units(liters_needed, options),
            Self::AreaThreshold => by_area_bracket(area, options),
        }
    }
}

impl std::fmt::Display for RecommendationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationPolicy {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "leftover" | "leftover-minimizing" | "least-leftover" => Ok(Self::LeftoverMinimizing),
            "units" | "unit-minimizing" | "fewest-units" => Ok(Self::UnitMinimizing),
            "area-threshold" | "area" | "bracket" => Ok(Self::AreaThreshold),
            _ => Err(EstimateError::UnknownPolicy(s.to_string())),
        }
    }
}

fn least_leftover(liters_needed: f64, options: &[SkuEstimate]) -> usize {
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| {
            let viable = option.is_sufficient(liters_needed) && !option.is_impractical();
            if !viable {
                tracing::trace!(sku = %option.sku, units = option.units, "excluded from recommendation");
            }
            viable
        })
        .min_by(|(_, a), (_, b)| {
            a.leftover
                .total_cmp(&b.leftover)
                .then(a.units.cmp(&b.units))
                .then(b.sku.liters().total_cmp(&a.sku.liters()))
        })
        .map_or(0, |(index, _)| index)
}

fn fewest_units(liters_needed: f64, options: &[SkuEstimate]) -> usize {
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.is_sufficient(liters_needed))
        .min_by(|(_, a), (_, b)| {
            a.units
                .cmp(&b.units)
                .then(a.leftover.total_cmp(&b.leftover))
                .then(a.sku.liters().total_cmp(&b.sku.liters()))
        })
        .map_or(0, |(index, _)| index)
}

fn by_area_bracket(area: Area, options: &[SkuEstimate]) -> usize {
    let mut by_capacity: Vec<usize> = (0..options.len()).collect();
    by_capacity.sort_by(|&a, &b| options[a].sku.liters().total_cmp(&options[b].sku.liters()));

    let Some(&largest) = by_capacity.last() else {
        return 0;
    };
    let square_meters = area.square_meters();
    let preferred = if square_meters <= SMALL_AREA_MAX {
        by_capacity[0]
    } else if square_meters < LARGE_AREA_MIN {
        by_capacity[by_capacity.len() / 2]
    } else {
        largest
    };

    let fewest = options
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.units
                .cmp(&b.units)
                .then(b.sku.liters().total_cmp(&a.sku.liters()))
        })
        .map_or(preferred, |(index, _)| index);

    if options[preferred].units > options[fewest].units.saturating_add(1) {
        tracing::trace!(
            preferred = %options[preferred].sku,
            chosen = %options[fewest].sku,
            "bracket choice needs too many containers"
        );
        fewest
    } else {
        preferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coatcalc_types::ContainerSku;

    fn catalog_options(liters_needed: f64) -> Vec<SkuEstimate> {
        [
            ContainerSku::new("22L", 22.0),
            ContainerSku::new("4.5L", 4.5).with_impractical_at(9),
            ContainerSku::new("1L", 1.0).with_impractical_at(7),
        ]
        .iter()
        .map(|sku| SkuEstimate::for_requirement(sku, liters_needed))
        .collect()
    }

    fn pick(policy: RecommendationPolicy, area: f64, liters_needed: f64) -> String {
        let options = catalog_options(liters_needed);
        let index = policy.select(Area::new(area), liters_needed, &options);
        options[index].sku.label().to_string()
    }

    #[test]
    fn test_leftover_prefers_small_containers() {
        // 10 m², 1 coat: 1.67 L -> 2 x 1L leaves 0.33 L
        assert_eq!(pick(RecommendationPolicy::LeftoverMinimizing, 10.0, 10.0 / 6.0), "1L");
    }

    #[test]
    fn test_leftover_respects_caps() {
        // 36.67 L: 1L x37 and 4.5L x9 are both capped out
        assert_eq!(pick(RecommendationPolicy::LeftoverMinimizing, 100.0, 36.67), "22L");
        // 6 L: 1L x6 is under the cap and leaves nothing
        assert_eq!(pick(RecommendationPolicy::LeftoverMinimizing, 36.0, 6.0), "1L");
        // 7 L: 1L x7 hits the cap, 4.5L x2 leaves 2 L
        assert_eq!(pick(RecommendationPolicy::LeftoverMinimizing, 42.0, 7.0), "4.5L");
    }

    #[test]
    fn test_leftover_tie_prefers_fewer_units() {
        // 4 L: 2L x2 and 4L x1 both leave nothing
        let options = vec![
            SkuEstimate::for_requirement(&ContainerSku::new("2L", 2.0), 4.0),
            SkuEstimate::for_requirement(&ContainerSku::new("4L", 4.0), 4.0),
        ];
        let index = RecommendationPolicy::LeftoverMinimizing.select(Area::new(24.0), 4.0, &options);
        assert_eq!(index, 1);

        // 22 L exactly: 22L x1 leaves nothing, 4.5L x5 leaves 0.5 L
        assert_eq!(pick(RecommendationPolicy::LeftoverMinimizing, 132.0, 22.0), "22L");
    }

    #[test]
    fn test_leftover_falls_back_to_first_entry() {
        let options = vec![
            SkuEstimate::for_requirement(&ContainerSku::new("5L", 5.0).with_impractical_at(1), 3.0),
            SkuEstimate::for_requirement(&ContainerSku::new("2L", 2.0).with_impractical_at(1), 3.0),
        ];
        let index = RecommendationPolicy::LeftoverMinimizing.select(Area::new(18.0), 3.0, &options);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_unit_minimizing() {
        // 1.67 L: every size needs 1 unit except 1L; least leftover wins the tie
        assert_eq!(pick(RecommendationPolicy::UnitMinimizing, 10.0, 10.0 / 6.0), "4.5L");
        // 36.67 L: 22L x2 is the fewest
        assert_eq!(pick(RecommendationPolicy::UnitMinimizing, 100.0, 36.67), "22L");
        // 1 L: 1L x1 leaves nothing
        assert_eq!(pick(RecommendationPolicy::UnitMinimizing, 6.0, 1.0), "1L");
    }

    #[test]
    fn test_area_threshold_brackets() {
        // 6 m² is still the small bracket: 1L x1 vs fewest 1
        assert_eq!(pick(RecommendationPolicy::AreaThreshold, 6.0, 1.0), "1L");
        // mid bracket
        assert_eq!(pick(RecommendationPolicy::AreaThreshold, 10.0, 10.0 / 6.0), "4.5L");
        assert_eq!(pick(RecommendationPolicy::AreaThreshold, 25.5, 4.25), "4.5L");
        // 100 m² is the large bracket
        assert_eq!(pick(RecommendationPolicy::AreaThreshold, 100.0, 100.0 / 6.0), "22L");
    }

    #[test]
    fn test_area_threshold_override() {
        // 5 m², 3 coats: 2.5 L -> 1L x3 is two more than 22L/4.5L x1
        assert_eq!(pick(RecommendationPolicy::AreaThreshold, 5.0, 2.5), "22L");
        // 5 m², 2 coats: 1.67 L -> 1L x2 is only one extra
        assert_eq!(pick(RecommendationPolicy::AreaThreshold, 5.0, 5.0 / 3.0), "1L");
        // 90 m², 3 coats: 45 L -> 4.5L x10 vs 22L x3
        assert_eq!(pick(RecommendationPolicy::AreaThreshold, 90.0, 45.0), "22L");
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(
            "leftover".parse::<RecommendationPolicy>().unwrap(),
            RecommendationPolicy::LeftoverMinimizing
        );
        assert_eq!(
            "UNITS".parse::<RecommendationPolicy>().unwrap(),
            RecommendationPolicy::UnitMinimizing
        );
        assert_eq!(
            "area-threshold".parse::<RecommendationPolicy>().unwrap(),
            RecommendationPolicy::AreaThreshold
        );
        assert!("cheapest".parse::<RecommendationPolicy>().is_err());
        assert_eq!(
            RecommendationPolicy::default().as_str(),
            "leftover-minimizing"
        );
    }

    #[test]
    fn test_display_matches_serde_name() {
        for policy in RecommendationPolicy::all() {
            let json = serde_json::to_string(policy).unwrap();
            assert_eq!(json, format!("\"{policy}\""));
            assert_eq!(policy.to_string().parse::<RecommendationPolicy>().unwrap(), *policy);
        }
    }
}
