//! Area-based estimation: how much product a surface needs.

use std::sync::OnceLock;

use coatcalc_catalog::Catalog;
use coatcalc_types::{
    Area, BufferPercent, COVERAGE_RATE, Coats, ContainerSku, liters_to_gallons, round_to,
};
use serde::Serialize;

use crate::RecommendationPolicy;

/// Static estimator instance over the global catalog.
static AREA_ESTIMATOR: OnceLock<AreaEstimator<'static>> = OnceLock::new();

/// Containers of a single size needed to cover a requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuEstimate {
    /// Container size.
    pub sku: ContainerSku,
    /// Number of containers, at least one.
    pub units: u32,
    /// Combined capacity of all containers in liters.
    pub total_liters: f64,
    /// Product left over after the job, in liters.
    pub leftover: f64,
}

impl SkuEstimate {
    /// Computes how many containers of `sku` cover `liters_needed`.
    #[must_use]
    pub fn for_requirement(sku: &ContainerSku, liters_needed: f64) -> Self {
        let units = sku.units_for(liters_needed);
        let total_liters = sku.total_liters(units);
        Self {
            sku: sku.clone(),
            units,
            total_liters,
            leftover: total_liters - liters_needed,
        }
    }

    /// Returns true if these containers hold at least `liters_needed`.
    #[must_use]
    pub fn is_sufficient(&self, liters_needed: f64) -> bool {
        self.total_liters >= liters_needed
    }

    /// Returns true if the unit count reaches the size's impracticality cap.
    #[must_use]
    pub fn is_impractical(&self) -> bool {
        self.sku.is_impractical(self.units)
    }
}

/// Product requirement for an area, with a recommended purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaEstimate {
    /// Area covered, after normalization.
    pub area: Area,
    /// Number of coats.
    pub coats: Coats,
    /// Safety buffer added on top of the raw requirement.
    pub buffer: BufferPercent,
    /// Policy that chose the recommendation.
    pub policy: RecommendationPolicy,
    /// Liters needed before the buffer.
    pub liters_raw: f64,
    /// Liters needed including the buffer.
    pub liters_needed: f64,
    /// Gallons needed including the buffer.
    pub gallons_needed: f64,
    /// One option per catalog entry, in catalog order.
    pub options: Vec<SkuEstimate>,
    /// The recommended option.
    pub recommended: SkuEstimate,
}

impl AreaEstimate {
    /// Liters needed, rounded to one decimal for display.
    #[must_use]
    pub fn liters_needed_rounded(&self) -> f64 {
        round_to(self.liters_needed, 1)
    }

    /// Gallons needed, rounded to two decimals for display.
    #[must_use]
    pub fn gallons_needed_rounded(&self) -> f64 {
        round_to(self.gallons_needed, 2)
    }

    /// Returns true if `option` is the recommended one.
    #[must_use]
    pub fn is_recommended(&self, option: &SkuEstimate) -> bool {
        option.sku.label() == self.recommended.sku.label()
    }
}

/// Estimates product quantity from a surface area.
#[derive(Debug, Clone, Copy)]
pub struct AreaEstimator<'a> {
    catalog: &'a Catalog,
    policy: RecommendationPolicy,
}

impl<'a> AreaEstimator<'a> {
    /// Creates an estimator over `catalog` using the given policy.
    #[must_use]
    pub const fn new(catalog: &'a Catalog, policy: RecommendationPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Returns a copy of this estimator using another policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: RecommendationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the recommendation policy.
    #[must_use]
    pub const fn policy(&self) -> RecommendationPolicy {
        self.policy
    }

    /// Returns the catalog this estimator draws containers from.
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Estimates how much product covers `area` with `coats` coats.
    ///
    /// The buffer is added on top of the raw requirement. A zero buffer
    /// leaves the raw requirement unchanged.
    #[must_use]
    pub fn estimate(&self, area: Area, coats: Coats, buffer: BufferPercent) -> AreaEstimate {
        let liters_raw = area.square_meters() * coats.as_f64() / COVERAGE_RATE;
        let liters_needed = liters_raw * (1.0 + buffer.fraction());
        let gallons_needed = liters_to_gallons(liters_needed);

        let options: Vec<SkuEstimate> = self
            .catalog
            .iter()
            .map(|sku| SkuEstimate::for_requirement(sku, liters_needed))
            .collect();
        let chosen = self.policy.select(area, liters_needed, &options);
        let recommended = options[chosen].clone();

        tracing::debug!(
            area = area.square_meters(),
            coats = coats.get(),
            buffer = buffer.percent(),
            policy = %self.policy,
            liters_needed,
            recommended = %recommended.sku,
            units = recommended.units,
            "area estimate"
        );

        AreaEstimate {
            area,
            coats,
            buffer,
            policy: self.policy,
            liters_raw,
            liters_needed,
            gallons_needed,
            options,
            recommended,
        }
    }
}

impl AreaEstimator<'static> {
    /// Returns the global estimator over the built-in catalog with the
    /// default policy.
    #[must_use]
    pub fn global() -> &'static Self {
        AREA_ESTIMATOR
            .get_or_init(|| Self::new(Catalog::global(), RecommendationPolicy::default()))
    }
}

impl Default for AreaEstimator<'static> {
    fn default() -> Self {
        *Self::global()
    }
}
