//! Container catalog for the coatcalc coverage calculator.
//!
//! This crate provides the fixed list of container sizes offered for sale,
//! in display order, along with their liter capacities.
//!
//! # Example
//!
//! ```
//! use coatcalc_catalog::Catalog;
//!
//! let catalog = Catalog::global();
//!
//! // Lookup by label
//! if let Some(sku) = catalog.find("4.5l") {
//!     println!("{}: {} L", sku.label(), sku.liters());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/coatcalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::OnceLock;

use coatcalc_types::ContainerSku;
use thiserror::Error;

/// The container catalog JSON embedded at compile time.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Global catalog instance.
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Errors that can occur when building a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog has no entries.
    #[error("Catalog must contain at least one container size")]
    Empty,

    /// A container has a zero, negative or non-finite capacity.
    #[error("Container '{label}' has invalid capacity {liters}")]
    InvalidCapacity {
        /// Label of the offending container.
        label: String,
        /// The rejected capacity.
        liters: f64,
    },
}

/// Ordered list of container sizes.
///
/// Never empty, and every capacity is a positive finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    skus: Vec<ContainerSku>,
}

impl Catalog {
    /// Returns the global catalog.
    ///
    /// The catalog is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(|| {
            Self::from_json(CATALOG_JSON).expect("embedded catalog.json should be valid")
        })
    }

    /// Creates a catalog from a list of container sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or a capacity is not positive.
    pub fn new(skus: Vec<ContainerSku>) -> Result<Self, CatalogError> {
        if skus.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(bad) = skus
            .iter()
            .find(|sku| !sku.liters().is_finite() || sku.liters() <= 0.0)
        {
            return Err(CatalogError::InvalidCapacity {
                label: bad.label().to_string(),
                liters: bad.liters(),
            });
        }
        Ok(Self { skus })
    }

    /// Creates a catalog from a JSON array of container sizes.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let skus: Vec<ContainerSku> = serde_json::from_str(json)?;
        Self::new(skus)
    }

    /// Returns the container at the given catalog position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ContainerSku> {
        self.skus.get(index)
    }

    /// Returns the first container in catalog order.
    #[must_use]
    pub fn first(&self) -> &ContainerSku {
        &self.skus[0]
    }

    /// Looks up a container by label (case-insensitive) or bare capacity.
    ///
    /// `"22L"`, `"22l"` and `"22"` all resolve to the 22 liter container.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&ContainerSku> {
        let query = query.trim();
        self.skus
            .iter()
            .find(|sku| sku.label().eq_ignore_ascii_case(query))
            .or_else(|| {
                let liters = query.parse::<f64>().ok()?;
                self.skus.iter().find(|sku| sku.liters() == liters)
            })
    }

    /// Returns all containers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ContainerSku> {
        self.skus.iter()
    }

    /// Returns all containers as a slice, in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[ContainerSku] {
        &self.skus
    }

    /// Returns all labels in catalog order.
    pub fn labels(&self) -> Vec<&str> {
        self.skus.iter().map(ContainerSku::label).collect()
    }

    /// Returns the number of containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skus.len()
    }

    /// Always false; an empty catalog cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skus.is_empty()
    }

}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ContainerSku;
    type IntoIter = std::slice::Iter<'a, ContainerSku>;

    fn into_iter(self) -> Self::IntoIter {
        self.skus.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = Catalog::global();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.labels(), vec!["22L", "4.5L", "1L"]);
    }

    #[test]
    fn test_capacities() {
        let catalog = Catalog::global();
        let liters: Vec<f64> = catalog.iter().map(ContainerSku::liters).collect();
        assert_eq!(liters, vec![22.0, 4.5, 1.0]);
        assert_eq!(catalog.first().label(), "22L");
    }

    #[test]
    fn test_impracticality_caps() {
        let catalog = Catalog::global();
        assert_eq!(catalog.find("1L").unwrap().impractical_at(), Some(7));
        assert_eq!(catalog.find("4.5L").unwrap().impractical_at(), Some(9));
        assert_eq!(catalog.find("22L").unwrap().impractical_at(), None);
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = Catalog::global();
        assert_eq!(catalog.find("22l").unwrap().liters(), 22.0);
        assert_eq!(catalog.find(" 4.5L ").unwrap().liters(), 4.5);
        assert_eq!(catalog.find("1").unwrap().label(), "1L");
        assert!(catalog.find("5L").is_none());
    }

    #[test]
    fn test_get_by_index() {
        let catalog = Catalog::global();
        assert_eq!(catalog.get(0).unwrap().label(), "22L");
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_rejects_bad_capacity() {
        let err = Catalog::new(vec![ContainerSku::new("bad", 0.0)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCapacity { .. }));
    }
}
