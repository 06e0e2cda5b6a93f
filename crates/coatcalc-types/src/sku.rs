//! Container size definitions.

use serde::{Deserialize, Serialize};

/// A stock container size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSku {
    /// Display label (e.g., "22L").
    label: String,
    /// Capacity in liters.
    liters: f64,
    /// Unit count at which this size stops being a sensible recommendation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    impractical_at: Option<u32>,
}

impl ContainerSku {
    /// Creates a new container size.
    #[must_use]
    pub fn new(label: impl Into<String>, liters: f64) -> Self {
        Self {
            label: label.into(),
            liters,
            impractical_at: None,
        }
    }

    /// Sets the unit count at which this size becomes impractical.
    #[must_use]
    pub const fn with_impractical_at(mut self, units: u32) -> Self {
        self.impractical_at = Some(units);
        self
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the capacity in liters.
    #[must_use]
    pub const fn liters(&self) -> f64 {
        self.liters
    }

    /// Returns the unit count at which this size becomes impractical, if any.
    #[must_use]
    pub const fn impractical_at(&self) -> Option<u32> {
        self.impractical_at
    }

    /// Returns true if buying `units` of this size is impractical.
    #[must_use]
    pub fn is_impractical(&self, units: u32) -> bool {
        self.impractical_at.is_some_and(|cap| units >= cap)
    }

    /// Returns the number of containers needed to hold `liters`.
    ///
    /// Always at least one container, even for zero liters.
    #[must_use]
    pub fn units_for(&self, liters: f64) -> u32 {
        let mut units = (liters / self.liters).ceil();
        // Division can round down across an integer boundary.
        if units * self.liters < liters {
            units += 1.0;
        }
        if units >= f64::from(u32::MAX) {
            u32::MAX
        } else if units >= 1.0 {
            units as u32
        } else {
            1
        }
    }

    /// Returns the total volume of `units` containers of this size.
    #[must_use]
    pub fn total_liters(&self, units: u32) -> f64 {
        f64::from(units) * self.liters
    }
}

impl std::fmt::Display for ContainerSku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_for() {
        let pail = ContainerSku::new("22L", 22.0);
        assert_eq!(pail.units_for(36.67), 2);
        assert_eq!(pail.units_for(44.0), 2);
        assert_eq!(pail.units_for(44.01), 3);
        assert_eq!(pail.units_for(0.0), 1);

        let can = ContainerSku::new("4.5L", 4.5);
        assert_eq!(can.units_for(36.67), 9);
        assert_eq!(can.units_for(1.67), 1);
    }

    #[test]
    fn test_impractical() {
        let bottle = ContainerSku::new("1L", 1.0).with_impractical_at(7);
        assert!(!bottle.is_impractical(6));
        assert!(bottle.is_impractical(7));
        assert!(bottle.is_impractical(37));

        let pail = ContainerSku::new("22L", 22.0);
        assert!(!pail.is_impractical(u32::MAX));
    }

    #[test]
    fn test_deserialize_without_cap() {
        let sku: ContainerSku = serde_json::from_str(r#"{"label":"22L","liters":22.0}"#).unwrap();
        assert_eq!(sku.label(), "22L");
        assert_eq!(sku.impractical_at(), None);
        assert_eq!(sku.to_string(), "22L");
    }
}
