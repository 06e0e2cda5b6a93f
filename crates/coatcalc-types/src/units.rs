//! Coverage rate and volume unit conversions.

/// Square meters covered by one liter for a single coat.
///
/// Assumes a smooth, horizontal surface.
pub const COVERAGE_RATE: f64 = 6.0;

/// Liters in one US gallon.
pub const LITERS_PER_GALLON: f64 = 3.78541;

/// Converts liters to US gallons.
#[must_use]
pub const fn liters_to_gallons(liters: f64) -> f64 {
    liters / LITERS_PER_GALLON
}

/// Converts US gallons to liters.
#[must_use]
pub const fn gallons_to_liters(gallons: f64) -> f64 {
    gallons * LITERS_PER_GALLON
}

/// Rounds a value to the given number of decimal places.
///
/// Intended for presentation only; estimators keep full precision.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_liters_to_gallons() {
        assert_relative_eq!(liters_to_gallons(LITERS_PER_GALLON), 1.0);
        assert_relative_eq!(liters_to_gallons(22.0), 5.811_788, epsilon = 1e-6);
        assert_eq!(liters_to_gallons(0.0), 0.0);
    }

    #[test]
    fn test_gallons_to_liters() {
        assert_relative_eq!(gallons_to_liters(1.0), 3.78541);
        assert_relative_eq!(gallons_to_liters(liters_to_gallons(4.5)), 4.5, epsilon = 1e-12);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.666_666, 1), 1.7);
        assert_eq!(round_to(0.440_286, 2), 0.44);
        assert_eq!(round_to(132.0, 1), 132.0);
        assert_eq!(round_to(7.333_333, 0), 7.0);
    }
}
