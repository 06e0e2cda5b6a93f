//! Benchmark inputs for coatcalc.

use coatcalc_lib::{Area, BufferPercent, Coats, Units};

/// Areas spanning every recommendation bracket, in square meters.
pub const AREAS: [f64; 8] = [1.0, 6.0, 10.0, 42.5, 99.9, 100.0, 750.0, 10_000.0];

/// Buffer percentages sampled across the valid range.
pub const BUFFERS: [f64; 4] = [0.0, 5.0, 12.5, 20.0];

/// Unit counts for volume estimates.
pub const UNITS: [i64; 4] = [1, 3, 9, 250];

/// Every combination of area, coats and buffer.
pub fn area_inputs() -> Vec<(Area, Coats, BufferPercent)> {
    let mut inputs = Vec::with_capacity(AREAS.len() * Coats::all().len() * BUFFERS.len());
    for &area in &AREAS {
        for &coats in Coats::all() {
            for &buffer in &BUFFERS {
                if let Ok(buffer) = BufferPercent::new(buffer) {
                    inputs.push((Area::new(area), coats, buffer));
                }
            }
        }
    }
    inputs
}

/// Every combination of unit count and coats, without buffer.
pub fn volume_inputs() -> Vec<(Units, Coats)> {
    UNITS
        .iter()
        .flat_map(|&units| Coats::all().iter().map(move |&coats| (Units::new(units), coats)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_grids() {
        assert_eq!(area_inputs().len(), AREAS.len() * 3 * BUFFERS.len());
        assert_eq!(volume_inputs().len(), UNITS.len() * 3);
    }
}
