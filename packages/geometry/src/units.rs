//! Named unit-conversion constants shared across the pipeline.
//!
//! Every degree/meter and sqm/sqft conversion in the workspace goes through
//! these so the approximation factors cannot drift between components.

/// Meters per degree of longitude at the reference latitude.
pub const METERS_PER_DEGREE_LNG: f64 = 111_320.0;

/// Meters per degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 110_540.0;

/// Isotropic meters-per-degree factor used for building footprints, where a
/// square footprint should stay square on screen.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Square feet per square meter.
pub const SQFT_PER_SQM: f64 = 10.764;

/// Converts a length in meters to degrees using the isotropic factor.
#[must_use]
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

/// Converts an area in square meters to square feet.
#[must_use]
pub fn sqm_to_sqft(sqm: f64) -> f64 {
    sqm * SQFT_PER_SQM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_degree_round_trip() {
        let deg = meters_to_degrees(111_000.0);
        assert!((deg - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sqft_conversion_matches_constant() {
        assert!((sqm_to_sqft(100.0) - 1076.4).abs() < 1e-9);
    }
}
