//! Imperial/metric conversions.
//!
//! The wire format is millimeters and grams only. These helpers let callers
//! work in inches and pounds on either side of a call.

/// Millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Grams in one avoirdupois pound.
pub const GRAMS_PER_POUND: f64 = 453.592;

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

pub fn pounds_to_grams(pounds: f64) -> f64 {
    pounds * GRAMS_PER_POUND
}

pub fn grams_to_pounds(grams: f64) -> f64 {
    grams / GRAMS_PER_POUND
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_known_values() {
        assert_eq!(inches_to_mm(10.0), 254.0);
        assert_close(pounds_to_grams(10.0), 4535.92);
        assert_close(mm_to_inches(254.0), 10.0);
        assert_close(grams_to_pounds(4535.92), 10.0);
    }

    #[test]
    fn test_zero_maps_to_zero() {
        assert_eq!(inches_to_mm(0.0), 0.0);
        assert_eq!(mm_to_inches(0.0), 0.0);
        assert_eq!(pounds_to_grams(0.0), 0.0);
        assert_eq!(grams_to_pounds(0.0), 0.0);
    }

    #[test]
    fn test_round_trip_across_magnitudes() {
        let mut x = 0.001;
        while x < 1.0e7 {
            let length = mm_to_inches(inches_to_mm(x));
            assert!(
                (length - x).abs() <= x * 1e-12,
                "inch round trip drifted for {x}: {length}"
            );

            let weight = grams_to_pounds(pounds_to_grams(x));
            assert!(
                (weight - x).abs() <= x * 1e-12,
                "pound round trip drifted for {x}: {weight}"
            );

            x *= 3.7;
        }
    }
}
