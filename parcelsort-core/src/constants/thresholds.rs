//! Classification Thresholds
//!
//! All comparisons against these thresholds are inclusive: a value exactly
//! equal to a threshold meets it.

// ===== BULKY =====

/// Volume at or above which a parcel is bulky (cubic length-units).
///
/// Compared against `width × height × length`.
pub const VOLUME_THRESHOLD: f64 = 1_000_000.0;

/// [`VOLUME_THRESHOLD`] as an exact integer, for whole-valued dimensions.
pub const VOLUME_THRESHOLD_WHOLE: u128 = 1_000_000;

/// Single dimension at or above which a parcel is bulky (length-units).
pub const DIMENSION_THRESHOLD: f64 = 150.0;

// ===== HEAVY =====

/// Mass at or above which a parcel is heavy (mass-units).
pub const MASS_THRESHOLD: f64 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_volume_matches_real_volume() {
        assert_eq!(VOLUME_THRESHOLD_WHOLE as f64, VOLUME_THRESHOLD);
    }
}
