//! Value checks shared by the float path

use crate::{
    errors::{ClassificationError, ClassificationResult},
    measurement::Field,
};

/// Check that a real measurement is finite and non-negative
///
/// Non-finite values are checked first so NaN never slips past the sign
/// comparison (every comparison with NaN is false).
pub fn check_real(value: f64, field: Field) -> ClassificationResult<()> {
    if !value.is_finite() || value < 0.0 {
        Err(ClassificationError::InvalidRange { field, value })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_real(0.0, Field::Width).is_ok());
        assert!(check_real(1e300, Field::Width).is_ok());
        assert!(check_real(-1e-9, Field::Width).is_err());
        assert!(check_real(f64::NAN, Field::Width).is_err());
        assert!(check_real(f64::INFINITY, Field::Width).is_err());
    }
}
