//! Measurement Validation
//!
//! ## Overview
//!
//! Every measurement passes through [`validate`] before the classifier looks
//! at it. Validation inspects the representation first and the value second:
//!
//! ### 1. Kind check
//! Only integers and floats are numbers. Booleans are rejected even though
//! plenty of upstream systems happily encode `true` as `1`:
//! ```rust
//! use parcelsort_core::{validate, ErrorKind, Field};
//!
//! let err = validate(true, Field::Width).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Type);
//! ```
//!
//! ### 2. Value check
//! Numbers must be finite and non-negative. Mass follows exactly the same
//! rules as the three dimensions:
//! ```rust
//! use parcelsort_core::{validate, ErrorKind, Field, Quantity};
//!
//! assert_eq!(validate(12.5, Field::Mass), Ok(Quantity::Real(12.5)));
//! assert_eq!(validate(f64::NAN, Field::Mass).unwrap_err().kind(), ErrorKind::Range);
//! assert_eq!(validate(-1, Field::Height).unwrap_err().kind(), ErrorKind::Range);
//! ```
//!
//! A value that passes comes back unchanged, only re-tagged as a
//! [`Quantity`].

mod utils;

use crate::{
    errors::{ClassificationError, ClassificationResult},
    measurement::{Field, Measurement, Quantity},
};

/// Validate a single raw measurement for the given field
pub fn validate(value: impl Into<Measurement>, field: Field) -> ClassificationResult<Quantity> {
    let measurement = value.into();

    let quantity = match measurement {
        Measurement::UInt(v) => Quantity::Integer(v),
        Measurement::Int(v) => match u64::try_from(v) {
            Ok(v) => Quantity::Integer(v),
            Err(_) => {
                return reject(ClassificationError::InvalidRange {
                    field,
                    value: v as f64,
                })
            }
        },
        Measurement::Float(v) => match utils::check_real(v, field) {
            Ok(()) => Quantity::Real(v),
            Err(e) => return reject(e),
        },
        Measurement::Bool(_) | Measurement::NonNumeric(_) => {
            return reject(ClassificationError::TypeMismatch {
                field,
                found: measurement.kind(),
            })
        }
    };

    log_trace!("{} validated as {:?}", field, quantity);
    Ok(quantity)
}

fn reject<T>(error: ClassificationError) -> ClassificationResult<T> {
    log_debug!("rejected measurement: {}", error);
    Err(error)
}
