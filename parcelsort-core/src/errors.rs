//! Error Types for Parcel Classification Failures
//!
//! ## Design Philosophy
//!
//! Classification errors are programmer-input errors: the caller handed the
//! classifier something that is not a usable measurement. They are fatal to
//! the current call only and are never turned into a label.
//!
//! Errors stay small and `Copy` so they can be returned from hot paths and
//! queued without allocation. Messages are `&'static str`, never `String`.
//!
//! ## Error Tiers
//!
//! ### Type failures
//! - `TypeMismatch`: the value is not a real number at all, or is a boolean
//!   handed over where a number was expected.
//!
//! ### Value failures
//! - `InvalidRange`: the value is numeric but unusable: negative, NaN or
//!   infinite.
//!
//! Callers that only care about the tier use [`ClassificationError::kind`]:
//!
//! ```rust
//! use parcelsort_core::{sort, ErrorKind};
//!
//! match sort(-1, 1, 1, 1) {
//!     Ok(label) => println!("route as {label}"),
//!     Err(e) if e.kind() == ErrorKind::Range => {
//!         // Measurement hardware reported garbage - re-measure
//!     }
//!     Err(_) => {
//!         // Integration bug upstream - wrong value kind
//!     }
//! }
//! ```

use thiserror_no_std::Error;

use crate::measurement::Field;

/// Result type for classification operations
pub type ClassificationResult<T> = Result<T, ClassificationError>;

/// Coarse error tier, for callers that don't need the offending value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong kind of input (non-numeric or boolean)
    Type,
    /// Numeric input with an unusable value (negative or non-finite)
    Range,
}

/// Validation errors raised before any classification logic runs
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ClassificationError {
    /// Input is not a real number, or is a boolean masquerading as one
    #[error("{field}: expected a real number, found {found}")]
    TypeMismatch {
        /// Measurement that failed
        field: Field,
        /// Kind of value that was supplied instead
        found: &'static str,
    },

    /// Input is negative, NaN or infinite
    #[error("{field}: value {value} must be finite and non-negative")]
    InvalidRange {
        /// Measurement that failed
        field: Field,
        /// The rejected value
        value: f64,
    },
}

impl ClassificationError {
    /// Error tier
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::Type,
            Self::InvalidRange { .. } => ErrorKind::Range,
        }
    }

    /// Measurement that caused the failure
    pub fn field(&self) -> Field {
        match self {
            Self::TypeMismatch { field, .. } | Self::InvalidRange { field, .. } => *field,
        }
    }
}
